//! Shared leaf crate for the stencil service: error taxonomy, identifier
//! types, and pagination helpers. Zero internal dependencies so both the
//! storage and API layers can use it.

pub mod error;
pub mod pagination;
pub mod types;
