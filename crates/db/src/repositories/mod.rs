//! Repositories: one generic document repository plus thin per-entity
//! bindings that pick the model type and add any read augmentation.

pub mod category_repo;
pub mod doc_repo;
pub mod template_repo;

pub use category_repo::CategoryRepo;
pub use doc_repo::{DocRepo, RepoError};
pub use template_repo::TemplateRepo;
