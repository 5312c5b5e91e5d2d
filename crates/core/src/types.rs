/// All document identifiers are UUIDs, generated application-side (v4).
pub type DocId = uuid::Uuid;
