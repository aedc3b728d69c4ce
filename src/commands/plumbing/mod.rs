pub mod groups;
pub mod revision;
