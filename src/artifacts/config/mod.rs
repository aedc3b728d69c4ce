//! Repository link configuration and the search payload
//!
//! - `repository_config`: per-repository URL templates plus the global tracker fallback
//! - `payload`: the JSON document delivered by the search backend

pub mod payload;
pub mod repository_config;
