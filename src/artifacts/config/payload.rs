//! Search backend payload
//!
//! ## Format
//!
//! ```text
//! {
//!   "config": { "tracker": "<url template>" },
//!   "repositories": { "<name>": { "tracker_url": ..., "file_url": ..., "commit_url": ... } },
//!   "data": [ [repository, timestamp, author, file, revision, branch, changes, description], ... ]
//! }
//! ```
//!
//! When the backend refuses a query it sends a bare JSON string instead.

use crate::artifacts::config::repository_config::{GlobalConfig, RepositoryConfig, RepositoryUrls};
use crate::artifacts::rows::row::Row;
use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct RawSearchResult {
    #[serde(default)]
    config: Option<GlobalConfig>,
    #[serde(default)]
    repositories: Option<HashMap<String, RepositoryUrls>>,
    data: Vec<Row>,
}

/// Rows and link configuration of one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPayload {
    rows: Vec<Row>,
    config: RepositoryConfig,
}

impl SearchPayload {
    /// Parse the backend's JSON document
    ///
    /// A bare string payload is the backend's error message and is returned
    /// as the error.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(json).context("search payload is not valid JSON")?;

        if let Value::String(message) = value {
            tracing::warn!(%message, "search backend returned an error");
            anyhow::bail!("search failed: {}", message);
        }

        let raw: RawSearchResult =
            serde_json::from_value(value).context("malformed search payload")?;
        let config = RepositoryConfig::new(
            raw.repositories.unwrap_or_default(),
            raw.config.unwrap_or_default(),
        );

        tracing::info!(rows = raw.data.len(), "loaded search payload");

        Ok(SearchPayload {
            rows: raw.data,
            config,
        })
    }

    pub fn into_parts(self) -> (Vec<Row>, RepositoryConfig) {
        (self.rows, self.config)
    }
}
