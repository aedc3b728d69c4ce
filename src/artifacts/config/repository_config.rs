use serde::Deserialize;
use std::collections::HashMap;

/// URL templates configured for one repository
///
/// Backends send more columns per repository (ids, icons, base urls); only
/// the link templates are read. Empty strings count as not configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoryUrls {
    #[serde(default)]
    tracker_url: Option<String>,
    #[serde(default)]
    file_url: Option<String>,
    #[serde(default)]
    commit_url: Option<String>,
}

impl RepositoryUrls {
    pub fn new(
        tracker_url: Option<String>,
        file_url: Option<String>,
        commit_url: Option<String>,
    ) -> Self {
        RepositoryUrls {
            tracker_url,
            file_url,
            commit_url,
        }
    }

    pub fn tracker_url(&self) -> Option<&str> {
        non_empty(&self.tracker_url)
    }

    pub fn file_url(&self) -> Option<&str> {
        non_empty(&self.file_url)
    }

    pub fn commit_url(&self) -> Option<&str> {
        non_empty(&self.commit_url)
    }
}

/// Page-wide settings shipped with the search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    tracker: Option<String>,
}

impl GlobalConfig {
    pub fn new(tracker: Option<String>) -> Self {
        GlobalConfig { tracker }
    }

    pub fn tracker(&self) -> Option<&str> {
        non_empty(&self.tracker)
    }
}

/// Link templates for every repository in the current result
///
/// Only the issue tracker has a global fallback; file and commit links are
/// rendered solely for repositories that configure them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryConfig {
    repositories: HashMap<String, RepositoryUrls>,
    global: GlobalConfig,
}

impl RepositoryConfig {
    pub fn new(repositories: HashMap<String, RepositoryUrls>, global: GlobalConfig) -> Self {
        RepositoryConfig {
            repositories,
            global,
        }
    }

    /// Replace the global tracker fallback
    pub fn with_tracker(mut self, tracker: Option<String>) -> Self {
        if tracker.is_some() {
            self.global = GlobalConfig::new(tracker);
        }
        self
    }

    pub fn repository(&self, repository: &str) -> Option<&RepositoryUrls> {
        self.repositories.get(repository)
    }

    pub fn tracker_url(&self, repository: &str) -> Option<&str> {
        self.repository(repository)
            .and_then(RepositoryUrls::tracker_url)
            .or_else(|| self.global.tracker())
    }

    pub fn file_url(&self, repository: &str) -> Option<&str> {
        self.repository(repository).and_then(RepositoryUrls::file_url)
    }

    pub fn commit_url(&self, repository: &str) -> Option<&str> {
        self.repository(repository)
            .and_then(RepositoryUrls::commit_url)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
