use crate::artifacts::query::MATCH_TYPE_SUFFIX;
use std::collections::HashMap;

/// Parameters of the current search, decoded once from the query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    values: HashMap<String, String>,
}

impl QueryParameters {
    /// Decode an `application/x-www-form-urlencoded` query string
    ///
    /// A leading `?` is ignored, `+` decodes to a space and the last
    /// occurrence of a repeated key wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Value of `key`, treating an empty value as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Value of the `<key>type` companion parameter
    pub fn match_type(&self, key: &str) -> Option<&str> {
        self.get(&format!("{key}{MATCH_TYPE_SUFFIX}"))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryParameters {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
