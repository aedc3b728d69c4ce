use crate::artifacts::config::payload::SearchPayload;
use crate::artifacts::config::repository_config::RepositoryConfig;
use crate::artifacts::links::formatter::ColumnFormatter;
use crate::artifacts::query::hidden_columns::HiddenColumns;
use crate::artifacts::query::query_parameters::QueryParameters;
use crate::artifacts::rows::group_span::{GroupSpan, compute_group_spans};
use crate::artifacts::rows::row::Row;
use std::cell::{RefCell, RefMut};

/// One search result as presented to the user
///
/// The payload and the query are read-only for the lifetime of the page; a
/// new search builds a new page.
pub struct SearchPage {
    rows: Vec<Row>,
    config: RepositoryConfig,
    params: QueryParameters,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl SearchPage {
    pub fn new(
        payload: SearchPayload,
        params: QueryParameters,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        let (rows, config) = payload.into_parts();

        SearchPage {
            rows,
            config,
            params,
            writer: RefCell::new(writer),
        }
    }

    /// Build a page from the backend's JSON document and the raw query string
    pub fn load(
        payload_json: &str,
        query: &str,
        tracker_override: Option<String>,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let payload = SearchPayload::from_json(payload_json)?;
        let mut page = Self::new(payload, QueryParameters::parse(query), writer);
        page.config = std::mem::take(&mut page.config).with_tracker(tracker_override);

        Ok(page)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    pub fn group_spans(&self) -> Vec<GroupSpan> {
        compute_group_spans(&self.rows)
    }

    pub fn hidden_columns(&self) -> HiddenColumns {
        HiddenColumns::from_query(&self.params)
    }

    pub fn formatter(&self) -> anyhow::Result<ColumnFormatter<'_>> {
        ColumnFormatter::try_new(self.config())
    }
}
