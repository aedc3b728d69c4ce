//! Human-readable description of the active search filters
//!
//! Filters are listed in a fixed order as `<Label> <operator> <value>` and
//! joined with `, `. Date sub-filters only appear while the date mode that
//! uses them is selected, since the search form keeps their stale values
//! around otherwise.

use crate::artifacts::query::query_parameters::QueryParameters;
use std::fmt;

/// Parameter that decides whether a sub-filter applies
const DATE_MODE_KEY: &str = "date";

#[derive(Debug, Clone, Copy)]
struct Filter {
    label: &'static str,
    key: &'static str,
    /// Date mode that must be selected for this filter to apply
    date_mode: Option<&'static str>,
}

const FILTERS: [Filter; 12] = [
    Filter { label: "Repository", key: "repository", date_mode: None },
    Filter { label: "When", key: "when", date_mode: None },
    Filter { label: "Who", key: "who", date_mode: None },
    Filter { label: "Directory", key: "directory", date_mode: None },
    Filter { label: "File", key: "file", date_mode: None },
    Filter { label: "Rev", key: "rev", date_mode: None },
    Filter { label: "Branch", key: "branch", date_mode: None },
    Filter { label: "Description", key: "description", date_mode: None },
    Filter { label: "Date", key: "date", date_mode: None },
    Filter { label: "Hours", key: "hours", date_mode: Some("hours") },
    Filter { label: "MinDate", key: "mindate", date_mode: Some("explicit") },
    Filter { label: "MaxDate", key: "maxdate", date_mode: Some("explicit") },
];

/// Comparison selected by a filter's `<key>type` companion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOperator {
    Equals,
    Matches,
    NotMatches,
}

impl MatchOperator {
    pub fn from_match_type(match_type: Option<&str>) -> Self {
        match match_type {
            Some("regexp") => MatchOperator::Matches,
            Some("notregexp") => MatchOperator::NotMatches,
            _ => MatchOperator::Equals,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MatchOperator::Equals => "=",
            MatchOperator::Matches => "~",
            MatchOperator::NotMatches => "!~",
        }
    }
}

impl fmt::Display for MatchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Whether `key` is a primary filter or a sub-filter of the selected date mode
pub fn is_parameter_active(params: &QueryParameters, key: &str) -> bool {
    match FILTERS.iter().find(|filter| filter.key == key) {
        Some(Filter {
            date_mode: Some(mode),
            ..
        }) => params.get(DATE_MODE_KEY) == Some(*mode),
        _ => true,
    }
}

/// Describe the active filters, e.g. `Who ~ bo.*, Date = hours, Hours = 24`
pub fn summarize(params: &QueryParameters) -> String {
    FILTERS
        .iter()
        .filter(|filter| is_parameter_active(params, filter.key))
        .filter_map(|filter| {
            let value = params.get(filter.key)?;
            let operator = MatchOperator::from_match_type(params.match_type(filter.key));
            Some(format!("{} {} {}", filter.label, operator, value))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
