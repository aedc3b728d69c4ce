//! Cell rendering for the result table
//!
//! Each link-bearing column has a fixed plain-text fallback used when the
//! row's repository has no matching URL template. Empty values always render
//! as `-`.

use crate::artifacts::config::repository_config::RepositoryConfig;
use crate::artifacts::core::html::{escape_html, push_escaped};
use crate::artifacts::core::text::{EMPTY_FIELD, truncate_chars};
use crate::artifacts::links::properties::LinkProperties;
use crate::artifacts::links::template::render_link;
use crate::artifacts::links::{ISSUE_NUMBER_TOKEN, ISSUE_REFERENCE_REGEX};
use crate::artifacts::rows::DISPLAY_TIMESTAMP_LENGTH;
use crate::artifacts::rows::column::Column;
use crate::artifacts::rows::row::Row;
use anyhow::Context;
use regex::Regex;

pub struct ColumnFormatter<'c> {
    config: &'c RepositoryConfig,
    issue_reference: Regex,
}

impl<'c> ColumnFormatter<'c> {
    pub fn try_new(config: &'c RepositoryConfig) -> anyhow::Result<Self> {
        let issue_reference = Regex::new(ISSUE_REFERENCE_REGEX)
            .with_context(|| format!("invalid issue reference regex: {ISSUE_REFERENCE_REGEX}"))?;

        Ok(ColumnFormatter {
            config,
            issue_reference,
        })
    }

    /// Render the cell of `row` in `column` as markup
    pub fn format_cell(&self, row: &Row, column: Column) -> String {
        let value = row.field(column);
        match column {
            Column::Timestamp => format_timestamp(value),
            Column::File => self.format_file_link(value, row),
            Column::Revision => self.format_diff_link(value, row),
            Column::Description => self.format_tracker_link(value, row),
            Column::Repository | Column::Author | Column::Branch | Column::Changes => {
                format_text(value)
            }
        }
    }

    /// Link every `#<number>` in a description to the issue tracker
    pub fn format_tracker_link(&self, value: &str, row: &Row) -> String {
        if value.is_empty() {
            return EMPTY_FIELD.to_string();
        }
        let Some(url) = self.config.tracker_url(row.repository()) else {
            return escape_html(value);
        };

        let mut rendered = String::with_capacity(value.len());
        let mut copied_until = 0;
        for captures in self.issue_reference.captures_iter(value) {
            let Some(reference) = captures.get(0) else {
                continue;
            };
            let number = &captures[1];

            push_escaped(&mut rendered, &value[copied_until..reference.start()]);
            rendered.push_str("<a href='");
            rendered.push_str(&url.replace(ISSUE_NUMBER_TOKEN, number));
            rendered.push_str("'>#");
            rendered.push_str(number);
            rendered.push_str("</a>");
            copied_until = reference.end();
        }
        push_escaped(&mut rendered, &value[copied_until..]);

        rendered
    }

    /// Link the file name to the repository's file browser
    pub fn format_file_link(&self, value: &str, row: &Row) -> String {
        if value.is_empty() {
            return EMPTY_FIELD.to_string();
        }
        let Some(url) = self.config.file_url(row.repository()) else {
            return escape_html(value);
        };

        render_link(
            &format!("<a href='{url}'>[file]</a>"),
            &LinkProperties::from_row(row),
        )
    }

    /// Link the short revision to the repository's diff viewer
    pub fn format_diff_link(&self, value: &str, row: &Row) -> String {
        if value.is_empty() {
            return EMPTY_FIELD.to_string();
        }
        let properties = LinkProperties::from_row(row);
        let Some(url) = self.config.commit_url(row.repository()) else {
            return render_link("[short_revision]", &properties);
        };

        render_link(
            &format!("<a href='{url}'>[short_revision]</a>"),
            &properties,
        )
    }
}

/// Date, hour and minute of a timestamp
pub fn format_timestamp(value: &str) -> String {
    if value.is_empty() {
        return EMPTY_FIELD.to_string();
    }
    escape_html(truncate_chars(value, DISPLAY_TIMESTAMP_LENGTH))
}

pub fn format_text(value: &str) -> String {
    if value.is_empty() {
        return EMPTY_FIELD.to_string();
    }
    escape_html(value)
}
