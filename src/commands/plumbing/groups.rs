use crate::OutputFormat;
use crate::areas::search_page::SearchPage;
use crate::artifacts::core::text::truncate_chars;
use crate::artifacts::rows::GROUP_DATE_LENGTH;
use colored::Colorize;
use std::io::Write;

impl SearchPage {
    /// List the row spans that are merged into one commit
    pub fn show_groups(&self, format: OutputFormat) -> anyhow::Result<()> {
        let spans = self.group_spans();

        match format {
            OutputFormat::Json => {
                let mut writer = self.writer();
                serde_json::to_writer(&mut *writer, &spans)?;
                writeln!(writer)?;
            }
            OutputFormat::Text => {
                for span in &spans {
                    let first = &self.rows()[span.start()];
                    writeln!(
                        self.writer(),
                        "{} {} {} {} {}",
                        span.to_string().yellow(),
                        first.repository(),
                        truncate_chars(first.timestamp(), GROUP_DATE_LENGTH),
                        first.author().cyan(),
                        first.description().lines().next().unwrap_or_default()
                    )?;
                }
                writeln!(
                    self.writer(),
                    "{} rows, {} merged groups",
                    self.rows().len(),
                    spans.len()
                )?;
            }
        }

        Ok(())
    }
}
