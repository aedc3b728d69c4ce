use crate::areas::search_page::SearchPage;
use crate::artifacts::core::html::escape_html;
use crate::artifacts::query::summary::summarize;
use crate::artifacts::table::result_table::ResultTable;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub summary: bool,
}

impl SearchPage {
    /// Write the result page: the filter summary followed by the commit table
    pub fn render(&self, opts: &RenderOptions) -> anyhow::Result<()> {
        if opts.summary {
            writeln!(
                self.writer(),
                "<p class=\"search-parameter\">{}</p>",
                escape_html(&summarize(self.params()))
            )?;
        }

        let spans = self.group_spans();
        let table = ResultTable::new(
            self.rows(),
            &spans,
            self.hidden_columns(),
            self.formatter()?,
        );
        table.render(&mut **self.writer())?;

        Ok(())
    }
}
