use crate::artifacts::query::query_parameters::QueryParameters;
use crate::artifacts::query::summary::summarize;
use std::io::Write;

/// Write the filter summary of a query on its own line
///
/// Only the query is needed, so this runs without a loaded search result.
pub fn write_summary(writer: &mut dyn Write, params: &QueryParameters) -> anyhow::Result<()> {
    let summary = summarize(params);
    if summary.is_empty() {
        writeln!(writer, "(no filters)")?;
    } else {
        writeln!(writer, "{}", summary)?;
    }

    Ok(())
}
