use crate::OutputFormat;
use crate::artifacts::links::properties::LinkProperties;
use crate::artifacts::links::template::render_link;
use crate::artifacts::revision::revision_info::RevisionInfo;
use crate::artifacts::rows::row::Row;
use colored::Colorize;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct RevisionOptions {
    pub repository: String,
    pub file: String,
    pub template: Option<String>,
    pub format: OutputFormat,
}

/// Explain how a revision is interpreted and, optionally, the link it produces
pub fn show_revision(
    writer: &mut dyn Write,
    revision: &str,
    opts: &RevisionOptions,
) -> anyhow::Result<()> {
    let info = RevisionInfo::interpret(revision);
    let row = Row::from_fields([
        opts.repository.as_str(),
        "",
        "",
        opts.file.as_str(),
        revision,
        "",
        "",
        "",
    ]);
    let link = opts
        .template
        .as_deref()
        .map(|template| render_link(template, &LinkProperties::from_row(&row)));

    match opts.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "scm": info.kind().as_str(),
                "revision": info.revision(),
                "short_revision": info.short_revision(),
                "old_revision": info.previous_revision(),
                "link": link,
            });
            writeln!(writer, "{}", value)?;
        }
        OutputFormat::Text => {
            writeln!(writer, "{}      {}", "scm:".bold(), info.kind().to_string().green())?;
            writeln!(writer, "{} {}", "revision:".bold(), info.revision())?;
            writeln!(writer, "{}    {}", "short:".bold(), info.short_revision())?;
            if let Some(previous) = info.previous_revision() {
                writeln!(writer, "{} {}", "previous:".bold(), previous)?;
            }
            if let Some(link) = link {
                writeln!(writer, "{}     {}", "link:".bold(), link)?;
            }
        }
    }

    Ok(())
}
