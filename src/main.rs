use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commitsearch::OutputFormat;
use commitsearch::areas::search_page::SearchPage;
use commitsearch::artifacts::core::PagerWriter;
use commitsearch::artifacts::query::query_parameters::QueryParameters;
use commitsearch::commands::plumbing::revision::{RevisionOptions, show_revision};
use commitsearch::commands::porcelain::render::RenderOptions;
use commitsearch::commands::porcelain::summary::write_summary;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "commitsearch",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Render commit-log search results",
    long_about = "Renders the result of a commit-log search as an HTML table. \
    Rows belonging to one commit are merged, revisions are linked to the configured \
    file browsers, diff viewers and issue trackers, and the active filters are summarized.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(long, global = true, help = "Write to stdout even when it is a terminal")]
    no_pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "render",
        about = "Render a search result as an HTML table",
        long_about = "This command reads a search payload and writes the filter summary \
        followed by the result table with merged commit descriptions and links."
    )]
    Render {
        #[arg(index = 1, help = "Search payload file (stdin when omitted or '-')")]
        payload: Option<PathBuf>,
        #[arg(short, long, env = "COMMITSEARCH_QUERY", default_value = "", help = "The query string of the search")]
        query: String,
        #[arg(long, env = "COMMITSEARCH_TRACKER_URL", help = "Issue tracker template overriding the payload's global tracker")]
        tracker_url: Option<String>,
        #[arg(long, help = "Omit the filter summary")]
        no_summary: bool,
    },
    #[command(
        name = "groups",
        about = "List the rows merged into one commit",
        long_about = "This command prints the spans of adjacent result rows that belong to the same commit."
    )]
    Groups {
        #[arg(index = 1, help = "Search payload file (stdin when omitted or '-')")]
        payload: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    #[command(
        name = "summary",
        about = "Describe the filters of a query",
        long_about = "This command prints the human readable description of the active search filters."
    )]
    Summary {
        #[arg(short, long, env = "COMMITSEARCH_QUERY", default_value = "", help = "The query string of the search")]
        query: String,
    },
    #[command(
        name = "revision",
        about = "Explain how a revision is interpreted",
        long_about = "This command prints the source control system guessed for a revision, \
        its short form and, for CVS, the previous revision. With a template it also renders the link."
    )]
    Revision {
        #[arg(index = 1)]
        revision: String,
        #[arg(short, long, help = "URL template to render for the revision")]
        template: Option<String>,
        #[arg(long, default_value = "", help = "Repository substituted for [repository]")]
        repository: String,
        #[arg(long, default_value = "", help = "File substituted for [file]")]
        file: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("COMMITSEARCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pager = (!cli.no_pager && std::io::stdout().is_terminal()).then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    match cli.command {
        Commands::Render {
            payload,
            query,
            tracker_url,
            no_summary,
        } => {
            let payload = read_payload(payload.as_ref())?;
            let page = SearchPage::load(&payload, &query, tracker_url, writer)?;

            page.render(&RenderOptions {
                summary: !no_summary,
            })?
        }
        Commands::Groups { payload, format } => {
            let payload = read_payload(payload.as_ref())?;
            let page = SearchPage::load(&payload, "", None, writer)?;

            page.show_groups(format)?
        }
        Commands::Summary { query } => {
            let mut writer = writer;
            write_summary(&mut *writer, &QueryParameters::parse(&query))?
        }
        Commands::Revision {
            revision,
            template,
            repository,
            file,
            format,
        } => {
            let mut writer = writer;
            let opts = RevisionOptions {
                repository,
                file,
                template,
                format,
            };

            show_revision(&mut *writer, &revision, &opts)?
        }
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}

fn read_payload(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read search payload {}", path.display())),
        _ => {
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .context("failed to read search payload from stdin")?;
            Ok(payload)
        }
    }
}
