pub mod areas;
pub mod artifacts;
pub mod commands;

/// Output format of the inspection commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
