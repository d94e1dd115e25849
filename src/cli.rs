use std::path::PathBuf;

use clap::Parser;

use crate::models::Source;

#[derive(Parser, Debug)]
#[command(
    name = "catalog-mergr",
    about = "Merge heterogeneous open-data catalogue exports into one canonical, categorised dataset",
    version
)]
pub struct Cli {
    /// Data root containing the per-source export folders
    #[arg(default_value = "data")]
    pub path: PathBuf,

    /// Config file [default: <path>/.catalog-mergr/config.toml, fallback ~/.config/catalog-mergr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Exclude a source from the merge (repeatable)
    #[arg(long = "exclude-source", value_name = "SOURCE")]
    pub exclude_source: Vec<SourceArg>,

    /// Show the licence breakdown table
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum SourceArg {
    Ckan,
    Sparql,
    Arcgis,
    Usmart,
    Dcat,
    Scraped,
}

impl From<&SourceArg> for Source {
    fn from(arg: &SourceArg) -> Self {
        match arg {
            SourceArg::Ckan => Source::CkanApi,
            SourceArg::Sparql => Source::Sparql,
            SourceArg::Arcgis => Source::ArcgisApi,
            SourceArg::Usmart => Source::UsmartApi,
            SourceArg::Dcat => Source::DcatFeed,
            SourceArg::Scraped => Source::WebScraped,
        }
    }
}
