use artistly::criteria::{CategoryFilter, DashboardSort, GallerySort, StatusFilter};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "artistly", bin_name = "artistly", version, disable_help_subcommand = true)]
#[command(about = "Browse and moderate the Artistly performer catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON dataset to load instead of the built-in sample
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub dataset: Option<PathBuf>,

    /// Config file (defaults to ./artistly.toml when present)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help_heading = "Options"
    )]
    pub output: OutputFormat,

    /// Verbose logging on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the artist gallery (default)
    #[command(alias = "ls")]
    Artists(ArtistsArgs),

    /// Moderate artist submissions
    Dashboard(DashboardArgs),

    /// List the published categories, locations, price ranges and languages
    Catalog,
}

#[derive(Args, Debug, Default)]
pub struct ArtistsArgs {
    /// Match against name, bio or category
    #[arg(long, short)]
    pub search: Option<String>,

    /// Include a category (repeatable)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Vec<String>,

    /// Include a location (repeatable)
    #[arg(long, value_name = "LOCATION")]
    pub location: Vec<String>,

    /// Include a price range label (repeatable)
    #[arg(long, value_name = "RANGE")]
    pub price: Vec<String>,

    /// Sort key: name, rating or price
    #[arg(long)]
    pub sort: Option<GallerySort>,

    /// Merge a category as a `?category=` link would
    #[arg(long, value_name = "CATEGORY")]
    pub deep_link: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Match against name, location or category
    #[arg(long, short)]
    pub search: Option<String>,

    /// Status to show: all, pending, approved or rejected
    #[arg(long)]
    pub status: Option<StatusFilter>,

    /// Category to show, or all
    #[arg(long)]
    pub category: Option<CategoryFilter>,

    /// Sort key: submitted-at, name or rating
    #[arg(long)]
    pub sort: Option<DashboardSort>,

    /// Approve a submission by id (repeatable)
    #[arg(long, value_name = "ID")]
    pub approve: Vec<String>,

    /// Reject a submission by id (repeatable)
    #[arg(long, value_name = "ID")]
    pub reject: Vec<String>,

    /// Submit a new artist from a JSON file (repeatable)
    #[arg(long, value_name = "FILE")]
    pub submit: Vec<PathBuf>,
}
