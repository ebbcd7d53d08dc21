use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::catalog::Category;

#[derive(Parser, Debug, Clone)]
#[command(name = "mlhub", about = "ML learning hub terminal browser", version)]
#[command(group(ArgGroup::new("mode").args(["list", "show", "download"]).multiple(false)))]
#[command(group(ArgGroup::new("md_switch").args(["md", "no_md"]).multiple(false)))]
pub struct Cli {
    /// Resource category to operate on.
    #[arg(short = 'C', long, value_enum)]
    pub category: Option<Category>,

    /// Case-insensitive substring filter for listings.
    #[arg(short = 's', long)]
    pub search: Option<String>,

    /// File to render or download.
    #[arg(short = 'f', long)]
    pub file: Option<String>,

    /// Hub base directory (overrides HUB_BASE_DIR).
    #[arg(long = "base-dir")]
    pub base_dir: Option<PathBuf>,

    /// Print the catalog listing for the selected category.
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Render a file to stdout.
    #[arg(long)]
    pub show: bool,

    /// Save a byte-identical copy of a file.
    #[arg(short = 'd', long)]
    pub download: bool,

    /// Output directory for --download and PDF viewer export.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,

    /// Notebook execution timeout in seconds (overrides NOTEBOOK_TIMEOUT).
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Prettify Markdown output.
    #[arg(long)]
    pub md: bool,
    /// Disable Markdown prettifying.
    #[arg(long = "no-md")]
    pub no_md: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
