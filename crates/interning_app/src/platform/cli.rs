use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "interning")]
#[command(about = "Track internship postings and your applications from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// RON configuration file. A missing file means defaults.
    #[arg(long, default_value = "interning.ron")]
    pub config: PathBuf,

    /// URL of the JSON posting list.
    #[arg(long)]
    pub source_url: Option<String>,

    /// Directory holding storage.json.
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    /// JSON file mapping company names to compensation pages.
    #[arg(long)]
    pub levels: Option<PathBuf>,

    #[arg(long)]
    pub log_level: Option<String>,
}
