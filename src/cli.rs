use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "Summarize YouTube videos from their captions",
    version,
)]
pub struct Cli {
    /// YouTube video URL (reads URLs from stdin if omitted)
    pub url: Option<String>,

    /// Preferred caption language
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Maximum summary length per chunk, in model tokens
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_length: Option<u32>,

    /// Minimum summary length per chunk, in model tokens
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub min_length: Option<u32>,

    /// Print the cleaned transcript alongside the summary
    #[arg(short, long)]
    pub transcript: bool,

    /// Save the summary to <output-dir>/summary.txt
    #[arg(long)]
    pub save_summary: bool,

    /// Save the cleaned transcript to <output-dir>/transcript.txt
    #[arg(long)]
    pub save_transcript: bool,

    /// Directory for saved files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Show fetch and summarization progress
    #[arg(short, long)]
    pub verbose: bool,
}
