use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "research-history")]
#[command(version)]
#[command(about = "Record and browse research topics")]
pub struct Cli {
    /// History file (default: $RESEARCH_HISTORY_FILE, then ./history.json)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a new research topic and print its id
    Add {
        /// The research topic
        topic: String,

        /// A brief summary of the research
        #[arg(short, long, default_value = "")]
        summary: String,

        /// Additional content as a JSON object (e.g. a full report)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// List recorded topics, oldest first
    List {
        /// Only show the most recent N topics (N >= 1)
        #[arg(
            short,
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        limit: Option<usize>,

        /// Print {"history": [...]} instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one topic by id
    Show {
        id: String,

        /// Print the stored entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize the history file
    Stats,

    /// Print version information
    Version,
}
