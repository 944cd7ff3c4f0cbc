mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use research_history_store::{HistoryStore, StoreConfig};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = StoreConfig::from_env();
    if let Some(path) = cli.file {
        config = config.with_path(path);
    }
    let store = HistoryStore::from_config(&config);

    match cli.command {
        Commands::Add {
            topic,
            summary,
            content,
        } => commands::add::run(&store, &topic, &summary, content.as_deref()),
        Commands::List { limit, json } => commands::list::run(&store, limit, json),
        Commands::Show { id, json } => commands::show::run(&store, &id, json),
        Commands::Stats => commands::stats::run(&store, &config),
        Commands::Version => commands::version::run(),
    }
}
