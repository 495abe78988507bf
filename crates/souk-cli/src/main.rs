mod app;
mod report;
mod watch;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::App;

#[derive(Debug, Parser)]
#[command(name = "souk")]
#[command(about = "Compare local marketplace listings with external platforms")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search external platforms and compare with local listings.
    Search {
        query: String,
        #[arg(long)]
        category: Option<String>,
    },
    /// Read queries from stdin, debounced, and search each settled value.
    Watch {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one local listing by id.
    Show { id: String },
    /// Inspect or clear the search history.
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Suggest past queries starting with a prefix.
    Suggest {
        prefix: String,
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// List the external platforms searched.
    Platforms,
}

#[derive(Debug, Subcommand)]
enum HistoryCommands {
    Recent {
        #[arg(long)]
        limit: Option<usize>,
    },
    Category {
        name: String,
    },
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = souk_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        None => Cli::command().print_help()?,
        Some(Commands::Platforms) => report::print_platforms(),
        Some(command) => run(command, &config).await?,
    }

    Ok(())
}

async fn run(command: Commands, config: &souk_core::AppConfig) -> anyhow::Result<()> {
    let app = App::from_config(config)?;
    match command {
        Commands::Search { query, category } => {
            app.search_and_report(&query, category.as_deref()).await?;
        }
        Commands::Watch { category } => watch::run(&app, category.as_deref()).await?,
        Commands::Show { id } => report::print_listing_lookup(&app.listings, &id),
        Commands::History { command } => match command {
            HistoryCommands::Recent { limit } => {
                let limit = limit.unwrap_or(config.recent_limit);
                report::print_queries("Recent searches", app.history.recent(limit));
            }
            HistoryCommands::Category { name } => {
                report::print_queries(
                    &format!("Searches in '{name}'"),
                    app.history.by_category(&name),
                );
            }
            HistoryCommands::Clear => {
                app.history.clear();
                println!("Search history cleared.");
            }
        },
        Commands::Suggest { prefix, limit } => {
            report::print_queries("Suggestions", app.history.suggestions(&prefix, limit));
        }
        Commands::Platforms => report::print_platforms(),
    }
    Ok(())
}
