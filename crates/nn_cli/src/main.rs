use std::path::PathBuf;
use clap::Parser;
use nn_scrappers::{handle_crawl, logging::init_logging, CrawlArgs};
use nn_storage::{create_storage, DEFAULT_ARTICLES_PATH};
use tracing::{info, Level};

mod dashboard;

use dashboard::Dashboard;

#[derive(Parser, Debug)]
#[command(author, version, about = "Crawl Naver News articles into a CSV table and browse it", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch articles and write them to a CSV table
    Crawl(CrawlArgs),
    /// Browse a previously written table with its content length chart
    View {
        #[arg(short, long, default_value = DEFAULT_ARTICLES_PATH)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { Level::DEBUG } else { Level::INFO });

    match cli.command {
        Commands::Crawl(args) => {
            handle_crawl(args).await?;
        }
        Commands::View { input } => {
            info!("📊 Loading {}", input.display());
            let table = create_storage(&input).load_table().await?;
            let mut dashboard = Dashboard::from_table(table);
            dashboard::run(&mut dashboard)?;
        }
    }

    Ok(())
}
