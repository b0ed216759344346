mod analyze;
mod score;

use clap::{Parser, Subcommand};
use newspulse_core::ScorerKind;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "newspulse")]
#[command(about = "News headline sentiment from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up recent news for a query and summarise its sentiment
    Analyze {
        /// Free-text search query
        query: String,

        /// Number of articles to analyse (defaults to the configured limit)
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Download each article and extract its body text
        #[arg(long)]
        full_text: bool,

        /// Scorer to use instead of the configured one (vader or keyword)
        #[arg(long)]
        scorer: Option<ScorerKind>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Score a single piece of text
    Score {
        /// Text to score
        text: String,

        /// Scorer to use instead of the configured one (vader or keyword)
        #[arg(long)]
        scorer: Option<ScorerKind>,

        /// Print the score as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = newspulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            query,
            limit,
            full_text,
            scorer,
            json,
        } => {
            let options = analyze::AnalyzeOptions {
                limit,
                full_text,
                scorer,
                json,
            };
            analyze::run_analyze(config, &query, &options).await?;
        }
        Commands::Score { text, scorer, json } => {
            score::run_score(scorer.unwrap_or(config.scorer), &text, json)?;
        }
    }

    Ok(())
}
