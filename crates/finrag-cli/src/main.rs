// FinRAG CLI entry point

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod di;
mod output;

use cli::{Cli, Command, ConfigCommand};

#[tokio::main]
async fn main() {
    // .env first, so provider keys behave like exported variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        output::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = di::load_config(cli.config.clone())?;

    match cli.command {
        Command::Ask { question, json } => {
            config.validate()?;
            let pipeline = di::build_pipeline(&config)?;
            let answer = pipeline.answer(&question).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&answer)?);
            } else {
                output::print_answer(&answer);
            }
        }
        Command::Health => {
            config.validate()?;
            let report = di::health_check(&config).await;
            output::print_health(&report);
            if !report.healthy() {
                std::process::exit(1);
            }
        }
        Command::Config { command } => match command {
            ConfigCommand::Show => {
                println!("{}", toml::to_string_pretty(&config.redacted())?);
            }
        },
    }
    Ok(())
}
