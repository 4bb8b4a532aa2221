//! chat-relay command line
//!
//! Ask a question through the router, extract tasks from a reply on stdin,
//! or print the stats of a one-shot service.

#![allow(missing_docs)]

use anyhow::Context;
use chat_relay::config::LoggingConfig;
use chat_relay::utils::logging::init_logging;
use chat_relay::{AiService, Config, ProviderKind, QueryOptions, build_info, user_message};
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "chat-relay", version, about = "Route chat queries to hosted LLM providers")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "CHAT_RELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send one question and print the reply as it streams in
    Ask {
        prompt: String,
        /// Force a provider instead of classifying the question
        #[arg(long)]
        provider: Option<ProviderKind>,
        /// Skip the response cache lookup
        #[arg(long)]
        no_cache: bool,
    },
    /// Read an assistant reply from stdin and print its tasks as JSON
    Tasks,
    /// Print the service stats as JSON
    Stats,
    /// Print build information
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())
        .await
        .context("failed to load configuration")?;

    let logging = LoggingConfig {
        level: cli.log_level.unwrap_or_else(|| config.logging.level.clone()),
        ..config.logging.clone()
    };
    init_logging(&logging)?;

    match cli.command {
        Command::Ask {
            prompt,
            provider,
            no_cache,
        } => {
            let service = AiService::from_config(&config)?;
            let options = QueryOptions {
                bypass_cache: no_cache,
                force_provider: provider,
            };

            let mut streamed = false;
            let reply = {
                let mut print_chunk = |chunk: &str| {
                    streamed = true;
                    print!("{}", chunk);
                    let _ = std::io::stdout().flush();
                };
                service
                    .process_query(&[user_message(prompt)], Some(&mut print_chunk), options)
                    .await
            };

            // Apologies are returned without being streamed
            if streamed {
                println!();
            } else {
                println!("{}", reply);
            }
        }
        Command::Tasks => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            let tasks = chat_relay::extract_tasks(&input);
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        Command::Stats => {
            let service = AiService::from_config(&config)?;
            let stats = service.performance_stats().await;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Command::Version => {
            println!("{}", build_info());
        }
    }

    Ok(())
}
