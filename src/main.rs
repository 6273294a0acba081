//! CallDesk CLI entry point

use std::process::ExitCode;

use clap::Parser;

use call_desk::cli::{
    app::{
        load_merged_config, load_transcript, run_company, run_recent, run_submit, CompanyOptions,
        SubmitOptions, EXIT_ERROR,
    },
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use call_desk::domain::config::AppConfig;
use call_desk::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Merge config: defaults < file < CLI/env
    let cli_config = AppConfig {
        server_url: cli.server.clone(),
        metric: None,
    };
    let config = load_merged_config(cli_config).await;
    let server_url = config.server_url_or_default().to_string();

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Submit(args) => {
            let transcript = match load_transcript(args.file.as_deref()).await {
                Ok(text) => text,
                Err(e) => {
                    presenter.error(&format!("Failed to read transcript: {}", e));
                    return ExitCode::from(EXIT_ERROR);
                }
            };

            run_submit(SubmitOptions {
                server_url,
                company_name: args.company_name,
                ticker: args.ticker,
                quarter: args.quarter.as_str().to_string(),
                year: args.year,
                call_date: args.call_date,
                transcript,
            })
            .await
        }
        Commands::Recent => run_recent(server_url).await,
        Commands::Company { ticker, metric } => {
            let metric = metric.unwrap_or_else(|| config.metric_or_default().to_string());
            run_company(CompanyOptions {
                server_url,
                ticker,
                metric,
            })
            .await
        }
    }
}
