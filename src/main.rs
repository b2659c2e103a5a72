//! job-signals: market signals from extracted job postings

use anyhow::Context;
use clap::Parser;
use job_signals::cli::{self, Cli, Commands, ConfigAction};
use job_signals::output::formatter::formatter_for;
use job_signals::{
    AnalysisReport, Analyst, AnalystError, Config, CorpusLoader, JsonFileSink, Result, ResultSink,
};
use log::{error, info};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            corpus,
            output,
            save,
            top_k,
            min_cofrequency,
            sequential,
        } => {
            if let Some(format) = output {
                config.output.format =
                    cli::parse_output_format(&format).map_err(AnalystError::InvalidInput)?;
            }
            if let Some(top_k) = top_k {
                config.analysis.top_k = top_k;
            }
            if let Some(min_cofrequency) = min_cofrequency {
                config.analysis.min_cofrequency = min_cofrequency;
            }
            if sequential {
                config.analysis.parallel = false;
            }

            let corpus = CorpusLoader::new()
                .load(&corpus)
                .await
                .with_context(|| format!("loading corpus from {}", corpus.display()))?;

            let analyst = Analyst::from_config(&config)?;
            let results = analyst.run(&corpus)?;
            let report = AnalysisReport::new(corpus.len(), results);

            if let Some(path) = save {
                JsonFileSink::new(&path, config.output.pretty).store(&report)?;
            }

            let formatter = formatter_for(
                config.output.format,
                config.output.pretty,
                config.output.color_output,
            );
            println!("{}", formatter.format_report(&report)?);
            info!("{} postings flagged as overloaded", report.flagged_count());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration file: {}", Config::config_path().display());
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| AnalystError::Configuration(e.to_string()))?;
                println!("{}", rendered);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
