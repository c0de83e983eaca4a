// src/main.rs

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion_upkeep::constants::{EXIT_TRIM_FAILED, EXIT_USAGE};
use notion_upkeep::{
    Command, CommandLineInput, NotionHttpClient, NotionId, PageDirectory,
    SubtreeWalker, TitleNormalizer, TrimArgs, TrimConfig, TrimError, WalkReport,
};
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion_upkeep.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // Progress lines own stdout.
    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)
        .with_context(|| format!("opening log file {}", log_file_path.display()))?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )
        .context("building logging configuration")?;

    log4rs::init_config(config).context("installing logger")?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Runs the `trim` command and returns the process exit code.
async fn run_trim(token: Option<String>, args: TrimArgs) -> ExitCode {
    let config = match TrimConfig::resolve(token, args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let client = match NotionHttpClient::new(&config.api_key, config.base_url.clone()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let root_id = match NotionId::parse(&config.page) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("error resolving page: {}", e);
            return ExitCode::from(EXIT_TRIM_FAILED);
        }
    };
    let root = match client.retrieve_page(&root_id).await {
        Ok(root) => root,
        Err(source) => {
            eprintln!(
                "error resolving page: {}",
                TrimError::page_lookup(&root_id, source)
            );
            return ExitCode::from(EXIT_TRIM_FAILED);
        }
    };

    let stdout = io::stdout();
    let mut progress = stdout.lock();

    if !config.recursive {
        let normalizer = TitleNormalizer::new(&client, config.options);
        return match normalizer.normalize(&root, &mut progress).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error trimming page: {}", e);
                ExitCode::from(EXIT_TRIM_FAILED)
            }
        };
    }

    eprintln!("trimming page titles recursively, any errors will not lead to non-zero exit code");
    let walker = SubtreeWalker::new(&client, config.options);
    let report = walker.walk(root, &mut progress).await;
    if let Err(e) = progress.flush() {
        log::warn!("Could not flush progress output: {}", e);
    }
    report_walk(&report);

    ExitCode::SUCCESS
}

fn report_walk(report: &WalkReport) {
    for error in &report.errors {
        eprintln!("error trimming page: {}", error);
    }
    eprintln!(
        "{} pages visited, {} titles written, {} errors",
        report.pages_visited,
        report.titles_written,
        report.errors.len()
    );
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("failed to set up logging: {:#}", e);
        return ExitCode::from(EXIT_USAGE);
    }

    match cli.command {
        Command::Trim(args) => run_trim(cli.token, args).await,
    }
}
