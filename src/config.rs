// src/config.rs
use crate::constants::{API_BASE_URL_ENV_VAR, API_KEY_ENV_VAR, NOTION_API_BASE_URL};
use crate::error::AppError;
use crate::trim::TrimOptions;
use crate::types::{ApiBaseUrl, ApiKey};
use clap::{Args, Parser, Subcommand};

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about = "Housekeeping for Notion workspaces", long_about = None)]
pub struct CommandLineInput {
    /// Notion integration token (falls back to NOTION_API_KEY)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Strip leading and trailing whitespace from page titles
    Trim(TrimArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct TrimArgs {
    /// Notion page URL or ID (e.g., "https://www.notion.so/...")
    pub page: Option<String>,

    /// Also trim every page below the given one
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Print what would change without updating any page
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Do not update pages whose title is already trimmed
    #[arg(long, default_value_t = false)]
    pub skip_unchanged: bool,
}

/// Resolved configuration for a trim run.
#[derive(Debug, Clone)]
pub struct TrimConfig {
    /// The page argument as given; parsed when the root is resolved.
    pub page: String,
    pub api_key: ApiKey,
    pub base_url: ApiBaseUrl,
    pub recursive: bool,
    pub options: TrimOptions,
}

impl TrimConfig {
    /// Resolves a trim configuration from CLI input and the process environment.
    pub fn resolve(token: Option<String>, args: TrimArgs) -> Result<Self, AppError> {
        Self::resolve_with(token, args, |name| std::env::var(name).ok())
    }

    /// Resolves a trim configuration, reading environment variables through `env`.
    pub fn resolve_with<F>(token: Option<String>, args: TrimArgs, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let page = args
            .page
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| AppError::MissingConfiguration("missing page argument".to_string()))?;

        let token = token
            .or_else(|| env(API_KEY_ENV_VAR))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::MissingConfiguration(format!(
                    "no token given: pass --token or set {}",
                    API_KEY_ENV_VAR
                ))
            })?;
        let api_key = ApiKey::new(token)?;

        let base_url = match env(API_BASE_URL_ENV_VAR) {
            Some(url) => ApiBaseUrl::parse(&url)?,
            None => ApiBaseUrl::parse(NOTION_API_BASE_URL)?,
        };

        Ok(TrimConfig {
            page,
            api_key,
            base_url,
            recursive: args.recursive,
            options: TrimOptions {
                dry_run: args.dry_run,
                skip_unchanged: args.skip_unchanged,
            },
        })
    }
}
