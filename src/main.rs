mod analytics;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod refresh;
mod session;
mod ui;
mod workers;

use crate::analytics::{AnalyticsClient, AnalyticsSource};
use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::{API_URL_ENV_VAR, FETCH_FAILURE_MESSAGE};
use crate::environment::Environment;
use crate::events::PollOutcome;
use crate::refresh::{DisplayState, RefreshController, StalePolicy};
use crate::session::messages::display_state_message;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::ui::UIConfig;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the live dashboard
    Start {
        /// Analytics endpoint to poll. Overrides the environment and config file.
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print events to the console instead of drawing the dashboard
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Paint the dashboard background
        #[arg(long = "with-background", default_value_t = false)]
        with_background: bool,

        /// Ignore a response from a poll older than the one already shown
        #[arg(long, default_value_t = false)]
        discard_stale: bool,
    },
    /// Poll the endpoint once and print the result
    Fetch {
        /// Analytics endpoint to poll. Overrides the environment and config file.
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Print the raw snapshot as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Manage the saved configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Save the analytics endpoint to poll by default
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Show the saved configuration and the endpoint that would be used
    Show,
    /// Remove the saved configuration
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init_max_level();
    let config_path = get_config_path()?;
    match args.command {
        Command::Start {
            api_url,
            headless,
            with_background,
            discard_stale,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let environment = resolve_environment(api_url.as_deref(), &config)?;
            let stale_policy = if discard_stale {
                StalePolicy::DiscardStale
            } else {
                StalePolicy::ApplyAll
            };
            let ui_config = UIConfig::new(
                with_background || config.with_background_color,
                stale_policy,
            );

            let session = setup_session(environment, ui_config).await?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session).await
            }
        }
        Command::Fetch { api_url, json } => {
            let config = Config::load_or_default(&config_path)?;
            let environment = resolve_environment(api_url.as_deref(), &config)?;
            fetch_once(environment, json).await
        }
        Command::Config(command) => run_config_command(command, &config_path),
    }
}

/// Picks the endpoint to poll: flag, then environment variable, then config file.
///
/// An explicit flag that is not a URL is an error rather than silently ignored.
fn resolve_environment(
    cli_url: Option<&str>,
    config: &Config,
) -> Result<Environment, Box<dyn Error>> {
    if let Some(url) = cli_url {
        if url.parse::<Environment>().is_err() {
            return Err(Box::from(format!(
                "Invalid API URL: {}. It should start with http:// or https://",
                url
            )));
        }
    }
    let env_url = std::env::var(API_URL_ENV_VAR).ok();
    if let Some(url) = env_url.as_deref() {
        if cli_url.is_none() && url.parse::<Environment>().is_err() {
            print_cmd_warn!(
                "Ignoring environment",
                "{}={} is not a valid URL",
                API_URL_ENV_VAR,
                url
            );
        }
    }
    Ok(Environment::resolve(
        cli_url,
        env_url.as_deref(),
        config.api_url.as_deref(),
    ))
}

/// Performs a single poll and prints what the dashboard would show.
async fn fetch_once(environment: Environment, json: bool) -> Result<(), Box<dyn Error>> {
    let client = AnalyticsClient::new(environment)?;
    match client.fetch_snapshot().await {
        Ok(snapshot) if json => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
        Ok(snapshot) => {
            let mut controller = RefreshController::default();
            controller.apply(PollOutcome {
                sequence: 1,
                result: Ok(snapshot),
            });
            display_state_message(controller.state()).print();
            Ok(())
        }
        Err(e) => {
            // The detail goes to the log only; the user sees the fixed message
            log::warn!("fetch from {} failed: {}", client.environment().api_url(), e);
            let failed = DisplayState::Failed(FETCH_FAILURE_MESSAGE.to_string());
            display_state_message(&failed).print();
            Err(Box::from(FETCH_FAILURE_MESSAGE))
        }
    }
}

fn run_config_command(command: ConfigCommand, config_path: &Path) -> Result<(), Box<dyn Error>> {
    match command {
        ConfigCommand::SetUrl { url } => {
            if url.parse::<Environment>().is_err() {
                return Err(Box::from(format!(
                    "Invalid API URL: {}. It should start with http:// or https://",
                    url
                )));
            }
            let existing = Config::load_or_default(config_path)?;
            let config = Config::new(Some(url.trim().to_string()), existing.with_background_color);
            config
                .save(config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Saved API URL", "{}", url.trim());
            Ok(())
        }
        ConfigCommand::Show => {
            let config = Config::load_or_default(config_path)?;
            let environment = resolve_environment(None, &config)?;
            print_cmd_info!("Config file", "{}", config_path.display());
            print_cmd_info!(
                "Saved API URL",
                "{}",
                config.api_url.as_deref().unwrap_or("(not set)")
            );
            print_cmd_info!("Effective API URL", "{}", environment.api_url());
            Ok(())
        }
        ConfigCommand::Clear => {
            println!("Clearing saved dashboard configuration...");
            Config::clear(config_path)?;
            print_cmd_success!("Configuration cleared", "");
            Ok(())
        }
    }
}
