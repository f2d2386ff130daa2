//! `app-rate` - ask for a storefront rating from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Print the App Store review URL
//! app-rate --store-id 123456789 url
//!
//! # Open the Google Play page in the default browser
//! app-rate --store-id com.example.app --storefront google-play open
//!
//! # Ask first, open on "y"
//! app-rate --config app-rate.toml prompt
//! ```
//!
//! Configuration is resolved as: `--config` file, then `APP_RATE_STORE_ID` /
//! `APP_RATE_STOREFRONT`, then flags. Set `RUST_LOG=debug` for diagnostics on stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
};

use app_rate::{OpenOutcome, PromptOutcome, RateConfig, RateController, RateError, Storefront};
use clap::{Parser, Subcommand};
use futures::executor::block_on;
use platform_host::{HostCapabilities, HostServices, HostStrategy};
use tracing_subscriber::EnvFilter;

mod opener;
mod terminal;

use opener::SystemExternalUrlService;
use terminal::TerminalConfirmDialogService;

#[derive(Debug, Parser)]
#[command(name = "app-rate")]
#[command(version, about = "Ask for a storefront rating and open the review page")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Storefront identifier of the application
    #[arg(short = 'i', long)]
    store_id: Option<String>,

    /// Storefront name (`app-store`, `app-store-native`, `google-play`) or a template with `{id}`
    #[arg(short, long)]
    storefront: Option<Storefront>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the review URL
    Url,
    /// Open the review page without asking
    Open,
    /// Ask on the terminal, then open the review page on acceptance
    Prompt,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("command failed: {err}");
            let _ = write_failure(io::stderr().lock(), &err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), RateError> {
    let controller = controller_from(&cli)?;

    match cli.command {
        Command::Url => {
            println!("{}", controller.try_store_url()?);
        }
        Command::Open => {
            // Unlike a prompt, an explicit open with nothing to open is an error.
            controller.try_store_url()?;
            if let OpenOutcome::Opened(url) =
                block_on(controller.open_store_page(&SystemExternalUrlService))?
            {
                println!("opened {url}");
            }
        }
        Command::Prompt => {
            let host = terminal_host();
            match block_on(controller.show_rate_prompt_with(&host))? {
                PromptOutcome::Accepted(OpenOutcome::Opened(url)) => println!("opened {url}"),
                PromptOutcome::Accepted(OpenOutcome::Skipped) => {
                    eprintln!("app-rate: no store identifier configured; nothing to open");
                }
                PromptOutcome::Declined => {}
            }
        }
    }
    Ok(())
}

fn write_failure(mut out: impl Write, err: &RateError) -> io::Result<()> {
    writeln!(out, "app-rate: {err}")
}

fn controller_from(cli: &Cli) -> Result<RateController, RateError> {
    let mut config = match &cli.config {
        Some(path) => RateConfig::load(path)?,
        None => RateConfig::default(),
    };
    config.apply_env_overrides()?;
    if let Some(storefront) = &cli.storefront {
        config.storefront = storefront.clone();
    }

    let mut controller = RateController::new(config);
    if let Some(id) = &cli.store_id {
        controller.set_store_identifier(id.as_str());
    }
    Ok(controller)
}

fn terminal_host() -> HostServices {
    HostServices {
        dialogs: Rc::new(TerminalConfirmDialogService::stdio()),
        external_urls: Rc::new(SystemExternalUrlService),
        capabilities: HostCapabilities::terminal(),
        host_strategy: HostStrategy::Terminal,
    }
}
