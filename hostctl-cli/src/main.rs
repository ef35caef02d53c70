//! hostctl
//!
//! Command-line interface for the cloud hosting platform's management API.

mod cache;
mod commands;
mod config;
mod context;
mod error;
mod id_resolver;
mod lock;
mod orchestrator;
mod progress;
mod prompt;
mod types;
mod waiter;

#[cfg(test)]
mod testing;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{Commands, handle_command};
use config::{Config, Overrides};
use context::{Context, GlobalOptions};
use lock::ProcessLock;

#[derive(Parser)]
#[command(name = "hostctl", version)]
#[command(about = "Manage applications on the cloud hosting platform", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Management API URL
    #[arg(long, global = true, env = "HOSTCTL_API_URL")]
    api_url: Option<String>,

    /// OAuth2 token URL
    #[arg(long, global = true, env = "HOSTCTL_TOKEN_URL")]
    token_url: Option<String>,

    /// API key
    #[arg(long, global = true, env = "HOSTCTL_KEY", hide_env_values = true)]
    key: Option<String>,

    /// API secret
    #[arg(long, global = true, env = "HOSTCTL_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// Seconds between task status checks
    #[arg(long, global = true, env = "HOSTCTL_TASKWAIT")]
    taskwait: Option<u64>,

    /// Seconds to wait for a task before giving up
    #[arg(long, global = true, env = "HOSTCTL_TIMEOUT")]
    timeout: Option<u64>,

    /// Path to the config file
    #[arg(long, global = true, env = "HOSTCTL_CONFIG")]
    config: Option<PathBuf>,

    /// Realm used for site names without a `realm:` prefix
    #[arg(short, long, global = true, default_value = "prod")]
    realm: String,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    /// Do not wait for asynchronous tasks to finish
    #[arg(long, global = true)]
    no_wait: bool,

    /// Allow running alongside another hostctl process
    #[arg(long, global = true)]
    no_lock: bool,

    /// Maximum number of items returned by list commands
    #[arg(short, long, global = true)]
    limit: Option<u32>,

    /// API filter expression, e.g. `name=@*site*`
    #[arg(short, long, global = true)]
    filter: Option<String>,

    /// Sort fields, e.g. `-created`
    #[arg(short, long, global = true)]
    sort: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl GlobalArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            api_url: self.api_url.clone(),
            token_url: self.token_url.clone(),
            key: self.key.clone(),
            secret: self.secret.clone(),
            task_wait: self.taskwait,
            timeout: self.timeout,
        }
    }

    fn options(&self) -> GlobalOptions {
        GlobalOptions {
            realm: self.realm.clone(),
            assume_yes: self.yes,
            no_wait: self.no_wait,
            limit: self.limit,
            filter: self.filter.clone(),
            sort: self.sort.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; stdout stays reserved for command output
    let default_filter = if cli.global.verbose {
        "hostctl=debug"
    } else {
        "hostctl=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.global.config.as_deref(), cli.global.overrides())?;
    if cli.command.requires_credentials() {
        config.validate()?;
    }

    let _lock = if cli.global.no_lock {
        None
    } else {
        let path = ProcessLock::default_path()
            .unwrap_or_else(|| std::env::temp_dir().join("hostctl.lock"));
        match ProcessLock::acquire(&path)? {
            Some(lock) => Some(lock),
            None => {
                println!("The command is already running in another process.");
                return Ok(());
            }
        }
    };

    let ctx = Context::new(&config, &cli.global.options());
    handle_command(cli.command, &ctx).await
}
