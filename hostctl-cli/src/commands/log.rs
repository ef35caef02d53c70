//! Log command handlers

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Subcommand;
use colored::*;

use super::{print_empty, print_success};
use crate::context::Context;

#[derive(Subcommand)]
pub enum LogCommands {
    /// List the log types available for an environment
    #[command(name = "log:list")]
    List {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
    },
    /// Create a fresh snapshot of a log
    #[command(name = "log:snapshot")]
    Snapshot {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        /// Log type, e.g. apache-access
        log_type: String,
    },
    /// Download the latest snapshot of a log
    #[command(name = "log:download")]
    Download {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        /// Log type, e.g. apache-access
        log_type: String,
        /// Directory to save into [default: system temp directory]
        #[arg(long)]
        path: Option<PathBuf>,
        /// File name without extension [default: <env>-<type>]
        #[arg(long)]
        filename: Option<String>,
    },
}

pub async fn handle_log_command(command: LogCommands, ctx: &Context) -> Result<()> {
    match command {
        LogCommands::List { app, env } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let logs = ctx.client.list_logs(&environment.uuid).await?;
            if logs.is_empty() {
                print_empty("logs");
            }
            for log in logs {
                let available = if log.flags.available {
                    "✓".green()
                } else {
                    "✗".red()
                };
                println!(
                    "  {} {} {} {}",
                    available,
                    log.log_type,
                    "-".dimmed(),
                    log.label.dimmed()
                );
            }
            Ok(())
        }
        LogCommands::Snapshot { app, env, log_type } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let response = ctx
                .client
                .create_log_snapshot(&environment.uuid, &log_type)
                .await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!(
                "Created {} log snapshot on {}",
                log_type, environment.label
            ));
            Ok(())
        }
        LogCommands::Download {
            app,
            env,
            log_type,
            path,
            filename,
        } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let bytes = ctx.client.download_log(&environment.uuid, &log_type).await?;

            let name = filename.unwrap_or_else(|| format!("{}-{}", environment.name, log_type));
            let location = path
                .unwrap_or_else(std::env::temp_dir)
                .join(format!("{}.tar.gz", name));
            tokio::fs::write(&location, bytes)
                .await
                .with_context(|| format!("Unable to write log to {}", location.display()))?;

            print_success(&format!("Log downloaded to {}", location.display()));
            Ok(())
        }
    }
}
