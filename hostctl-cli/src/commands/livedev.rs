//! Livedev toggles
//!
//! Livedev gives SFTP write access to an environment's code. Disabling it
//! discards any changes that were not committed.

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use super::{confirmed, print_success};
use crate::context::Context;

#[derive(Subcommand)]
pub enum LiveDevCommands {
    /// Enable livedev on an environment
    #[command(name = "livedev:enable", aliases = ["ld:enable"])]
    Enable {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
    },
    /// Disable livedev on an environment, discarding uncommitted changes
    #[command(name = "livedev:disable", aliases = ["ld:disable"])]
    Disable {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
    },
}

pub async fn handle_livedev_command(command: LiveDevCommands, ctx: &Context) -> Result<()> {
    match command {
        LiveDevCommands::Enable { app, env } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;

            println!(
                "{} Enabling livedev for {} environment",
                "▸".cyan(),
                environment.label
            );
            let response = ctx.client.enable_livedev(&environment.uuid).await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Livedev enabled on {}", environment.label));
            Ok(())
        }
        LiveDevCommands::Disable { app, env } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;

            let question = format!(
                "Are you sure you want to disable livedev on {}? Uncommitted changes will be lost.",
                environment.label
            );
            if !confirmed(ctx, &question)? {
                return Ok(());
            }

            println!(
                "{} Disabling livedev for {} environment",
                "▸".cyan(),
                environment.label
            );
            let response = ctx.client.disable_livedev(&environment.uuid).await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Livedev disabled on {}", environment.label));
            Ok(())
        }
    }
}
