//! File copy between environments

use anyhow::Result;
use clap::Subcommand;

use super::print_outcome;
use crate::context::Context;

#[derive(Subcommand)]
pub enum FilesCommands {
    /// Copy the files directory from one environment to another
    #[command(name = "files:copy", aliases = ["f:c"])]
    Copy {
        /// Application UUID or [realm:]site
        app: String,
        env_from: String,
        env_to: String,
    },
}

pub async fn handle_files_command(command: FilesCommands, ctx: &Context) -> Result<()> {
    match command {
        FilesCommands::Copy {
            app,
            env_from,
            env_to,
        } => {
            let outcome = ctx.orchestrator.copy_files(&app, &env_from, &env_to).await?;
            print_outcome(outcome, &format!("Files copied to {}", env_to));
            Ok(())
        }
    }
}
