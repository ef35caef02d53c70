//! Deployment preparation

use anyhow::Result;
use clap::Subcommand;

use super::print_outcome;
use crate::context::Context;

#[derive(Subcommand)]
pub enum DeployCommands {
    /// Pull databases and files into a non-production environment ahead of a deployment
    #[command(name = "deploy:prepare")]
    Prepare {
        /// Application UUID or [realm:]site
        app: String,
        /// Environment to prepare; must not be prod
        env_to: String,
        /// Source environment [default: prod]
        env_from: Option<String>,
    },
}

pub async fn handle_deploy_command(command: DeployCommands, ctx: &Context) -> Result<()> {
    match command {
        DeployCommands::Prepare {
            app,
            env_to,
            env_from,
        } => {
            let outcome = ctx
                .orchestrator
                .deploy_prepare(&app, &env_to, env_from.as_deref())
                .await?;
            print_outcome(outcome, &format!("{} is ready for deployment", env_to));
            Ok(())
        }
    }
}
