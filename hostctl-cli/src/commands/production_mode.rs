//! Production mode toggles
//!
//! Production mode only exists on the `prod` environment; requests for any
//! other environment are refused before the API is called.

use anyhow::Result;
use clap::Subcommand;

use super::print_outcome;
use crate::context::Context;

#[derive(Subcommand)]
pub enum ProductionModeCommands {
    /// Enable production mode
    #[command(name = "productionmode:enable", aliases = ["pm:enable"])]
    Enable {
        /// Application UUID or [realm:]site
        app: String,
        #[arg(default_value = "prod")]
        env: String,
    },
    /// Disable production mode
    #[command(name = "productionmode:disable", aliases = ["pm:disable"])]
    Disable {
        /// Application UUID or [realm:]site
        app: String,
        #[arg(default_value = "prod")]
        env: String,
    },
}

pub async fn handle_production_mode_command(
    command: ProductionModeCommands,
    ctx: &Context,
) -> Result<()> {
    match command {
        ProductionModeCommands::Enable { app, env } => {
            let outcome = ctx.orchestrator.set_production_mode(&app, &env, true).await?;
            print_outcome(outcome, &format!("Production mode enabled on {}", env));
            Ok(())
        }
        ProductionModeCommands::Disable { app, env } => {
            let outcome = ctx.orchestrator.set_production_mode(&app, &env, false).await?;
            print_outcome(outcome, &format!("Production mode disabled on {}", env));
            Ok(())
        }
    }
}
