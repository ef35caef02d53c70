//! Code command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use super::{print_empty, print_outcome};
use crate::context::Context;

#[derive(Subcommand)]
pub enum CodeCommands {
    /// List branches and tags
    #[command(name = "code:list", aliases = ["c:l"])]
    List {
        /// Application UUID or [realm:]site
        app: String,
    },
    /// Deploy code from one environment to another
    #[command(name = "code:deploy", aliases = ["c:d"])]
    Deploy {
        /// Application UUID or [realm:]site
        app: String,
        env_from: String,
        env_to: String,
        /// Skip backing up databases on the target environment
        #[arg(long)]
        no_backup: bool,
    },
    /// Switch the branch or tag an environment runs
    #[command(name = "code:switch", aliases = ["c:s"])]
    Switch {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        branch: String,
        /// Skip backing up databases on the environment
        #[arg(long)]
        no_backup: bool,
    },
}

pub async fn handle_code_command(command: CodeCommands, ctx: &Context) -> Result<()> {
    match command {
        CodeCommands::List { app } => list_branches(ctx, &app).await,
        CodeCommands::Deploy {
            app,
            env_from,
            env_to,
            no_backup,
        } => {
            let outcome = ctx
                .orchestrator
                .deploy_code(&app, &env_from, &env_to, !no_backup)
                .await?;
            print_outcome(outcome, &format!("Code deployed from {} to {}", env_from, env_to));
            Ok(())
        }
        CodeCommands::Switch {
            app,
            env,
            branch,
            no_backup,
        } => {
            let outcome = ctx
                .orchestrator
                .switch_code(&app, &env, &branch, !no_backup)
                .await?;
            print_outcome(outcome, &format!("{} is now running {}", env, branch));
            Ok(())
        }
    }
}

async fn list_branches(ctx: &Context, app: &str) -> Result<()> {
    let uuid = ctx.resolver.resolve_application(app).await?;
    let branches = ctx.client.list_branches(uuid, &ctx.query).await?;

    if branches.is_empty() {
        print_empty("branches");
    }
    for branch in branches {
        if branch.flags.tag {
            println!("  {} {} {}", "▸".cyan(), branch.name, "(tag)".dimmed());
        } else {
            println!("  {} {}", "▸".cyan(), branch.name);
        }
    }

    Ok(())
}
