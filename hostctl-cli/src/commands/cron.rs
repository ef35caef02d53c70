//! Cron command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use hostctl_core::domain::cron::Cron;
use hostctl_core::dto::cron::CreateCron;

use super::{confirmed, print_empty, print_success};
use crate::context::Context;

#[derive(Subcommand)]
pub enum CronCommands {
    /// List scheduled jobs of an environment
    #[command(name = "cron:list")]
    List {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
    },
    /// Show a single scheduled job
    #[command(name = "cron:info")]
    Info {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        id: String,
    },
    /// Add a scheduled job
    #[command(name = "cron:create", aliases = ["cron:add"])]
    Create {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        command: String,
        /// Cron expression, e.g. "*/15 * * * *"
        frequency: String,
        label: String,
    },
    /// Remove a scheduled job
    #[command(name = "cron:delete", aliases = ["cron:remove"])]
    Delete {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        id: String,
    },
    /// Enable a scheduled job
    #[command(name = "cron:enable")]
    Enable {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        id: String,
    },
    /// Disable a scheduled job
    #[command(name = "cron:disable")]
    Disable {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        id: String,
    },
}

pub async fn handle_cron_command(command: CronCommands, ctx: &Context) -> Result<()> {
    match command {
        CronCommands::List { app, env } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let crons = ctx.client.list_crons(&environment.uuid, &ctx.query).await?;

            if crons.is_empty() {
                print_empty("cron tasks");
            } else {
                println!(
                    "{}",
                    format!("Cron commands starting on {}:", environment.label).bold()
                );
                println!();
                for cron in &crons {
                    print_cron_summary(cron);
                }
            }
            Ok(())
        }
        CronCommands::Info { app, env, id } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let cron = ctx.client.get_cron(&environment.uuid, &id).await?;
            print_cron_details(&cron);
            Ok(())
        }
        CronCommands::Create {
            app,
            env,
            command,
            frequency,
            label,
        } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let req = CreateCron {
                command,
                frequency,
                label,
            };
            let response = ctx.client.create_cron(&environment.uuid, &req).await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Cron task created on {}", environment.label));
            Ok(())
        }
        CronCommands::Delete { app, env, id } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let question = format!(
                "Are you sure you want to delete the cron task {} on {}?",
                id, environment.label
            );
            if !confirmed(ctx, &question)? {
                return Ok(());
            }
            let response = ctx.client.delete_cron(&environment.uuid, &id).await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Cron task {} deleted", id));
            Ok(())
        }
        CronCommands::Enable { app, env, id } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let response = ctx
                .client
                .set_cron_enabled(&environment.uuid, &id, true)
                .await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Cron task {} enabled", id));
            Ok(())
        }
        CronCommands::Disable { app, env, id } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let question = format!(
                "Are you sure you want to disable the cron task {} on {}?",
                id, environment.label
            );
            if !confirmed(ctx, &question)? {
                return Ok(());
            }
            let response = ctx
                .client
                .set_cron_enabled(&environment.uuid, &id, false)
                .await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Cron task {} disabled", id));
            Ok(())
        }
    }
}

fn print_cron_summary(cron: &Cron) {
    let state = if cron.flags.enabled {
        "enabled".green()
    } else {
        "disabled".dimmed()
    };
    println!("  {} {} [{}]", "▸".cyan(), cron.id, state);
    println!("    Command:   {}", cron.command);
    println!("    Frequency: {}", cron.frequency().dimmed());
    if let Some(label) = &cron.label {
        println!("    Label:     {}", label);
    }
    println!();
}

fn print_cron_details(cron: &Cron) {
    println!("{}", "Cron Details:".bold());
    println!("  ID:          {}", cron.id.cyan());
    if let Some(label) = &cron.label {
        println!("  Label:       {}", label);
    }
    if let Some(environment) = &cron.environment {
        println!("  Environment: {}", environment.name);
    }
    println!("  Command:     {}", cron.command);
    println!("  Frequency:   {}", cron.frequency());
    println!(
        "  Enabled:     {}",
        if cron.flags.enabled { "✓".green() } else { "✗".red() }
    );
    println!(
        "  System:      {}",
        if cron.flags.system { "✓".green() } else { "✗".red() }
    );
    println!(
        "  On any web:  {}",
        if cron.flags.on_any_web { "✓".green() } else { "✗".red() }
    );
}
