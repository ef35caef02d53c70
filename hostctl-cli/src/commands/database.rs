//! Database command handlers
//!
//! Simple database CRUD plus the copy operations, which go through the
//! orchestrator. Backups live in `backup`.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use hostctl_core::dto::database::CreateDatabase;

use super::{confirmed, print_empty, print_outcome, print_success};
use crate::context::Context;

#[derive(Subcommand)]
pub enum DatabaseCommands {
    /// List the databases of an application
    #[command(name = "database:list", aliases = ["db:list"])]
    List {
        /// Application UUID or [realm:]site
        app: String,
    },
    /// Create a database
    #[command(name = "database:create", aliases = ["database:add", "db:create", "db:add"])]
    Create {
        /// Application UUID or [realm:]site
        app: String,
        db: String,
    },
    /// Delete a database from every environment
    #[command(name = "database:delete", aliases = ["database:remove", "db:delete", "db:remove"])]
    Delete {
        /// Application UUID or [realm:]site
        app: String,
        db: String,
    },
    /// Drop every table of a database
    #[command(name = "database:truncate", aliases = ["db:truncate"])]
    Truncate {
        /// Application UUID or [realm:]site
        app: String,
        db: String,
    },
    /// Copy a database between environments
    #[command(name = "database:copy", aliases = ["db:copy"])]
    Copy {
        /// Application UUID or [realm:]site
        app: String,
        env_from: String,
        env_to: String,
        db: String,
        /// Skip the backup on the destination environment
        #[arg(long)]
        no_backup: bool,
    },
    /// Copy every database between environments
    #[command(name = "database:copy:all", aliases = ["db:copy:all"])]
    CopyAll {
        /// Application UUID or [realm:]site
        app: String,
        env_from: String,
        env_to: String,
        /// Skip the backups on the destination environment
        #[arg(long)]
        no_backup: bool,
    },
}

pub async fn handle_database_command(command: DatabaseCommands, ctx: &Context) -> Result<()> {
    match command {
        DatabaseCommands::List { app } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let databases = ctx.client.list_databases(uuid, &ctx.query).await?;
            if databases.is_empty() {
                print_empty("databases");
            }
            for database in databases {
                println!("  {} {}", "▸".cyan(), database.name);
            }
            Ok(())
        }
        DatabaseCommands::Create { app, db } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let response = ctx
                .client
                .create_database(uuid, &CreateDatabase { name: db.clone() })
                .await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Database {} created", db));
            Ok(())
        }
        DatabaseCommands::Delete { app, db } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let question = format!("Are you sure you want to delete database {}?", db);
            if !confirmed(ctx, &question)? {
                return Ok(());
            }
            let response = ctx.client.delete_database(uuid, &db).await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Database {} deleted", db));
            Ok(())
        }
        DatabaseCommands::Truncate { app, db } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let question = format!("Are you sure you want to truncate database {}?", db);
            if !confirmed(ctx, &question)? {
                return Ok(());
            }
            let response = ctx.client.erase_database(uuid, &db).await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Database {} truncated", db));
            Ok(())
        }
        DatabaseCommands::Copy {
            app,
            env_from,
            env_to,
            db,
            no_backup,
        } => {
            let outcome = ctx
                .orchestrator
                .copy_database(&app, &env_from, &env_to, &db, !no_backup)
                .await?;
            print_outcome(outcome, &format!("Database {} copied to {}", db, env_to));
            Ok(())
        }
        DatabaseCommands::CopyAll {
            app,
            env_from,
            env_to,
            no_backup,
        } => {
            let outcome = ctx
                .orchestrator
                .copy_all_databases(&app, &env_from, &env_to, !no_backup)
                .await?;
            print_outcome(outcome, &format!("All databases copied to {}", env_to));
            Ok(())
        }
    }
}
