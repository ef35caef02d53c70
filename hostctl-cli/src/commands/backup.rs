//! Database backup command handlers

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Subcommand;
use colored::*;
use hostctl_core::domain::database::DatabaseBackup;
use hostctl_core::dto::collection::ListQuery;

use super::{print_empty, print_outcome, print_success};
use crate::context::Context;
use crate::error::{CliError, Entity};

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create an on-demand backup of a database
    #[command(name = "database:backup", aliases = ["db:backup"])]
    Create {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        db: String,
    },
    /// Back up every database of an environment
    #[command(name = "database:backup:all", aliases = ["db:backup:all"])]
    All {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
    },
    /// List the backups of one database, or of every database
    #[command(name = "database:backup:list", aliases = ["db:backup:list"])]
    List {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        db: Option<String>,
    },
    /// Restore a backup over its database
    #[command(name = "database:backup:restore", aliases = ["db:backup:restore"])]
    Restore {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        db: String,
        /// Backup id
        id: u64,
    },
    /// Print the download link of a backup
    #[command(name = "database:backup:link", aliases = ["db:backup:link"])]
    Link {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        db: String,
        /// Backup id
        id: u64,
    },
    /// Download a backup, the latest one unless --backup is given
    #[command(name = "database:backup:download", aliases = ["db:backup:download"])]
    Download {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        db: String,
        /// Backup id [default: most recent]
        #[arg(long)]
        backup: Option<u64>,
        /// Directory to save into [default: system temp directory]
        #[arg(long)]
        path: Option<PathBuf>,
        /// File name without extension [default: <env>-<db>-<id>]
        #[arg(long)]
        filename: Option<String>,
    },
    /// Delete a backup
    #[command(name = "database:backup:delete", aliases = ["db:backup:delete"])]
    Delete {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        db: String,
        /// Backup id
        id: u64,
    },
}

pub async fn handle_backup_command(command: BackupCommands, ctx: &Context) -> Result<()> {
    match command {
        BackupCommands::Create { app, env, db } => {
            ctx.orchestrator.backup(&app, &env, &db).await?;
            print_success(&format!("Database {} backed up on {}", db, env));
            Ok(())
        }
        BackupCommands::All { app, env } => {
            ctx.orchestrator.backup_environment(&app, &env).await?;
            print_success(&format!("All databases backed up on {}", env));
            Ok(())
        }
        BackupCommands::List { app, env, db } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let databases = match db {
                Some(db) => vec![db],
                None => ctx
                    .client
                    .list_databases(uuid, &ListQuery::default())
                    .await?
                    .into_iter()
                    .map(|d| d.name)
                    .collect(),
            };

            for database in databases {
                let backups = ctx
                    .client
                    .list_database_backups(&environment.uuid, &database, &ctx.query)
                    .await?;
                println!("{}", database.bold());
                if backups.is_empty() {
                    print_empty("backups");
                }
                for backup in &backups {
                    print_backup(backup);
                }
            }
            Ok(())
        }
        BackupCommands::Restore { app, env, db, id } => {
            let outcome = ctx.orchestrator.restore_backup(&app, &env, &db, id).await?;
            print_outcome(outcome, &format!("Backup {} restored to {} on {}", id, db, env));
            Ok(())
        }
        BackupCommands::Link { app, env, db, id } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            println!(
                "{}",
                ctx.client.database_backup_link(&environment.uuid, &db, id)
            );
            Ok(())
        }
        BackupCommands::Download {
            app,
            env,
            db,
            backup,
            path,
            filename,
        } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;

            let id = match backup {
                Some(id) => id,
                None => {
                    let backups = ctx
                        .client
                        .list_database_backups(&environment.uuid, &db, &ListQuery::default())
                        .await?;
                    latest_backup(&backups)
                        .map(|b| b.id)
                        .ok_or_else(|| CliError::not_found(Entity::Backup, &db))?
                }
            };

            let name = filename.unwrap_or_else(|| format!("{}-{}-{}", environment.name, db, id));
            let location = path
                .unwrap_or_else(std::env::temp_dir)
                .join(format!("{}.sql.gz", name));
            println!(
                "{} Downloading database backup to {}",
                "▸".cyan(),
                location.display()
            );

            let bytes = ctx
                .client
                .download_database_backup(&environment.uuid, &db, id)
                .await?;
            tokio::fs::write(&location, bytes)
                .await
                .with_context(|| format!("Unable to write backup to {}", location.display()))?;

            print_success(&format!("Database backup downloaded to {}", location.display()));
            Ok(())
        }
        BackupCommands::Delete { app, env, db, id } => {
            let outcome = ctx.orchestrator.delete_backup(&app, &env, &db, id).await?;
            print_outcome(outcome, &format!("Backup {} of {} deleted on {}", id, db, env));
            Ok(())
        }
    }
}

/// Most recently completed backup; unfinished ones rank last
fn latest_backup(backups: &[DatabaseBackup]) -> Option<&DatabaseBackup> {
    backups.iter().max_by_key(|b| (b.completed_at, b.id))
}

fn print_backup(backup: &DatabaseBackup) {
    let completed = backup
        .completed_at
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "in progress".to_string());
    println!(
        "  {} {:<6} {:<9} {}",
        "▸".cyan(),
        backup.id,
        backup.backup_type,
        completed.dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backup(id: u64, completed_at: Option<&str>) -> DatabaseBackup {
        DatabaseBackup {
            id,
            backup_type: "daily".to_string(),
            database: None,
            started_at: None,
            completed_at: completed_at.map(|at| at.parse().unwrap()),
        }
    }

    #[test]
    fn test_latest_backup_prefers_most_recent_completion() {
        let backups = vec![
            backup(1, Some("2012-05-15T12:00:00Z")),
            backup(3, Some("2017-01-08T04:00:01Z")),
            backup(2, Some("2012-03-28T12:00:01Z")),
        ];
        assert_eq!(latest_backup(&backups).unwrap().id, 3);
    }

    #[test]
    fn test_latest_backup_of_nothing() {
        assert!(latest_backup(&[]).is_none());
    }
}
