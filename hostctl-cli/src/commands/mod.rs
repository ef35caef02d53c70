//! Commands module
//!
//! Defines all CLI commands and their handlers. Commands are named
//! `<noun>:<verb>`; each noun lives in its own module.

mod account;
mod application;
mod backup;
mod cache;
mod code;
mod cron;
mod database;
mod deploy;
mod domain;
mod files;
mod livedev;
mod log;
mod notification;
mod organization;
mod production_mode;
mod team;

pub use account::AccountCommands;
pub use application::ApplicationCommands;
pub use backup::BackupCommands;
pub use cache::CacheCommands;
pub use code::CodeCommands;
pub use cron::CronCommands;
pub use database::DatabaseCommands;
pub use deploy::DeployCommands;
pub use domain::DomainCommands;
pub use files::FilesCommands;
pub use livedev::LiveDevCommands;
pub use log::LogCommands;
pub use notification::NotificationCommands;
pub use organization::OrganizationCommands;
pub use production_mode::ProductionModeCommands;
pub use team::TeamCommands;

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use crate::context::Context;
use crate::orchestrator::Outcome;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Account(AccountCommands),
    #[command(flatten)]
    Application(ApplicationCommands),
    #[command(flatten)]
    Cache(CacheCommands),
    #[command(flatten)]
    Code(CodeCommands),
    #[command(flatten)]
    Cron(CronCommands),
    #[command(flatten)]
    Database(DatabaseCommands),
    #[command(flatten)]
    Backup(BackupCommands),
    #[command(flatten)]
    Deploy(DeployCommands),
    #[command(flatten)]
    Domain(DomainCommands),
    #[command(flatten)]
    Files(FilesCommands),
    #[command(flatten)]
    LiveDev(LiveDevCommands),
    #[command(flatten)]
    Log(LogCommands),
    #[command(flatten)]
    Notification(NotificationCommands),
    #[command(flatten)]
    Organization(OrganizationCommands),
    #[command(flatten)]
    ProductionMode(ProductionModeCommands),
    #[command(flatten)]
    Team(TeamCommands),
}

impl Commands {
    /// Whether the command talks to the API
    pub fn requires_credentials(&self) -> bool {
        !matches!(self, Commands::Cache(_))
    }
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::Account(command) => account::handle_account_command(command, ctx).await,
        Commands::Application(command) => {
            application::handle_application_command(command, ctx).await
        }
        Commands::Cache(command) => cache::handle_cache_command(command, ctx),
        Commands::Code(command) => code::handle_code_command(command, ctx).await,
        Commands::Cron(command) => cron::handle_cron_command(command, ctx).await,
        Commands::Database(command) => database::handle_database_command(command, ctx).await,
        Commands::Backup(command) => backup::handle_backup_command(command, ctx).await,
        Commands::Deploy(command) => deploy::handle_deploy_command(command, ctx).await,
        Commands::Domain(command) => domain::handle_domain_command(command, ctx).await,
        Commands::Files(command) => files::handle_files_command(command, ctx).await,
        Commands::LiveDev(command) => livedev::handle_livedev_command(command, ctx).await,
        Commands::Log(command) => log::handle_log_command(command, ctx).await,
        Commands::Notification(command) => {
            notification::handle_notification_command(command, ctx).await
        }
        Commands::Organization(command) => {
            organization::handle_organization_command(command, ctx).await
        }
        Commands::ProductionMode(command) => {
            production_mode::handle_production_mode_command(command, ctx).await
        }
        Commands::Team(command) => team::handle_team_command(command, ctx).await,
    }
}

/// Print the result of a confirmed multi-step operation
fn print_outcome(outcome: Outcome, done: &str) {
    match outcome {
        Outcome::Completed => print_success(done),
        Outcome::Declined => println!("Cancelled."),
    }
}

fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

fn print_empty(what: &str) {
    println!("{}", format!("No {} found.", what).yellow());
}

/// Ask for confirmation; `false` means the operator declined and
/// "Cancelled." has been printed
fn confirmed(ctx: &Context, question: &str) -> Result<bool> {
    if ctx.confirm.confirm(question)? {
        Ok(true)
    } else {
        println!("Cancelled.");
        Ok(false)
    }
}
