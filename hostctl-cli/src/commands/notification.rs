//! Notification command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use hostctl_core::domain::notification::{Notification, NotificationStatus};
use hostctl_core::dto::operation::OperationResponse;

use super::print_success;
use crate::context::Context;

#[derive(Subcommand)]
pub enum NotificationCommands {
    /// Show the state of an asynchronous task
    #[command(name = "notification:info", aliases = ["n:i"])]
    Info {
        /// Notification UUID
        uuid: String,
    },
    /// Wait for an existing asynchronous task to finish
    #[command(name = "notification:wait", aliases = ["n:w"])]
    Wait {
        /// Notification UUID
        uuid: String,
    },
}

pub async fn handle_notification_command(
    command: NotificationCommands,
    ctx: &Context,
) -> Result<()> {
    match command {
        NotificationCommands::Info { uuid } => {
            let notification = ctx.client.get_notification(&uuid).await?;
            print_notification(&notification);
            Ok(())
        }
        NotificationCommands::Wait { uuid } => {
            let response = OperationResponse::for_notification(ctx.client.base_url(), &uuid);
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Task {} completed", uuid));
            Ok(())
        }
    }
}

fn print_notification(notification: &Notification) {
    let status = notification.status.to_string();
    let status = match notification.status {
        NotificationStatus::Completed => status.green(),
        NotificationStatus::Failed => status.red(),
        NotificationStatus::Started | NotificationStatus::InProgress => status.cyan(),
        NotificationStatus::Unknown(_) => status.yellow(),
    };

    println!("{}", "Notification Details:".bold());
    println!("  UUID:        {}", notification.uuid.to_string().cyan());
    if let Some(event) = &notification.event {
        println!("  Event:       {}", event);
    }
    if let Some(description) = &notification.description {
        println!("  Description: {}", description);
    }
    println!("  Status:      {}", status);
    if let Some(progress) = notification.progress {
        println!("  Progress:    {}%", progress);
    }
    if let Some(created) = notification.created_at {
        println!("  Created:     {}", created.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(completed) = notification.completed_at {
        println!("  Completed:   {}", completed.format("%Y-%m-%d %H:%M:%S"));

        if let Some(created) = notification.created_at {
            let duration = completed.signed_duration_since(created);
            println!("  Duration:    {}s", duration.num_seconds());
        }
    }
}
