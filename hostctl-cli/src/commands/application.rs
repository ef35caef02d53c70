//! Application command handlers
//!
//! Listing applications, showing their environments, renaming and tagging.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use hostctl_core::domain::application::Application;
use hostctl_core::domain::database::Database;
use hostctl_core::domain::environment::Environment;
use hostctl_core::dto::application::{CreateTag, RenameApplication};
use hostctl_core::dto::collection::ListQuery;

use super::{print_empty, print_success};
use crate::context::Context;

#[derive(Subcommand)]
pub enum ApplicationCommands {
    /// List all applications
    #[command(name = "application:list", aliases = ["app:list", "a:l"])]
    List,
    /// Show the environments of an application
    #[command(name = "application:info", aliases = ["app:info", "a:i"])]
    Info {
        /// Application UUID or [realm:]site
        app: String,
    },
    /// List the tags of an application
    #[command(name = "application:tags", aliases = ["app:tags"])]
    Tags {
        /// Application UUID or [realm:]site
        app: String,
    },
    /// Add a tag to an application
    #[command(name = "application:tag:create", aliases = ["app:tag:create"])]
    TagCreate {
        /// Application UUID or [realm:]site
        app: String,
        name: String,
        color: String,
    },
    /// Remove a tag from an application
    #[command(name = "application:tag:delete", aliases = ["app:tag:delete"])]
    TagDelete {
        /// Application UUID or [realm:]site
        app: String,
        name: String,
    },
    /// Rename an application
    #[command(name = "application:rename", aliases = ["app:rename", "a:rename"])]
    Rename {
        /// Application UUID or [realm:]site
        app: String,
        name: String,
    },
}

pub async fn handle_application_command(command: ApplicationCommands, ctx: &Context) -> Result<()> {
    match command {
        ApplicationCommands::List => list_applications(ctx).await,
        ApplicationCommands::Info { app } => show_application(ctx, &app).await,
        ApplicationCommands::Tags { app } => list_tags(ctx, &app).await,
        ApplicationCommands::TagCreate { app, name, color } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let response = ctx
                .client
                .create_application_tag(uuid, &CreateTag { name: name.clone(), color })
                .await?;
            print_success(&format!("Tag {} created. {}", name, response.message));
            Ok(())
        }
        ApplicationCommands::TagDelete { app, name } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let response = ctx.client.delete_application_tag(uuid, &name).await?;
            print_success(&format!("Tag {} deleted. {}", name, response.message));
            Ok(())
        }
        ApplicationCommands::Rename { app, name } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            ctx.client
                .rename_application(uuid, &RenameApplication { name: name.clone() })
                .await?;
            print_success(&format!("Application {} renamed to {}", app, name));
            Ok(())
        }
    }
}

async fn list_applications(ctx: &Context) -> Result<()> {
    let applications = ctx.client.list_applications(&ctx.query).await?;

    if applications.is_empty() {
        print_empty("applications");
    } else {
        println!(
            "{}",
            format!("Found {} application(s):", applications.len()).bold()
        );
        println!();
        for application in &applications {
            print_application_summary(application);
        }
    }

    Ok(())
}

async fn show_application(ctx: &Context, app: &str) -> Result<()> {
    let uuid = ctx.resolver.resolve_application(app).await?;
    let application = ctx.client.get_application(uuid).await?;
    let environments = ctx.client.list_environments(uuid, &ctx.query).await?;
    let databases = ctx.client.list_databases(uuid, &ListQuery::default()).await?;

    println!(
        "{} {} ({})",
        application.name.bold(),
        application.hosting_id(),
        uuid.to_string().cyan()
    );
    println!();
    for environment in &environments {
        print_environment(environment, &databases);
    }
    println!(
        "{}",
        "🔧 = Live development enabled, 🔒 = Production mode enabled".dimmed()
    );

    Ok(())
}

async fn list_tags(ctx: &Context, app: &str) -> Result<()> {
    let uuid = ctx.resolver.resolve_application(app).await?;
    let tags = ctx.client.list_application_tags(uuid).await?;

    if tags.is_empty() {
        print_empty("tags");
    }
    for tag in tags {
        println!("  {} {} {}", "▸".cyan(), tag.name, tag.color.dimmed());
    }

    Ok(())
}

fn print_application_summary(application: &Application) {
    println!("  {} {}", "▸".cyan(), application.name.bold());
    println!("    UUID:    {}", application.uuid.to_string().dimmed());
    println!("    Hosting: {}", application.hosting_id());
    println!();
}

fn print_environment(environment: &Environment, databases: &[Database]) {
    let mut markers = String::new();
    if environment.flags.livedev {
        markers.push_str(" 🔧");
    }
    if environment.flags.production_mode {
        markers.push_str(" 🔒");
    }

    println!(
        "  {} {} ({}){}",
        "▸".cyan(),
        environment.label.bold(),
        environment.name,
        markers
    );
    println!("    ID:        {}", environment.uuid.dimmed());
    println!("    Branch:    {}", environment.vcs_path());
    println!("    Domains:   {}", environment.domains.join(", "));
    let names: Vec<&str> = databases.iter().map(|db| db.name.as_str()).collect();
    println!("    Databases: {}", names.join(", "));
    println!();
}
