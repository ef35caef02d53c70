//! Organization command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use hostctl_core::domain::organization::{Member, Organization};

use super::print_empty;
use crate::context::Context;

#[derive(Subcommand)]
pub enum OrganizationCommands {
    /// List organizations
    #[command(name = "organization:list", aliases = ["org:list", "o:l"])]
    List,
    /// List the applications of an organization
    #[command(name = "organization:applications", aliases = ["org:apps", "o:a"])]
    Applications {
        /// Organization name
        organization: String,
    },
    /// List the teams of an organization
    #[command(name = "organization:teams", aliases = ["org:teams", "o:t"])]
    Teams {
        /// Organization name
        organization: String,
    },
    /// List the administrators and members of an organization
    #[command(name = "organization:members", aliases = ["org:members", "o:m"])]
    Members {
        /// Organization name
        organization: String,
    },
}

pub async fn handle_organization_command(
    command: OrganizationCommands,
    ctx: &Context,
) -> Result<()> {
    match command {
        OrganizationCommands::List => {
            let organizations = ctx.client.list_organizations().await?;
            if organizations.is_empty() {
                print_empty("organizations");
            }
            for organization in &organizations {
                print_organization(organization);
            }
            Ok(())
        }
        OrganizationCommands::Applications { organization } => {
            let organization = ctx.resolver.resolve_organization(&organization).await?;
            let applications = ctx
                .client
                .list_organization_applications(organization.uuid)
                .await?;

            println!("{}", format!("Applications in {}:", organization.name).bold());
            for application in applications {
                println!(
                    "  {} {} {}",
                    "▸".cyan(),
                    application.name,
                    application.hosting_id().dimmed()
                );
            }
            Ok(())
        }
        OrganizationCommands::Teams { organization } => {
            let organization = ctx.resolver.resolve_organization(&organization).await?;
            let teams = ctx
                .client
                .list_organization_teams(organization.uuid)
                .await?;

            println!("{}", format!("Teams in {}:", organization.name).bold());
            for team in teams {
                println!(
                    "  {} {} {}",
                    "▸".cyan(),
                    team.name,
                    team.uuid.to_string().dimmed()
                );
            }
            Ok(())
        }
        OrganizationCommands::Members { organization } => {
            let organization = ctx.resolver.resolve_organization(&organization).await?;
            let admins = ctx
                .client
                .list_organization_admins(organization.uuid)
                .await?;
            let members = ctx
                .client
                .list_organization_members(organization.uuid)
                .await?;

            println!("{}", "Administrators:".bold());
            for admin in &admins {
                print_member(admin);
            }
            println!();
            println!("{}", "Members:".bold());
            for member in &members {
                print_member(member);
            }
            Ok(())
        }
    }
}

fn print_organization(organization: &Organization) {
    println!("  {} {}", "▸".cyan(), organization.name.bold());
    println!("    UUID:          {}", organization.uuid.to_string().dimmed());
    if let Some(owner) = &organization.owner {
        println!("    Owner:         {}", owner.username);
    }
    println!("    Subscriptions: {}", organization.subscriptions_total);
    println!("    Admins:        {}", organization.admins_total);
    println!("    Users:         {}", organization.users_total);
    println!("    Teams:         {}", organization.teams_total);
    println!("    Roles:         {}", organization.roles_total);
    println!();
}

fn print_member(member: &Member) {
    let teams: Vec<&str> = member.teams.iter().map(|t| t.name.as_str()).collect();
    println!(
        "  {} {} <{}> {}",
        "▸".cyan(),
        member.username,
        member.mail,
        teams.join(", ").dimmed()
    );
}
