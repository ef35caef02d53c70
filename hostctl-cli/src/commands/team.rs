//! Team, role and permission command handlers

use anyhow::{Context as _, Result};
use clap::Subcommand;
use colored::*;
use hostctl_core::domain::team::Role;
use hostctl_core::dto::team::{AddApplication, CreateRole, CreateTeam, InviteMember, UpdateRole};
use uuid::Uuid;

use super::{confirmed, print_empty, print_success};
use crate::context::Context;

#[derive(Subcommand)]
pub enum TeamCommands {
    /// Create a team in an organization
    #[command(name = "team:create")]
    Create {
        /// Organization name
        organization: String,
        name: String,
    },
    /// Invite a user to a team
    #[command(name = "team:invite")]
    Invite {
        /// Team UUID
        team: String,
        email: String,
        /// Comma separated role UUIDs
        roles: String,
    },
    /// Give a team access to an application
    #[command(name = "team:addapplication", aliases = ["team:addapp"])]
    AddApplication {
        /// Application UUID or [realm:]site
        app: String,
        /// Team UUID
        team: String,
    },
    /// List every permission that can be granted
    #[command(name = "permissions:list", aliases = ["perm:list"])]
    Permissions,
    /// List the roles of an organization
    #[command(name = "role:list")]
    Roles {
        /// Organization name
        organization: String,
    },
    /// Create a role
    #[command(name = "role:add", aliases = ["role:create"])]
    RoleAdd {
        /// Organization name
        organization: String,
        name: String,
        /// Comma separated permission names
        permissions: String,
        description: Option<String>,
    },
    /// Delete a role
    #[command(name = "role:delete", aliases = ["role:remove"])]
    RoleDelete {
        /// Role UUID
        role: String,
    },
    /// Replace the permissions of a role
    #[command(name = "role:update:permissions")]
    RoleUpdate {
        /// Role UUID
        role: String,
        /// Comma separated permission names
        permissions: String,
    },
}

pub async fn handle_team_command(command: TeamCommands, ctx: &Context) -> Result<()> {
    match command {
        TeamCommands::Create { organization, name } => {
            let organization = ctx.resolver.resolve_organization(&organization).await?;
            ctx.client
                .create_team(organization.uuid, &CreateTeam { name: name.clone() })
                .await?;
            print_success(&format!("Team {} created in {}", name, organization.name));
            Ok(())
        }
        TeamCommands::Invite { team, email, roles } => {
            let team = parse_uuid(&team, "team")?;
            let req = InviteMember {
                email: email.clone(),
                roles: parse_list(&roles),
            };
            ctx.client.invite_team_member(team, &req).await?;
            print_success(&format!("Invited {} to team {}", email, team));
            Ok(())
        }
        TeamCommands::AddApplication { app, team } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let team = parse_uuid(&team, "team")?;
            ctx.client
                .add_team_application(team, &AddApplication { uuid })
                .await?;
            print_success(&format!("Added {} to team {}", app, team));
            Ok(())
        }
        TeamCommands::Permissions => {
            let permissions = ctx.client.list_permissions().await?;
            if permissions.is_empty() {
                print_empty("permissions");
            }
            for permission in permissions {
                println!(
                    "  {} {} {}",
                    "▸".cyan(),
                    permission.name,
                    permission.label.dimmed()
                );
            }
            Ok(())
        }
        TeamCommands::Roles { organization } => {
            let organization = ctx.resolver.resolve_organization(&organization).await?;
            let roles = ctx.client.list_roles(organization.uuid).await?;
            if roles.is_empty() {
                print_empty("roles");
            }
            for role in &roles {
                print_role(role);
            }
            Ok(())
        }
        TeamCommands::RoleAdd {
            organization,
            name,
            permissions,
            description,
        } => {
            let organization = ctx.resolver.resolve_organization(&organization).await?;
            let req = CreateRole {
                name: name.clone(),
                permissions: parse_list(&permissions),
                description,
            };
            ctx.client.create_role(organization.uuid, &req).await?;
            print_success(&format!("Role {} created in {}", name, organization.name));
            Ok(())
        }
        TeamCommands::RoleDelete { role } => {
            let role = parse_uuid(&role, "role")?;
            let question = format!("Are you sure you want to delete role {}?", role);
            if !confirmed(ctx, &question)? {
                return Ok(());
            }
            ctx.client.delete_role(role).await?;
            print_success(&format!("Role {} deleted", role));
            Ok(())
        }
        TeamCommands::RoleUpdate { role, permissions } => {
            let role = parse_uuid(&role, "role")?;
            let req = UpdateRole {
                permissions: parse_list(&permissions),
            };
            ctx.client.update_role(role, &req).await?;
            print_success(&format!("Permissions of role {} updated", role));
            Ok(())
        }
    }
}

fn parse_uuid(input: &str, what: &str) -> Result<Uuid> {
    Uuid::parse_str(input).with_context(|| format!("'{}' is not a valid {} UUID", input, what))
}

/// Split `a,b, c` into trimmed, non-empty parts
fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn print_role(role: &Role) {
    println!("  {} {}", "▸".cyan(), role.name.bold());
    println!("    UUID:        {}", role.uuid.to_string().dimmed());
    if let Some(description) = &role.description {
        println!("    Description: {}", description);
    }
    for permission in &role.permissions {
        println!("    {} {}", "✓".green(), permission.name);
    }
    println!();
}
