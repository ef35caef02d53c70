//! Domain command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use hostctl_core::domain::hostname::{Domain, DomainStatus};
use hostctl_core::dto::domain::CreateDomain;

use super::{confirmed, print_empty, print_outcome, print_success};
use crate::context::Context;
use crate::error::{CliError, Entity};

#[derive(Subcommand)]
pub enum DomainCommands {
    /// List domains attached to an environment
    #[command(name = "domain:list")]
    List {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
    },
    /// Show DNS status of a domain
    #[command(name = "domain:info")]
    Info {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        domain: String,
    },
    /// Attach a domain to an environment
    #[command(name = "domain:create", aliases = ["domain:add"])]
    Create {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        domain: String,
    },
    /// Detach a domain from an environment
    #[command(name = "domain:delete", aliases = ["domain:remove"])]
    Delete {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        domain: String,
    },
    /// Move a domain from one environment to another
    #[command(name = "domain:move")]
    Move {
        /// Application UUID or [realm:]site
        app: String,
        domain: String,
        env_from: String,
        env_to: String,
    },
    /// Clear the Varnish cache for one domain, or every domain of the environment
    #[command(name = "domain:purge")]
    Purge {
        /// Application UUID or [realm:]site
        app: String,
        env: String,
        domain: Option<String>,
    },
}

pub async fn handle_domain_command(command: DomainCommands, ctx: &Context) -> Result<()> {
    match command {
        DomainCommands::List { app, env } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let domains = ctx.client.list_domains(&environment.uuid, &ctx.query).await?;
            if domains.is_empty() {
                print_empty("domains");
            }
            for domain in &domains {
                print_domain(domain);
            }
            Ok(())
        }
        DomainCommands::Info { app, env, domain } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let result = ctx.client.get_domain_status(&environment.uuid, &domain).await;
            let status = match result {
                Ok(status) => status,
                Err(e) if e.is_not_found() => {
                    return Err(CliError::not_found(Entity::Domain, domain).into());
                }
                Err(e) => return Err(e.into()),
            };
            print_domain_status(&status);
            Ok(())
        }
        DomainCommands::Create { app, env, domain } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let req = CreateDomain {
                hostname: domain.clone(),
            };
            let response = ctx.client.create_domain(&environment.uuid, &req).await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Domain {} added to {}", domain, environment.label));
            Ok(())
        }
        DomainCommands::Delete { app, env, domain } => {
            let uuid = ctx.resolver.resolve_application(&app).await?;
            let environment = ctx.resolver.resolve_environment(uuid, &env).await?;
            let question = format!(
                "Are you sure you want to remove {} from environment {}?",
                domain, environment.label
            );
            if !confirmed(ctx, &question)? {
                return Ok(());
            }
            let response = ctx.client.delete_domain(&environment.uuid, &domain).await?;
            ctx.waiter.wait(&response).await?;
            print_success(&format!("Domain {} removed from {}", domain, environment.label));
            Ok(())
        }
        DomainCommands::Move {
            app,
            domain,
            env_from,
            env_to,
        } => {
            let outcome = ctx
                .orchestrator
                .move_domain(&app, &domain, &env_from, &env_to)
                .await?;
            print_outcome(outcome, &format!("Domain {} moved to {}", domain, env_to));
            Ok(())
        }
        DomainCommands::Purge { app, env, domain } => {
            let outcome = ctx
                .orchestrator
                .purge_varnish(&app, &env, domain.as_deref())
                .await?;
            print_outcome(outcome, &format!("Varnish cleared on {}", env));
            Ok(())
        }
    }
}

fn print_domain(domain: &Domain) {
    let mut markers = Vec::new();
    if domain.flags.default {
        markers.push("default");
    }
    if domain.flags.active {
        markers.push("active");
    }
    if domain.flags.uptime {
        markers.push("uptime");
    }
    println!(
        "  {} {} {}",
        "▸".cyan(),
        domain.hostname,
        markers.join(", ").dimmed()
    );
}

fn print_domain_status(status: &DomainStatus) {
    println!("{}", "Domain Status:".bold());
    println!("  Hostname:     {}", status.hostname.cyan());
    println!(
        "  Active:       {}",
        if status.flags.active { "✓".green() } else { "✗".red() }
    );
    println!(
        "  DNS resolves: {}",
        if status.flags.dns_resolves { "✓".green() } else { "✗".red() }
    );
    println!("  IP addresses: {}", status.ip_addresses.join(", "));
    println!("  CNAMEs:       {}", status.cnames.join(", "));
}
