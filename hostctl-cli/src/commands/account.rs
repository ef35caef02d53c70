//! Account command handler

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use hostctl_core::domain::account::Account;

use crate::context::Context;

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Show details of the account the API credentials belong to
    #[command(name = "account")]
    Info,
}

pub async fn handle_account_command(command: AccountCommands, ctx: &Context) -> Result<()> {
    match command {
        AccountCommands::Info => {
            let account = ctx.client.get_account().await?;
            print_account(&account);
            Ok(())
        }
    }
}

fn print_account(account: &Account) {
    println!("{}", "Account Details:".bold());
    println!("  Name:       {}", account.name.cyan());
    if let Some(mail) = &account.mail {
        println!("  Email:      {}", mail);
    }
    println!(
        "  Created:    {}",
        account.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(last_login) = account.last_login_at {
        println!("  Last login: {}", last_login.format("%Y-%m-%d %H:%M:%S"));
    }
    println!(
        "  Active:     {}",
        if account.flags.active {
            "✓".green()
        } else {
            "✗".red()
        }
    );
    println!(
        "  TFA:        {}",
        if account.flags.tfa {
            "✓".green()
        } else {
            "✗".red()
        }
    );
}
