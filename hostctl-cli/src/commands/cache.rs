//! Identifier cache maintenance

use anyhow::Result;
use clap::Subcommand;

use super::print_success;
use crate::context::Context;

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Remove every cached application and environment identifier
    #[command(name = "cache:clear", aliases = ["cc", "cr"])]
    Clear,
}

pub fn handle_cache_command(command: CacheCommands, ctx: &Context) -> Result<()> {
    match command {
        CacheCommands::Clear => {
            ctx.cache.clear()?;
            print_success("Identifier cache cleared");
            Ok(())
        }
    }
}
