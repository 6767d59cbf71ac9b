//! Config command - manage configuration

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use crate::cli::Context;
use crate::config::{Config, KEYS};
use crate::planner::STORAGE_KEY;

#[derive(clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// Print the configuration file path
    Path,
}

pub fn run(args: Args, ctx: &Context) -> Result<()> {
    match args.command {
        Some(ConfigCommand::Show) | None => show_config(ctx),
        Some(ConfigCommand::Get { key }) => get_config(&ctx.config, &key),
        Some(ConfigCommand::Set { key, value }) => set_config(&key, &value),
        Some(ConfigCommand::Path) => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    println!("{}", "TeachMaster Configuration".bold());
    println!();

    println!(
        "  {}  {}",
        "Config file:".dimmed(),
        Config::config_path()?.display()
    );
    println!("  {}  {}", "Database:".dimmed(), ctx.db_path.display());
    println!("  {}  {}", "Plans slot:".dimmed(), STORAGE_KEY);

    println!();
    println!("{}", "Settings:".bold());
    for key in KEYS {
        let value = ctx.config.get(key)?;
        let value = if value.is_empty() {
            "(default)".dimmed().to_string()
        } else {
            value
        };
        println!("  {key} = {value}");
    }

    Ok(())
}

fn get_config(config: &Config, key: &str) -> Result<()> {
    println!("{}", config.get(key)?);
    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;
    tracing::debug!("Saved config key {key}");
    println!("{} {} = {}", "Set".green(), key, config.get(key)?);
    Ok(())
}
