//! Delete command - permanently remove a lesson plan.
//!
//! This operation is irreversible.

use std::io::{self, Write};

use anyhow::{bail, Result};
use colored::Colorize;

use crate::cli::format::{plural, short_date};
use crate::cli::Context;
use crate::planner::StoreError;

/// Arguments for the delete command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    teachmaster delete lp_3f2a             Delete plan (prompts for confirmation)\n    \
    teachmaster delete lp_3f2a --force     Delete without confirmation")]
pub struct Args {
    /// Lesson plan ID or unique prefix to delete
    #[arg(value_name = "PLAN")]
    #[arg(
        long_help = "The lesson plan ID or an ID prefix that uniquely identifies\n\
        a single plan. Use 'teachmaster plans' to find plan IDs."
    )]
    pub plan: String,

    /// Skip the confirmation prompt
    #[arg(long)]
    #[arg(
        long_help = "Skip the confirmation prompt and proceed with deletion.\n\
        Use with caution as this operation cannot be undone."
    )]
    pub force: bool,
}

/// Executes the delete command.
pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    let plan = match store.resolve(&args.plan) {
        Ok(plan) => plan.clone(),
        Err(StoreError::NotFound(_)) if store.is_empty() => {
            bail!(
                "No lesson plan found matching '{}'. No lesson plans yet. \
                 Run 'teachmaster new' to create one.",
                args.plan
            );
        }
        Err(StoreError::NotFound(_)) => {
            bail!(
                "No lesson plan found matching '{}'. \
                 Run 'teachmaster plans' to list available plans.",
                args.plan
            );
        }
        Err(StoreError::Ambiguous { candidates, .. }) => {
            println!("{}", "Multiple lesson plans match that prefix:".yellow());
            for id in &candidates {
                let title = store.get(id).map(|p| p.title.as_str()).unwrap_or("");
                println!("  {} - {}", id.cyan(), title);
            }
            bail!(
                "Multiple lesson plans match '{}'. Please use a more specific prefix from the list above.",
                args.plan
            );
        }
        Err(e) => return Err(e.into()),
    };

    println!();
    println!("{} {}", "Lesson plan".bold(), plan.id.cyan());
    println!("  {}  {}", "Title:".dimmed(), plan.title);
    println!("  {}  {}", "Subject:".dimmed(), plan.subject);
    println!("  {}  {}", "Created:".dimmed(), short_date(&plan.created_date));
    println!(
        "  {}  {}",
        "Goals:".dimmed(),
        plural(plan.objectives.len(), "objective", "objectives")
    );
    println!();

    if !args.force {
        print!("Delete lesson plan {}? [y/N] ", plan.id.cyan());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    store.delete(&plan.id)?;
    println!("{} lesson plan {}", "Deleted".green(), plan.id.cyan());

    Ok(())
}
