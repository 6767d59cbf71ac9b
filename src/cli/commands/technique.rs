//! Technique command - display one technique in full.

use anyhow::{bail, Result};
use colored::Colorize;

use crate::catalog::{self, Technique};
use crate::cli::OutputFormat;

/// Arguments for the technique command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    teachmaster technique think-pair-share\n    \
    teachmaster technique jigsaw --format markdown")]
pub struct Args {
    /// Technique ID (see 'teachmaster techniques')
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output format: text (default), json, or markdown
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the technique command.
pub fn run(args: Args) -> Result<()> {
    let Some(technique) = catalog::find(&args.id) else {
        bail!(
            "Technique not found: '{}'. Run 'teachmaster techniques' to list available techniques.",
            args.id
        );
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(technique)?),
        OutputFormat::Markdown => print!("{}", technique_markdown(technique)),
        OutputFormat::Text => print_technique_text(technique),
    }

    Ok(())
}

fn print_technique_text(technique: &Technique) {
    println!("{}", technique.category.label().yellow());
    println!("{}", technique.name.bold());
    println!();
    println!("  {}  {}", "Time:".dimmed(), technique.time_required);
    println!("  {}  {}", "Best for:".dimmed(), technique.best_for);
    println!();
    println!("{}", "Overview".bold());
    println!("  {}", technique.description);

    if !technique.benefits.is_empty() {
        println!();
        println!("{}", "Key benefits".bold());
        for benefit in technique.benefits {
            println!("  {} {}", "✓".green(), benefit);
        }
    }

    if !technique.implementation_steps.is_empty() {
        println!();
        println!("{}", "How to apply".bold());
        for (i, step) in technique.implementation_steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Plan a lesson with it: teachmaster new --title <TITLE> --subject <SUBJECT> --technique {}",
            technique.id
        )
        .dimmed()
    );
}

/// Renders a technique as a Markdown document.
pub fn technique_markdown(technique: &Technique) -> String {
    let mut out = format!(
        "# {}\n\n**Category:** {}  \n**Time:** {}  \n**Best for:** {}\n\n## Overview\n\n{}\n",
        technique.name,
        technique.category.label(),
        technique.time_required,
        technique.best_for,
        technique.description
    );

    if !technique.benefits.is_empty() {
        out.push_str("\n## Key Benefits\n\n");
        for benefit in technique.benefits {
            out.push_str(&format!("- {benefit}\n"));
        }
    }

    if !technique.implementation_steps.is_empty() {
        out.push_str("\n## How to Apply\n\n");
        for (i, step) in technique.implementation_steps.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }
    }

    out
}
