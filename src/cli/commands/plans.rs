//! Plans command - the lesson planner screen.
//!
//! Lists lesson plans, most recently created first.

use anyhow::Result;
use colored::Colorize;

use crate::cli::format::{plural, short_date, truncate_chars};
use crate::cli::{Context, OutputFormat};
use crate::storage::LessonPlan;

/// Arguments for the plans command.
#[derive(clap::Args, Default)]
#[command(after_help = "EXAMPLES:\n    \
    teachmaster plans                  List lesson plans\n    \
    teachmaster plans --limit 5        Show the five newest plans\n    \
    teachmaster plans --format json    Output as JSON")]
pub struct Args {
    /// Maximum number of plans to display (all when omitted)
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the plans command.
pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let limit = args.limit.unwrap_or(usize::MAX);
    let plans: Vec<&LessonPlan> = store.list().iter().take(limit).collect();

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    if store.is_empty() {
        println!("{}", "No lesson plans yet.".dimmed());
        println!();
        println!("Run 'teachmaster new --title <TITLE> --subject <SUBJECT>' to create your first plan.");
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "Lesson plans ({})",
            plural(store.len(), "plan", "plans")
        )
        .bold()
    );
    println!();

    for plan in plans {
        print_plan_card(plan);
    }

    Ok(())
}

/// Prints the short card for one plan, as on the planner screen.
pub fn print_plan_card(plan: &LessonPlan) {
    println!(
        "{}  {}",
        plan.id.cyan(),
        truncate_chars(&plan.title, 60).bold()
    );

    let mut facts = Vec::new();
    if !plan.subject.is_empty() {
        facts.push(plan.subject.clone());
    }
    if !plan.grade_level.is_empty() {
        facts.push(format!("Grade {}", plan.grade_level));
    }
    if !plan.duration.is_empty() {
        facts.push(plan.duration.clone());
    }
    if !plan.objectives.is_empty() {
        facts.push(plural(plan.objectives.len(), "objective", "objectives"));
    }
    if !plan.techniques_used.is_empty() {
        facts.push(plural(plan.techniques_used.len(), "technique", "techniques"));
    }

    println!(
        "    {}  {}",
        short_date(&plan.created_date).dimmed(),
        facts.join(" · ")
    );
}
