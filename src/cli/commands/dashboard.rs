//! Dashboard command - the overview screen.
//!
//! Shows catalog and planner counts, a few featured techniques, and the
//! most recent lesson plans.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::catalog::{self, Category, Technique};
use crate::cli::format::{short_date, truncate_chars};
use crate::cli::{Context, OutputFormat};
use crate::storage::LessonPlan;

/// Number of featured techniques on the dashboard.
pub const FEATURED_COUNT: usize = 4;

/// Arguments for the dashboard command.
#[derive(clap::Args, Default)]
pub struct Args {
    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Dashboard figures, also the JSON output.
#[derive(Debug, Serialize)]
pub struct Stats<'a> {
    pub techniques: usize,
    pub lesson_plans: usize,
    pub categories: usize,
    pub featured: &'static [Technique],
    pub recent_plans: &'a [LessonPlan],
}

impl<'a> Stats<'a> {
    pub fn collect(plans: &'a [LessonPlan], recent_limit: usize) -> Self {
        Self {
            techniques: catalog::techniques().len(),
            lesson_plans: plans.len(),
            categories: Category::ALL.len(),
            featured: catalog::featured(FEATURED_COUNT),
            recent_plans: &plans[..recent_limit.min(plans.len())],
        }
    }
}

/// Executes the dashboard command.
pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let stats = Stats::collect(store.list(), ctx.config.recent_plans_limit);

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "TeachMaster".bold().cyan());
    println!("{}", "Master teaching techniques and plan lessons".dimmed());
    println!();

    println!("  Techniques available:  {}", stats.techniques.to_string().bold());
    println!("  Lesson plans created:  {}", stats.lesson_plans.to_string().bold());
    println!("  Categories:            {}", stats.categories.to_string().bold());

    println!();
    println!("{}", "Featured techniques:".bold());
    for technique in stats.featured {
        println!(
            "  {:<20}  {}  {}",
            technique.id.cyan(),
            technique.name,
            truncate_chars(technique.description, 50).dimmed()
        );
    }

    println!();
    if stats.recent_plans.is_empty() {
        println!("{}", "No lesson plans yet.".dimmed());
        println!(
            "{}",
            "Hint: Run 'teachmaster new --title <TITLE> --subject <SUBJECT>' to plan a lesson".yellow()
        );
    } else {
        println!("{}", "Recent lesson plans:".bold());
        for plan in stats.recent_plans {
            println!(
                "  {}  {:12}  {}  {}",
                plan.id.cyan(),
                short_date(&plan.created_date).dimmed(),
                plan.title,
                plan.subject.dimmed()
            );
        }
    }

    println!();
    println!(
        "{}",
        "Browse: 'teachmaster techniques'   Plan: 'teachmaster plans'".dimmed()
    );

    Ok(())
}
