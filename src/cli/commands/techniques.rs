//! Techniques command - browse the technique catalog.
//!
//! Filters the catalog by a free-text search over names and descriptions
//! and by category, keeping catalog order.

use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::catalog::{self, Category, CategoryFilter, Technique, TechniqueQuery};
use crate::cli::format::{plural, truncate_chars};
use crate::cli::OutputFormat;

/// Arguments for the techniques command.
#[derive(clap::Args, Default)]
#[command(after_help = "EXAMPLES:\n    \
    teachmaster techniques                          List all techniques\n    \
    teachmaster techniques --search exit            Search names and descriptions\n    \
    teachmaster techniques --category assessment    Show one category\n    \
    teachmaster techniques --categories             List category names")]
pub struct Args {
    /// Case-insensitive text to look for in names and descriptions
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Category to show, or "all"
    #[arg(short, long, value_name = "CATEGORY")]
    #[arg(long_help = "Only show techniques in this category. One of: all,\n\
        active_learning, assessment, classroom_management, differentiation,\n\
        engagement, collaboration, technology_integration, questioning.")]
    pub category: Option<String>,

    /// List the available categories instead of techniques
    #[arg(long, conflicts_with_all = ["search", "category"])]
    pub categories: bool,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Args {
    /// The catalog query this invocation describes.
    pub fn query(&self) -> Result<TechniqueQuery> {
        let category = match &self.category {
            Some(c) => c
                .parse::<CategoryFilter>()
                .map_err(|e| anyhow!("{e}. Run 'teachmaster techniques --categories' to list them."))?,
            None => CategoryFilter::All,
        };
        Ok(TechniqueQuery::new(
            self.search.clone().unwrap_or_default(),
            category,
        ))
    }
}

/// Executes the techniques command.
pub fn run(args: Args) -> Result<()> {
    if args.categories {
        return print_categories(args.format);
    }

    let query = args.query()?;
    tracing::debug!("Filtering catalog: text='{}' category={}", query.text, query.category);
    let found = catalog::filter_techniques(catalog::techniques(), &query);

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        println!("{}", "No techniques found.".dimmed());
        if !query.is_unfiltered() {
            println!("Try a different search or category.");
        }
        return Ok(());
    }

    println!(
        "{}",
        format!("Teaching techniques ({})", plural(found.len(), "technique", "techniques")).bold()
    );
    println!();

    for technique in found {
        print_technique_row(technique);
    }

    Ok(())
}

fn print_technique_row(technique: &Technique) {
    const ID_WIDTH: usize = 20;
    const CATEGORY_WIDTH: usize = 22;

    println!(
        "{:<ID_WIDTH$}  {:<CATEGORY_WIDTH$}  {}",
        technique.id.cyan(),
        technique.category.label().yellow(),
        technique.name.bold()
    );
    println!(
        "{:<ID_WIDTH$}  {}",
        "",
        truncate_chars(technique.description, 90).dimmed()
    );
}

fn print_categories(format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    println!("{}", "Categories:".bold());
    println!("  {:<24}  {}", CategoryFilter::ALL_SENTINEL.cyan(), "All techniques");
    for category in Category::ALL {
        let count = catalog::techniques()
            .iter()
            .filter(|t| t.category == category)
            .count();
        println!(
            "  {:<24}  {} {}",
            category.as_str().cyan(),
            category.label(),
            format!("({count})").dimmed()
        );
    }
    Ok(())
}
