//! Plan command - display one lesson plan.
//!
//! Technique references are looked up in the catalog when displayed; ids
//! that are no longer in the catalog are shown as unknown.
//!
//! Supports multiple output formats:
//! - Text: colored terminal output (default)
//! - JSON: the stored record plus resolved technique names
//! - Markdown: for printing or sharing

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::catalog;
use crate::cli::format::short_date;
use crate::cli::{Context, OutputFormat};
use crate::storage::LessonPlan;

/// Arguments for the plan command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    teachmaster plan lp_3f2a              View plan by ID prefix\n    \
    teachmaster plan lp_3f2a -f markdown  Output as markdown")]
pub struct Args {
    /// Lesson plan ID or unique prefix
    #[arg(value_name = "PLAN")]
    pub plan: String,

    /// Output format: text (default), json, or markdown
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// A technique reference resolved against the catalog.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TechniqueRef<'a> {
    pub id: &'a str,
    /// `None` when the id is not in the catalog
    pub name: Option<&'static str>,
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    plan: &'a LessonPlan,
    techniques: Vec<TechniqueRef<'a>>,
}

/// Resolves the plan's technique ids against the catalog.
pub fn resolve_techniques(plan: &LessonPlan) -> Vec<TechniqueRef<'_>> {
    plan.techniques_used
        .iter()
        .map(|id| TechniqueRef {
            id: id.as_str(),
            name: catalog::find(id).map(|t| t.name),
        })
        .collect()
}

/// Executes the plan command.
pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let plan = store.resolve(&args.plan)?;
    let techniques = resolve_techniques(plan);

    match args.format {
        OutputFormat::Json => {
            let output = PlanOutput { plan, techniques };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Markdown => print!("{}", plan_markdown(plan, &techniques)),
        OutputFormat::Text => print_plan_text(plan, &techniques),
    }

    Ok(())
}

fn print_plan_text(plan: &LessonPlan, techniques: &[TechniqueRef<'_>]) {
    println!("{}", plan.title.bold());
    println!("{}", plan.subject.dimmed());
    println!();
    println!("  {}  {}", "ID:".dimmed(), plan.id.cyan());
    println!("  {}  {}", "Created:".dimmed(), short_date(&plan.created_date));
    if !plan.grade_level.is_empty() {
        println!("  {}  {}", "Grade:".dimmed(), plan.grade_level);
    }
    if !plan.duration.is_empty() {
        println!("  {}  {}", "Duration:".dimmed(), plan.duration);
    }

    if !techniques.is_empty() {
        println!();
        println!("{}", "Techniques:".bold());
        for technique in techniques {
            match technique.name {
                Some(name) => println!("  {} {}", name, format!("({})", technique.id).dimmed()),
                None => println!(
                    "  {} {}",
                    technique.id,
                    "(not in catalog)".yellow()
                ),
            }
        }
    }

    print_list_text("Objectives:", &plan.objectives);
    print_list_text("Materials:", &plan.materials);
    print_section_text("Lesson outline:", &plan.lesson_outline);
    print_section_text("Teacher actions:", &plan.teacher_actions);
    print_section_text("Student actions:", &plan.student_actions);
    print_section_text("Assessment:", &plan.assessment_method);
    print_section_text("Notes:", &plan.notes);
}

fn print_list_text(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}", heading.bold());
    for (i, item) in items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }
}

fn print_section_text(heading: &str, body: &str) {
    if body.trim().is_empty() {
        return;
    }
    println!();
    println!("{}", heading.bold());
    for line in body.lines() {
        println!("  {line}");
    }
}

/// Renders the plan as a Markdown document.
pub fn plan_markdown(plan: &LessonPlan, techniques: &[TechniqueRef<'_>]) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", plan.title));
    out.push_str(&format!("**Subject:** {}  \n", plan.subject));
    if !plan.grade_level.is_empty() {
        out.push_str(&format!("**Grade:** {}  \n", plan.grade_level));
    }
    if !plan.duration.is_empty() {
        out.push_str(&format!("**Duration:** {}  \n", plan.duration));
    }
    out.push_str(&format!("**Created:** {}\n", short_date(&plan.created_date)));

    if !techniques.is_empty() {
        out.push_str("\n## Techniques\n\n");
        for technique in techniques {
            let name = technique.name.unwrap_or("Unknown technique");
            out.push_str(&format!("- {} (`{}`)\n", name, technique.id));
        }
    }

    push_list_markdown(&mut out, "Objectives", &plan.objectives);
    push_list_markdown(&mut out, "Materials", &plan.materials);
    push_section_markdown(&mut out, "Lesson Outline", &plan.lesson_outline);
    push_section_markdown(&mut out, "Teacher Actions", &plan.teacher_actions);
    push_section_markdown(&mut out, "Student Actions", &plan.student_actions);
    push_section_markdown(&mut out, "Assessment", &plan.assessment_method);
    push_section_markdown(&mut out, "Notes", &plan.notes);
    out
}

fn push_list_markdown(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n## {heading}\n\n"));
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, item));
    }
}

fn push_section_markdown(out: &mut String, heading: &str, body: &str) {
    if body.trim().is_empty() {
        return;
    }
    out.push_str(&format!("\n## {heading}\n\n{}\n", body.trim_end()));
}
