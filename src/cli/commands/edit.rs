//! Edit command - update an existing lesson plan.
//!
//! Only the flags given on the command line change; every other field of
//! the plan keeps its current value.

use anyhow::{bail, Result};
use colored::Colorize;

use super::form::{self, PlanDetails};
use crate::cli::{Context, OutputFormat};
use crate::storage::LessonPlanPatch;

/// Arguments for the edit command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    teachmaster edit lp_3f2a --title \"Equivalent Fractions\"\n    \
    teachmaster edit lp_3f2a --objective \"Compare\" --objective \"Order\"\n    \
    teachmaster edit lp_3f2a --clear-techniques")]
pub struct Args {
    /// Lesson plan ID or unique prefix
    #[arg(value_name = "PLAN")]
    pub plan: String,

    /// New lesson title
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// New subject
    #[arg(long, value_name = "SUBJECT")]
    pub subject: Option<String>,

    #[command(flatten)]
    pub details: PlanDetails,

    /// Remove all objectives
    #[arg(long, conflicts_with = "objectives")]
    pub clear_objectives: bool,

    /// Remove all materials
    #[arg(long, conflicts_with = "materials")]
    pub clear_materials: bool,

    /// Remove all technique references
    #[arg(long, conflicts_with = "techniques")]
    pub clear_techniques: bool,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Args {
    /// The patch this invocation describes. List flags replace the whole
    /// list; `--clear-*` sets it empty.
    pub fn to_patch(&self) -> LessonPlanPatch {
        let d = &self.details;
        LessonPlanPatch {
            title: self.title.as_ref().map(|t| t.trim().to_string()),
            subject: self.subject.as_ref().map(|s| s.trim().to_string()),
            grade_level: d.grade.clone(),
            duration: d.duration.clone(),
            objectives: list_patch(&d.objectives, self.clear_objectives),
            materials: list_patch(&d.materials, self.clear_materials),
            lesson_outline: d.outline.clone(),
            teacher_actions: d.teacher_actions.clone(),
            student_actions: d.student_actions.clone(),
            assessment_method: d.assessment.clone(),
            notes: d.notes.clone(),
            techniques_used: list_patch(&d.techniques, self.clear_techniques),
        }
    }
}

fn list_patch(values: &[String], clear: bool) -> Option<Vec<String>> {
    if clear {
        Some(Vec::new())
    } else if values.is_empty() {
        None
    } else {
        Some(values.to_vec())
    }
}

/// Executes the edit command.
pub fn run(args: Args, ctx: &Context) -> Result<()> {
    if let Some(title) = &args.title {
        form::require("Title", title)?;
    }
    if let Some(subject) = &args.subject {
        form::require("Subject", subject)?;
    }

    let patch = args.to_patch();
    if patch.is_empty() {
        bail!("Nothing to change. Pass at least one field flag, see 'teachmaster edit --help'.");
    }
    form::warn_unknown_techniques(&args.details.techniques);

    let mut store = ctx.open_store()?;
    let id = store.resolve(&args.plan)?.id.clone();

    let Some(plan) = store.update(&id, patch)? else {
        bail!("No lesson plan found matching '{}'", args.plan);
    };

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        OutputFormat::Text | OutputFormat::Markdown => {
            println!(
                "{} lesson plan {} ({})",
                "Updated".green(),
                plan.id.cyan(),
                plan.title.bold()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(plan: &str) -> Args {
        Args {
            plan: plan.to_string(),
            title: None,
            subject: None,
            details: PlanDetails::default(),
            clear_objectives: false,
            clear_materials: false,
            clear_techniques: false,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn test_no_flags_is_empty_patch() {
        assert!(args("lp_1").to_patch().is_empty());
    }

    #[test]
    fn test_only_given_fields_are_patched() {
        let mut a = args("lp_1");
        a.title = Some(" New title ".to_string());
        a.details.duration = Some("30 minutes".to_string());

        let patch = a.to_patch();
        assert_eq!(patch.title.as_deref(), Some("New title"));
        assert_eq!(patch.duration.as_deref(), Some("30 minutes"));
        assert!(patch.subject.is_none());
        assert!(patch.objectives.is_none());
        assert!(patch.techniques_used.is_none());
    }

    #[test]
    fn test_list_flags() {
        let mut a = args("lp_1");
        a.details.objectives = vec!["One".to_string(), "Two".to_string()];
        a.clear_techniques = true;

        let patch = a.to_patch();
        assert_eq!(
            patch.objectives,
            Some(vec!["One".to_string(), "Two".to_string()])
        );
        assert_eq!(patch.techniques_used, Some(Vec::new()));
        assert!(patch.materials.is_none());
    }
}
