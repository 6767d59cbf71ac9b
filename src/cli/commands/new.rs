//! New command - create a lesson plan.
//!
//! Builds a lesson plan from command-line flags and adds it to the top
//! of the planner.

use anyhow::Result;
use colored::Colorize;

use super::form::{self, PlanDetails};
use crate::cli::{Context, OutputFormat};
use crate::storage::LessonPlanDraft;

/// Arguments for the new command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    teachmaster new --title \"Intro to Fractions\" --subject Math\n    \
    teachmaster new --title Weather --subject Science --grade 3 \\\n        \
        --objective \"Name cloud types\" --technique gallery-walk")]
pub struct Args {
    /// Lesson title
    #[arg(long, value_name = "TITLE")]
    pub title: String,

    /// Subject taught
    #[arg(long, value_name = "SUBJECT")]
    pub subject: String,

    #[command(flatten)]
    pub details: PlanDetails,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Args {
    /// The draft this invocation describes.
    pub fn to_draft(&self) -> LessonPlanDraft {
        let d = &self.details;
        LessonPlanDraft {
            title: self.title.trim().to_string(),
            subject: self.subject.trim().to_string(),
            grade_level: d.grade.clone().unwrap_or_default(),
            duration: d.duration.clone().unwrap_or_default(),
            objectives: d.objectives.clone(),
            materials: d.materials.clone(),
            lesson_outline: d.outline.clone().unwrap_or_default(),
            teacher_actions: d.teacher_actions.clone().unwrap_or_default(),
            student_actions: d.student_actions.clone().unwrap_or_default(),
            assessment_method: d.assessment.clone().unwrap_or_default(),
            notes: d.notes.clone().unwrap_or_default(),
            techniques_used: d.techniques.clone(),
        }
    }
}

/// Executes the new command.
pub fn run(args: Args, ctx: &Context) -> Result<()> {
    form::require("Title", &args.title)?;
    form::require("Subject", &args.subject)?;
    form::warn_unknown_techniques(&args.details.techniques);

    let mut store = ctx.open_store()?;
    let plan = store.create(args.to_draft())?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        OutputFormat::Text | OutputFormat::Markdown => {
            println!(
                "{} lesson plan {} ({})",
                "Created".green(),
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

    #[test]
    fn test_to_draft_maps_every_flag() {
        let args = Args {
            title: "  Weather ".to_string(),
            subject: "Science".to_string(),
            details: PlanDetails {
                grade: Some("3".to_string()),
                duration: Some("40 minutes".to_string()),
                objectives: vec!["Name clouds".to_string()],
                materials: vec!["Photos".to_string()],
                outline: Some("Look, sort, explain".to_string()),
                teacher_actions: Some("Shows photos".to_string()),
                student_actions: Some("Sort photos".to_string()),
                assessment: Some("Quiz".to_string()),
                notes: Some("Check projector".to_string()),
                techniques: vec!["gallery-walk".to_string()],
            },
            format: OutputFormat::Text,
        };

        let draft = args.to_draft();
        assert_eq!(draft.title, "Weather");
        assert_eq!(draft.grade_level, "3");
        assert_eq!(draft.duration, "40 minutes");
        assert_eq!(draft.objectives, vec!["Name clouds".to_string()]);
        assert_eq!(draft.materials, vec!["Photos".to_string()]);
        assert_eq!(draft.lesson_outline, "Look, sort, explain");
        assert_eq!(draft.teacher_actions, "Shows photos");
        assert_eq!(draft.student_actions, "Sort photos");
        assert_eq!(draft.assessment_method, "Quiz");
        assert_eq!(draft.notes, "Check projector");
        assert_eq!(draft.techniques_used, vec!["gallery-walk".to_string()]);
    }
}
