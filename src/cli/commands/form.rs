//! Lesson-plan form fields.
//!
//! `new` and `edit` take the same optional details; this module holds the
//! flag definitions and the presentation-level checks (required fields,
//! unknown technique ids).

use anyhow::{bail, Result};
use colored::Colorize;

use crate::catalog;

/// Optional lesson-plan details accepted by `new` and `edit`.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct PlanDetails {
    /// Grade or class level (e.g. "4")
    #[arg(long, value_name = "GRADE")]
    pub grade: Option<String>,

    /// Lesson duration (e.g. "45 minutes")
    #[arg(long, value_name = "DURATION")]
    pub duration: Option<String>,

    /// Learning objective (repeat for several)
    #[arg(long = "objective", value_name = "TEXT")]
    pub objectives: Vec<String>,

    /// Required material (repeat for several)
    #[arg(long = "material", value_name = "TEXT")]
    pub materials: Vec<String>,

    /// Lesson outline
    #[arg(long, value_name = "TEXT")]
    pub outline: Option<String>,

    /// What the teacher does during the lesson
    #[arg(long, value_name = "TEXT")]
    pub teacher_actions: Option<String>,

    /// What the students do during the lesson
    #[arg(long, value_name = "TEXT")]
    pub student_actions: Option<String>,

    /// How learning will be assessed
    #[arg(long, value_name = "TEXT")]
    pub assessment: Option<String>,

    /// Additional notes or reminders
    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,

    /// Technique id from the catalog (repeat for several)
    #[arg(long = "technique", value_name = "ID")]
    #[arg(long_help = "Id of a technique used in this lesson. Repeat the flag to\n\
        add several. Run 'teachmaster techniques' to list ids.")]
    pub techniques: Vec<String>,
}

/// Rejects a required field that is empty or whitespace-only.
pub fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{field} is required and cannot be blank");
    }
    Ok(())
}

/// Technique ids that are not in the catalog.
pub fn unknown_techniques(ids: &[String]) -> Vec<&str> {
    ids.iter()
        .map(String::as_str)
        .filter(|id| catalog::find(id).is_none())
        .collect()
}

/// Prints a warning for each technique id that is not in the catalog.
///
/// Unknown ids are kept; the plan simply shows them as unknown.
pub fn warn_unknown_techniques(ids: &[String]) {
    for id in unknown_techniques(ids) {
        tracing::debug!("Technique id not in catalog: {id}");
        eprintln!(
            "{} technique '{}' is not in the catalog",
            "Warning:".yellow(),
            id
        );
    }
}
