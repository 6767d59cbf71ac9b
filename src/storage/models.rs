//! Core data models for TeachMaster
//!
//! These are the records persisted in the lesson-plan slot. The JSON shape
//! (snake_case field names, RFC 3339 `created_date`) is the storage format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-authored lesson plan.
///
/// Technique references in `techniques_used` are plain catalog ids. They are
/// looked up on demand and may point at techniques that no longer exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    /// Unique identifier within the collection (e.g. "lp_3f2a...")
    pub id: String,

    /// Lesson title
    #[serde(default)]
    pub title: String,

    /// Subject taught (e.g. "Mathematics")
    #[serde(default)]
    pub subject: String,

    /// Grade or class level, free text
    #[serde(default)]
    pub grade_level: String,

    /// Planned duration, free text (e.g. "45 minutes")
    #[serde(default)]
    pub duration: String,

    /// Learning objectives in the order the author entered them
    #[serde(default)]
    pub objectives: Vec<String>,

    /// Required materials
    #[serde(default)]
    pub materials: Vec<String>,

    #[serde(default)]
    pub lesson_outline: String,

    #[serde(default)]
    pub teacher_actions: String,

    #[serde(default)]
    pub student_actions: String,

    #[serde(default)]
    pub assessment_method: String,

    #[serde(default)]
    pub notes: String,

    /// Ids of catalog techniques used in this lesson
    #[serde(default)]
    pub techniques_used: Vec<String>,

    /// When the plan was created. Never changes after creation.
    pub created_date: DateTime<Utc>,
}

/// Everything needed to create a lesson plan.
///
/// The store assigns `id` and `created_date`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonPlanDraft {
    pub title: String,
    pub subject: String,
    pub grade_level: String,
    pub duration: String,
    pub objectives: Vec<String>,
    pub materials: Vec<String>,
    pub lesson_outline: String,
    pub teacher_actions: String,
    pub student_actions: String,
    pub assessment_method: String,
    pub notes: String,
    pub techniques_used: Vec<String>,
}

impl LessonPlanDraft {
    /// Turns the draft into a full record with the given identity.
    pub fn into_plan(self, id: String, created_date: DateTime<Utc>) -> LessonPlan {
        LessonPlan {
            id,
            title: self.title,
            subject: self.subject,
            grade_level: self.grade_level,
            duration: self.duration,
            objectives: strip_blank(self.objectives),
            materials: strip_blank(self.materials),
            lesson_outline: self.lesson_outline,
            teacher_actions: self.teacher_actions,
            student_actions: self.student_actions,
            assessment_method: self.assessment_method,
            notes: self.notes,
            techniques_used: dedup_ids(self.techniques_used),
            created_date,
        }
    }
}

/// A partial update to a lesson plan.
///
/// `None` keeps the existing value; `Some` replaces it. List fields are
/// replaced as a whole, never merged element by element. `id` and
/// `created_date` cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonPlanPatch {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub grade_level: Option<String>,
    pub duration: Option<String>,
    pub objectives: Option<Vec<String>>,
    pub materials: Option<Vec<String>>,
    pub lesson_outline: Option<String>,
    pub teacher_actions: Option<String>,
    pub student_actions: Option<String>,
    pub assessment_method: Option<String>,
    pub notes: Option<String>,
    pub techniques_used: Option<Vec<String>>,
}

impl LessonPlanPatch {
    /// Returns true if the patch would not change any field.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges this patch over `existing`. New values win, absent fields are
    /// preserved, identity fields always come from `existing`.
    pub fn apply(self, existing: &LessonPlan) -> LessonPlan {
        LessonPlan {
            id: existing.id.clone(),
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            subject: self.subject.unwrap_or_else(|| existing.subject.clone()),
            grade_level: self
                .grade_level
                .unwrap_or_else(|| existing.grade_level.clone()),
            duration: self.duration.unwrap_or_else(|| existing.duration.clone()),
            objectives: self
                .objectives
                .map(strip_blank)
                .unwrap_or_else(|| existing.objectives.clone()),
            materials: self
                .materials
                .map(strip_blank)
                .unwrap_or_else(|| existing.materials.clone()),
            lesson_outline: self
                .lesson_outline
                .unwrap_or_else(|| existing.lesson_outline.clone()),
            teacher_actions: self
                .teacher_actions
                .unwrap_or_else(|| existing.teacher_actions.clone()),
            student_actions: self
                .student_actions
                .unwrap_or_else(|| existing.student_actions.clone()),
            assessment_method: self
                .assessment_method
                .unwrap_or_else(|| existing.assessment_method.clone()),
            notes: self.notes.unwrap_or_else(|| existing.notes.clone()),
            techniques_used: self
                .techniques_used
                .map(dedup_ids)
                .unwrap_or_else(|| existing.techniques_used.clone()),
            created_date: existing.created_date,
        }
    }
}

/// Drops entries that are empty or whitespace-only, keeping order.
fn strip_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .filter(|item| !item.trim().is_empty())
        .collect()
}

/// Removes duplicate ids, keeping the first occurrence.
fn dedup_ids(ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter()
        .filter(|id| !id.trim().is_empty() && seen.insert(id.clone()))
        .collect()
}
