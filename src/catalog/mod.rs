//! Static catalog of teaching techniques.
//!
//! The catalog is compiled into the binary and never changes at runtime.
//! Lesson plans refer to techniques by `id` only; use [`find`] to resolve
//! such a reference when it is displayed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod data;
pub mod filter;

pub use filter::{filter_techniques, CategoryFilter, TechniqueQuery};

/// Pedagogical category of a technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ActiveLearning,
    Assessment,
    ClassroomManagement,
    Differentiation,
    Engagement,
    Collaboration,
    TechnologyIntegration,
    Questioning,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::ActiveLearning,
        Category::Assessment,
        Category::ClassroomManagement,
        Category::Differentiation,
        Category::Engagement,
        Category::Collaboration,
        Category::TechnologyIntegration,
        Category::Questioning,
    ];

    /// The snake_case identifier used in storage and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ActiveLearning => "active_learning",
            Category::Assessment => "assessment",
            Category::ClassroomManagement => "classroom_management",
            Category::Differentiation => "differentiation",
            Category::Engagement => "engagement",
            Category::Collaboration => "collaboration",
            Category::TechnologyIntegration => "technology_integration",
            Category::Questioning => "questioning",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ActiveLearning => "Active Learning",
            Category::Assessment => "Assessment",
            Category::ClassroomManagement => "Classroom Management",
            Category::Differentiation => "Differentiation",
            Category::Engagement => "Engagement",
            Category::Collaboration => "Collaboration",
            Category::TechnologyIntegration => "Technology Integration",
            Category::Questioning => "Questioning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A single teaching technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technique {
    /// Stable identifier (e.g. "think-pair-share")
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// Typical time the technique takes in class
    pub time_required: &'static str,
    /// Situations the technique suits best
    pub best_for: &'static str,
    pub benefits: &'static [&'static str],
    /// Ordered steps to run the technique
    pub implementation_steps: &'static [&'static str],
}

/// The full catalog in its canonical order.
pub fn techniques() -> &'static [Technique] {
    data::TECHNIQUES
}

/// Looks up a technique by id.
pub fn find(id: &str) -> Option<&'static Technique> {
    techniques().iter().find(|t| t.id == id)
}

/// The first `n` techniques of the catalog, as shown on the dashboard.
pub fn featured(n: usize) -> &'static [Technique] {
    let all = techniques();
    &all[..n.min(all.len())]
}
