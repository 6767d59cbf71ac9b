//! Search and category filtering over the technique catalog.
//!
//! Filtering is a pure linear scan that keeps catalog order. It is cheap
//! enough to recompute on every request, so nothing is cached.

use std::fmt;
use std::str::FromStr;

use super::{Category, Technique, UnknownCategory};

/// Category selector: every category, or exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// The sentinel accepted for "no category restriction".
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_SENTINEL) {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_SENTINEL),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

/// A free-text query combined with a category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechniqueQuery {
    pub text: String,
    pub category: CategoryFilter,
}

impl TechniqueQuery {
    pub fn new(text: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// True when neither the text nor the category restricts anything.
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.category == CategoryFilter::All
    }

    /// Case-insensitive substring match on name or description, AND the
    /// category selector.
    pub fn matches(&self, technique: &Technique) -> bool {
        self.category.matches(technique.category) && matches_text(&self.text, technique)
    }
}

fn matches_text(query: &str, technique: &Technique) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    technique.name.to_lowercase().contains(&needle)
        || technique.description.to_lowercase().contains(&needle)
}

/// Returns the catalog entries matching `query`, in catalog order.
pub fn filter_techniques<'a>(catalog: &'a [Technique], query: &TechniqueQuery) -> Vec<&'a Technique> {
    catalog.iter().filter(|t| query.matches(t)).collect()
}
