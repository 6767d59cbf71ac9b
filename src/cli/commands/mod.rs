//! CLI commands for TeachMaster.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Generate shell completion scripts.
pub mod completions;

/// Configuration viewing and management.
pub mod config;

/// Overview screen: counts, featured techniques, recent plans.
pub mod dashboard;

/// Delete a lesson plan.
pub mod delete;

/// Edit an existing lesson plan.
pub mod edit;

/// Lesson-plan form fields shared by `new` and `edit`.
pub mod form;

/// Create a lesson plan.
pub mod new;

/// Open a view by its route.
pub mod open;

/// Display one lesson plan in full.
pub mod plan;

/// List lesson plans.
pub mod plans;

/// Display one technique in full.
pub mod technique;

/// Browse and filter the technique catalog.
pub mod techniques;
