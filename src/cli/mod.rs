//! Command-line interface for TeachMaster.
//!
//! The CLI is the presentation layer: each command renders one screen
//! (dashboard, technique catalog, technique detail, planner) or performs
//! one planner action against the lesson-plan store.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::config::Config;
use crate::planner::{default_seed, LessonPlanStore};
use crate::storage::Database;

/// Individual CLI command implementations.
pub mod commands;

/// Output format selection shared by all commands.
pub mod format;

/// In-application route parsing.
pub mod route;

pub use format::OutputFormat;
pub use route::Route;

/// Settings resolved once per invocation and shared by commands.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub db_path: PathBuf,
}

impl Context {
    /// Resolves configuration. `db_override` (the global `--db` flag) takes
    /// precedence over `database_path` from the config file.
    pub fn load(db_override: Option<PathBuf>) -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config, db_override)
    }

    pub fn with_config(config: Config, db_override: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_override {
            Some(path) => path,
            None => config.database_path()?,
        };
        Ok(Self { config, db_path })
    }

    /// Opens the lesson-plan store on the configured database.
    pub fn open_store(&self) -> Result<LessonPlanStore<Database>> {
        let db = Database::open(&self.db_path)
            .with_context(|| format!("Failed to open database at {}", self.db_path.display()))?;
        let seed = if self.config.seed_example_plans {
            default_seed()
        } else {
            Vec::new()
        };
        let store = LessonPlanStore::open_with_seed(db, seed)?;
        Ok(store)
    }
}
