//! Open command - render a view by its route.
//!
//! Accepts the application's route paths so links such as
//! `/techniquedetail?id=jigsaw` can be opened directly.

use anyhow::{bail, Result};

use super::{dashboard, plans, technique, techniques};
use crate::cli::{Context, OutputFormat, Route};

/// Arguments for the open command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    teachmaster open /dashboard\n    \
    teachmaster open /techniques\n    \
    teachmaster open \"/techniquedetail?id=jigsaw\"\n    \
    teachmaster open /PMP/lessonplanner")]
pub struct Args {
    /// Route path of the view to open
    #[arg(value_name = "ROUTE")]
    pub route: String,
}

/// Executes the open command.
pub fn run(args: Args, ctx: &Context) -> Result<()> {
    let route: Route = args.route.parse()?;
    tracing::debug!("Opening route {route}");

    match route {
        Route::Dashboard => dashboard::run(dashboard::Args::default(), ctx),
        Route::Techniques => techniques::run(techniques::Args::default()),
        Route::TechniqueDetail { id: Some(id) } => technique::run(technique::Args {
            id,
            format: OutputFormat::Text,
        }),
        Route::TechniqueDetail { id: None } => {
            bail!("Technique not found. Run 'teachmaster techniques' to list available techniques.")
        }
        Route::LessonPlanner => plans::run(plans::Args::default(), ctx),
    }
}
