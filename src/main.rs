use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teachmaster_cli::cli::{commands, Context};

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "teachmaster")]
#[command(version)]
#[command(about = "Browse teaching techniques and plan lessons")]
#[command(long_about = "TeachMaster is a catalog of proven teaching techniques and a\n\
    planner for your own lesson plans.\n\n\
    Techniques are built in and can be searched and filtered by category.\n\
    Lesson plans are stored locally in ~/.teachmaster/teachmaster.db.")]
#[command(after_help = "EXAMPLES:\n    \
    teachmaster                                Show the dashboard\n    \
    teachmaster techniques --search pair       Search techniques\n    \
    teachmaster technique exit-ticket          View a technique\n    \
    teachmaster new --title Fractions --subject Math\n    \
    teachmaster plans                          List lesson plans\n    \
    teachmaster edit lp_3f2a --duration \"45 minutes\"\n\n\
    For more information about a command, run 'teachmaster <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this database file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show counts, featured techniques, and recent lesson plans
    Dashboard(commands::dashboard::Args),

    /// Browse, search, and filter teaching techniques
    #[command(long_about = "Lists techniques from the built-in catalog. --search matches\n\
        names and descriptions case-insensitively; --category restricts the\n\
        list to one category. Results keep catalog order.")]
    Techniques(commands::techniques::Args),

    /// Show a technique's overview, benefits, and steps
    Technique(commands::technique::Args),

    /// List lesson plans, newest first
    Plans(commands::plans::Args),

    /// Show a lesson plan in full
    Plan(commands::plan::Args),

    /// Create a lesson plan
    #[command(long_about = "Creates a lesson plan and puts it at the top of the planner.\n\
        Title and subject are required. Blank objectives and materials are\n\
        dropped. Technique ids not in the catalog are kept with a warning.")]
    New(commands::new::Args),

    /// Change fields of an existing lesson plan
    #[command(long_about = "Updates only the fields given as flags. List flags such as\n\
        --objective replace the whole list. The plan's ID and creation date\n\
        never change.")]
    Edit(commands::edit::Args),

    /// Permanently delete a lesson plan
    Delete(commands::delete::Args),

    /// Open a view by route, e.g. /techniquedetail?id=jigsaw
    Open(commands::open::Args),

    /// View and manage configuration settings
    #[command(long_about = "Provides subcommands to show, get, and set configuration values.\n\
        Configuration is stored in ~/.teachmaster/config.yaml.")]
    Config(commands::config::Args),

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "teachmaster_cli=debug"
    } else {
        "teachmaster_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    if let Some(Commands::Completions(args)) = &cli.command {
        commands::completions::generate_completions(&mut Cli::command(), args.shell);
        return Ok(());
    }

    let ctx = Context::load(cli.db)?;

    match cli.command {
        None => commands::dashboard::run(commands::dashboard::Args::default(), &ctx),
        Some(Commands::Dashboard(args)) => commands::dashboard::run(args, &ctx),
        Some(Commands::Techniques(args)) => commands::techniques::run(args),
        Some(Commands::Technique(args)) => commands::technique::run(args),
        Some(Commands::Plans(args)) => commands::plans::run(args, &ctx),
        Some(Commands::Plan(args)) => commands::plan::run(args, &ctx),
        Some(Commands::New(args)) => commands::new::run(args, &ctx),
        Some(Commands::Edit(args)) => commands::edit::run(args, &ctx),
        Some(Commands::Delete(args)) => commands::delete::run(args, &ctx),
        Some(Commands::Open(args)) => commands::open::run(args, &ctx),
        Some(Commands::Config(args)) => commands::config::run(args, &ctx),
        Some(Commands::Completions(_)) => Ok(()),
    }
}
