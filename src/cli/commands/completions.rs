//! Completions command - generate shell completion scripts.
//!
//! Generates shell completion scripts that enable tab-completion of
//! TeachMaster commands and options.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    teachmaster completions bash > ~/.local/share/bash-completion/completions/teachmaster\n    \
    teachmaster completions zsh > ~/.zfunc/_teachmaster\n    \
    teachmaster completions fish > ~/.config/fish/completions/teachmaster.fish\n\n\
INSTALLATION:\n    \
    Bash:       Save to ~/.local/share/bash-completion/completions/teachmaster\n    \
    Zsh:        Save to a directory in your $fpath (e.g., ~/.zfunc/_teachmaster)\n              \
    and add 'autoload -Uz compinit && compinit' to ~/.zshrc\n    \
    Fish:       Save to ~/.config/fish/completions/teachmaster.fish\n    \
    PowerShell: Add output to your $PROFILE")]
pub struct Args {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Generates completions using a provided clap Command.
///
/// Called from main.rs, which owns the top-level Cli definition.
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    generate(shell, cmd, "teachmaster", &mut io::stdout());
}
