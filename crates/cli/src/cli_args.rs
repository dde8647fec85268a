//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap` crate.

use clap::Parser;

use crate::registration::{self, Registration};

/// Command-line arguments for the xmv CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use xmv_cli::cli_args::Args;
///
/// let args = Args::parse_from(["xmv", "(*).JPG", "$1.jpg"]);
/// assert_eq!(args.patterns.len(), 2);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the stored patterns JSON file.
    ///
    /// If not provided, defaults to `~/.config/xmv`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Shell used to run `zmv`. It is started interactively so `zmv` can be autoloaded.
    ///
    /// If not provided, the first `zsh` on `PATH` is used, else `/usr/bin/zsh`.
    #[arg(long)]
    pub shell: Option<String>,

    /// Print the chosen pattern's preview and exit without renaming.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Rename without asking for confirmation once a pattern is chosen.
    #[arg(long, short = 'f', action)]
    pub force: bool,

    /// An old pattern and a new pattern to store before running.
    ///
    /// Exactly two values register the pair; any other count is ignored.
    /// Patterns starting with `-` must follow `--`.
    ///
    /// # Examples
    /// ```bash
    /// xmv '(*).JPG' '$1.jpg'
    /// ```
    #[arg(trailing_var_arg = true)]
    pub patterns: Vec<String>,
}

impl Args {
    #[must_use]
    pub fn registration(&self) -> Registration {
        registration::determine(&self.patterns)
    }
}
