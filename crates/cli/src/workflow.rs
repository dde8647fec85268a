//! The single pass from stored patterns to at most one real rename.
//!
//! Every stage hands its result to the next one and none of them exits the
//! process; the final [`Outcome`] decides the exit code.

use std::io::{BufRead, Write};

use log::{debug, info};
use xmv_core::error::Result;
use xmv_core::evaluation::evaluate;
use xmv_core::execution::Renamer;
use xmv_core::file_handling;

use crate::cli_args::Args;
use crate::registration::{self, Registration};
use crate::selection::{self, MenuChoice, RunChoice};

/// Process exit code for a menu answer that picks no candidate
const INVALID_SELECTION_EXIT_CODE: u8 = 1;

/// Exit code used when the renamer's own status does not fit a process exit code
const UNREPRESENTABLE_EXIT_CODE: u8 = 1;

/// Everything one run needs besides the renamer and the terminal.
#[derive(Debug, Clone)]
pub struct Session {
    pub config_path: String,
    pub registration: Registration,
    pub dry_run: bool,
    pub force: bool,
    /// Highlight the menu for a terminal
    pub styled: bool,
}

impl Session {
    #[must_use]
    pub fn from_args(args: &Args, config_path: String, styled: bool) -> Self {
        Self {
            config_path,
            registration: args.registration(),
            dry_run: args.dry_run,
            force: args.force,
            styled,
        }
    }
}

/// How a run ended.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Outcome {
    /// Quit at the menu
    Quit,
    /// The menu answer was not a listed number
    InvalidSelection,
    /// The rename was not confirmed
    Declined,
    /// The preview was shown and `--dry-run` stopped the run
    DryRun,
    /// The rename ran and exited with this status
    Renamed(i32),
}

impl Outcome {
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Quit | Outcome::Declined | Outcome::DryRun => 0,
            Outcome::InvalidSelection => INVALID_SELECTION_EXIT_CODE,
            Outcome::Renamed(status) => {
                u8::try_from(*status).unwrap_or(UNREPRESENTABLE_EXIT_CODE)
            }
        }
    }
}

/// Runs load, registration, preview, menu and confirmation once.
///
/// The pattern store is written back after the previews, before the menu, even
/// when the previews could not be run.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written, the renamer cannot
/// be started, or the terminal cannot be read or written.
pub fn run<R, I, W>(
    session: &Session,
    renamer: &R,
    input: &mut I,
    output: &mut W,
) -> Result<Outcome>
where
    R: Renamer + ?Sized,
    I: BufRead + ?Sized,
    W: Write + ?Sized,
{
    debug!("Config path: `{}`", session.config_path);
    let mut config = file_handling::load_or_create(&session.config_path)?;

    registration::apply(&mut config, &session.registration);

    let evaluated = evaluate(&config, renamer);
    file_handling::save(&session.config_path, &config)?;
    let candidates = evaluated?;
    debug!(
        "{} of {} pattern(s) matched",
        candidates.len(),
        config.patterns.len()
    );

    selection::present_menu(output, &candidates, session.styled)?;

    let index = match selection::prompt_for_menu_choice(input, output, candidates.len())? {
        MenuChoice::Index(index) => index,
        MenuChoice::Quit => return Ok(Outcome::Quit),
        MenuChoice::Invalid => return Ok(Outcome::InvalidSelection),
    };
    let chosen = &candidates[index];
    info!("Chose {}", chosen.pair);

    selection::present_preview(output, chosen)?;

    if session.dry_run {
        info!("Dry run is specified, exiting without renaming.");
        return Ok(Outcome::DryRun);
    }

    if !session.force && selection::confirm_rename(input, output)? == RunChoice::No {
        return Ok(Outcome::Declined);
    }

    let rename_output = renamer.rename(&chosen.pair)?;
    info!("Rename exited with status {}", rename_output.status);
    selection::present_rename_output(output, &rename_output)?;

    Ok(Outcome::Renamed(rename_output.status))
}
