use std::io::Write;

use crossterm::style::{style, Stylize};
use itertools::Itertools;
use xmv_core::error::{Error, Result};
use xmv_core::execution::RenamerOutput;
use xmv_core::patterns::Candidate;

use super::QUIT_OPTION;

/// Writes the numbered menu of candidates, the quit line and a blank line.
///
/// With `styled` set, the number and the pattern pair are highlighted for a terminal.
pub fn present_menu<W: Write + ?Sized>(
    output: &mut W,
    candidates: &[Candidate],
    styled: bool,
) -> Result<()> {
    for (index, candidate) in candidates.iter().enumerate() {
        let number = index + 1;
        let first_line = candidate.first_preview_line();

        let written = if styled {
            writeln!(
                output,
                "{}. {} {first_line}",
                style(number).bold(),
                style(&candidate.pair).cyan()
            )
        } else {
            writeln!(output, "{number}. {} {first_line}", candidate.pair)
        };
        written.map_err(Error::Stdio)?;
    }

    writeln!(output, "{QUIT_OPTION}. quit").map_err(Error::Stdio)?;
    writeln!(output).map_err(Error::Stdio)
}

/// Writes every preview line of the chosen candidate.
pub fn present_preview<W: Write + ?Sized>(output: &mut W, candidate: &Candidate) -> Result<()> {
    writeln!(output, "{}", candidate.preview_lines.iter().join("\n")).map_err(Error::Stdio)
}

/// Relays the real rename's error output, then its standard output.
pub fn present_rename_output<W: Write + ?Sized>(
    output: &mut W,
    rename_output: &RenamerOutput,
) -> Result<()> {
    writeln!(output, "{}", rename_output.stderr).map_err(Error::Stdio)?;
    writeln!(output, "{}", rename_output.stdout).map_err(Error::Stdio)?;
    output.flush().map_err(Error::Stdio)
}
