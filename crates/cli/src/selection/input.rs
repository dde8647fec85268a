use std::io::{BufRead, Write};

use xmv_core::error::{Error, Result};

use super::types::{MenuChoice, RunChoice};

const MENU_PROMPT: &str = "choose option: ";
const CONFIRM_PROMPT: &str = "proceed? y/n ";

/// Prints `prompt` and reads one answer with its line terminator removed.
///
/// Returns `None` at end of input.
fn read_answer<I: BufRead + ?Sized, W: Write + ?Sized>(
    input: &mut I,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}").map_err(Error::Stdio)?;
    output.flush().map_err(Error::Stdio)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(Error::Stdio)?;
    if read == 0 {
        return Ok(None);
    }

    let answer = line.strip_suffix('\n').unwrap_or(&line);
    let answer = answer.strip_suffix('\r').unwrap_or(answer);
    Ok(Some(answer.to_string()))
}

/// Asks which of `candidate_count` menu entries to run. End of input quits.
pub fn prompt_for_menu_choice<I: BufRead + ?Sized, W: Write + ?Sized>(
    input: &mut I,
    output: &mut W,
    candidate_count: usize,
) -> Result<MenuChoice> {
    Ok(match read_answer(input, output, MENU_PROMPT)? {
        Some(answer) => MenuChoice::parse(&answer, candidate_count),
        None => MenuChoice::Quit,
    })
}

/// Confirms with the user whether the rename should run. End of input declines.
pub fn confirm_rename<I: BufRead + ?Sized, W: Write + ?Sized>(
    input: &mut I,
    output: &mut W,
) -> Result<RunChoice> {
    Ok(match read_answer(input, output, CONFIRM_PROMPT)? {
        Some(answer) => RunChoice::parse(&answer),
        None => RunChoice::No,
    })
}
