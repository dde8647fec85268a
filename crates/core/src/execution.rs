use std::io::ErrorKind;
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::config::{PREVIEW_FLAG, RENAMER_FUNCTION};
use crate::error::{Error, Result};
use crate::patterns::PatternPair;

/// Exit status reported for a renamer killed by a signal.
const SIGNALLED_STATUS: i32 = 1;

/// Captured result of one renamer invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenamerOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl RenamerOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Runs a batch rename, either as a preview or for real.
pub trait Renamer {
    /// Reports the renames `pair` would perform without touching any file.
    ///
    /// # Errors
    ///
    /// Returns an error if the renamer could not be started at all. A renamer
    /// that ran and failed is reported through [`RenamerOutput::status`].
    fn preview(&self, pair: &PatternPair) -> Result<RenamerOutput>;

    /// Performs the renames described by `pair`.
    ///
    /// # Errors
    ///
    /// Same as [`Renamer::preview`].
    fn rename(&self, pair: &PatternPair) -> Result<RenamerOutput>;
}

/// Invokes `zmv` inside an interactive shell so the user's rc files autoload it.
#[derive(Debug, Clone)]
pub struct ZmvRenamer {
    shell: String,
}

impl ZmvRenamer {
    pub fn new(shell: String) -> Self {
        Self { shell }
    }

    /// Builds `<shell> -i -c 'zmv [-n] -- "$1" "$2"' xmv <old> <new>`.
    ///
    /// The patterns reach `zmv` as positional parameters, never as script text.
    pub fn build_command(&self, pair: &PatternPair, preview: bool) -> Command {
        let flag = if preview {
            format!(" {PREVIEW_FLAG}")
        } else {
            String::new()
        };
        let script = format!("{RENAMER_FUNCTION}{flag} -- \"$1\" \"$2\"");

        let mut command = Command::new(&self.shell);
        // `-i` makes the shell read ~/.zshrc, where zmv is usually autoloaded
        command.args([
            "-i",
            "-c",
            script.as_str(),
            "xmv",
            pair.old_pattern.as_str(),
            pair.new_pattern.as_str(),
        ]);
        command
    }

    fn run(&self, pair: &PatternPair, preview: bool) -> Result<RenamerOutput> {
        let command = self.build_command(pair, preview);
        run_captured(command).map_err(|e| match e {
            Error::SubProcess(io) if io.kind() == ErrorKind::NotFound => Error::ShellNotFound {
                path: self.shell.clone(),
            },
            other => other,
        })
    }
}

impl Renamer for ZmvRenamer {
    fn preview(&self, pair: &PatternPair) -> Result<RenamerOutput> {
        self.run(pair, true)
    }

    fn rename(&self, pair: &PatternPair) -> Result<RenamerOutput> {
        info!("Renaming with {pair}");
        self.run(pair, false)
    }
}

/// Runs `command` to completion, capturing its output streams and exit status.
///
/// Standard input is inherited so an interactive shell can still reach the terminal.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned or waited on.
pub fn run_captured(mut command: Command) -> Result<RenamerOutput> {
    let output = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    let status = output.status.code().unwrap_or(SIGNALLED_STATUS);
    debug!("{:?} exited with status {status}", command.get_program());

    Ok(RenamerOutput {
        status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn command_args(command: &Command) -> Vec<&OsStr> {
        command.get_args().collect()
    }

    #[test]
    fn test_preview_command_passes_patterns_as_arguments() {
        let renamer = ZmvRenamer::new("/usr/bin/zsh".to_string());
        let pair = PatternPair::new("it's (*).txt", "$(rm -rf ~)$1.bak");

        let command = renamer.build_command(&pair, true);

        assert_eq!(command.get_program(), "/usr/bin/zsh");
        assert_eq!(
            command_args(&command),
            vec![
                "-i",
                "-c",
                "zmv -n -- \"$1\" \"$2\"",
                "xmv",
                "it's (*).txt",
                "$(rm -rf ~)$1.bak",
            ]
        );
    }

    #[test]
    fn test_rename_command_has_no_preview_flag() {
        let renamer = ZmvRenamer::new("/bin/zsh".to_string());
        let pair = PatternPair::new("*.txt", "*.bak");

        let command = renamer.build_command(&pair, false);

        assert_eq!(
            command_args(&command),
            vec!["-i", "-c", "zmv -- \"$1\" \"$2\"", "xmv", "*.txt", "*.bak"]
        );
    }

    #[test]
    fn test_run_captured_collects_streams_and_status() {
        let mut command = Command::new("sh");
        command.args(["-c", "printf 'a.txt -> a.bak\\n'; printf 'denied' >&2; exit 2"]);

        let output = run_captured(command).unwrap();

        assert_eq!(output.status, 2);
        assert!(!output.success());
        assert_eq!(output.stdout, "a.txt -> a.bak\n");
        assert_eq!(output.stderr, "denied");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captured_signalled_process_reports_failure() {
        let mut command = Command::new("sh");
        command.args(["-c", "kill -9 $$"]);

        let output = run_captured(command).unwrap();

        assert_eq!(output.status, SIGNALLED_STATUS);
        assert!(!output.success());
    }

    #[test]
    fn test_missing_shell_is_reported() {
        let renamer = ZmvRenamer::new("/this/shell/does/not/exist".to_string());
        let result = renamer.preview(&PatternPair::new("a", "b"));

        assert!(matches!(result, Err(Error::ShellNotFound { .. })));
    }
}
