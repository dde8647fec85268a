//! Configuration path utilities for xmv.
//!
//! This module provides functions for resolving the pattern store path and the
//! shell used to run `zmv`, expanding shell variables like `~` in both.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Default path for the stored rename patterns
const DEFAULT_CONFIG_PATH: &str = "~/.config/xmv";

/// Shell to run `zmv` with when none is given and none is found on `PATH`
pub const DEFAULT_SHELL: &str = "/usr/bin/zsh";

/// Executable name searched for on `PATH`
const SHELL_NAME: &str = "zsh";

/// Shell function that performs the renames
pub const RENAMER_FUNCTION: &str = "zmv";

/// Flag that puts the renamer in preview (no-op) mode
pub const PREVIEW_FLAG: &str = "-n";

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `config_path_arg` - Optional custom configuration file path
///
/// # Returns
///
/// The resolved absolute path to the configuration file
///
/// # Examples
///
/// ```
/// use xmv_core::config::get_config_path;
///
/// // Use default path
/// let default_path = get_config_path(&None);
///
/// // Use custom path
/// let custom_path = get_config_path(&Some("/path/to/patterns.json".to_string()));
/// assert_eq!(custom_path, "/path/to/patterns.json");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Resolves the shell binary used to invoke the renamer.
///
/// Without a shell argument, the first `zsh` on `PATH` is used, falling back
/// to [`DEFAULT_SHELL`].
pub fn get_shell_path(shell_arg: &Option<String>) -> String {
    resolve_shell_path(shell_arg, env::var_os("PATH"))
}

fn resolve_shell_path(shell_arg: &Option<String>, path_var: Option<OsString>) -> String {
    match shell_arg {
        Some(shell) => shellexpand::tilde(shell).to_string(),
        None => find_on_path(SHELL_NAME, path_var)
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_SHELL.to_string()),
    }
}

/// Finds the first file called `name` in the directories of `path_var`.
fn find_on_path(name: &str, path_var: Option<OsString>) -> Option<PathBuf> {
    path_var.and_then(|paths| {
        env::split_paths(&paths).find_map(|dir| {
            let path = dir.join(name);
            path.is_file().then_some(path)
        })
    })
}
