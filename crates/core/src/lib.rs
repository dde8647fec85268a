//! xmv Core Library
//!
//! This crate provides the core functionality for xmv, an interactive front-end
//! over the `zmv` batch renamer. It stores rename pattern pairs between runs,
//! previews every stored pair with `zmv -n` and keeps the pairs that matched.
//!
//! # Key Features
//!
//! - **Pattern Store**: Load and save the `{"patterns": {...}}` JSON record
//! - **Renamer Invocation**: Run `zmv` through an interactive shell with explicit arguments
//! - **Dry-Run Evaluation**: Turn stored pattern pairs into previewed candidates
//! - **Error Handling**: Error types for every unrecoverable failure
//!
//! # Examples
//!
//! Loading the stored patterns and previewing them:
//!
//! ```no_run
//! use xmv_core::config::{get_config_path, get_shell_path};
//! use xmv_core::evaluation::evaluate;
//! use xmv_core::execution::ZmvRenamer;
//! use xmv_core::file_handling::load_or_create;
//!
//! let config_path = get_config_path(&None);
//! let patterns = load_or_create(&config_path)?;
//! let renamer = ZmvRenamer::new(get_shell_path(&None));
//! for candidate in evaluate(&patterns, &renamer)? {
//!     println!("{}", candidate.pair);
//! }
//! # Ok::<(), xmv_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod evaluation;
pub mod execution;
pub mod file_handling;
pub mod patterns;
