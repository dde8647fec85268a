//! xmv CLI Library
//!
//! This crate provides the command-line interface for xmv, an interactive
//! front-end over the `zmv` batch renamer. It handles pattern registration,
//! the numbered menu of previewed patterns, confirmation and the one real
//! rename per run.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`registration`]: Storing the pattern pair given on the command line
//! - [`selection`]: Menu, menu answer and confirmation
//! - [`workflow`]: The run itself, ending in an [`workflow::Outcome`]
//!
//! # Examples
//!
//! ```bash
//! # Preview every stored pattern and choose one
//! xmv
//!
//! # Store a pattern first
//! xmv '(*).JPG' '$1.jpg'
//!
//! # Show the chosen preview only
//! xmv --dry-run
//! ```

pub mod cli_args;
pub mod registration;
pub mod selection;
pub mod workflow;
