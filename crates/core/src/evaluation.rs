//! Dry-run evaluation of the stored patterns.
//!
//! Every stored pair is previewed once, in store order. Pairs whose preview
//! exits non-zero are left out of this run's candidates but stay stored.

use log::debug;

use crate::error::Result;
use crate::execution::Renamer;
use crate::patterns::{Candidate, PatternConfig};

/// Previews every stored pattern and keeps the ones that succeeded.
///
/// The preview's standard error is discarded.
///
/// # Errors
///
/// Returns an error if the renamer cannot be started; a renamer that starts
/// and fails only removes that pattern from the result.
pub fn evaluate<R: Renamer + ?Sized>(
    config: &PatternConfig,
    renamer: &R,
) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for pair in config.pairs() {
        let output = renamer.preview(&pair)?;

        if !output.success() {
            debug!("Preview of {pair} exited with {}, skipping", output.status);
            continue;
        }

        debug!("Preview of {pair} succeeded");
        candidates.push(Candidate::from_preview(pair, &output.stdout));
    }

    Ok(candidates)
}
