//! Reading and writing the pattern store.
//!
//! The store is a single JSON record overwritten wholesale on every run. A
//! missing file is replaced by an empty record; a file that exists but does
//! not parse is reported and left untouched.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::patterns::PatternConfig;

const FILE_DESCRIPTION: &str = "patterns";

fn get_reader(path: &str) -> Result<Option<File>> {
    match File::open(path) {
        Ok(reader) => Ok(Some(reader)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io_error(
            FILE_DESCRIPTION.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Loads the stored patterns, creating an empty store if there is none.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file is not valid JSON or does not match `{"patterns": {...}}`
/// - A missing file cannot be created
pub fn load_or_create(config_path: &str) -> Result<PatternConfig> {
    let Some(reader) = get_reader(config_path)? else {
        info!("No patterns file at `{config_path}`, creating an empty one");
        let config = PatternConfig::default();
        save(config_path, &config)?;
        return Ok(config);
    };

    let config: PatternConfig = serde_json::from_reader(BufReader::new(reader)).map_err(|e| {
        // A failed read (e.g. the path is a directory) is not a parse error
        if e.is_io() {
            Error::io_error(FILE_DESCRIPTION.to_string(), config_path.to_string(), e.into())
        } else {
            Error::json_error(
                "reading".to_string(),
                FILE_DESCRIPTION.to_string(),
                config_path.to_string(),
                e,
            )
        }
    })?;

    debug!(
        "Loaded {} pattern(s) from `{config_path}`",
        config.patterns.len()
    );

    Ok(config)
}

/// Overwrites the store at `config_path` with `config`.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the file or its directory cannot be written, or if
/// serialization fails.
pub fn save(config_path: &str, config: &PatternConfig) -> Result<()> {
    let io_error = |e: std::io::Error| {
        Error::io_error(FILE_DESCRIPTION.to_string(), config_path.to_string(), e)
    };

    if let Some(parent) = Path::new(config_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let mut writer = BufWriter::new(File::create(config_path).map_err(io_error)?);

    serde_json::to_writer_pretty(&mut writer, config).map_err(|e| {
        Error::json_error(
            "writing".to_string(),
            FILE_DESCRIPTION.to_string(),
            config_path.to_string(),
            e,
        )
    })?;
    writeln!(writer).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    debug!(
        "Saved {} pattern(s) to `{config_path}`",
        config.patterns.len()
    );

    Ok(())
}
