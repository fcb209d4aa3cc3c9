use std::path::PathBuf;
use thiserror::Error;

use crate::flags::template::TemplateError;

/// Errors that can occur while extracting compiler flags.
#[derive(Debug, Error)]
pub enum FlagsError {
    /// Base directory does not exist or is not a directory.
    #[error("Not a directory: {0}")]
    InvalidBaseDir(PathBuf),
    /// An input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Compilation database is not valid JSON of the expected shape.
    #[error("Malformed compilation database {path}: {source}")]
    MalformedDatabase {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A database entry has neither `command` nor `arguments`.
    #[error("Compilation database entry {0} has no command")]
    MissingCommand(usize),
    /// Template could not be rendered.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
    /// A path could not be rendered as UTF-8.
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
    /// Reading the overwrite confirmation failed.
    #[error("Failed to read confirmation: {0}")]
    Prompt(std::io::Error),
    /// Atomic write of the destination failed.
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
