//! Errors surfaced by a uniqint run.
//!
//! Malformed lines, malformed tokens and out-of-range values are not
//! errors; they are dropped during scanning and only show up in the run
//! statistics.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UniqueIntError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Cannot derive an output file name from '{}'", .0.display())]
    InvalidInputPath(PathBuf),

    #[error("Failed to persist output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, UniqueIntError>;
