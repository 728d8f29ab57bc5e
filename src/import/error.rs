use crate::collection::FolderError;
use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop an import before (or instead of) running the batch
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV file '{}' not found", .0.display())]
    InputFileMissing(PathBuf),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Folder(#[from] FolderError),
}
