//! Terminal, user-facing failures of a conversion run.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("input file '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),

    #[error("input '{}' is not an HTML file", .0.display())]
    InputWrongType(PathBuf),

    #[error("output file '{}' already exists", .0.display())]
    OutputAlreadyExists(PathBuf),

    #[error("unsupported output format for '{}': expected a .json or .md extension", .0.display())]
    UnsupportedOutputFormat(PathBuf),

    /// The markup is not a recognizable bookmark export.
    #[error("unrecognized bookmark export: {0}")]
    Structure(String),
}
