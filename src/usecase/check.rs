use crate::domain::error::ConvertError;
use crate::domain::format::OutputFormat;
use std::path::Path;

const INPUT_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Validates the paths of a run before anything is read, returning the output format.
///
/// Checks run in order: input exists, input is an HTML file, output is free,
/// output extension is supported.
pub fn check_paths(input: &Path, output: &Path) -> Result<OutputFormat, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    let is_html = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| INPUT_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)));
    if !input.is_file() || !is_html {
        return Err(ConvertError::InputWrongType(input.to_path_buf()));
    }

    if output.exists() {
        return Err(ConvertError::OutputAlreadyExists(output.to_path_buf()));
    }

    OutputFormat::from_path(output)
}
