use crate::utils::error::{LookupError, Result};
use std::fs;
use std::path::Path;

/// Reads the domain list, one entry per line, in file order. Blank lines are
/// kept: they still become counted invalid-input rows downstream. A missing
/// or unreadable file is fatal before any domain is processed.
pub fn read_domain_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LookupError::UnreadableInput {
        path: path.display().to_string(),
        source,
    })?;

    Ok(content.lines().map(str::to_string).collect())
}
