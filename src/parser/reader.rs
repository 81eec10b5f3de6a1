//! Source file loading.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read the source file into an ordered sequence of lines.
///
/// The whole file is loaded at once; link lists are expected to be
/// small. Fails with [`Error::NotFound`] before any read is attempted
/// if the path does not resolve to an existing file.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text.lines().map(str::to_owned).collect())
}
