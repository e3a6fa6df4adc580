//! Reading the prelude and example sources from disk.

use crate::config::PRELUDE_BANNER;
use crate::domain::{EntryError, PreludeError};
use std::fs;
use std::path::Path;

/// Read the shared prelude and prefix it with [`PRELUDE_BANNER`].
///
/// The returned text is what replaces a marker directive in an example.
pub fn load_prelude(path: &Path) -> Result<String, PreludeError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| PreludeError::Read { path: path.to_path_buf(), source })?;
    tracing::debug!("Loaded prelude from {} ({} bytes)", path.display(), raw.len());
    Ok(format!("{PRELUDE_BANNER}\n{}", raw.trim()))
}

/// Read one example source.
///
/// A missing file is reported as [`EntryError::NotFound`]; any other I/O or
/// decoding failure, including one while checking existence, as [`EntryError::Read`].
pub fn load_example(path: &Path) -> Result<String, EntryError> {
    let read_error = |source| EntryError::Read { path: path.to_path_buf(), source };
    if !path.try_exists().map_err(read_error)? {
        return Err(EntryError::NotFound { path: path.to_path_buf() });
    }
    fs::read_to_string(path).map_err(read_error)
}
