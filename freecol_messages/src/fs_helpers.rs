//! Filesystem helpers shared by the bundle and plural rule loaders.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};

use crate::{MessagesError, MessagesResult};

/// Opens a directory if it exists, returning `None` when the path is missing.
pub(crate) fn open_optional_dir(path: &Utf8Path) -> MessagesResult<Option<Dir>> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(Some(dir)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(MessagesError::file(path, err)),
    }
}

/// Reads `name` from `dir`, returning `None` when the file does not exist.
///
/// `path` is only used to label errors.
pub(crate) fn read_optional(
    dir: &Dir,
    name: &str,
    path: &Utf8Path,
) -> MessagesResult<Option<String>> {
    match dir.read_to_string(name) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(MessagesError::file(path, err)),
    }
}

/// Reads the UTF-8 file at `path` through its parent directory.
pub(crate) fn read_file(path: &Utf8Path) -> MessagesResult<String> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path.file_name().ok_or_else(|| {
        MessagesError::file(path, std::io::Error::other("path does not name a file"))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| MessagesError::file(path, err))?;
    dir.read_to_string(name).map_err(|err| MessagesError::file(path, err))
}
