//! Artifact output.

use std::{io::Write, path::Path};

use log::info;
use tempfile::NamedTempFile;

use crate::PaddockError;

/// Write `bytes` to `path` in a single step.
///
/// The content goes to a temporary file in the destination directory, which
/// then replaces `path`. Readers see either the previous file or the complete
/// new one.
///
/// # Errors
///
/// Returns [`PaddockError::Io`] when the directory is not writable or the
/// file cannot be replaced.
pub fn write_artifact(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), PaddockError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    file.persist(path).map_err(|err| PaddockError::Io(err.error))?;

    info!(path:? = path, bytes = bytes.len(); "Artifact written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_writes_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("circuito.kml");

        write_artifact(&path, b"<kml/>").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"<kml/>");
    }

    #[test]
    fn test_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("altimetria.svg");
        fs::write(&path, "old content that is longer").unwrap();

        write_artifact(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("InfoCircuito.html");

        let err = write_artifact(&path, b"x").unwrap_err();

        assert!(matches!(err, PaddockError::Io(_)));
        assert!(!path.exists());
    }
}
