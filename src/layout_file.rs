//! [`LayoutStore`] backed by a plain file on disk.
//!
//! Hyprland `source`s this file from its main config, so its content is
//! exactly the compositor's monitor-directive syntax.  The file is always
//! replaced whole.

use crate::traits::LayoutStore;
use log::debug;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Result of [`write_if_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The stored content already matched; nothing was written.
    Unchanged,
    /// The content differed (or was absent) and has been replaced.
    Changed,
}

/// Store `desired` unless the store already holds exactly that text.
///
/// This comparison is what keeps a burst of hotplug events from turning
/// into a burst of compositor reloads.
pub fn write_if_changed<S: LayoutStore>(store: &S, desired: &str) -> Result<WriteOutcome, S::Error> {
    if store.read()?.as_deref() == Some(desired) {
        return Ok(WriteOutcome::Unchanged);
    }
    store.write(desired)?;
    Ok(WriteOutcome::Changed)
}

/// The monitor layout file.
pub struct LayoutFile {
    path: PathBuf,
}

/// Errors from reading or writing the layout file.
#[derive(Debug, thiserror::Error)]
pub enum LayoutFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LayoutFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LayoutStore for LayoutFile {
    type Error = LayoutFileError;

    fn read(&self) -> Result<Option<String>, Self::Error> {
        match std::fs::read(&self.path) {
            // Compared byte-for-byte against UTF-8 profile text, so a file
            // with invalid bytes simply never matches.
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet", self.path.display());
                Ok(None)
            }
            Err(source) => Err(LayoutFileError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&self, contents: &str) -> Result<(), Self::Error> {
        let to_err = |source| LayoutFileError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(to_err)?;
        }
        std::fs::write(&self.path, contents).map_err(to_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Monotonic counter to generate unique file paths per test.
    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    /// Helper: a fresh directory path under the system temp dir.
    fn tmp_dir() -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir().join(format!("hyprlayout-test-{}-{}", std::process::id(), id))
    }

    #[test]
    fn missing_file_reads_as_none() {
        let file = LayoutFile::new(tmp_dir().join("monitor-layout.conf"));
        assert!(file.read().unwrap().is_none());
    }

    #[test]
    fn first_write_creates_file_with_exact_text() {
        let dir = tmp_dir();
        let path = dir.join("hypr/monitor-layout.conf");
        let file = LayoutFile::new(&path);

        let outcome = write_if_changed(&file, "monitor = eDP-1,preferred,auto,1\n").unwrap();
        assert_eq!(outcome, WriteOutcome::Changed);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "monitor = eDP-1,preferred,auto,1\n"
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn second_identical_write_is_unchanged() {
        let dir = tmp_dir();
        let file = LayoutFile::new(dir.join("monitor-layout.conf"));

        assert_eq!(write_if_changed(&file, "a\n").unwrap(), WriteOutcome::Changed);
        assert_eq!(write_if_changed(&file, "a\n").unwrap(), WriteOutcome::Unchanged);
        assert_eq!(file.read().unwrap().as_deref(), Some("a\n"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn different_text_overwrites_fully() {
        let dir = tmp_dir();
        let file = LayoutFile::new(dir.join("monitor-layout.conf"));

        write_if_changed(&file, "a much longer first layout\n").unwrap();
        assert_eq!(write_if_changed(&file, "b\n").unwrap(), WriteOutcome::Changed);
        assert_eq!(file.read().unwrap().as_deref(), Some("b\n"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn trailing_newline_difference_counts_as_change() {
        let dir = tmp_dir();
        let file = LayoutFile::new(dir.join("monitor-layout.conf"));

        write_if_changed(&file, "a").unwrap();
        assert_eq!(write_if_changed(&file, "a\n").unwrap(), WriteOutcome::Changed);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unreadable_path_is_read_error() {
        // A directory where the file should be.
        let dir = tmp_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let file = LayoutFile::new(&dir);
        assert!(matches!(file.read(), Err(LayoutFileError::Read { .. })));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
