//! Plain-text storage for the cake count.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::error::CounterError;
use crate::types::CakeCount;

/// Default counter file, relative to the current working directory.
pub const DEFAULT_COUNTER_FILE: &str = "cake_count.txt";

/// Reads and writes the cake count as a decimal integer in a text file.
///
/// There is no locking: two processes racing on the same file may lose an
/// update, and the last writer wins.
#[derive(Debug, Clone)]
pub struct CounterStore {
    path: PathBuf,
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTER_FILE)
    }
}

impl CounterStore {
    /// Creates a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the counter file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the current count.
    ///
    /// A missing, unreadable or non-integer file counts as zero.
    pub fn load(&self) -> CakeCount {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(
                    "Counter file {} not readable ({}), starting at 0",
                    self.path.display(),
                    e
                );
                return CakeCount::default();
            }
        };

        match contents.parse::<CakeCount>() {
            Ok(count) => count,
            Err(e) => {
                tracing::debug!(
                    "Counter file {} does not hold an integer ({}), starting at 0",
                    self.path.display(),
                    e
                );
                CakeCount::default()
            }
        }
    }

    /// Overwrites the counter file with the given count.
    ///
    /// The value is written to a temporary file in the same directory and
    /// renamed over the counter file, so readers never see a half-written value.
    pub fn save(&self, count: CakeCount) -> Result<(), CounterError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let write_err = |source| CounterError::Write {
            path: self.path.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(count.to_string().as_bytes())
            .and_then(|()| tmp.flush())
            .map_err(write_err)?;

        tmp.persist(&self.path).map_err(|e| CounterError::Persist {
            path: self.path.clone(),
            source: e.error,
        })?;

        tracing::info!("Saved cake count {} to {}", count, self.path.display());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> CounterStore {
        CounterStore::new(dir.path().join(DEFAULT_COUNTER_FILE))
    }

    // ------------------------------------------------------------------------
    // Load Tests
    // ------------------------------------------------------------------------

    mod load_tests {
        use super::*;

        #[test]
        fn test_load_missing_file() {
            let dir = tempfile::tempdir().unwrap();
            let store = store_in(&dir);
            assert_eq!(store.load(), CakeCount::new(0));
        }

        #[test]
        fn test_load_corrupt_file() {
            let dir = tempfile::tempdir().unwrap();
            let store = store_in(&dir);
            fs::write(store.path(), "abc").unwrap();
            assert_eq!(store.load(), CakeCount::new(0));
        }

        #[test]
        fn test_load_empty_file() {
            let dir = tempfile::tempdir().unwrap();
            let store = store_in(&dir);
            fs::write(store.path(), "").unwrap();
            assert_eq!(store.load(), CakeCount::new(0));
        }

        #[test]
        fn test_load_with_trailing_newline() {
            let dir = tempfile::tempdir().unwrap();
            let store = store_in(&dir);
            fs::write(store.path(), "17\n").unwrap();
            assert_eq!(store.load(), CakeCount::new(17));
        }

        #[test]
        fn test_load_negative() {
            let dir = tempfile::tempdir().unwrap();
            let store = store_in(&dir);
            fs::write(store.path(), "-4").unwrap();
            assert_eq!(store.load(), CakeCount::new(-4));
        }

        #[test]
        fn test_load_directory_path() {
            let dir = tempfile::tempdir().unwrap();
            let store = CounterStore::new(dir.path());
            assert_eq!(store.load(), CakeCount::new(0));
        }
    }

    // ------------------------------------------------------------------------
    // Save Tests
    // ------------------------------------------------------------------------

    mod save_tests {
        use super::*;

        #[test]
        fn test_save_writes_plain_decimal() {
            let dir = tempfile::tempdir().unwrap();
            let store = store_in(&dir);
            store.save(CakeCount::new(5)).unwrap();
            assert_eq!(fs::read_to_string(store.path()).unwrap(), "5");
        }

        #[test]
        fn test_save_overwrites_previous_value() {
            let dir = tempfile::tempdir().unwrap();
            let store = store_in(&dir);
            fs::write(store.path(), "123456789").unwrap();
            store.save(CakeCount::new(2)).unwrap();
            assert_eq!(fs::read_to_string(store.path()).unwrap(), "2");
        }

        #[test]
        fn test_save_then_load() {
            let dir = tempfile::tempdir().unwrap();
            let store = store_in(&dir);
            store.save(CakeCount::new(-12)).unwrap();
            assert_eq!(store.load(), CakeCount::new(-12));
        }

        #[test]
        fn test_save_leaves_no_temp_files() {
            let dir = tempfile::tempdir().unwrap();
            let store = store_in(&dir);
            store.save(CakeCount::new(1)).unwrap();
            store.save(CakeCount::new(2)).unwrap();
            let entries = fs::read_dir(dir.path()).unwrap().count();
            assert_eq!(entries, 1);
        }

        #[test]
        fn test_save_into_missing_directory_fails() {
            let dir = tempfile::tempdir().unwrap();
            let store = CounterStore::new(dir.path().join("missing").join("cakes.txt"));
            let err = store.save(CakeCount::new(1)).unwrap_err();
            assert!(matches!(err, CounterError::Write { .. }));
        }
    }

    #[test]
    fn test_default_path() {
        let store = CounterStore::default();
        assert_eq!(store.path(), Path::new(DEFAULT_COUNTER_FILE));
    }
}
