use log::warn;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The file in which the best score ever achieved is kept, as a decimal
/// number followed by a newline
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreStore {
    /// `None` if no path was configured and the default path could not be
    /// determined.  Loading then yields 0 and saving fails.
    path: Option<PathBuf>,
}

impl HighScoreStore {
    pub(crate) fn new(path: Option<PathBuf>) -> HighScoreStore {
        HighScoreStore { path }
    }

    /// Return the default high score file path
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("snake-eter").join("highscore"))
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the stored high score.  A missing file counts as a score of 0; so
    /// does a file that cannot be read or does not contain a non-negative
    /// integer, in which case a warning is logged.
    pub(crate) fn load(&self) -> u32 {
        let Some(path) = self.path.as_deref() else {
            warn!("Could not determine high score file path; starting from 0");
            return 0;
        };
        let src = match fs_err::read_to_string(path) {
            Ok(src) => src,
            Err(e) if e.kind() == ErrorKind::NotFound => return 0,
            Err(e) => {
                warn!("Failed to read high score: {e}");
                return 0;
            }
        };
        match src.trim().parse::<u32>() {
            Ok(score) => score,
            Err(e) => {
                warn!(
                    "High score file {} does not contain a valid score: {e}",
                    path.display()
                );
                0
            }
        }
    }

    /// Write `score` to the high score file, creating parent directories as
    /// needed
    pub(crate) fn save(&self, score: u32) -> Result<(), SaveError> {
        let path = self.path.as_deref().ok_or_else(SaveError::no_path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        fs_err::write(path, format!("{score}\n")).map_err(SaveError::write)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::tempdir;

    #[test]
    fn save_then_load() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("nested").join("highscore");
        let store = HighScoreStore::new(Some(path.clone()));
        store.save(42).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "42\n");
        assert_eq!(store.load(), 42);
        store.save(7).unwrap();
        assert_eq!(store.load(), 7);
    }

    #[test]
    fn missing_file() {
        let tmpdir = tempdir().unwrap();
        let store = HighScoreStore::new(Some(tmpdir.path().join("highscore")));
        assert_eq!(store.load(), 0);
    }

    #[rstest]
    #[case("")]
    #[case("lots\n")]
    #[case("-5\n")]
    #[case("4294967296\n")]
    fn invalid_contents(#[case] contents: &str) {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore");
        fs_err::write(&path, contents).unwrap();
        assert_eq!(HighScoreStore::new(Some(path)).load(), 0);
    }

    #[test]
    fn surrounding_whitespace() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("highscore");
        fs_err::write(&path, "  1250 \n\n").unwrap();
        assert_eq!(HighScoreStore::new(Some(path)).load(), 1250);
    }

    #[test]
    fn no_path() {
        let store = HighScoreStore::new(None);
        assert_eq!(store.load(), 0);
        let e = store.save(10).unwrap_err();
        assert_eq!(e.to_string(), "Failed to save high score to disk");
    }

    #[test]
    fn unwritable_parent() {
        let tmpdir = tempdir().unwrap();
        let blocker = tmpdir.path().join("file");
        fs_err::write(&blocker, "not a directory").unwrap();
        let store = HighScoreStore::new(Some(blocker.join("highscore")));
        assert!(store.save(10).is_err());
    }
}
