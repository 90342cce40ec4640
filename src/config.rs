use crate::difficulty::{DifficultyKind, Presets};
use crate::highscore::HighScoreStore;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Difficulty preset selected at startup
    #[serde(default)]
    pub(crate) difficulty: DifficultyKind,

    /// Per-preset overrides of the default difficulty table
    #[serde(default)]
    pub(crate) presets: Presets,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,

    #[serde(default)]
    pub(crate) logging: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snake-eter").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the store for the high score: the file given in the
    /// configuration or, if that is not set, the default high score file
    pub(crate) fn high_score_store(&self) -> HighScoreStore {
        HighScoreStore::new(
            self.files
                .high_score_file
                .clone()
                .or_else(HighScoreStore::default_path),
        )
    }

    /// Return the path of the log file: the file given in the configuration
    /// or, if that is not set, the default log file.  Returns `None` if no
    /// path is configured and the default could not be determined.
    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        self.files.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("snake-eter").join("snake-eter.log"))
        })
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which the high score is stored
    high_score_file: Option<PathBuf>,

    /// Path to which log messages are written
    log_file: Option<PathBuf>,
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    high_score_file: Option<String>,
    log_file: Option<String>,
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = std::io::Error;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, std::io::Error> {
        Ok(FileConfig {
            high_score_file: value
                .high_score_file
                .map(expanduser::expanduser)
                .transpose()?,
            log_file: value.log_file.map(expanduser::expanduser).transpose()?,
        })
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct LogConfig {
    /// Minimum level of messages written to the log file
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn empty_config() {
        let cfg = toml::from_str::<Config>("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.difficulty, DifficultyKind::Classic);
        assert_eq!(cfg.logging.level, LevelFilter::Info);
    }

    #[test]
    fn full_config() {
        let src = concat!(
            "difficulty = \"turbo\"\n",
            "\n",
            "[presets.turbo]\n",
            "speed-ms = 60\n",
            "obstacles = 6\n",
            "\n",
            "[presets.calm]\n",
            "obstacles = 0\n",
            "\n",
            "[files]\n",
            "high-score-file = \"/var/games/snake-eter/highscore\"\n",
            "log-file = \"/tmp/snake-eter.log\"\n",
            "\n",
            "[logging]\n",
            "level = \"debug\"\n",
        );
        let cfg = toml::from_str::<Config>(src).unwrap();
        assert_eq!(cfg.difficulty, DifficultyKind::Turbo);
        let turbo = cfg.presets.get(DifficultyKind::Turbo);
        assert_eq!(turbo.speed_ms, 60);
        assert_eq!(turbo.base_obstacles, 6);
        let calm = cfg.presets.get(DifficultyKind::Calm);
        assert_eq!(calm.speed_ms, 140);
        assert_eq!(calm.base_obstacles, 0);
        assert_eq!(
            cfg.presets.get(DifficultyKind::Classic),
            Presets::default().get(DifficultyKind::Classic)
        );
        assert_eq!(
            cfg.high_score_store().path(),
            Some(Path::new("/var/games/snake-eter/highscore"))
        );
        assert_eq!(cfg.log_file(), Some(PathBuf::from("/tmp/snake-eter.log")));
        assert_eq!(cfg.logging.level, LevelFilter::Debug);
    }

    #[test]
    fn zero_speed_is_error() {
        let src = "[presets.classic]\nspeed-ms = 0\n";
        assert!(toml::from_str::<Config>(src).is_err());
    }

    #[test]
    fn unknown_difficulty_is_error() {
        assert!(toml::from_str::<Config>("difficulty = \"nightmare\"\n").is_err());
    }

    #[test]
    fn missing_file_allowed() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_from_disk() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "difficulty = \"calm\"\n").unwrap();
        let cfg = Config::load(&path, false).unwrap();
        assert_eq!(cfg.difficulty, DifficultyKind::Calm);
    }

    #[test]
    fn bad_toml() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "difficulty = \n").unwrap();
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Parse(_))
        ));
    }
}
