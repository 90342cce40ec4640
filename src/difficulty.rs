use enum_map::{enum_map, Enum, EnumMap};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The named difficulty presets
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum DifficultyKind {
    Calm,
    #[default]
    Classic,
    Turbo,
}

impl DifficultyKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            DifficultyKind::Calm => "Calm",
            DifficultyKind::Classic => "Classic",
            DifficultyKind::Turbo => "Turbo",
        }
    }
}

impl fmt::Display for DifficultyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DifficultyKind {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<DifficultyKind, ParseDifficultyError> {
        match s.to_ascii_lowercase().as_str() {
            "calm" => Ok(DifficultyKind::Calm),
            "classic" => Ok(DifficultyKind::Classic),
            "turbo" => Ok(DifficultyKind::Turbo),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown difficulty {0:?}; expected \"calm\", \"classic\", or \"turbo\"")]
pub(crate) struct ParseDifficultyError(String);

/// The parameters a round is started with
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Difficulty {
    pub(crate) kind: DifficultyKind,

    /// Initial time between ticks, in milliseconds
    pub(crate) speed_ms: u64,

    /// Number of obstacles placed when a round starts
    pub(crate) base_obstacles: usize,
}

/// Table of the difficulty settings for each preset.  The table is built once
/// at startup (from the defaults plus any configured overrides) and a copy of
/// the chosen entry is handed to each new round.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "BTreeMap<DifficultyKind, RawPreset>")]
pub(crate) struct Presets(EnumMap<DifficultyKind, Difficulty>);

impl Presets {
    pub(crate) fn get(&self, kind: DifficultyKind) -> Difficulty {
        self.0[kind]
    }
}

impl Default for Presets {
    fn default() -> Presets {
        Presets(enum_map! {
            DifficultyKind::Calm => Difficulty {
                kind: DifficultyKind::Calm,
                speed_ms: 140,
                base_obstacles: 1,
            },
            DifficultyKind::Classic => Difficulty {
                kind: DifficultyKind::Classic,
                speed_ms: 100,
                base_obstacles: 3,
            },
            DifficultyKind::Turbo => Difficulty {
                kind: DifficultyKind::Turbo,
                speed_ms: 70,
                base_obstacles: 5,
            },
        })
    }
}

/// A preset override as written in the configuration file
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct RawPreset {
    speed_ms: Option<u64>,
    obstacles: Option<usize>,
}

impl TryFrom<BTreeMap<DifficultyKind, RawPreset>> for Presets {
    type Error = PresetError;

    fn try_from(overrides: BTreeMap<DifficultyKind, RawPreset>) -> Result<Presets, PresetError> {
        let mut presets = Presets::default();
        for (kind, raw) in overrides {
            let entry = &mut presets.0[kind];
            if let Some(speed_ms) = raw.speed_ms {
                if speed_ms == 0 {
                    return Err(PresetError::ZeroSpeed(kind));
                }
                entry.speed_ms = speed_ms;
            }
            if let Some(obstacles) = raw.obstacles {
                entry.base_obstacles = obstacles;
            }
        }
        Ok(presets)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum PresetError {
    #[error("speed-ms for the {0} preset must be greater than zero")]
    ZeroSpeed(DifficultyKind),
}
