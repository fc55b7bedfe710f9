//! Configuration file loading.
//!
//! The config file sets the default board size and defines named scenarios
//! that the `scenario` subcommand can run.

use crate::scenario::Query;
use piece_core::{Board, BoardError, Dimensions, PieceKind, QueryError, Square};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or reading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Requested scenario was not found in the configuration.
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),
    /// Board dimensions are unusable.
    #[error("Invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
    /// A scenario names a piece that cannot be searched.
    #[error("Invalid scenario '{name}': {source}")]
    InvalidScenario { name: String, source: QueryError },
}

/// Board size used when a command does not override it.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// Number of rows. Defaults to 8.
    #[serde(default = "default_side")]
    pub rows: u16,
    /// Number of columns. Defaults to 8.
    #[serde(default = "default_side")]
    pub cols: u16,
}

fn default_side() -> u16 {
    8
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: default_side(),
            cols: default_side(),
        }
    }
}

impl BoardConfig {
    /// Validates the size.
    pub fn dimensions(&self) -> Result<Dimensions, BoardError> {
        Dimensions::new(self.rows, self.cols)
    }
}

/// A stored path query.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ScenarioConfig {
    /// Piece name, case-insensitive.
    pub piece: String,
    /// Start square as `[row, col]`.
    pub start: [i32; 2],
    /// Goal square as `[row, col]`.
    pub goal: [i32; 2],
    /// Occupied squares. Defaults to none.
    #[serde(default)]
    pub obstacles: Vec<[i32; 2]>,
    /// Board size for this scenario only.
    #[serde(default)]
    pub board: Option<BoardConfig>,
}

impl ScenarioConfig {
    /// Resolves the scenario into a runnable query.
    pub fn to_query(&self, name: &str, default_board: BoardConfig) -> Result<Query, ConfigError> {
        let piece = self
            .piece
            .parse::<PieceKind>()
            .map_err(|source| ConfigError::InvalidScenario {
                name: name.to_string(),
                source,
            })?;
        let dims = self.board.unwrap_or(default_board).dimensions()?;
        let obstacles = self.obstacles.iter().map(|&[row, col]| Square::new(row, col));

        Ok(Query {
            title: name.to_string(),
            piece,
            start: Square::new(self.start[0], self.start[1]),
            goal: Square::new(self.goal[0], self.goal[1]),
            board: Board::build(dims, obstacles),
        })
    }
}

/// Top-level configuration, read from `paths.toml` by default.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct PathsConfig {
    /// Default board size.
    #[serde(default)]
    pub board: BoardConfig,
    /// Named scenarios.
    #[serde(default)]
    pub scenarios: BTreeMap<String, ScenarioConfig>,
}

impl PathsConfig {
    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("paths.toml")
    }

    /// Loads the configuration at `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Looks up a scenario by name.
    pub fn scenario(&self, name: &str) -> Result<&ScenarioConfig, ConfigError> {
        self.scenarios
            .get(name)
            .ok_or_else(|| ConfigError::ScenarioNotFound(name.to_string()))
    }
}
