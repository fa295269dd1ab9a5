use crate::search::Direction;
use crate::world::Position;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("layout {name} cannot be found under {root}")]
    NotFound { name: String, root: PathBuf },
    #[error("layout is empty")]
    Empty,
    #[error("layout has no rescuer start position ('R')")]
    NoRescuer,
}

#[derive(Debug, Error)]
pub enum PlanParseError {
    #[error("failed to read plan {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("expected a direction at line {line}, column {column}, found {found:?}")]
    Unexpected {
        line: u32,
        column: usize,
        found: String,
    },
}

/// Raised by the world model while executing a plan, never by the search
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionError {
    #[error("illegal action {action} from {position}")]
    IllegalAction {
        action: Direction,
        position: Position,
    },
    #[error("cannot act in a finished mission")]
    MissionOver,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read mission file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid mission file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown {kind} name {name:?}, expected one of: {expected}")]
    UnknownName {
        kind: &'static str,
        name: String,
        expected: String,
    },
    #[error("invalid duration {value:?} for `{setting}`: {source}")]
    Duration {
        setting: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("missing required setting `{0}`")]
    Missing(&'static str),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl ConfigError {
    pub(crate) fn unknown_name(kind: &'static str, name: &str, expected: &[&str]) -> Self {
        ConfigError::UnknownName {
            kind,
            name: name.to_owned(),
            expected: expected.join(", "),
        }
    }
}
