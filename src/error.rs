//! Error types for catalog registration and configuration loading.
//!
//! Queries against the catalogs and the economy never fail: unknown ids
//! resolve to the defaults in [`crate::catalog::fallback`]. Errors only
//! surface while registering content or loading external configuration.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::catalog::ObjectId;

/// A catalog entry rejected at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The object id is empty.
    EmptyId,
    /// A footprint dimension is zero.
    InvalidFootprint {
        /// The offending object.
        id: ObjectId,
        /// Footprint width in grid cells.
        width: u32,
        /// Footprint height in grid cells.
        height: u32,
    },
    /// The display code is not one or two characters long.
    InvalidDisplayCode {
        /// The offending object.
        id: ObjectId,
        /// The rejected display code.
        code: String,
    },
    /// Health configuration with zero levels or zero HP per level.
    InvalidHealth {
        /// Configured number of levels.
        levels: u32,
        /// Configured HP per level.
        hp_per_level: u32,
    },
    /// A flammable entry with zero fire damage per tick.
    InvalidFireDamage(ObjectId),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "object id must not be empty"),
            Self::InvalidFootprint { id, width, height } => {
                write!(f, "{id}: footprint {width}x{height} must be at least 1x1")
            }
            Self::InvalidDisplayCode { id, code } => {
                write!(f, "{id}: display code {code:?} must be 1-2 characters")
            }
            Self::InvalidHealth {
                levels,
                hp_per_level,
            } => write!(
                f,
                "health {levels} levels x {hp_per_level} hp must be at least 1x1"
            ),
            Self::InvalidFireDamage(id) => {
                write!(f, "{id}: fire damage per tick must be at least 1")
            }
        }
    }
}

impl std::error::Error for RegistrationError {}

/// Failure to load an external configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file contents are not valid JSON for the expected shape.
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Json(e) => write!(f, "malformed configuration: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
