//! Schema evaluation mode
//!
//! Plain configuration data: deserializes from `"all"` / `"strict"` so the
//! mode can live in an application's config file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a schema walks its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaMode {
    /// Evaluate every field and accumulate all failures.
    #[default]
    All,
    /// Stop at the first failing field in declaration order.
    Strict,
}

impl SchemaMode {
    /// Returns the config spelling of the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Strict => "strict",
        }
    }

    /// `true` for [`SchemaMode::Strict`].
    pub const fn is_fail_fast(self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for SchemaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown schema mode spelling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown schema mode '{0}', expected 'all' or 'strict'")]
pub struct ParseModeError(String);

impl FromStr for SchemaMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Self::All),
            "strict" => Ok(Self::Strict),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}
