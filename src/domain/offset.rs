//! Relative offset applied to the root project's default output location.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::AppError;

/// Offset used when no `[relocation] offset` is configured.
pub const DEFAULT_OFFSET: &str = "../../build";

/// One step of a relative offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetStep {
    /// `..`: move to the parent directory.
    Up,
    /// A named child directory.
    Into(String),
}

/// A relative path offset such as `../../build`.
///
/// Both `/` and `\` separate steps, so the same configuration reads the same on
/// every host. `.` and empty segments are dropped; absolute offsets are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeOffset {
    steps: Vec<OffsetStep>,
}

impl RelativeOffset {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let invalid = |reason: &str| AppError::InvalidOffset {
            offset: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.starts_with('/') || raw.starts_with('\\') {
            return Err(invalid("offset must be relative"));
        }
        if raw.contains('\0') {
            return Err(invalid("offset contains a null byte"));
        }

        let mut steps = Vec::new();
        for (index, segment) in raw.split(['/', '\\']).enumerate() {
            match segment {
                "" | "." => {}
                ".." => steps.push(OffsetStep::Up),
                name if index == 0 && name.ends_with(':') => {
                    return Err(invalid("offset must not carry a drive prefix"));
                }
                name => steps.push(OffsetStep::Into(name.to_string())),
            }
        }

        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[OffsetStep] {
        &self.steps
    }
}

impl Default for RelativeOffset {
    fn default() -> Self {
        Self {
            steps: vec![OffsetStep::Up, OffsetStep::Up, OffsetStep::Into("build".to_string())],
        }
    }
}

impl fmt::Display for RelativeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return write!(f, ".");
        }
        let rendered: Vec<&str> = self
            .steps
            .iter()
            .map(|step| match step {
                OffsetStep::Up => "..",
                OffsetStep::Into(name) => name.as_str(),
            })
            .collect();
        write!(f, "{}", rendered.join("/"))
    }
}

impl FromStr for RelativeOffset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for RelativeOffset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RelativeOffset::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for RelativeOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
