use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::AppError;
use crate::impl_validated_id;

/// A validated project name, usable as one directory segment.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, `_`, or `.`
/// - No path traversal components (/, \, ., ..)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectName(pub(crate) String);

impl_validated_id!(ProjectName, true, AppError::InvalidProjectName);

impl ProjectName {
    /// Key used for collision checks on case-insensitive filesystems.
    pub fn folded(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl From<ProjectName> for String {
    fn from(val: ProjectName) -> Self {
        val.0
    }
}

impl<'de> Deserialize<'de> for ProjectName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ProjectName::new(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for ProjectName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
