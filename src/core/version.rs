use crate::error::{CompatError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Published runtime versions the harness knows how to drive.
///
/// Declaration order is release order, so the derived `Ord` answers
/// "is this version at least X" questions directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum RuntimeVersion {
    V0116,
    V0254,
    V0280,
    V090,
    V102,
    #[default]
    Latest,
}

impl RuntimeVersion {
    pub const ALL: [RuntimeVersion; 6] = [
        RuntimeVersion::V0116,
        RuntimeVersion::V0254,
        RuntimeVersion::V0280,
        RuntimeVersion::V090,
        RuntimeVersion::V102,
        RuntimeVersion::Latest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V0116 => "v0.11.6",
            Self::V0254 => "v0.25.4",
            Self::V0280 => "v0.28.0",
            Self::V090 => "v0.90.0",
            Self::V102 => "v1.0.2",
            Self::Latest => "latest",
        }
    }

    /// Suffix used in the per-version test plugin binary name.
    pub fn plugin_suffix(&self) -> String {
        match self {
            Self::Latest => "latest".to_string(),
            other => other.as_str().replace('.', "_"),
        }
    }

    pub fn at_least(&self, other: RuntimeVersion) -> bool {
        *self >= other
    }

    fn valid_tags() -> String {
        Self::ALL
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeVersion {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self> {
        let raw = s.trim();
        let tag = raw.strip_prefix('v').unwrap_or(raw);
        match tag {
            "0.11.6" | "0.11" => Ok(Self::V0116),
            "0.25.4" | "0.25" => Ok(Self::V0254),
            "0.28.0" | "0.28" => Ok(Self::V0280),
            "0.90.0" | "0.90" => Ok(Self::V090),
            "1.0.2" | "1.0" => Ok(Self::V102),
            "latest" => Ok(Self::Latest),
            _ => Err(CompatError::UnknownVersion(
                raw.to_string(),
                Self::valid_tags(),
            )),
        }
    }
}

impl Serialize for RuntimeVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RuntimeVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
