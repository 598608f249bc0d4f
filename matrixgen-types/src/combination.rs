use crate::platform::PlatformRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Whether the shared-library variant of a build is produced.
///
/// Serialized as `"on"` / `"off"`. Parsing is ASCII case-insensitive so `"ON"`
/// and `"on"` name the same flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SharedLibsFlag {
    On,
    Off,
}

impl SharedLibsFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            SharedLibsFlag::On => "on",
            SharedLibsFlag::Off => "off",
        }
    }

    pub fn linkage(self) -> Linkage {
        Linkage::from(self)
    }
}

impl fmt::Display for SharedLibsFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid build_shared_libs flag '{0}': expected \"on\" or \"off\"")]
pub struct ParseFlagError(pub String);

impl FromStr for SharedLibsFlag {
    type Err = ParseFlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("on") {
            Ok(SharedLibsFlag::On)
        } else if s.eq_ignore_ascii_case("off") {
            Ok(SharedLibsFlag::Off)
        } else {
            Err(ParseFlagError(s.to_string()))
        }
    }
}

impl TryFrom<String> for SharedLibsFlag {
    type Error = ParseFlagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Human-readable linkage label shown in CI job names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Linkage {
    Dynamic,
    Static,
}

impl Linkage {
    pub fn as_str(self) -> &'static str {
        match self {
            Linkage::Dynamic => "Dynamic",
            Linkage::Static => "Static",
        }
    }
}

impl From<SharedLibsFlag> for Linkage {
    fn from(flag: SharedLibsFlag) -> Self {
        match flag {
            SharedLibsFlag::On => Linkage::Dynamic,
            SharedLibsFlag::Off => Linkage::Static,
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One CI job: a platform plus the version and linkage it builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationRecord {
    #[serde(flatten)]
    pub platform: PlatformRecord,
    pub version: String,
    pub build_shared_libs: SharedLibsFlag,
    pub linkage: Linkage,
}

impl CombinationRecord {
    /// Build a record from its parts. The linkage label follows the flag.
    pub fn new(platform: PlatformRecord, version: impl Into<String>, flag: SharedLibsFlag) -> Self {
        Self {
            platform,
            version: version.into(),
            build_shared_libs: flag,
            linkage: Linkage::from(flag),
        }
    }
}
