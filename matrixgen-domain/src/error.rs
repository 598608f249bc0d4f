//! Error types for matrixgen-domain.
//!
//! Generation itself cannot fail. Only inputs supplied from outside the
//! compiled-in tables are checked, and every rejection is an [`InputError`].

use matrixgen_types::SharedLibsFlag;
use thiserror::Error;

/// Why a set of matrix inputs was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("development branch name is empty")]
    EmptyDevelopmentBranch,

    #[error("no versions to build")]
    NoVersions,

    #[error("no build_shared_libs flags to build")]
    NoFlags,

    #[error("no platforms to build")]
    NoPlatforms,

    #[error("version #{index} is empty")]
    EmptyVersion { index: usize },

    #[error("version '{0}' is listed more than once")]
    DuplicateVersion(String),

    #[error("build_shared_libs flag '{0}' is listed more than once")]
    DuplicateFlag(SharedLibsFlag),

    #[error("platform '{0}' is listed more than once")]
    DuplicatePlatform(String),

    /// A required platform field is empty.
    #[error("platform #{index} has an empty '{field}' field")]
    EmptyField { index: usize, field: &'static str },

    /// An extra platform key shadows a named or derived field.
    #[error("platform '{platform}' uses reserved key '{key}'")]
    ReservedKey { platform: String, key: String },
}
