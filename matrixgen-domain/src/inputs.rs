use crate::error::InputError;
use crate::tables::{BASE_MATRIX, BUILD_SHARED_LIBS, DEVELOPMENT_BRANCH, VERSIONS};
use matrixgen_types::{DERIVED_FIELDS, PlatformRecord, SharedLibsFlag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which (version, flag) pairs are left out of the matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExclusionRule {
    /// Skip shared-library builds of every version except the development branch.
    ///
    /// Released shared libraries are published upstream, so only the static
    /// variant of a release needs building here.
    #[default]
    SkipReleasedDynamic,

    /// Build every combination.
    Disabled,
}

impl ExclusionRule {
    /// Whether the pair `(version, flag)` is excluded.
    pub fn excludes(self, development_branch: &str, version: &str, flag: SharedLibsFlag) -> bool {
        match self {
            ExclusionRule::SkipReleasedDynamic => {
                version != development_branch && flag == SharedLibsFlag::On
            }
            ExclusionRule::Disabled => false,
        }
    }
}

/// Everything the generator iterates over.
///
/// Order of each list is significant: it becomes the order of the output array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixInputs {
    pub development_branch: String,
    pub versions: Vec<String>,
    pub build_shared_libs: Vec<SharedLibsFlag>,
    pub platforms: Vec<PlatformRecord>,
    pub exclusion: ExclusionRule,
}

impl MatrixInputs {
    /// The compiled-in tables with the default exclusion rule.
    pub fn builtin() -> Self {
        Self {
            development_branch: DEVELOPMENT_BRANCH.to_string(),
            versions: VERSIONS.iter().map(|v| v.to_string()).collect(),
            build_shared_libs: BUILD_SHARED_LIBS.to_vec(),
            platforms: BASE_MATRIX.iter().map(PlatformRecord::from).collect(),
            exclusion: ExclusionRule::default(),
        }
    }

    pub fn with_exclusion(mut self, exclusion: ExclusionRule) -> Self {
        self.exclusion = exclusion;
        self
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.development_branch.trim().is_empty() {
            return Err(InputError::EmptyDevelopmentBranch);
        }
        if self.versions.is_empty() {
            return Err(InputError::NoVersions);
        }
        if self.build_shared_libs.is_empty() {
            return Err(InputError::NoFlags);
        }
        if self.platforms.is_empty() {
            return Err(InputError::NoPlatforms);
        }

        let mut seen = BTreeSet::new();
        for (index, version) in self.versions.iter().enumerate() {
            if version.trim().is_empty() {
                return Err(InputError::EmptyVersion { index });
            }
            if !seen.insert(version.as_str()) {
                return Err(InputError::DuplicateVersion(version.clone()));
            }
        }

        let mut seen = BTreeSet::new();
        for flag in &self.build_shared_libs {
            if !seen.insert(flag.as_str()) {
                return Err(InputError::DuplicateFlag(*flag));
            }
        }

        let mut seen = BTreeSet::new();
        for (index, platform) in self.platforms.iter().enumerate() {
            validate_platform(index, platform)?;
            if !seen.insert(platform.platform.as_str()) {
                return Err(InputError::DuplicatePlatform(platform.platform.clone()));
            }
        }

        Ok(())
    }
}

fn validate_platform(index: usize, platform: &PlatformRecord) -> Result<(), InputError> {
    let required = [
        ("platform", &platform.platform),
        ("os", &platform.os),
        ("triplet", &platform.triplet),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(InputError::EmptyField { index, field });
        }
    }

    // CI engines resolve matrix keys case-insensitively.
    for key in platform.extra.keys() {
        let clashes = PlatformRecord::FIELD_NAMES
            .iter()
            .chain(DERIVED_FIELDS.iter())
            .any(|name| name.eq_ignore_ascii_case(key));
        if clashes {
            return Err(InputError::ReservedKey {
                platform: platform.platform.clone(),
                key: key.clone(),
            });
        }
    }

    Ok(())
}
