//! Configuration file loading for matrixgen.
//!
//! A config file is only read when `--config` names one; there is no discovery.
//! Every key is optional and falls back to the compiled-in tables.
//! Merge precedence is CLI, then config file, then builtin.

use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use matrixgen_domain::{ExclusionRule, MatrixInputs};
use matrixgen_types::{PlatformRecord, SharedLibsFlag};
use serde::Deserialize;
use tracing::debug;

/// Top-level configuration from a matrixgen TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatrixConfig {
    /// Branch exempt from the release exclusion rule.
    pub development_branch: Option<String>,

    /// Versions to build, in output order.
    pub versions: Option<Vec<String>>,

    /// Shared-library flags to build, in output order.
    pub build_shared_libs: Option<Vec<SharedLibsFlag>>,

    /// Which (version, flag) pairs to leave out.
    pub exclusion: Option<ExclusionRule>,

    /// Platform table. Replaces the builtin table entirely when present.
    pub platforms: Option<Vec<PlatformRecord>>,
}

/// Load and parse a matrixgen config file.
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<MatrixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    let config = parse_config(&contents).with_context(|| format!("parse config file {}", path))?;
    debug!("loaded config from {}", path);
    Ok(config)
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<MatrixConfig> {
    let config: MatrixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: MatrixConfig,
}

impl ConfigMerger {
    pub fn new(config: MatrixConfig) -> Self {
        Self { config }
    }

    /// Produce generator inputs.
    ///
    /// A non-empty `cli_versions` replaces the version list; `cli_exclusion`
    /// overrides the configured rule.
    pub fn merge(
        self,
        cli_versions: &[String],
        cli_exclusion: Option<ExclusionRule>,
    ) -> MatrixInputs {
        let builtin = MatrixInputs::builtin();

        let versions = if cli_versions.is_empty() {
            self.config.versions.unwrap_or(builtin.versions)
        } else {
            cli_versions.to_vec()
        };

        MatrixInputs {
            development_branch: self
                .config
                .development_branch
                .unwrap_or(builtin.development_branch),
            versions,
            build_shared_libs: self
                .config
                .build_shared_libs
                .unwrap_or(builtin.build_shared_libs),
            platforms: self.config.platforms.unwrap_or(builtin.platforms),
            exclusion: cli_exclusion
                .or(self.config.exclusion)
                .unwrap_or(builtin.exclusion),
        }
    }
}
