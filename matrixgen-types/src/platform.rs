use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One build platform: runner, toolchain flags, packaging image and triplet.
///
/// This is an owned value. Every combination gets its own clone, so editing a
/// combination can never leak into another one built from the same platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRecord {
    /// Platform identifier, e.g. `linux-x86_64`.
    pub platform: String,

    /// Runner label the job is scheduled on.
    pub os: String,

    /// Extra CMake arguments for this platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmake_args: Option<String>,

    /// Packaging container image (manylinux).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manylinux: Option<String>,

    /// Minimum macOS version for Apple builds.
    #[serde(
        rename = "MACOSX_DEPLOYMENT_TARGET",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub macosx_deployment_target: Option<String>,

    /// Package manager triplet used to select prebuilt dependencies.
    pub triplet: String,

    /// Additional free-form fields, emitted alongside the named ones.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl PlatformRecord {
    /// Serialized names of the named fields, in declaration order.
    pub const FIELD_NAMES: [&'static str; 6] = [
        "platform",
        "os",
        "cmake_args",
        "manylinux",
        "MACOSX_DEPLOYMENT_TARGET",
        "triplet",
    ];

    pub fn new(
        platform: impl Into<String>,
        os: impl Into<String>,
        triplet: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            os: os.into(),
            cmake_args: None,
            manylinux: None,
            macosx_deployment_target: None,
            triplet: triplet.into(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_cmake_args(mut self, args: impl Into<String>) -> Self {
        self.cmake_args = Some(args.into());
        self
    }

    pub fn with_manylinux(mut self, image: impl Into<String>) -> Self {
        self.manylinux = Some(image.into());
        self
    }

    pub fn with_macosx_deployment_target(mut self, target: impl Into<String>) -> Self {
        self.macosx_deployment_target = Some(target.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
