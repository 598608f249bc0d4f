//! Compiled-in matrix tables.
//!
//! These are the defaults used when no config file is given. They never change at runtime.

use matrixgen_types::{PlatformRecord, SharedLibsFlag};

/// Borrowed, `const`-constructible form of a [`PlatformRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSpec {
    pub platform: &'static str,
    pub os: &'static str,
    pub cmake_args: Option<&'static str>,
    pub manylinux: Option<&'static str>,
    pub macosx_deployment_target: Option<&'static str>,
    pub triplet: &'static str,
}

impl PlatformSpec {
    pub fn to_record(&self) -> PlatformRecord {
        PlatformRecord {
            platform: self.platform.to_string(),
            os: self.os.to_string(),
            cmake_args: self.cmake_args.map(str::to_string),
            manylinux: self.manylinux.map(str::to_string),
            macosx_deployment_target: self.macosx_deployment_target.map(str::to_string),
            triplet: self.triplet.to_string(),
            extra: Default::default(),
        }
    }
}

impl From<&PlatformSpec> for PlatformRecord {
    fn from(spec: &PlatformSpec) -> Self {
        spec.to_record()
    }
}

/// Branch that tracks ongoing development. Every other version is a release tag.
pub const DEVELOPMENT_BRANCH: &str = "main";

pub const VERSIONS: [&str; 2] = [DEVELOPMENT_BRANCH, "2.27.0"];

pub const BUILD_SHARED_LIBS: [SharedLibsFlag; 2] = [SharedLibsFlag::On, SharedLibsFlag::Off];

pub const BASE_MATRIX: [PlatformSpec; 5] = [
    PlatformSpec {
        platform: "linux-x86_64",
        os: "ubuntu-20.04",
        cmake_args: None,
        manylinux: Some("quay.io/pypa/manylinux_2_28_x86_64"),
        macosx_deployment_target: None,
        triplet: "x64-linux-release",
    },
    PlatformSpec {
        platform: "linux-x86_64-noavx2",
        os: "ubuntu-20.04",
        cmake_args: Some("-DCOMPILER_SUPPORTS_AVX2=OFF"),
        manylinux: Some("quay.io/pypa/manylinux_2_28_x86_64"),
        macosx_deployment_target: None,
        triplet: "x64-linux-release",
    },
    PlatformSpec {
        platform: "linux-aarch64",
        os: "linux-arm64-ubuntu24",
        cmake_args: None,
        manylinux: Some("quay.io/pypa/manylinux_2_28_aarch64"),
        macosx_deployment_target: None,
        triplet: "arm64-linux-release",
    },
    PlatformSpec {
        platform: "macos-x86_64",
        os: "macos-13",
        cmake_args: Some("-DCMAKE_OSX_ARCHITECTURES=x86_64"),
        manylinux: None,
        macosx_deployment_target: Some("11"),
        triplet: "x64-osx-release",
    },
    PlatformSpec {
        platform: "macos-arm64",
        os: "macos-latest",
        cmake_args: Some("-DCMAKE_OSX_ARCHITECTURES=arm64"),
        manylinux: None,
        macosx_deployment_target: Some("11"),
        triplet: "arm64-osx-release",
    },
];
