//! Shared DTOs (schemas-as-code) for the matrixgen workspace.
//!
//! # Design constraints
//! - The serialized [`MatrixDocument`] is consumed verbatim by a CI workflow engine.
//! - Array order is part of the contract; object key order is not.
//! - Optional platform fields are omitted when absent, never written as `null`.

pub mod combination;
pub mod matrix;
pub mod platform;

pub use combination::{CombinationRecord, Linkage, ParseFlagError, SharedLibsFlag};
pub use matrix::MatrixDocument;
pub use platform::PlatformRecord;

/// Schema identifiers.
pub mod schema {
    pub const MATRIXGEN_MATRIX_V1: &str = "matrixgen.matrix.v1";
}

/// Names of the fields appended to every combination record.
///
/// Platform records must not carry these keys themselves.
pub const DERIVED_FIELDS: [&str; 3] = ["version", "build_shared_libs", "linkage"];
