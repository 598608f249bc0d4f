//! Domain logic: combine platforms, linkage flags and versions into a CI build matrix.
//!
//! This crate owns *what* gets built. Writing the document anywhere is the CLI's job.

mod error;
mod generator;
mod inputs;
pub mod tables;

pub use error::InputError;
pub use generator::MatrixGenerator;
pub use inputs::{ExclusionRule, MatrixInputs};
pub use tables::PlatformSpec;
