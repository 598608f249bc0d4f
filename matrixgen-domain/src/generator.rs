use crate::error::InputError;
use crate::inputs::MatrixInputs;
use matrixgen_types::{CombinationRecord, MatrixDocument};
use tracing::{debug, trace};

/// Expands [`MatrixInputs`] into a [`MatrixDocument`].
///
/// Output order is versions, then flags, then platforms, each in input order.
/// Generating twice from the same inputs yields equal documents.
#[derive(Debug, Clone)]
pub struct MatrixGenerator {
    inputs: MatrixInputs,
}

impl MatrixGenerator {
    pub fn new(inputs: MatrixInputs) -> Result<Self, InputError> {
        inputs.validate()?;
        Ok(Self { inputs })
    }

    /// Generator over the compiled-in tables.
    pub fn builtin() -> Self {
        Self {
            inputs: MatrixInputs::builtin(),
        }
    }

    /// Number of records [`generate`](Self::generate) will produce.
    pub fn expected_len(&self) -> usize {
        let inputs = &self.inputs;
        let kept_pairs = inputs
            .versions
            .iter()
            .flat_map(|v| inputs.build_shared_libs.iter().map(move |f| (v, *f)))
            .filter(|(v, f)| !inputs.exclusion.excludes(&inputs.development_branch, v, *f))
            .count();
        kept_pairs * inputs.platforms.len()
    }

    pub fn generate(&self) -> MatrixDocument {
        let inputs = &self.inputs;
        let mut include = Vec::with_capacity(self.expected_len());

        for version in &inputs.versions {
            for &flag in &inputs.build_shared_libs {
                if inputs
                    .exclusion
                    .excludes(&inputs.development_branch, version, flag)
                {
                    debug!("skipping version={} build_shared_libs={}", version, flag);
                    continue;
                }

                for platform in &inputs.platforms {
                    trace!(
                        "adding {} version={} linkage={}",
                        platform.platform,
                        version,
                        flag.linkage()
                    );
                    let record = CombinationRecord::new(platform.clone(), version.clone(), flag);
                    include.push(record);
                }
            }
        }

        debug!(
            "generated {} combinations ({} versions, {} flags, {} platforms, exclusion={:?})",
            include.len(),
            inputs.versions.len(),
            inputs.build_shared_libs.len(),
            inputs.platforms.len(),
            inputs.exclusion
        );
        MatrixDocument::new(include)
    }
}
