use crate::combination::CombinationRecord;
use serde::{Deserialize, Serialize};

/// The document handed to the CI engine: `{"include": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixDocument {
    pub include: Vec<CombinationRecord>,
}

impl MatrixDocument {
    pub fn new(include: Vec<CombinationRecord>) -> Self {
        Self { include }
    }

    pub fn len(&self) -> usize {
        self.include.len()
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CombinationRecord> {
        self.include.iter()
    }
}
