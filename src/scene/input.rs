use std::collections::BTreeMap;

use crate::foundation::error::QualityResult;

/// Value returned by [`SceneInput::quality_measure`] when a measure is not present.
pub const MISSING_MEASURE: f64 = -1.0;

/// Read-only view of one source scene, as seen by quality strategies.
///
/// Owned by the compositor; strategies only borrow it while they are being created.
pub trait SceneInput {
    /// Scalar, scene-level measure by name. Negative means absent or invalid.
    fn quality_measure(&self, name: &str) -> f64;

    /// Display identifier used in diagnostics (usually the source filename).
    fn filename(&self) -> &str;
}

/// In-memory scene metadata: a filename plus named scalar quality measures.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub filename: String,
    #[serde(default)]
    pub quality_measures: BTreeMap<String, f64>,
}

impl Scene {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            quality_measures: BTreeMap::new(),
        }
    }

    /// Builder-style measure insertion.
    pub fn with_measure(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set_measure(name, value);
        self
    }

    pub fn set_measure(&mut self, name: impl Into<String>, value: f64) {
        self.quality_measures.insert(name.into(), value);
    }

    pub fn from_json_str(s: &str) -> QualityResult<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl SceneInput for Scene {
    fn quality_measure(&self, name: &str) -> f64 {
        self.quality_measures
            .get(name)
            .copied()
            .unwrap_or(MISSING_MEASURE)
    }

    fn filename(&self) -> &str {
        &self.filename
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/input.rs"]
mod tests;
