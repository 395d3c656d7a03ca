/// Convenience result type used across the quality crate.
pub type QualityResult<T> = Result<T, QualityError>;

/// Error taxonomy for quality strategies and the line scoring pipeline.
///
/// Scene-level errors ([`QualityError::MissingMeasure`], [`QualityError::UnknownMethod`]) are
/// fatal: the scene is abandoned and no line is scored. [`QualityError::Line`] is the soft,
/// per-line failure a strategy may report without invalidating its cached state.
#[derive(thiserror::Error, Debug)]
pub enum QualityError {
    /// Invalid caller-provided data (mismatched buffers, bad dimensions).
    #[error("validation error: {0}")]
    Validation(String),

    /// The configured scalar measure is not present on the scene.
    #[error("scene {scene} lacks quality measure {measure}")]
    MissingMeasure {
        /// Display identifier of the scene (usually its filename).
        scene: String,
        /// Name of the measure that was looked up.
        measure: String,
    },

    /// No strategy is registered under the requested name.
    #[error("unknown quality method: {0}")]
    UnknownMethod(String),

    /// A strategy could not score one line.
    #[error("line scoring error: {0}")]
    Line(String),

    /// Errors when deserializing parameters or scene metadata.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QualityError {
    /// Build a [`QualityError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QualityError::MissingMeasure`] value.
    pub fn missing_measure(scene: impl Into<String>, measure: impl Into<String>) -> Self {
        Self::MissingMeasure {
            scene: scene.into(),
            measure: measure.into(),
        }
    }

    /// Build a [`QualityError::Line`] value.
    pub fn line(msg: impl Into<String>) -> Self {
        Self::Line(msg.into())
    }

    /// Build a [`QualityError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error ends processing of the whole scene.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingMeasure { .. } | Self::UnknownMethod(_))
    }
}

impl From<serde_json::Error> for QualityError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
