//! Scene-level scalar measure projected onto every pixel.
//!
//! The strategy reads one named measure from the scene (cloud-free fraction, sharpness,
//! acquisition date, ...), rescales it with per-measure bounds and writes that constant into
//! every pixel of every line. Pixels whose alpha is below [`ALPHA_VISIBLE_THRESHOLD`] are
//! scored [`INVALID_QUALITY`].
//!
//! Options read from [`StrategyParams`]:
//!
//! - `scene_measure`: measure name (defaults to `NULL`, which no scene provides).
//! - `scale_min:<measure>`: lower normalization bound, default `0.0`.
//! - `scale_max:<measure>`: upper normalization bound, default `1.0`.
//!
//! Bounds are not validated and the result is not clamped: `scale_min == scale_max` gives a
//! non-finite score for the whole scene.

use crate::{
    foundation::{
        error::{QualityError, QualityResult},
        params::StrategyParams,
    },
    quality::method::{QualityContext, QualityMethod},
    scene::{
        input::SceneInput,
        line::{ALPHA_VISIBLE_THRESHOLD, INVALID_QUALITY, Line},
    },
};

const MEASURE_KEY: &str = "scene_measure";
const UNSET_MEASURE: &str = "NULL";
const SCALE_MIN_PREFIX: &str = "scale_min:";
const SCALE_MAX_PREFIX: &str = "scale_max:";

/// Linear normalization bounds for one measure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureScale {
    pub min: f64,
    pub max: f64,
}

impl Default for MeasureScale {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl MeasureScale {
    /// Read `scale_min:<measure>` / `scale_max:<measure>`, falling back to `0.0` / `1.0`.
    pub fn from_params(params: &StrategyParams, measure: &str) -> Self {
        let default = Self::default();
        Self {
            min: params.fetch_f64_def(&format!("{SCALE_MIN_PREFIX}{measure}"), default.min),
            max: params.fetch_f64_def(&format!("{SCALE_MAX_PREFIX}{measure}"), default.max),
        }
    }

    pub fn apply(self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

/// Quality strategy scoring every pixel with one rescaled scene measure.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneMeasureQuality {
    measure: String,
    score: f32,
}

impl SceneMeasureQuality {
    /// Registry name.
    pub const NAME: &'static str = "scene_measure";

    /// Look up and rescale the configured measure for `input`.
    ///
    /// Fails with [`QualityError::MissingMeasure`] when the scene reports a negative value
    /// for the measure; the scene must then be abandoned.
    #[tracing::instrument(skip(ctx, input), fields(scene = input.filename()))]
    pub fn initialize(ctx: &QualityContext, input: &dyn SceneInput) -> QualityResult<Self> {
        let params = &ctx.strategy_params;
        let measure = params.fetch_name_value_def(MEASURE_KEY, UNSET_MEASURE);

        let raw = input.quality_measure(measure);
        if raw < 0.0 {
            tracing::error!(
                scene = input.filename(),
                measure,
                "scene lacks quality measure"
            );
            return Err(QualityError::missing_measure(input.filename(), measure));
        }

        let scale = MeasureScale::from_params(params, measure);
        let score = scale.apply(raw) as f32;
        tracing::debug!(
            measure,
            raw,
            min = scale.min,
            max = scale.max,
            score,
            "scene measure rescaled"
        );
        if !score.is_finite() {
            tracing::warn!(measure, score, "degenerate measure scale, score is not finite");
        }

        Ok(Self {
            measure: measure.to_string(),
            score,
        })
    }

    /// [`QualityFactory`](crate::QualityFactory) entry point.
    pub fn create(
        ctx: &QualityContext,
        input: &dyn SceneInput,
    ) -> QualityResult<Box<dyn QualityMethod>> {
        Ok(Box::new(Self::initialize(ctx, input)?))
    }

    /// Name of the measure this instance was built from.
    pub fn measure(&self) -> &str {
        &self.measure
    }

    /// Cached, rescaled score written to every visible pixel.
    pub fn score(&self) -> f32 {
        self.score
    }
}

impl QualityMethod for SceneMeasureQuality {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute_quality(&self, line: &mut Line<'_>) -> QualityResult<()> {
        let bands = line.band_count();
        let (quality, alpha) = line.quality_and_alpha();

        // Bands share one per-pixel slot, so every band writes the same values.
        for _band in 0..bands {
            quality.fill(self.score);
        }

        for (q, &a) in quality.iter_mut().zip(alpha) {
            if a < ALPHA_VISIBLE_THRESHOLD {
                *q = INVALID_QUALITY;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quality/scene_measure.rs"]
mod tests;
