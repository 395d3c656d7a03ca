//! Per-pixel quality scoring for raster scene compositing.
//!
//! A compositor streams each source scene line by line and asks a quality strategy to score
//! every pixel; downstream selection picks, per output pixel, the scene with the best score.
//!
//! # Flow
//!
//! 1. **Register**: build a [`QualityRegistry`] once at startup ([`QualityRegistry::with_builtins`]).
//! 2. **Create**: per scene, [`QualityRegistry::create`] looks the configured strategy up by name and
//!    initializes it from [`StrategyParams`] and the scene's [`SceneInput`]. Missing scene data is a
//!    fatal error and no strategy is produced.
//! 3. **Score**: call [`QualityMethod::compute_quality`] once per [`Line`], or drive a whole RGBA
//!    raster with [`score_rgba`].
//!
//! Scores are nominally in `[0, 1]`; [`INVALID_QUALITY`] (`-1.0`) marks pixels that must not be
//! used.
#![forbid(unsafe_code)]

mod foundation;
mod pipeline;
mod quality;
mod scene;

pub use foundation::error::{QualityError, QualityResult};
pub use foundation::params::{StrategyParams, parse_float_prefix};
pub use pipeline::{QualityMap, RGBA_COLOR_BANDS, quality_to_luma, score_rgba};
pub use quality::method::{QualityContext, QualityFactory, QualityMethod};
pub use quality::registry::{QualityRegistry, register_builtin_methods};
pub use quality::scene_measure::{MeasureScale, SceneMeasureQuality};
pub use scene::input::{MISSING_MEASURE, Scene, SceneInput};
pub use scene::line::{ALPHA_VISIBLE_THRESHOLD, INVALID_QUALITY, Line};
