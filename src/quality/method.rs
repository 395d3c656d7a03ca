use crate::{
    foundation::{error::QualityResult, params::StrategyParams},
    scene::{input::SceneInput, line::Line},
};

/// Configuration context handed to strategy constructors.
#[derive(Clone, Debug, Default)]
pub struct QualityContext {
    /// Flat strategy options (`-s KEY VALUE` on the command line).
    pub strategy_params: StrategyParams,
}

impl QualityContext {
    /// Context over the given parameters.
    pub fn new(strategy_params: StrategyParams) -> Self {
        Self { strategy_params }
    }
}

/// A per-pixel quality scoring strategy, created once per scene.
///
/// All fallible, per-scene setup happens in the strategy's constructor (see
/// [`QualityFactory`]); a constructed value is always ready to score. [`QualityMethod::compute_quality`]
/// is then called once per line, in the order the compositor streams them, and only reads
/// state cached at construction.
pub trait QualityMethod {
    /// Name the strategy is registered under.
    fn name(&self) -> &'static str;

    /// Fill `line`'s quality buffer. An `Err` is a soft, per-line failure; the strategy stays
    /// usable for the following lines.
    fn compute_quality(&self, line: &mut Line<'_>) -> QualityResult<()>;
}

/// Constructor for a strategy: reads its configuration and scene data and returns a ready
/// instance, or a fatal error for the scene.
pub type QualityFactory =
    fn(&QualityContext, &dyn SceneInput) -> QualityResult<Box<dyn QualityMethod>>;
