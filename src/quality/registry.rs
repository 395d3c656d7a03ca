use std::collections::BTreeMap;

use crate::{
    foundation::error::{QualityError, QualityResult},
    quality::{
        method::{QualityContext, QualityFactory, QualityMethod},
        scene_measure::SceneMeasureQuality,
    },
    scene::input::SceneInput,
};

/// Name -> constructor table for quality strategies.
///
/// Populate it once at startup ([`QualityRegistry::with_builtins`] or
/// [`register_builtin_methods`]) before any scene is processed, then look strategies up by
/// their configured name per scene.
#[derive(Clone, Default)]
pub struct QualityRegistry {
    factories: BTreeMap<&'static str, QualityFactory>,
}

impl QualityRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every strategy shipped with this crate.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtin_methods(&mut registry);
        registry
    }

    /// Register `factory` under `name`, returning the factory it replaced, if any.
    pub fn register(
        &mut self,
        name: &'static str,
        factory: QualityFactory,
    ) -> Option<QualityFactory> {
        let previous = self.factories.insert(name, factory);
        if previous.is_some() {
            tracing::warn!(method = name, "quality method registered twice; replacing");
        }
        previous
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    /// Create and initialize the strategy registered under `name` for one scene.
    #[tracing::instrument(skip(self, ctx, input), fields(scene = input.filename()))]
    pub fn create(
        &self,
        name: &str,
        ctx: &QualityContext,
        input: &dyn SceneInput,
    ) -> QualityResult<Box<dyn QualityMethod>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| QualityError::UnknownMethod(name.to_string()))?;
        factory(ctx, input)
    }
}

impl std::fmt::Debug for QualityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QualityRegistry")
            .field("methods", &self.names())
            .finish()
    }
}

/// Explicit startup registration of the built-in strategies.
pub fn register_builtin_methods(registry: &mut QualityRegistry) {
    registry.register(SceneMeasureQuality::NAME, SceneMeasureQuality::create);
}

#[cfg(test)]
#[path = "../../tests/unit/quality/registry.rs"]
mod tests;
