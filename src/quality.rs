pub(crate) mod method;
pub(crate) mod registry;
pub(crate) mod scene_measure;
