use crate::scene_graph::scene_model::SceneModelId;

/// Maps a source asset path to loaded geometry.
///
/// Implementations may load or convert on demand, but must hand out the same
/// handle for repeated calls with the same path and must not panic on missing
/// or broken assets; `None` means the asset could not be provided.
pub trait AssetResolver {
    fn resolve_or_load(&mut self, asset_path: &str) -> Option<SceneModelId>;

    /// Name of the geometry behind `id`, used to name its placements. Resolvers
    /// that return `None` get placements named after the asset's file stem.
    fn geometry_name(&self, _id: SceneModelId) -> Option<&str> {
        None
    }
}

impl<F> AssetResolver for F
where
    F: FnMut(&str) -> Option<SceneModelId>,
{
    fn resolve_or_load(&mut self, asset_path: &str) -> Option<SceneModelId> {
        self(asset_path)
    }
}
