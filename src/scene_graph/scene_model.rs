use std::path::PathBuf;

use id_arena::Id;

/// Handle to loaded geometry, shared by every placement of the same asset.
pub type SceneModelId = Id<SceneModel>;

/// Geometry loaded for one source asset path.
#[derive(Debug, Clone)]
pub struct SceneModel {
    pub name: String,
    pub asset_path: String,
    pub file: PathBuf,
    pub available: bool,
}

impl SceneModel {
    pub fn new(name: impl Into<String>, asset_path: impl Into<String>, file: PathBuf) -> Self {
        Self {
            name: name.into(),
            asset_path: asset_path.into(),
            file,
            available: true,
        }
    }
}
