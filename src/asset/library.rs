//! Asset Library - resolution and caching of converted geometry
//!
//! Source asset paths (`Game/Props/SM_Rock.uasset`) map onto files below the
//! library directory with the library's geometry extension
//! (`<dir>/Game/Props/SM_Rock.glb`). Loaded entries are kept for the lifetime of
//! the library so every placement of an asset shares one handle.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use id_arena::Arena;

use crate::asset::resolver::AssetResolver;
use crate::error::ImportError;
use crate::scene_graph::scene_model::{SceneModel, SceneModelId};

pub const DEFAULT_GEOMETRY_EXTENSION: &str = "glb";

#[derive(Debug)]
pub struct AssetLibrary {
    base_dir: PathBuf,
    extension: String,
    models: Arena<SceneModel>,
    /// Asset path -> loaded model
    by_path: HashMap<String, SceneModelId>,
}

impl AssetLibrary {
    /// Opens a library rooted at `base_dir`, which must be an existing directory.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self, ImportError> {
        let base_dir = base_dir.into();

        if !base_dir.is_dir() {
            return Err(ImportError::MissingAssetDir(base_dir));
        }

        Ok(Self {
            base_dir,
            extension: DEFAULT_GEOMETRY_EXTENSION.to_string(),
            models: Arena::new(),
            by_path: HashMap::new(),
        })
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File backing `asset_path`.
    pub fn file_for(&self, asset_path: &str) -> PathBuf {
        self.base_dir
            .join(Path::new(asset_path).with_extension(&self.extension))
    }

    pub fn get(&self, id: SceneModelId) -> Option<&SceneModel> {
        self.models.get(id)
    }

    pub fn find(&self, asset_path: &str) -> Option<SceneModelId> {
        self.by_path.get(asset_path).copied()
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Re-checks every loaded entry against the filesystem. Entries whose file
    /// has disappeared stay cached but stop resolving until it returns.
    /// Returns the number of entries still available.
    pub fn reload(&mut self) -> usize {
        let mut available = 0;

        for (_, model) in self.models.iter_mut() {
            let exists = model.file.is_file();

            if model.available && !exists {
                log::warn!(
                    "Geometry for {} is gone: {}",
                    model.asset_path,
                    model.file.display()
                );
            }

            model.available = exists;
            available += exists as usize;
        }

        log::debug!("Reloaded {} libraries, {} available", self.len(), available);
        available
    }
}

impl AssetResolver for AssetLibrary {
    fn resolve_or_load(&mut self, asset_path: &str) -> Option<SceneModelId> {
        if let Some(id) = self.find(asset_path) {
            let model = self.models.get_mut(id)?;

            if !model.available {
                model.available = model.file.is_file();
            }

            return model.available.then_some(id);
        }

        let file = self.file_for(asset_path);

        if !file.is_file() {
            log::debug!("No geometry for {} at {}", asset_path, file.display());
            return None;
        }

        let name = Path::new(asset_path)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| asset_path.to_string());

        let id = self.models.alloc(SceneModel::new(name, asset_path, file));
        self.by_path.insert(asset_path.to_string(), id);

        Some(id)
    }

    fn geometry_name(&self, id: SceneModelId) -> Option<&str> {
        self.get(id).map(|model| model.name.as_str())
    }
}
