//! Imports Unreal Engine map exports (FModel `.json`) as placed objects: static
//! and instanced meshes resolved through an asset library, and lights.

pub mod asset;
pub mod config;
pub mod error;
pub mod import;
pub mod lighting;
pub mod math;
pub mod registry;
pub mod scene_graph;

pub use asset::{AssetLibrary, AssetResolver};
pub use config::ImportConfig;
pub use error::ImportError;
pub use import::{ImportReport, MapImporter};
pub use scene_graph::Scene;
