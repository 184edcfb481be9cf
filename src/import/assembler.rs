//! Turns a sequence of raw entity records into placed objects.

use std::fs;
use std::path::Path;

use glam::DMat4;
use indicatif::{ProgressBar, ProgressStyle};
use log::Level;
use serde::Serialize;
use serde_json::Value;

use crate::asset::resolver::AssetResolver;
use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::import::kind::EntityKind;
use crate::import::light::LightEntity;
use crate::import::record::RawEntityRecord;
use crate::import::static_mesh::MeshComponent;
use crate::import::{classify, Entity};
use crate::scene_graph::collection::CollectionId;
use crate::scene_graph::deferred::DeferredTask;
use crate::scene_graph::object3d::{ObjectData, ObjectId, RotationMode};
use crate::scene_graph::scene::Scene;
use crate::scene_graph::scene_model::SceneModelId;
use crate::scene_graph::transform::Transform;

/// Counters for one import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub placed_objects: usize,
    pub placed_lights: usize,
    /// Entities dropped for a blocking validity flag.
    pub skipped_invalid: usize,
    /// Entities whose asset could not be resolved.
    pub skipped_unresolved: usize,
    /// Records without a `Type` or of an unrecognized type.
    pub ignored_records: usize,
    pub had_warnings: bool,
}

/// Where a mesh placement's transform comes from.
enum Placement<'a> {
    /// Location, rotation and scale copied as-is.
    Components(&'a Transform),
    /// Composed world matrix, decomposed on the object.
    Matrix(DMat4),
}

pub struct MapImporter {
    config: ImportConfig,
}

impl MapImporter {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Imports the map at `path` into a new collection named after the file.
    /// Returns false if the file could not be read or parsed; individual entity
    /// failures do not count.
    pub fn import_map(
        &self,
        scene: &mut Scene,
        resolver: &mut impl AssetResolver,
        path: &Path,
    ) -> bool {
        match self.try_import_map(scene, resolver, path) {
            Ok(_) => true,
            Err(err) => {
                log::error!("{err}");
                false
            }
        }
    }

    pub fn try_import_map(
        &self,
        scene: &mut Scene,
        resolver: &mut impl AssetResolver,
        path: &Path,
    ) -> Result<ImportReport, ImportError> {
        let records = load_records(path)?;

        let collection_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let collection = scene.new_collection(collection_name);
        let root = scene.root_collection();
        scene.link_child_collection(root, collection);

        let report = self.import_records(scene, resolver, &records, collection);

        log::info!(
            "Imported {}: {} objects, {} lights, {} skipped",
            path.display(),
            report.placed_objects,
            report.placed_lights,
            report.skipped_invalid + report.skipped_unresolved
        );

        Ok(report)
    }

    /// Processes `records` in order, linking every placement into `collection`,
    /// then schedules one deferred library reload on the scene.
    pub fn import_records(
        &self,
        scene: &mut Scene,
        resolver: &mut impl AssetResolver,
        records: &[Value],
        collection: CollectionId,
    ) -> ImportReport {
        let mut report = ImportReport::default();
        let progress = self.progress_bar(records.len() as u64, scene, collection);

        for value in records {
            progress.inc(1);
            let record = RawEntityRecord::new(value);

            let Some(type_name) = record.entity_type() else {
                report.ignored_records += 1;
                continue;
            };

            let kind = EntityKind::from_type_name(type_name);

            let Some(entity) = classify(&record, kind) else {
                log::trace!("Ignoring entity of type {type_name}");
                report.ignored_records += 1;
                continue;
            };

            self.import_entity(scene, resolver, entity, collection, &mut report);
        }

        progress.finish_and_clear();

        // Freshly linked geometry can transiently lose its materials until the
        // libraries are reloaded once more.
        scene.schedule_deferred(DeferredTask::ReloadLibraries, self.config.reload_delay);

        report
    }

    fn import_entity(
        &self,
        scene: &mut Scene,
        resolver: &mut impl AssetResolver,
        entity: Entity,
        collection: CollectionId,
        report: &mut ImportReport,
    ) {
        let validity = entity.validity();

        if validity.is_invalid() {
            self.skip_diagnostic(format_args!(
                "Skipping instance of {}: {}",
                entity.name(),
                validity
            ));
            report.skipped_invalid += 1;
            return;
        }

        if validity.advisories().next().is_some() {
            log::debug!("{}: {}", entity.name(), validity);
        }

        match entity {
            Entity::StaticMesh(mesh) => {
                let placements = [Placement::Components(&mesh.component.transform)];
                self.import_mesh(scene, resolver, &mesh.component, placements, collection, report);
            }
            Entity::InstancedStaticMesh(mesh) => {
                let placements = mesh.world_matrices().map(Placement::Matrix);
                self.import_mesh(scene, resolver, &mesh.component, placements, collection, report);
            }
            Entity::Light(light) => {
                self.import_light(scene, &light, collection);
                report.placed_lights += 1;
            }
        }
    }

    fn import_mesh<'a>(
        &self,
        scene: &mut Scene,
        resolver: &mut impl AssetResolver,
        component: &MeshComponent,
        placements: impl IntoIterator<Item = Placement<'a>>,
        collection: CollectionId,
        report: &mut ImportReport,
    ) {
        // Validation guarantees a path on every valid mesh.
        let Some(asset_path) = component.asset_path.as_deref() else {
            report.skipped_invalid += 1;
            return;
        };

        let Some(model_id) = resolver.resolve_or_load(asset_path) else {
            log::warn!(
                "Skipping instance of {} due to import failure of {}",
                component.name,
                asset_path
            );
            report.skipped_unresolved += 1;
            report.had_warnings = true;
            return;
        };

        let name = resolver
            .geometry_name(model_id)
            .unwrap_or_else(|| asset_stem(asset_path))
            .to_string();

        for placement in placements {
            place_mesh(scene, model_id, &name, placement, collection);
            report.placed_objects += 1;
        }
    }

    fn import_light(&self, scene: &mut Scene, light: &LightEntity, collection: CollectionId) {
        let mut data = scene.new_light(light.name.as_str(), light.kind);
        data.color = light.color;

        let id = scene.new_object(light.name.as_str(), ObjectData::Light(data));

        if let Some(object) = scene.get_object_mut(id) {
            object.set_transform(&light.transform());
        }

        scene.link(collection, id);

        if self.config.link_lights_to_scene_root {
            let root = scene.root_collection();
            scene.link(root, id);
        }
    }

    fn skip_diagnostic(&self, message: std::fmt::Arguments) {
        let level = if self.config.verbose {
            Level::Info
        } else {
            Level::Debug
        };

        log::log!(level, "{message}");
    }

    fn progress_bar(&self, len: u64, scene: &Scene, collection: CollectionId) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len);

        if let Ok(style) = ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len}") {
            bar.set_style(style.progress_chars("=> "));
        }

        if let Some(collection) = scene.get_collection(collection) {
            bar.set_message(format!("Importing map \"{}\"", collection.name));
        }

        bar
    }
}

impl Default for MapImporter {
    fn default() -> Self {
        Self::new(ImportConfig::default())
    }
}

fn place_mesh(
    scene: &mut Scene,
    model_id: SceneModelId,
    name: &str,
    placement: Placement,
    collection: CollectionId,
) -> ObjectId {
    let id = scene.new_object(name, ObjectData::Mesh(model_id));

    if let Some(object) = scene.get_object_mut(id) {
        object.rotation_mode = RotationMode::Xyz;

        match placement {
            Placement::Components(transform) => object.set_transform(transform),
            Placement::Matrix(matrix) => object.set_matrix_world(matrix),
        }
    }

    scene.link(collection, id);
    id
}

/// Fallback placement name for `asset_path`: the asset's file stem.
fn asset_stem(asset_path: &str) -> &str {
    let file_name = asset_path.rsplit('/').next().unwrap_or(asset_path);
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem)
}

/// Reads a map export: a JSON document whose top level is an array of entity
/// records.
pub fn load_records(path: &Path) -> Result<Vec<Value>, ImportError> {
    let text = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value = serde_json::from_str(&text).map_err(|source| ImportError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match document {
        Value::Array(records) => Ok(records),
        _ => Err(ImportError::NotAnArray {
            path: path.to_path_buf(),
        }),
    }
}
