use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use umap_importer::registry::{self, MAP_IMPORT_OPERATOR};
use umap_importer::scene_graph::DeferredTask;
use umap_importer::{AssetLibrary, ImportConfig, ImportReport, MapImporter, Scene};

/// Imports Unreal Engine map exports (FModel .json) into a scene.
#[derive(Parser, Debug)]
#[command(name = "umap-importer", version)]
struct Args {
    /// Map exports to import, in order.
    #[arg(required = true)]
    maps: Vec<PathBuf>,

    /// Directory with converted geometry for the map's assets.
    #[arg(short, long)]
    asset_dir: PathBuf,

    /// Extension of the converted geometry files.
    #[arg(long, default_value = umap_importer::asset::library::DEFAULT_GEOMETRY_EXTENSION)]
    extension: String,

    /// Report every skipped entity.
    #[arg(short, long)]
    verbose: bool,

    /// Show a progress bar per map.
    #[arg(long)]
    progress: bool,

    /// Do not link lights into the root collection.
    #[arg(long)]
    no_root_lights: bool,

    /// Write a JSON import report to this file.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct MapResult {
    map: PathBuf,
    imported: bool,
    report: Option<ImportReport>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = Args::parse();

    registry::init();
    let result = run(args);
    registry::shutdown();

    result
}

fn run(args: Args) -> Result<()> {
    let operator =
        registry::operator(MAP_IMPORT_OPERATOR).context("Map import operator is not registered")?;

    let mut library = AssetLibrary::open(&args.asset_dir)
        .context("Failed to open asset library")?
        .with_extension(args.extension.as_str());

    let importer = MapImporter::new(ImportConfig {
        verbose: args.verbose,
        show_progress: args.progress,
        link_lights_to_scene_root: !args.no_root_lights,
        ..Default::default()
    });

    let mut scene = Scene::new();
    let mut results = Vec::with_capacity(args.maps.len());

    for map in &args.maps {
        if !operator.accepts(map) {
            log::warn!(
                "{} does not look like a .{} map export",
                map.display(),
                operator.file_extension
            );
        }

        let report = match importer.try_import_map(&mut scene, &mut library, map) {
            Ok(report) => Some(report),
            Err(err) => {
                log::error!("{:#}", anyhow::Error::from(err));
                None
            }
        };

        results.push(MapResult {
            map: map.clone(),
            imported: report.is_some(),
            report,
        });
    }

    while let Some(due) = scene.next_deferred_due() {
        std::thread::sleep(due.saturating_duration_since(Instant::now()));

        scene.run_deferred(Instant::now(), |task| match task {
            DeferredTask::ReloadLibraries => {
                library.reload();
            }
        });
    }

    log::info!(
        "Scene has {} objects using {} geometry assets",
        scene.objects.len(),
        library.len()
    );

    if results.iter().any(|result| result.report.as_ref().is_some_and(|r| r.had_warnings)) {
        log::warn!("Map import had warnings. Check the log for details.");
    }

    if let Some(path) = &args.report {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create report {}", path.display()))?;
        serde_json::to_writer_pretty(file, &results).context("Failed to write report")?;
    }

    let failed = results.iter().filter(|result| !result.imported).count();
    if failed > 0 {
        anyhow::bail!("{} of {} maps failed to import", failed, results.len());
    }

    Ok(())
}
