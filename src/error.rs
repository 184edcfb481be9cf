use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Failed to read map file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Map file {} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Map file {} does not contain a top-level array of entities", path.display())]
    NotAnArray { path: PathBuf },
    #[error("Asset directory {} does not exist", .0.display())]
    MissingAssetDir(PathBuf),
}
