//! Source object paths to asset paths.
//!
//! Exported object paths look like `/Game/Props/SM_Rock.SM_Rock` or
//! `/Game/Props/SM_Rock.0`. Only the part before the first period is kept, so a
//! directory name containing a period is cut short as well.

pub const MESH_ASSET_EXTENSION: &str = "uasset";

/// Marks engine primitives (cubes, spheres, ...) that have no exported asset.
pub const BASIC_SHAPES_MARKER: &str = "BasicShapes";

/// Drops everything from the first period on.
pub fn split_object_path(object_path: &str) -> &str {
    object_path
        .split_once('.')
        .map_or(object_path, |(head, _)| head)
}

/// Lexically normalizes a path: unifies separators to `/`, drops empty and `.`
/// components and resolves `..` against preceding components.
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let absolute = unified.starts_with('/');
    let mut components: Vec<&str> = Vec::new();

    for component in unified.split('/') {
        match component {
            "" | "." => {}
            ".." => match components.last() {
                Some(&last) if last != ".." => {
                    components.pop();
                }
                _ if absolute => {}
                _ => components.push(".."),
            },
            component => components.push(component),
        }
    }

    let joined = components.join("/");

    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Asset path for a mesh object path, relative to the export root.
pub fn asset_path_from_object_path(object_path: &str) -> String {
    let stem = split_object_path(object_path);
    let normalized = normalize_path(&format!("{stem}.{MESH_ASSET_EXTENSION}"));

    match normalized.strip_prefix('/') {
        Some(relative) => relative.to_string(),
        None => normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_export_suffix_and_leading_separator() {
        assert_eq!(
            asset_path_from_object_path("/Game/Environment/Props/SM_Rock.0"),
            "Game/Environment/Props/SM_Rock.uasset"
        );
        assert_eq!(
            asset_path_from_object_path("/Game/SM_Wall.SM_Wall"),
            "Game/SM_Wall.uasset"
        );
    }

    #[test]
    fn path_without_suffix() {
        assert_eq!(asset_path_from_object_path("Game/SM_Door"), "Game/SM_Door.uasset");
    }

    #[test]
    fn only_first_period_counts() {
        assert_eq!(split_object_path("/Game/v1.2/SM_Pipe.0"), "/Game/v1");
        assert_eq!(
            asset_path_from_object_path("/Game/v1.2/SM_Pipe.0"),
            "Game/v1.uasset"
        );
    }

    #[test]
    fn normalizes_separators() {
        assert_eq!(
            asset_path_from_object_path("\\Game\\\\Props\\SM_Crate.0"),
            "Game/Props/SM_Crate.uasset"
        );
        assert_eq!(normalize_path("\\Game\\.\\Props\\SM_Crate"), "/Game/Props/SM_Crate");
        assert_eq!(normalize_path("/Game/Props/../SM_Crate"), "/Game/SM_Crate");
        assert_eq!(normalize_path("../a/./b/"), "../a/b");
    }
}
