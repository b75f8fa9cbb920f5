//! High-level scene file loading.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::parser::{parse_scene, ParseError};
use crate::scene::Scene;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene file from disk.
///
/// # Example
///
/// ```ignore
/// use glint_core::scene_file::load_scene;
///
/// let scene = load_scene("scenes/mirrors.scene")?;
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let scene = parse_scene(&content)?;

    log::info!(
        "Loaded scene {}: {} objects, {} lights",
        path.display(),
        scene.object_count(),
        scene.light_count()
    );

    Ok(scene)
}

/// Load a scene file, falling back to the default scene on any error.
pub fn load_scene_or_default<P: AsRef<Path>>(path: P) -> Scene {
    let path = path.as_ref();
    match load_scene(path) {
        Ok(scene) => scene,
        Err(e) => {
            log::warn!(
                "Failed to load scene {}: {}; using the default scene",
                path.display(),
                e
            );
            Scene::default_scene()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_scene(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("glint_loader_{}_{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_scene_from_file() {
        let path = temp_scene("ok.scene", "Sphere: 0 0 -5 1 0 255 0 0\nLight: 0 5 0 2 0 255 255 255\n");

        let scene = load_scene(&path).unwrap();
        assert_eq!(scene.object_count(), 1);
        assert_eq!(scene.light_count(), 1);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_scene("/definitely/not/a/real/file.scene").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_bad_file_is_parse_error() {
        let path = temp_scene("bad.scene", "Sphere: 1 2\n");
        let err = load_scene(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_fallback_to_default_scene() {
        let _ = env_logger::builder().is_test(true).try_init();

        let scene = load_scene_or_default("/definitely/not/a/real/file.scene");
        assert_eq!(scene, Scene::default_scene());
    }
}
