//! Glint Core - scene description for the glint ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry**: `Sphere`, `Plane` and `PointLight` primitives with
//!   intersection, normal and color queries
//! - **Scene container**: `Scene`, holding objects and lights
//! - **Scene files**: a small line-based text format, plus a polling
//!   watcher for hot reload
//!
//! # Example
//!
//! ```ignore
//! use glint_core::scene_file::load_scene;
//!
//! let scene = load_scene("scenes/default.scene")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.object_count(),
//!     scene.light_count());
//! ```

pub mod geometry;
pub mod material;
pub mod scene;
pub mod scene_file;

// Re-export commonly used types
pub use geometry::{Object, Plane, PointLight, Primitive, Sphere, Surface};
pub use material::{Color, Material};
pub use scene::Scene;
pub use scene_file::{load_scene, load_scene_or_default, parse_scene, SceneWatcher};
