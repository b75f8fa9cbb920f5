//! Scene file support.
//!
//! Scenes are described in a small line-oriented text format, one primitive
//! per line:
//!
//! ```text
//! # cx cy cz radius reflectivity r g b
//! Sphere: 0 0 -5 1 0.0 255 0 0
//! # ox oy oz nx ny nz reflectivity [r g b]   (no color = checker)
//! Plane: 0 -1 0 0 1 0 0.0
//! # px py pz intensity reflectivity r g b
//! Light: 0 8 2 4.0 0.0 255 255 255
//! ```
//!
//! Values may be separated by whitespace, commas or parentheses, so
//! `Sphere: (0, 0, -5) 1 0.0 (255, 0, 0)` is equally valid.
//!
//! `SceneWatcher` polls a scene file for changes so a running frame driver
//! can swap in the new scene between frames.

mod loader;
mod parser;
mod watcher;

pub use loader::*;
pub use parser::*;
pub use watcher::*;
