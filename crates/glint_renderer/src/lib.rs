//! Glint Renderer - CPU ray tracing
//!
//! Casts one ray per pixel from a camera through a virtual viewport and
//! shades hits with direct lighting, hard shadows and recursive mirror
//! reflection.

mod camera;
mod export;
mod renderer;
mod tracer;

pub use camera::{Camera, Viewport, MAX_PITCH};
pub use export::{save_image, write_ppm, ExportError, ExportResult};
pub use renderer::{render, render_pixel, ImageBuffer, RenderConfig};
pub use tracer::{direct_lighting, shade, trace, trace_color, HitRecord};

/// Re-export the scene and math types the renderer works with
pub use glint_core::{Color, Scene};
pub use glint_math::{Ray, Vec3};
