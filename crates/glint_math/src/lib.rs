// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod ray;
pub mod vector;

pub use interval::Interval;
pub use ray::Ray;

/// Minimum accepted hit distance. Anything closer is treated as a
/// self-intersection of the surface the ray left from.
pub const HIT_EPSILON: f32 = 0.001;

/// Farthest distance at which a horizontal plane still counts as hit.
pub const PLANE_MAX_DISTANCE: f32 = 1e6;
