//! Surface material description.

use glint_math::Vec3;

/// Color type alias (RGB channels in the 0-255 range)
pub type Color = Vec3;

/// Plain white, used by lights that carry no display color.
pub const WHITE: Color = Vec3::splat(255.0);

/// Material shared by every primitive.
///
/// A material without a base color marks a procedural (checker) surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Fraction of the reflected color added to the base color (0-1)
    pub reflectivity: f32,

    /// Solid base color, or `None` for a procedural surface
    pub color: Option<Color>,
}

impl Material {
    /// Create a solid-colored material.
    pub fn new(reflectivity: f32, color: Color) -> Self {
        Self {
            reflectivity,
            color: Some(color),
        }
    }

    /// Create a material whose color comes from the checker pattern.
    pub fn checker(reflectivity: f32) -> Self {
        Self {
            reflectivity,
            color: None,
        }
    }

    /// True if the surface color is computed rather than stored.
    pub fn is_procedural(&self) -> bool {
        self.color.is_none()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(0.0, WHITE)
    }
}
