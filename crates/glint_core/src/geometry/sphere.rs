//! Sphere primitive for ray tracing.

use glint_math::{Interval, Ray, Vec3};

use super::Surface;
use crate::material::{Color, Material, WHITE};

/// A sphere primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            center,
            radius,
            material,
        }
    }
}

/// Nearest root of `|O + tD - C|^2 = r^2` for a unit direction `D`.
///
/// Only roots beyond the hit epsilon count; the smaller one wins.
pub(crate) fn nearest_root(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = 2.0 * ray.direction.dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = b * b - 4.0 * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let near = (-b - sqrtd) / 2.0;
    let far = (-b + sqrtd) / 2.0;

    [near, far]
        .into_iter()
        .find(|&t| Interval::HIT.surrounds(t))
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        nearest_root(ray, self.center, self.radius)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).try_normalize().unwrap_or(Vec3::Y)
    }

    fn color_at(&self, _point: Vec3) -> Color {
        self.material.color.unwrap_or(WHITE)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
