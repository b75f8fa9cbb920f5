//! Horizontal ground plane.

use glint_math::{Interval, Ray, Vec3, HIT_EPSILON, PLANE_MAX_DISTANCE};

use super::Surface;
use crate::material::{Color, Material};

/// Checker color for cells whose x and z parity match.
pub const CHECKER_LIGHT: Color = Color::new(252.0, 204.0, 116.0);

/// Checker color for the remaining cells.
pub const CHECKER_DARK: Color = Color::new(30.0, 30.0, 30.0);

/// A horizontal plane.
///
/// Intersection only uses the vertical components of the ray and the plane
/// origin, so the plane is treated as `y = origin.y` whatever normal it
/// was given.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized, falling back to +Y.
    pub fn new(origin: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            origin,
            normal: normal.try_normalize().unwrap_or(Vec3::Y),
            material,
        }
    }

    /// Whether the normal lies along the vertical axis.
    pub fn is_horizontal(&self) -> bool {
        self.normal.x.abs() < 1e-6 && self.normal.z.abs() < 1e-6
    }

    /// Two-color checker pattern in plane-local x/z coordinates.
    fn checker(&self, point: Vec3) -> Color {
        let local = point - self.origin;
        let x = local.x.trunc() as i64;
        let z = local.z.trunc() as i64;

        if (x.rem_euclid(2) == 0) == (z.rem_euclid(2) == 0) {
            CHECKER_LIGHT
        } else {
            CHECKER_DARK
        }
    }
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Parallel to the plane: no solution
        if ray.direction.y == 0.0 {
            return None;
        }

        let t = -(ray.origin.y - self.origin.y) / ray.direction.y;
        Interval::new(HIT_EPSILON, PLANE_MAX_DISTANCE)
            .surrounds(t)
            .then_some(t)
    }

    fn normal_at(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn color_at(&self, point: Vec3) -> Color {
        match self.material.color {
            Some(color) => color,
            None => self.checker(point),
        }
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Plane {
        Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, Material::checker(0.0))
    }

    #[test]
    fn test_plane_hit_from_above() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y);
        let t = ground().intersect(&ray).unwrap();
        assert!((t - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(ground().intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_ray_misses() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert!(ground().intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_far_hit_is_bounded() {
        // Nearly grazing ray: hit is farther than the visible ground plane
        let direction = Vec3::new(1.0, -1e-8, 0.0).normalize();
        let ray = Ray::new(Vec3::ZERO, direction);
        assert!(ground().intersect(&ray).is_none());
    }

    #[test]
    fn test_checker_alternates_along_x() {
        let plane = ground();
        let a = plane.color_at(Vec3::new(0.5, -1.0, 0.5));
        let b = plane.color_at(Vec3::new(1.5, -1.0, 0.5));
        let c = plane.color_at(Vec3::new(2.5, -1.0, 0.5));

        assert_eq!(a, CHECKER_LIGHT);
        assert_eq!(b, CHECKER_DARK);
        assert_eq!(c, CHECKER_LIGHT);
    }

    #[test]
    fn test_checker_negative_coordinates() {
        let plane = ground();
        // trunc(-1.5) = -1 is odd, trunc(0.5) = 0 is even
        assert_eq!(plane.color_at(Vec3::new(-1.5, -1.0, 0.5)), CHECKER_DARK);
        assert_eq!(plane.color_at(Vec3::new(-2.5, -1.0, -2.5)), CHECKER_LIGHT);
    }

    #[test]
    fn test_solid_plane_color() {
        let color = Color::new(10.0, 20.0, 30.0);
        let plane = Plane::new(Vec3::ZERO, Vec3::Y, Material::new(0.0, color));
        assert_eq!(plane.color_at(Vec3::new(7.3, 0.0, -2.1)), color);
    }

    #[test]
    fn test_plane_normal_is_normalized() {
        let plane = Plane::new(Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0), Material::checker(0.0));
        assert_eq!(plane.normal_at(Vec3::ZERO), Vec3::Y);
        assert!(plane.is_horizontal());

        let tilted = Plane::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0), Material::checker(0.0));
        assert!(!tilted.is_horizontal());
    }
}
