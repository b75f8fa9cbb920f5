//! Point light, visible to primary rays as a tiny sphere.

use glint_math::{Ray, Vec3};

use super::sphere::nearest_root;
use super::Surface;
use crate::material::{Color, Material, WHITE};

/// Radius of the sphere a light is drawn as.
pub const LIGHT_RADIUS: f32 = 0.01;

/// An omnidirectional point light.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
    /// Display color used when a ray sees the light directly
    pub material: Material,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: f32, material: Material) -> Self {
        Self {
            position,
            intensity,
            material,
        }
    }
}

impl Surface for PointLight {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        nearest_root(ray, self.position, LIGHT_RADIUS)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.position).try_normalize().unwrap_or(Vec3::Y)
    }

    fn color_at(&self, _point: Vec3) -> Color {
        self.material.color.unwrap_or(WHITE)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_is_hittable() {
        let light = PointLight::new(Vec3::new(0.0, 0.0, -3.0), 1.0, Material::default());

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let t = light.intersect(&ray).unwrap();
        assert!((t - (3.0 - LIGHT_RADIUS)).abs() < 1e-4);

        let ray = Ray::new(Vec3::new(0.1, 0.0, 0.0), Vec3::NEG_Z);
        assert!(light.intersect(&ray).is_none());
    }

    #[test]
    fn test_light_display_color() {
        let blue = Color::new(0.0, 0.0, 255.0);
        let light = PointLight::new(Vec3::ZERO, 4.0, Material::new(0.0, blue));
        assert_eq!(light.color_at(Vec3::ONE), blue);

        let plain = PointLight::new(Vec3::ZERO, 4.0, Material::checker(0.0));
        assert_eq!(plain.color_at(Vec3::ONE), WHITE);
    }
}
