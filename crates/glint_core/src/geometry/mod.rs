//! Renderable primitives.
//!
//! Every primitive answers the same three questions: where does a ray hit
//! it, what is the surface normal at a point, and what color is the surface
//! at a point. `Primitive` is the tagged union the tracer iterates over;
//! lights are part of it so primary rays can see them.

mod light;
mod plane;
mod sphere;

pub use light::{PointLight, LIGHT_RADIUS};
pub use plane::{Plane, CHECKER_DARK, CHECKER_LIGHT};
pub use sphere::Sphere;

use glint_math::{Ray, Vec3};

use crate::material::{Color, Material};

/// Capabilities shared by all primitives.
pub trait Surface {
    /// Distance along `ray` to the nearest accepted hit, if any.
    ///
    /// Degenerate cases (parallel rays, misses, NaN input) return `None`.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward surface normal at `point` (unit length).
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Surface color at `point`.
    fn color_at(&self, point: Vec3) -> Color;

    /// The material of this surface.
    fn material(&self) -> &Material;
}

/// Borrowed view of any hittable primitive in a scene.
#[derive(Clone, Copy, Debug)]
pub enum Primitive<'a> {
    Sphere(&'a Sphere),
    Plane(&'a Plane),
    Light(&'a PointLight),
}

impl<'a> Primitive<'a> {
    fn surface(&self) -> &'a dyn Surface {
        match *self {
            Primitive::Sphere(sphere) => sphere,
            Primitive::Plane(plane) => plane,
            Primitive::Light(light) => light,
        }
    }

    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        self.surface().intersect(ray)
    }

    #[inline]
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        self.surface().normal_at(point)
    }

    #[inline]
    pub fn color_at(&self, point: Vec3) -> Color {
        self.surface().color_at(point)
    }

    #[inline]
    pub fn material(&self) -> &'a Material {
        self.surface().material()
    }

    /// The light behind this primitive, if it is one.
    pub fn as_light(&self) -> Option<&'a PointLight> {
        match *self {
            Primitive::Light(light) => Some(light),
            _ => None,
        }
    }

    pub fn is_light(&self) -> bool {
        self.as_light().is_some()
    }

    pub fn is_sphere(&self) -> bool {
        matches!(self, Primitive::Sphere(_))
    }
}

/// Owned, non-light geometry stored in a scene.
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Sphere(Sphere),
    Plane(Plane),
}

impl Object {
    /// Borrow this object as a hittable primitive.
    pub fn as_primitive(&self) -> Primitive<'_> {
        match self {
            Object::Sphere(sphere) => Primitive::Sphere(sphere),
            Object::Plane(plane) => Primitive::Plane(plane),
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<Plane> for Object {
    fn from(plane: Plane) -> Self {
        Object::Plane(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_dispatch() {
        let sphere = Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::new(0.0, Color::new(255.0, 0.0, 0.0)),
        );
        let light = PointLight::new(Vec3::new(0.0, 5.0, 0.0), 2.0, Material::default());

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let prim = Primitive::Sphere(&sphere);
        assert!(prim.intersect(&ray).is_some());
        assert!(prim.is_sphere());
        assert!(!prim.is_light());
        assert_eq!(prim.color_at(Vec3::ZERO), Color::new(255.0, 0.0, 0.0));

        let prim = Primitive::Light(&light);
        assert!(prim.is_light());
        assert_eq!(prim.as_light().map(|l| l.intensity), Some(2.0));
    }

    #[test]
    fn test_object_as_primitive() {
        let object: Object = Plane::new(Vec3::ZERO, Vec3::Y, Material::checker(0.0)).into();
        assert!(matches!(object.as_primitive(), Primitive::Plane(_)));
    }
}
