//! Scene container.
//!
//! A scene is an ordered list of objects plus an ordered list of lights.
//! It is treated as an immutable value while a frame is being rendered;
//! reloading builds a new scene that replaces the old one between frames.

use glint_math::Vec3;

use crate::geometry::{Object, Plane, PointLight, Primitive, Sphere};
use crate::material::{Color, Material, WHITE};

/// Objects and lights to be rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<PointLight>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The scene used when no scene file is given or loading fails:
    /// three spheres (one a mirror) over a checker floor, lit by two lights.
    pub fn default_scene() -> Self {
        let mut scene = Self::new();

        scene.add_object(Sphere::new(
            Vec3::new(4.2, 0.5, -0.5),
            2.0,
            Material::new(1.0, Color::new(255.0, 25.0, 50.0)),
        ));
        scene.add_object(Sphere::new(
            Vec3::new(-2.2, 0.0, 0.0),
            2.0,
            Material::new(0.0, Color::new(30.0, 255.0, 100.0)),
        ));
        scene.add_object(Sphere::new(
            Vec3::new(0.0, -1.0, 0.5),
            0.5,
            Material::new(0.0, Color::new(60.0, 25.0, 255.0)),
        ));
        scene.add_object(Plane::new(
            Vec3::new(1.2, -1.0, 0.0),
            Vec3::Y,
            Material::checker(0.0),
        ));

        scene.add_light(PointLight::new(
            Vec3::new(6.0, 3.0, -5.0),
            1.0,
            Material::new(0.0, WHITE),
        ));
        scene.add_light(PointLight::new(
            Vec3::new(0.0, 8.0, 2.0),
            4.0,
            Material::new(0.0, WHITE),
        ));

        scene
    }

    /// Add a sphere or plane.
    pub fn add_object(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    /// Add a point light.
    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.lights.is_empty()
    }

    /// Every primitive a ray can hit, lights first.
    pub fn all_hittable(&self) -> impl Iterator<Item = Primitive<'_>> + Clone {
        self.lights
            .iter()
            .map(Primitive::Light)
            .chain(self.geometry())
    }

    /// Non-light geometry only, as seen by shadow rays.
    pub fn geometry(&self) -> impl Iterator<Item = Primitive<'_>> + Clone {
        self.objects.iter().map(Object::as_primitive)
    }
}
