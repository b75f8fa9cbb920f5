//! Closest-hit search and shading.
//!
//! Shading is a small Whitted-style model: the surface color, plus the
//! mirror reflection weighted by the material's reflectivity, scaled by a
//! scalar lighting term summed over all unoccluded point lights.
//!
//! The light falloff is `intensity / (4 * pi * sqrt(distance))`, and only
//! spheres get the `N.L` factor. Both are kept as-is for visual parity with
//! the reference renders; neither is physically based.

use std::f32::consts::PI;

use glint_core::{Color, Primitive, Scene};
use glint_math::{vector, Ray, Vec3, HIT_EPSILON};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Distance along the ray
    pub distance: f32,
    /// The primitive that was hit
    pub object: Primitive<'a>,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal of `object` at `point`
    pub normal: Vec3,
}

/// Find the closest primitive hit by `ray`.
///
/// Ties keep the primitive that came first in `objects`.
pub fn trace<'a, I>(ray: &Ray, objects: I) -> Option<HitRecord<'a>>
where
    I: IntoIterator<Item = Primitive<'a>>,
{
    let mut closest: Option<(f32, Primitive<'a>)> = None;

    for object in objects {
        if let Some(t) = object.intersect(ray) {
            if closest.map_or(true, |(nearest, _)| t < nearest) {
                closest = Some((t, object));
            }
        }
    }

    closest.map(|(distance, object)| {
        let point = ray.at(distance);
        HitRecord {
            distance,
            object,
            point,
            normal: object.normal_at(point),
        }
    })
}

/// Scalar lighting at `point` (already offset from the surface) on `object`.
///
/// Shadow rays only test non-light geometry; a light behind an occluder
/// contributes nothing.
pub fn direct_lighting(point: Vec3, normal: Vec3, object: Primitive<'_>, scene: &Scene) -> f32 {
    let mut lighting = 0.0;

    for light in scene.lights() {
        let to_light = light.position - point;
        let distance = to_light.length();
        let Some(direction) = vector::try_unit(to_light) else {
            continue;
        };

        let shadow_ray = Ray::new(point, direction);
        if let Some(blocker) = trace(&shadow_ray, scene.geometry()) {
            if blocker.distance < distance {
                continue;
            }
        }

        let mut contribution = light.intensity / (4.0 * PI * distance.sqrt());
        if object.is_sphere() {
            contribution *= vector::clamp(normal.dot(direction), 0.0, f32::INFINITY);
        }
        lighting += contribution;
    }

    lighting
}

/// Color seen along `ray`, given that it hit `hit`.
///
/// `depth` bounds the number of mirror bounces; at zero no reflection ray
/// is cast. The reflection direction is the nudged hit point, taken as a
/// vector from the world origin, mirrored about the normal.
///
/// Every level clamps its result to [0, 255] per channel, so a reflected
/// color is already in range before it is weighted and lit by the surface
/// that reflects it.
pub fn shade(ray: &Ray, hit: &HitRecord<'_>, scene: &Scene, depth: u32) -> Color {
    // Lights are drawn flat
    if hit.object.is_light() {
        return hit.object.color_at(hit.point);
    }

    let point = ray.at(hit.distance);
    let nudged = point + hit.normal * HIT_EPSILON;

    let mut color = hit.object.color_at(point);
    let lighting = direct_lighting(nudged, hit.normal, hit.object, scene);

    if depth > 0 {
        if let Some(direction) = vector::try_unit(vector::reflect(nudged, hit.normal)) {
            let reflected_ray = Ray::new(nudged, direction);
            if let Some(reflected_hit) = trace(&reflected_ray, scene.all_hittable()) {
                let reflected = shade(&reflected_ray, &reflected_hit, scene, depth - 1);
                color += reflected * hit.object.material().reflectivity;
            }
        }
    }

    vector::clamp_color(color * lighting)
}

/// Trace `ray` into the scene and shade the closest hit, or return `background`.
pub fn trace_color(ray: &Ray, scene: &Scene, depth: u32, background: Color) -> Color {
    match trace(ray, scene.all_hittable()) {
        Some(hit) => shade(ray, &hit, scene, depth),
        None => background,
    }
}
