//! Free-standing vector helpers that glam does not provide in the shape the
//! tracer wants.

use crate::{Interval, Vec3};

/// Reflect `v` about the unit normal `n`.
///
/// The result is not normalized; normalize it before using it as a ray direction.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Clamp a scalar to [lo, hi].
#[inline]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    Interval::new(lo, hi).clamp(x)
}

/// Clamp every channel of a color to [0, 255].
#[inline]
pub fn clamp_color(c: Vec3) -> Vec3 {
    c.clamp(Vec3::splat(Interval::COLOR.min), Vec3::splat(Interval::COLOR.max))
}

/// Normalize `v`, or `None` when it has zero or non-finite length.
#[inline]
pub fn try_unit(v: Vec3) -> Option<Vec3> {
    v.try_normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_flips_normal_component() {
        let incoming = Vec3::new(1.0, -1.0, 0.0);
        let reflected = reflect(incoming, Vec3::Y);
        assert_eq!(reflected, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_head_on() {
        let reflected = reflect(Vec3::NEG_Z, Vec3::Z);
        assert_eq!(reflected, Vec3::Z);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.0, 255.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 255.0, 1.0), 255.0);
        assert!((lerp(10.0, 20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, f32::INFINITY), 0.0);
        assert_eq!(clamp(3.0, 0.0, 2.0), 2.0);
        assert_eq!(clamp(1.5, 0.0, 2.0), 1.5);
    }

    #[test]
    fn test_clamp_color_per_channel() {
        let c = clamp_color(Vec3::new(-20.0, 100.0, 900.0));
        assert_eq!(c, Vec3::new(0.0, 100.0, 255.0));
    }

    #[test]
    fn test_try_unit_zero_vector() {
        assert!(try_unit(Vec3::ZERO).is_none());
        assert!(try_unit(Vec3::new(f32::NAN, 0.0, 1.0)).is_none());

        let unit = try_unit(Vec3::new(0.0, 5.0, 0.0)).unwrap();
        assert_eq!(unit, Vec3::Y);
    }
}
