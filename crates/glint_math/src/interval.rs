/// A closed range of real values, used for accepted hit distances and
/// color channel bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Distances a ray may report for a valid hit: (epsilon, +inf).
    pub const HIT: Interval = Interval {
        min: crate::HIT_EPSILON,
        max: f32::INFINITY,
    };

    /// Valid 8-bit color channel range.
    pub const COLOR: Interval = Interval {
        min: 0.0,
        max: 255.0,
    };
}
