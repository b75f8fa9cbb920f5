//! Camera for ray generation.
//!
//! Primary rays use a simplified perspective: a viewport sample `(x, y)`
//! becomes the point `(x, -y, 0)` and the ray direction is that point minus
//! the camera's view axis. Only the view axis `z` enters the direction; the
//! `x`/`y` basis vectors are kept for callers that move the camera.

use glint_math::{Ray, Vec3};

/// Pitch limit in degrees for mouse-look reorientation. The limit itself is
/// never reached; pitch stays strictly inside it.
pub const MAX_PITCH: f32 = 89.0;

/// How far inside `MAX_PITCH` a clamped pitch stops, in degrees.
const PITCH_MARGIN: f32 = 1e-3;

/// 2D sampling plane in camera space, one sample per output pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Half-extent along x, always 1
    pub width: f32,
    /// Half-extent along y
    pub height: f32,
    /// Sample x coordinate for each image column
    pub columns: Vec<f32>,
    /// Sample y coordinate for each image row
    pub rows: Vec<f32>,
}

impl Viewport {
    /// Build the sample grid for an image of `image_width` x `image_height`.
    ///
    /// The half-width is fixed at 1. The half-height is `1 / aspect`, scaled
    /// by `tan(vfov / 2)`, so the field of view only stretches the y extent.
    pub fn new(vfov: f32, image_width: u32, image_height: u32) -> Self {
        let aspect = image_width.max(1) as f32 / image_height.max(1) as f32;
        let width = 1.0;
        let height = (vfov.to_radians() / 2.0).tan() / aspect;

        Self {
            width,
            height,
            columns: linspace(-width, width, image_width),
            rows: linspace(-height, height, image_height),
        }
    }
}

/// `count` evenly spaced values from `start` to `end` inclusive.
fn linspace(start: f32, end: f32, count: u32) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f32;
            (0..count).map(|i| start + step * i as f32).collect()
        }
    }
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    look_target: Vec3,

    // Orientation in degrees
    yaw: f32,
    pitch: f32,

    // Orthonormal basis; z points from the target back to the camera
    x: Vec3,
    y: Vec3,
    z: Vec3,

    vfov: f32,
    image_width: u32,
    image_height: u32,
    viewport: Viewport,
}

impl Camera {
    /// Create a camera at `position` looking at `look_target`.
    ///
    /// `vfov` is in degrees; the output resolution fixes the aspect ratio and
    /// the number of viewport samples.
    pub fn new(
        position: Vec3,
        look_target: Vec3,
        vfov: f32,
        image_width: u32,
        image_height: u32,
    ) -> Self {
        let z = (position - look_target).try_normalize().unwrap_or(Vec3::Z);
        let (x, y) = basis(z);

        // Derive yaw/pitch from the view axis so rotation continues from here
        let yaw = z.z.atan2(z.x).to_degrees();
        let pitch = z.y.clamp(-1.0, 1.0).asin().to_degrees();

        Self {
            position,
            look_target,
            yaw,
            pitch,
            x,
            y,
            z,
            vfov,
            image_width,
            image_height,
            viewport: Viewport::new(vfov, image_width, image_height),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_target(&self) -> Vec3 {
        self.look_target
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// The camera basis `(x, y, z)`.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        (self.x, self.y, self.z)
    }

    pub fn vfov(&self) -> f32 {
        self.vfov
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Change the output resolution and rebuild the viewport samples.
    pub fn resize(&mut self, image_width: u32, image_height: u32) {
        self.image_width = image_width;
        self.image_height = image_height;
        self.viewport = Viewport::new(self.vfov, image_width, image_height);
    }

    /// Move the camera and its look target together.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
        self.look_target += delta;
    }

    /// Add yaw/pitch deltas in degrees. Pitch stays strictly within +/- `MAX_PITCH`.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.set_orientation(self.yaw + delta_yaw, self.pitch + delta_pitch);
    }

    /// Set an absolute yaw/pitch in degrees and rebuild the basis.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        let limit = MAX_PITCH - PITCH_MARGIN;
        self.pitch = pitch.clamp(-limit, limit);

        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let z = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();

        let (x, y) = basis(z);
        self.x = x;
        self.y = y;
        self.z = z;

        let distance = (self.position - self.look_target).length().max(1.0);
        self.look_target = self.position - z * distance;
    }

    /// Primary ray through viewport sample coordinates `(x, y)`.
    pub fn ray_for_sample(&self, x: f32, y: f32) -> Ray {
        // Image rows grow downward while +y is up in the scene
        let target = Vec3::new(x, -y, 0.0);
        let direction = (target - self.z).try_normalize().unwrap_or(-self.z);
        Ray::new(self.position, direction)
    }

    /// Primary ray for the pixel at image column `col` and row `row`.
    ///
    /// # Panics
    ///
    /// Panics if the pixel lies outside the image.
    pub fn ray_for_pixel(&self, col: u32, row: u32) -> Ray {
        let x = self.viewport.columns[col as usize];
        let y = self.viewport.rows[row as usize];
        self.ray_for_sample(x, y)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.5, -1.0), 90.0, 300, 200)
    }
}

/// x and y axes for the view axis `z`, using +Y as world up.
fn basis(z: Vec3) -> (Vec3, Vec3) {
    // Looking straight up or down leaves x undefined; pick one
    let x = Vec3::Y.cross(z).try_normalize().unwrap_or(Vec3::X);
    let y = z.cross(x);
    (x, y)
}
