//! Frame rendering.
//!
//! Every pixel is a pure function of its coordinates, the camera, the scene
//! and the bounce depth, so rows are rendered in parallel with rayon, each
//! worker writing only its own row of the output buffer.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

use glint_core::{Color, Scene};
use rayon::prelude::*;

use crate::tracer::trace_color;
use crate::Camera;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum number of mirror bounces
    pub max_depth: u32,
    /// Color for pixels whose ray hits nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            background: Color::ZERO,
        }
    }
}

/// Render a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = camera.ray_for_pixel(x, y);
    trace_color(&ray, scene, config.max_depth, config.background)
}

/// Image buffer holding one clamped RGB color per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to packed RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Convert a color in [0, 255] to 8-bit channels.
pub(crate) fn color_to_rgb(color: Color) -> [u8; 3] {
    // `as u8` saturates, so out-of-range input cannot wrap
    [color.x as u8, color.y as u8, color.z as u8]
}

/// Render the entire scene to an image buffer.
///
/// The size of the image is the camera's output resolution.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let width = camera.image_width();
    let height = camera.image_height();
    let mut image = ImageBuffer::new(width, height);

    if width == 0 || height == 0 {
        log::warn!("Skipping render of empty {}x{} image", width, height);
        return image;
    }

    let start = Instant::now();
    let rows_done = AtomicU32::new(0);
    let report_every = (height / 10).max(1);

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, scene, x as u32, y as u32, config);
            }

            let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
            if done % report_every == 0 {
                log::debug!("Progress: {:.2}%", done as f32 / height as f32 * 100.0);
            }
        });

    log::info!(
        "Rendered {}x{} ({} objects, {} lights, depth {}) in {:?}",
        width,
        height,
        scene.object_count(),
        scene.light_count(),
        config.max_depth,
        start.elapsed()
    );

    image
}
