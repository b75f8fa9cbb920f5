//! Simple ray tracer example.
//!
//! Renders the built-in scene and saves it in PPM format.

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use glint_renderer::{render, write_ppm, Camera, RenderConfig, Scene, Vec3};

fn main() {
    env_logger::init();

    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let scene = Scene::default_scene();
    println!(
        "Scene has {} objects and {} lights",
        scene.object_count(),
        scene.light_count()
    );

    let camera = Camera::new(
        Vec3::new(0.0, 0.0, 1.0),  // position
        Vec3::new(0.0, 0.5, -1.0), // look_at
        90.0,
        600,
        400,
    );

    let config = RenderConfig {
        max_depth: 3,
        ..Default::default()
    };

    println!(
        "Rendering {}x{} with {} bounces...",
        camera.image_width(),
        camera.image_height(),
        config.max_depth
    );

    let start = Instant::now();
    let image = render(&camera, &scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    let file = File::create(filename).expect("Failed to create output file");
    write_ppm(&image, BufWriter::new(file)).expect("Failed to save image");
    println!("Saved to {}", filename);
}
