//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example load_scene -- scenes/default.scene

use std::env;

use glint_core::{load_scene, Object};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-scene-file>");
        println!("\nExamples:");
        println!("  cargo run --example load_scene -- scenes/default.scene");
        println!("  cargo run --example load_scene -- scenes/mirrors.scene");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene ===");
            println!("Objects: {}", scene.object_count());
            println!("Lights: {}", scene.light_count());

            println!("\n--- Objects ---");
            for (i, object) in scene.objects().iter().enumerate() {
                match object {
                    Object::Sphere(s) => println!(
                        "  [{}] Sphere at ({:.2}, {:.2}, {:.2}) r={:.2}, reflectivity {:.2}",
                        i, s.center.x, s.center.y, s.center.z, s.radius, s.material.reflectivity
                    ),
                    Object::Plane(p) => println!(
                        "  [{}] Plane at y={:.2}{}",
                        i,
                        p.origin.y,
                        if p.material.is_procedural() { " (checker)" } else { "" }
                    ),
                }
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights().iter().enumerate() {
                println!(
                    "  [{}] ({:.2}, {:.2}, {:.2}) intensity {:.2}",
                    i, light.position.x, light.position.y, light.position.z, light.intensity
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
