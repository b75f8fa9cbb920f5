use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use glint_core::{load_scene_or_default, Scene, SceneWatcher};
use glint_math::Vec3;
use glint_renderer::{render, save_image, Camera, RenderConfig};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "glint", rename_all = "kebab-case")]
struct Opt {
    /// Output image width in pixels
    #[structopt(long, default_value = "300")]
    pub width: u32,
    /// Output image height in pixels
    #[structopt(long, default_value = "200")]
    pub height: u32,
    /// Maximum number of mirror bounces
    #[structopt(long, default_value = "3")]
    pub max_depth: u32,
    /// Field of view in degrees
    #[structopt(long, default_value = "90")]
    pub fov: f32,
    /// Scene file; the built-in scene is used when omitted
    #[structopt(long, parse(from_os_str))]
    pub scene: Option<PathBuf>,
    /// Where to write the image; the format follows the extension
    #[structopt(short, long, parse(from_os_str), default_value = "render.png")]
    pub output: PathBuf,
    #[structopt(long, default_value = "0,0,1", parse(try_from_str = parse_vec3))]
    pub position: Vec3,
    #[structopt(long, default_value = "0,0.5,-1", parse(try_from_str = parse_vec3))]
    pub look_at: Vec3,
    /// Degrees of yaw added to the orientation derived from --look-at
    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    pub yaw: f32,
    /// Degrees of pitch added to the orientation derived from --look-at
    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    pub pitch: f32,
    /// Re-render whenever the scene file changes
    #[structopt(short, long)]
    pub watch: bool,
    /// Scene file polling interval in milliseconds
    #[structopt(long, default_value = "500")]
    pub poll_ms: u64,
}

/// Parse `x,y,z` into a vector.
fn parse_vec3(s: &str) -> Result<Vec3> {
    let parts = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .with_context(|| format!("invalid number '{}' in '{}'", part.trim(), s))
        })
        .collect::<Result<Vec<f32>>>()?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => anyhow::bail!("expected x,y,z but got '{}'", s),
    }
}

fn build_camera(opts: &Opt) -> Camera {
    let mut camera = Camera::new(opts.position, opts.look_at, opts.fov, opts.width, opts.height);
    if opts.yaw != 0.0 || opts.pitch != 0.0 {
        camera.rotate(opts.yaw, opts.pitch);
    }
    camera
}

fn render_pass(camera: &Camera, scene: &Scene, config: &RenderConfig, output: &Path) -> Result<()> {
    let image = render(camera, scene, config);
    save_image(&image, output)
        .with_context(|| format!("Failed to save image to {}", output.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let opts = Opt::from_args();
    log::info!("Starting glint");

    let mut scene = Arc::new(match &opts.scene {
        Some(path) => load_scene_or_default(path),
        None => Scene::default_scene(),
    });

    let camera = build_camera(&opts);
    let config = RenderConfig {
        max_depth: opts.max_depth,
        ..Default::default()
    };

    render_pass(&camera, &scene, &config, &opts.output)?;

    if !opts.watch {
        return Ok(());
    }

    let Some(path) = &opts.scene else {
        log::warn!("--watch needs --scene; nothing to watch");
        return Ok(());
    };

    let mut watcher = SceneWatcher::new(path);
    let interval = Duration::from_millis(opts.poll_ms);
    log::info!("Watching {} for changes", watcher.path().display());

    loop {
        thread::sleep(interval);

        match watcher.poll() {
            Ok(Some(reloaded)) => {
                scene = Arc::new(reloaded);
                render_pass(&camera, &scene, &config, &opts.output)?;
            }
            Ok(None) => {}
            Err(e) => log::error!("Keeping previous scene: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vec3() {
        assert_eq!(parse_vec3("0,0.5,-1").unwrap(), Vec3::new(0.0, 0.5, -1.0));
        assert_eq!(parse_vec3(" 1 , 2 , 3 ").unwrap(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_parse_vec3_rejects_bad_input() {
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec3("1,2,3,4").is_err());
        assert!(parse_vec3("a,b,c").is_err());
    }

    #[test]
    fn test_options_defaults() {
        let opts = Opt::from_iter(["glint"]);
        assert_eq!((opts.width, opts.height), (300, 200));
        assert_eq!(opts.max_depth, 3);
        assert_eq!(opts.position, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(opts.look_at, Vec3::new(0.0, 0.5, -1.0));
        assert!(!opts.watch);
    }

    #[test]
    fn test_camera_from_options() {
        let opts = Opt::from_iter(["glint", "--width", "64", "--height", "32", "--yaw", "-10"]);
        let camera = build_camera(&opts);
        let reference = Camera::new(opts.position, opts.look_at, opts.fov, 64, 32);

        assert_eq!(camera.image_width(), 64);
        assert!((camera.yaw() - (reference.yaw() - 10.0)).abs() < 1e-4);
    }
}
