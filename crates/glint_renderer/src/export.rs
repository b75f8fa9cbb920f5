//! Writing rendered frames to disk.

use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::renderer::{color_to_rgb, ImageBuffer};

/// Errors that can occur while exporting an image
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Result type for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Save `image` to `path`. The format is picked from the file extension.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> ExportResult<()> {
    let path = path.as_ref();
    let expected = image.width as usize * image.height as usize;

    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8()).ok_or(
        ExportError::BufferSize {
            expected,
            actual: image.pixels.len(),
        },
    )?;
    rgb.save(path)?;

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

/// Write `image` as a plain-text (P3) PPM.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = color_to_rgb(image.get(x, y));
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn two_by_one() -> ImageBuffer {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(255.0, 0.0, 0.0));
        image.set(1, 0, Color::new(0.0, 128.0, 255.0));
        image
    }

    #[test]
    fn test_write_ppm() {
        let mut out = Vec::new();
        write_ppm(&two_by_one(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["P3", "2 1", "255", "255 0 0", "0 128 255"]);
    }

    #[test]
    fn test_save_png_round_trip() {
        let path = std::env::temp_dir().join(format!("glint_export_{}.png", std::process::id()));

        save_image(&two_by_one(), &path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (2, 1));
        assert_eq!(loaded.get_pixel(1, 0).0, [0, 128, 255]);
    }

    #[test]
    fn test_mismatched_buffer_is_rejected() {
        let mut image = two_by_one();
        image.pixels.pop();

        let path = std::env::temp_dir().join("glint_export_bad.png");
        let err = save_image(&image, &path).unwrap_err();
        assert!(matches!(err, ExportError::BufferSize { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_unknown_extension_fails() {
        let path = std::env::temp_dir().join("glint_export.not_an_image");
        assert!(matches!(
            save_image(&two_by_one(), &path),
            Err(ExportError::Image(_))
        ));
    }
}
