//! Scene file parser.
//!
//! Line-by-line parsing; see the module docs of `scene_file` for the format.

use glint_math::{vector, Vec3};
use thiserror::Error;

use crate::geometry::{Plane, PointLight, Sphere};
use crate::material::{Color, Material};
use crate::scene::Scene;

/// Errors that can occur during scene file parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid number format at line {line}: {value}")]
    InvalidNumber { line: usize, value: String },

    #[error("Unknown primitive '{name}' at line {line}")]
    UnknownPrimitive { line: usize, name: String },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse scene file contents into a scene.
pub fn parse_scene(content: &str) -> ParseResult<Scene> {
    SceneParser::new(content).parse()
}

/// Scene file parser.
pub struct SceneParser<'a> {
    content: &'a str,
    current_line: usize,
}

impl<'a> SceneParser<'a> {
    /// Create a new parser from file contents.
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            current_line: 0,
        }
    }

    /// Parse every line and collect the primitives into a scene.
    pub fn parse(&mut self) -> ParseResult<Scene> {
        let mut scene = Scene::new();

        for (index, raw) in self.content.lines().enumerate() {
            self.current_line = index + 1;

            // Strip trailing comments
            let line = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (kind, rest) = line.split_once(':').ok_or_else(|| ParseError::Parse {
                line: self.current_line,
                message: format!("Expected '<Primitive>: values' in: {}", line),
            })?;
            let values = self.parse_numbers(rest)?;

            match kind.trim().to_ascii_lowercase().as_str() {
                "sphere" => scene.add_object(self.parse_sphere(&values)?),
                "plane" => scene.add_object(self.parse_plane(&values)?),
                "light" => scene.add_light(self.parse_light(&values)?),
                _ => {
                    return Err(ParseError::UnknownPrimitive {
                        line: self.current_line,
                        name: kind.trim().to_string(),
                    })
                }
            }
        }

        log::debug!(
            "Parsed scene: {} objects, {} lights",
            scene.object_count(),
            scene.light_count()
        );

        Ok(scene)
    }

    /// Split a value list on whitespace, commas and parentheses.
    fn parse_numbers(&self, text: &str) -> ParseResult<Vec<f32>> {
        text.split(|c: char| c.is_whitespace() || matches!(c, ',' | '(' | ')'))
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f32>().map_err(|_| ParseError::InvalidNumber {
                    line: self.current_line,
                    value: s.to_string(),
                })
            })
            .collect()
    }

    fn expect_count(&self, kind: &str, values: &[f32], allowed: &[usize]) -> ParseResult<()> {
        if allowed.contains(&values.len()) {
            return Ok(());
        }

        let expected = allowed
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" or ");
        Err(ParseError::Parse {
            line: self.current_line,
            message: format!("{} expects {} values, got {}", kind, expected, values.len()),
        })
    }

    fn parse_sphere(&self, v: &[f32]) -> ParseResult<Sphere> {
        self.expect_count("Sphere", v, &[8])?;

        let radius = v[3];
        if radius <= 0.0 || radius.is_nan() {
            return Err(ParseError::Parse {
                line: self.current_line,
                message: format!("Sphere radius must be positive, got {}", radius),
            });
        }

        Ok(Sphere::new(
            Vec3::new(v[0], v[1], v[2]),
            radius,
            Material::new(v[4], color(&v[5..8])),
        ))
    }

    fn parse_plane(&self, v: &[f32]) -> ParseResult<Plane> {
        self.expect_count("Plane", v, &[7, 10])?;

        let material = if v.len() == 10 {
            Material::new(v[6], color(&v[7..10]))
        } else {
            Material::checker(v[6])
        };

        let plane = Plane::new(
            Vec3::new(v[0], v[1], v[2]),
            Vec3::new(v[3], v[4], v[5]),
            material,
        );

        if !plane.is_horizontal() {
            log::warn!(
                "Line {}: plane normal {} is not vertical; it will be rendered as a horizontal plane",
                self.current_line,
                plane.normal
            );
        }

        Ok(plane)
    }

    fn parse_light(&self, v: &[f32]) -> ParseResult<PointLight> {
        self.expect_count("Light", v, &[8])?;

        let intensity = v[3];
        if intensity <= 0.0 {
            log::warn!(
                "Line {}: light intensity {} is not positive",
                self.current_line,
                intensity
            );
        }

        Ok(PointLight::new(
            Vec3::new(v[0], v[1], v[2]),
            intensity,
            Material::new(v[4], color(&v[5..8])),
        ))
    }
}

/// Build a color from three channels, clamped to [0, 255].
fn color(channels: &[f32]) -> Color {
    vector::clamp_color(Color::new(channels[0], channels[1], channels[2]))
}
