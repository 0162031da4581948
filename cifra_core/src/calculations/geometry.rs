//! # Geometry Calculations
//!
//! Areas, perimeters, volumes, and surface areas for the shapes offered by
//! the geometry calculators. Plane shapes fill `area`/`perimeter`, solids
//! fill `volume`/`surface_area`; the unused fields stay `None`.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input for the geometry calculator, one variant per shape.
///
/// ## JSON Example
///
/// ```json
/// { "shape": "triangle", "a": 3.0, "b": 4.0, "c": 5.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum ShapeInput {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
    /// Triangle by its three side lengths (Heron's formula)
    Triangle { a: f64, b: f64, c: f64 },
    Sphere { radius: f64 },
    Cylinder { radius: f64, height: f64 },
    RectangularPrism { width: f64, height: f64, depth: f64 },
}

impl ShapeInput {
    /// The kebab-case shape name (matches the serde tag)
    pub fn shape_name(&self) -> &'static str {
        match self {
            ShapeInput::Circle { .. } => "circle",
            ShapeInput::Rectangle { .. } => "rectangle",
            ShapeInput::Triangle { .. } => "triangle",
            ShapeInput::Sphere { .. } => "sphere",
            ShapeInput::Cylinder { .. } => "cylinder",
            ShapeInput::RectangularPrism { .. } => "rectangular-prism",
        }
    }

    fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            ShapeInput::Circle { radius } => vec![("radius", radius)],
            ShapeInput::Rectangle { width, height } => {
                vec![("width", width), ("height", height)]
            }
            ShapeInput::Triangle { a, b, c } => vec![("a", a), ("b", b), ("c", c)],
            ShapeInput::Sphere { radius } => vec![("radius", radius)],
            ShapeInput::Cylinder { radius, height } => {
                vec![("radius", radius), ("height", height)]
            }
            ShapeInput::RectangularPrism {
                width,
                height,
                depth,
            } => vec![("width", width), ("height", height), ("depth", depth)],
        }
    }

    /// All dimensions must be finite and strictly positive; triangles must
    /// additionally satisfy the triangle inequality.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, dimension) in self.dimensions() {
            if !dimension.is_finite() {
                return Err(CalcError::out_of_domain(
                    field,
                    dimension.to_string(),
                    "Dimension must be a finite number",
                ));
            }
            if dimension <= 0.0 {
                return Err(CalcError::out_of_domain(
                    field,
                    dimension.to_string(),
                    "Dimension must be positive",
                ));
            }
        }
        if let ShapeInput::Triangle { a, b, c } = *self {
            if a + b <= c || a + c <= b || b + c <= a {
                return Err(CalcError::out_of_domain(
                    "a, b, c",
                    format!("{}, {}, {}", a, b, c),
                    "Side lengths do not satisfy the triangle inequality",
                ));
            }
        }
        Ok(())
    }
}

/// Result of a geometry calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perimeter: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_area: Option<f64>,
}

impl GeometryResult {
    fn plane(area: f64, perimeter: f64) -> Self {
        Self {
            area: Some(area),
            perimeter: Some(perimeter),
            volume: None,
            surface_area: None,
        }
    }

    fn solid(volume: f64, surface_area: f64) -> Self {
        Self {
            area: None,
            perimeter: None,
            volume: Some(volume),
            surface_area: Some(surface_area),
        }
    }
}

/// Compute the measures for a shape.
pub fn calculate(input: &ShapeInput) -> CalcResult<GeometryResult> {
    input.validate()?;

    use std::f64::consts::PI;
    Ok(match *input {
        ShapeInput::Circle { radius } => {
            GeometryResult::plane(PI * radius * radius, 2.0 * PI * radius)
        }
        ShapeInput::Rectangle { width, height } => {
            GeometryResult::plane(width * height, 2.0 * (width + height))
        }
        ShapeInput::Triangle { a, b, c } => {
            let s = (a + b + c) / 2.0;
            let area = (s * (s - a) * (s - b) * (s - c)).sqrt();
            GeometryResult::plane(area, a + b + c)
        }
        ShapeInput::Sphere { radius } => GeometryResult::solid(
            4.0 / 3.0 * PI * radius.powi(3),
            4.0 * PI * radius * radius,
        ),
        ShapeInput::Cylinder { radius, height } => GeometryResult::solid(
            PI * radius * radius * height,
            2.0 * PI * radius * (radius + height),
        ),
        ShapeInput::RectangularPrism {
            width,
            height,
            depth,
        } => GeometryResult::solid(
            width * height * depth,
            2.0 * (width * height + width * depth + height * depth),
        ),
    })
}
