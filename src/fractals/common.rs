use serde::{Deserialize, Serialize};

use crate::core::{
    color_map::{PaletteCoefficients, PaletteKind},
    image_utils::ImageSpecification,
};

use super::{
    coloring::ColoringKind,
    dynamics::ConvergenceParams,
    julia::JuliaParams,
    mandelbrot::MandelbrotParams,
    renderer::{RenderConfig, RenderLimits},
    variant::FractalVariant,
};

/// Top-level contents of a parameter file, e.g. `{"Julia": {...}}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum FractalParams {
    Mandelbrot(Box<MandelbrotParams>),
    Julia(Box<JuliaParams>),
}

impl FractalParams {
    /// Directory name used for this fractal's output files.
    pub fn project_name(&self) -> &'static str {
        match self {
            FractalParams::Mandelbrot(_) => "mandelbrot",
            FractalParams::Julia(_) => "julia",
        }
    }

    pub fn escape_time_params(&self) -> &dyn EscapeTimeParams {
        match self {
            FractalParams::Mandelbrot(inner_params) => &**inner_params,
            FractalParams::Julia(inner_params) => &**inner_params,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ColorMapParams {
    #[serde(default)]
    pub coloring: ColoringKind,
    #[serde(default)]
    pub palette: PaletteKind,
    #[serde(default)]
    pub coefficients: PaletteCoefficients,
}

/// Shared accessors for the escape-time fractal parameter files.
pub trait EscapeTimeParams {
    fn image_specification(&self) -> &ImageSpecification;

    fn convergence_params(&self) -> &ConvergenceParams;

    fn color_map(&self) -> &ColorMapParams;

    fn variant(&self) -> FractalVariant;

    /// Build the immutable configuration for a single render, with the
    /// deployment caps already applied.
    fn render_config(&self, limits: &RenderLimits) -> RenderConfig {
        let image_specification = self.image_specification();
        let convergence_params = self.convergence_params();
        let color_map = self.color_map();
        let mut config = RenderConfig {
            resolution: image_specification.resolution,
            scale: image_specification.scale(),
            pan: image_specification.pan,
            max_iter_count: convergence_params.max_iter_count,
            formula: convergence_params.formula,
            coloring: color_map.coloring,
            palette: color_map.palette,
            palette_coefficients: color_map.coefficients,
        };
        limits.apply(&mut config);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractals::iteration_formula::IterationFormula;
    use num::complex::Complex64;

    #[test]
    fn test_parse_julia_params_with_defaults() {
        let params: FractalParams = serde_json::from_str(
            r#"{
                "Julia": {
                    "image_specification": { "resolution": [64, 48] },
                    "constant_term": [-0.75, 0.14],
                    "convergence_params": { "max_iter_count": 50 },
                    "color_map": {}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(params.project_name(), "julia");

        let inner = params.escape_time_params();
        assert_eq!(
            inner.variant(),
            FractalVariant::Julia {
                constant_term: Complex64::new(-0.75, 0.14)
            }
        );

        let config = inner.render_config(&RenderLimits::default());
        assert_eq!(config.resolution, nalgebra::Vector2::new(64, 48));
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.pan, nalgebra::Vector2::new(0.0, 0.0));
        assert_eq!(config.max_iter_count, 50);
        assert_eq!(config.formula, IterationFormula::Quadratic);
        assert_eq!(config.coloring, ColoringKind::Distance);
        assert_eq!(config.palette, PaletteKind::Gray);
        assert_eq!(config.palette_coefficients, PaletteCoefficients::default());
    }

    #[test]
    fn test_parse_mandelbrot_params_with_limits() {
        let params: FractalParams = serde_json::from_str(
            r#"{
                "Mandelbrot": {
                    "image_specification": {
                        "resolution": [800, 600],
                        "zoom_level": 2.0,
                        "pan": [-0.5, 0.25]
                    },
                    "convergence_params": { "max_iter_count": 5000, "formula": "cubic" },
                    "color_map": {
                        "coloring": "escape_time",
                        "palette": "color",
                        "coefficients": { "a": -30, "b": 10 }
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(params.project_name(), "mandelbrot");
        let inner = params.escape_time_params();
        assert_eq!(inner.variant(), FractalVariant::Mandelbrot);

        let config = inner.render_config(&RenderLimits {
            max_iter_count: Some(1000),
            max_resolution: Some(512),
        });
        assert_eq!(config.resolution, nalgebra::Vector2::new(512, 512));
        assert_eq!(config.scale, 0.5);
        assert_eq!(config.pan, nalgebra::Vector2::new(-0.5, 0.25));
        assert_eq!(config.max_iter_count, 1000);
        assert_eq!(config.formula, IterationFormula::Cubic);
        assert_eq!(config.coloring, ColoringKind::EscapeTime);
        assert_eq!(config.palette, PaletteKind::Color);
        assert_eq!(config.palette_coefficients.a, -30.0);
        assert_eq!(config.palette_coefficients.b, 10.0);
    }
}
