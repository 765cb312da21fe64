use num::complex::Complex64;
use serde::{Deserialize, Serialize};

use super::{
    dynamics::{evaluate_dynamics, DynamicsResult, FractalPoint},
    iteration_formula::ComplexFunctionWithSlope,
};

/// Contrast of the distance squashing curve `1 - 1 / (k * x + 1)`.
pub const DISTANCE_CONTRAST: f64 = 3.0;

/// Selects how an orbit is turned into a normalized value on (nominally) [0, 1].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColoringKind {
    #[serde(alias = "escape")]
    EscapeTime,
    #[default]
    Distance,
}

impl ColoringKind {
    pub fn tracks_derivative(&self) -> bool {
        matches!(self, ColoringKind::Distance)
    }

    /// Evaluate the orbit of `point` and color it.
    ///
    /// `dist_max` is the real-plane width of one pixel, used to normalize distances.
    pub fn normalized_value<F: ComplexFunctionWithSlope>(
        &self,
        formula: &F,
        point: &FractalPoint,
        max_iter_count: u32,
        dist_max: f64,
    ) -> f64 {
        let result = evaluate_dynamics(formula, point, max_iter_count, self.tracks_derivative());
        match self {
            ColoringKind::EscapeTime => escape_time_value(&result, max_iter_count),
            ColoringKind::Distance => distance_estimate_value(
                result.z,
                result.derivative.unwrap_or(Complex64::new(1.0, 0.0)),
                dist_max,
            ),
        }
    }
}

/// `1 - i / max_iter_count`: one for points that start outside the escape
/// radius, zero for points that never escape.
pub fn escape_time_value(result: &DynamicsResult, max_iter_count: u32) -> f64 {
    let iter_count = result.escape_count.unwrap_or(max_iter_count);
    1.0 - iter_count as f64 / max_iter_count as f64
}

/**
 * Estimated distance from the orbit's start to the fractal boundary:
 * `|z| ln|z| / |z'|`.
 *
 * - `|z| = 0` has no logarithm; the distance is defined as zero.
 * - `|z'| = 0` means the orbit passed through a critical point; the distance
 *   is defined as infinite.
 */
pub fn distance_estimate(z: Complex64, derivative: Complex64) -> f64 {
    let za = z.norm();
    if za <= 0.0 {
        return 0.0;
    }
    let derivative_norm = derivative.norm();
    if derivative_norm == 0.0 {
        return f64::INFINITY;
    }
    za * (za.ln() / derivative_norm)
}

/// Squash a distance, measured in pixels of width `dist_max`, onto [0, 1).
/// The result is not clamped: orbits that end inside the unit circle yield
/// negative distances and leave that range.
pub fn distance_estimate_value(z: Complex64, derivative: Complex64, dist_max: f64) -> f64 {
    let dist = distance_estimate(z, derivative);
    -1.0 / (DISTANCE_CONTRAST * (dist / dist_max) + 1.0) + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractals::iteration_formula::IterationFormula;
    use approx::assert_relative_eq;

    fn result(escape_count: Option<u32>) -> DynamicsResult {
        DynamicsResult {
            escape_count,
            z: Complex64::new(0.0, 0.0),
            derivative: None,
        }
    }

    #[test]
    fn test_escape_time_values() {
        assert_eq!(escape_time_value(&result(Some(0)), 100), 1.0);
        assert_relative_eq!(escape_time_value(&result(Some(1)), 100), 0.99);
        assert_eq!(escape_time_value(&result(Some(50)), 100), 0.5);
        assert_eq!(escape_time_value(&result(None), 100), 0.0);
    }

    #[test]
    fn test_escape_time_decreases_with_escape_count() {
        let mut previous = f64::INFINITY;
        for count in 0..=64 {
            let value = escape_time_value(&result(Some(count)), 64);
            assert!(value < previous);
            previous = value;
        }
    }

    #[test]
    fn test_distance_at_origin_is_zero() {
        let origin = Complex64::new(0.0, 0.0);
        assert_eq!(distance_estimate(origin, Complex64::new(3.0, 0.0)), 0.0);
        assert_eq!(distance_estimate(origin, origin), 0.0);

        let value = distance_estimate_value(origin, Complex64::new(3.0, 0.0), 0.01);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_distance_with_zero_derivative_is_far() {
        let z = Complex64::new(3.0, 0.0);
        let zero = Complex64::new(0.0, 0.0);
        assert_eq!(distance_estimate(z, zero), f64::INFINITY);
        assert_eq!(distance_estimate_value(z, zero, 0.01), 1.0);
        // |z| = 1 would be 0 / 0 without the critical-point rule.
        assert_eq!(distance_estimate(Complex64::new(0.0, 1.0), zero), f64::INFINITY);
    }

    #[test]
    fn test_distance_normalization() {
        // dist = e * ln(e) / e = 1
        let z = Complex64::new(std::f64::consts::E, 0.0);
        let derivative = Complex64::new(0.0, std::f64::consts::E);
        assert_relative_eq!(distance_estimate(z, derivative), 1.0, epsilon = 1e-15);

        // One pixel away: 1 - 1 / (3 + 1)
        assert_relative_eq!(
            distance_estimate_value(z, derivative, 1.0),
            0.75,
            epsilon = 1e-15
        );
        // Far away approaches one, close approaches zero.
        assert!(distance_estimate_value(z, derivative, 1e-9) > 0.999);
        assert!(distance_estimate_value(z, derivative, 1e9) < 1e-8);
    }

    #[test]
    fn test_coloring_dispatch() {
        let formula = IterationFormula::Quadratic;
        let point = FractalPoint {
            z0: Complex64::new(0.0, 0.0),
            c: Complex64::new(5.0, 5.0),
        };
        let value = ColoringKind::EscapeTime.normalized_value(&formula, &point, 100, 0.01);
        assert_relative_eq!(value, 0.99);

        // After one step z = c and z' = 2 * 0 = 0: a critical point, so the distance is infinite.
        let value = ColoringKind::Distance.normalized_value(&formula, &point, 100, 0.01);
        assert_eq!(value, 1.0);

        let inside = FractalPoint {
            z0: Complex64::new(0.0, 0.0),
            c: Complex64::new(0.0, 0.0),
        };
        let value = ColoringKind::Distance.normalized_value(&formula, &inside, 100, 0.01);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_coloring_names() {
        let kind: ColoringKind = serde_json::from_str("\"escape\"").unwrap();
        assert_eq!(kind, ColoringKind::EscapeTime);
        let kind: ColoringKind = serde_json::from_str("\"escape_time\"").unwrap();
        assert_eq!(kind, ColoringKind::EscapeTime);
        assert!(ColoringKind::default().tracks_derivative());
    }
}
