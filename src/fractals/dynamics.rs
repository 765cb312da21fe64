use num::complex::Complex64;
use serde::{Deserialize, Serialize};

use super::iteration_formula::{ComplexFunctionWithSlope, IterationFormula};

/// A point escapes once `|z|^2` exceeds this value.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Derivative accumulation stops once `|z'|` exceeds this value, keeping it finite.
pub const DERIVATIVE_OVERFLOW_LIMIT: f64 = 1.0e60;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConvergenceParams {
    pub max_iter_count: u32,
    #[serde(default)]
    pub formula: IterationFormula,
}

/// Starting value and parameter for one orbit: `z_0` and `c` in `z_{n+1} = f(z_n, c)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalPoint {
    pub z0: Complex64,
    pub c: Complex64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicsResult {
    /// Number of steps taken before the orbit left the escape radius, or
    /// `None` if it stayed inside for every step.
    pub escape_count: Option<u32>,
    /// Last value of the orbit.
    pub z: Complex64,
    /// Product of `f'(z_n, c)` along the orbit; only tracked on request.
    pub derivative: Option<Complex64>,
}

/**
 * Internal state of a single orbit, optionally carrying the running
 * derivative product used by distance estimation.
 */
struct DynamicsSequence<'a, F: ComplexFunctionWithSlope> {
    formula: &'a F,
    c: Complex64,
    z: Complex64,
    derivative: Option<Complex64>,
    derivative_saturated: bool,
    iter_count: u32,
}

impl<'a, F: ComplexFunctionWithSlope> DynamicsSequence<'a, F> {
    fn new(formula: &'a F, point: &FractalPoint, track_derivative: bool) -> Self {
        DynamicsSequence {
            formula,
            c: point.c,
            z: point.z0,
            derivative: track_derivative.then(|| Complex64::new(1.0, 0.0)),
            derivative_saturated: false,
            iter_count: 0,
        }
    }

    fn radius_squared(&self) -> f64 {
        self.z.norm_sqr()
    }

    fn step(&mut self) {
        if !self.derivative_saturated {
            if let Some(derivative) = self.derivative.as_mut() {
                *derivative *= self.formula.slope(self.z, self.c);
                self.derivative_saturated = derivative.norm() > DERIVATIVE_OVERFLOW_LIMIT;
            }
        }
        self.z = self.formula.value(self.z, self.c);
        self.iter_count += 1;
    }

    // @return: true if the point escapes, false otherwise.
    fn step_until_condition(&mut self, max_iter_count: u32) -> bool {
        while self.iter_count < max_iter_count {
            if self.radius_squared() > ESCAPE_RADIUS_SQUARED {
                return true;
            }
            self.step();
        }
        self.radius_squared() > ESCAPE_RADIUS_SQUARED
    }
}

/// Iterate `formula` from `point` for at most `max_iter_count` steps.
///
/// The escape test runs before every step and once more on the final
/// iterate, so a starting value that is already outside the escape radius
/// reports an escape count of zero, and an orbit that leaves on its last
/// allowed step reports `max_iter_count`. NaN orbits never satisfy the
/// escape test and report `None`.
pub fn evaluate_dynamics<F: ComplexFunctionWithSlope>(
    formula: &F,
    point: &FractalPoint,
    max_iter_count: u32,
    track_derivative: bool,
) -> DynamicsResult {
    let mut sequence = DynamicsSequence::new(formula, point, track_derivative);
    let escaped = sequence.step_until_condition(max_iter_count);
    DynamicsResult {
        escape_count: escaped.then_some(sequence.iter_count),
        z: sequence.z,
        derivative: sequence.derivative,
    }
}
