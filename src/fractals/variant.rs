use num::complex::Complex64;

use super::dynamics::FractalPoint;

/// Decides which half of `(z0, c)` comes from the pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalVariant {
    /// Fixed parameter `c`; the pixel is the starting value.
    Julia { constant_term: Complex64 },
    /// Orbit of the origin; the pixel is the parameter.
    Mandelbrot,
}

const ZERO_INITIAL_POINT: Complex64 = Complex64::new(0.0, 0.0);

impl FractalVariant {
    pub fn fractal_point(&self, pixel_point: Complex64) -> FractalPoint {
        match self {
            FractalVariant::Julia { constant_term } => FractalPoint {
                z0: pixel_point,
                c: *constant_term,
            },
            FractalVariant::Mandelbrot => FractalPoint {
                z0: ZERO_INITIAL_POINT,
                c: pixel_point,
            },
        }
    }
}
