// Iterated maps `z -> f(z, c)` paired with their derivative with respect to `z`.

use num::complex::Complex64;
use serde::{Deserialize, Serialize};

/// A complex-valued map with its derivative (slope) in `z`.
pub trait ComplexFunctionWithSlope {
    /// f(z, c)
    fn value(&self, z: Complex64, c: Complex64) -> Complex64;

    /// f'(z, c) = df/dz
    fn slope(&self, z: Complex64, c: Complex64) -> Complex64;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IterationFormula {
    /// z^2 + c
    #[default]
    Quadratic,
    /// z^3 + c
    Cubic,
    /// (|Re z| + i |Im z|)^2 + c, the "burning ship" fold.
    FoldedQuadratic,
    /// 1 / z^2 + c, with a pole at the origin.
    InverseQuadratic,
    /// sinh(z^2) + exp(z) + c
    HyperbolicExponential,
}

fn fold(z: Complex64) -> Complex64 {
    Complex64::new(z.re.abs(), z.im.abs())
}

const COMPLEX_INFINITY: Complex64 = Complex64::new(f64::INFINITY, f64::INFINITY);

impl ComplexFunctionWithSlope for IterationFormula {
    #[inline]
    fn value(&self, z: Complex64, c: Complex64) -> Complex64 {
        match self {
            IterationFormula::Quadratic => z * z + c,
            IterationFormula::Cubic => z * z * z + c,
            IterationFormula::FoldedQuadratic => {
                let w = fold(z);
                w * w + c
            }
            IterationFormula::InverseQuadratic => {
                if z.norm_sqr() == 0.0 {
                    COMPLEX_INFINITY
                } else {
                    (z * z).inv() + c
                }
            }
            IterationFormula::HyperbolicExponential => (z * z).sinh() + z.exp() + c,
        }
    }

    #[inline]
    fn slope(&self, z: Complex64, _c: Complex64) -> Complex64 {
        match self {
            IterationFormula::Quadratic => 2.0 * z,
            IterationFormula::Cubic => 3.0 * z * z,
            // The fold is a reflection, so this has the magnitude of the true Jacobian.
            IterationFormula::FoldedQuadratic => 2.0 * fold(z),
            IterationFormula::InverseQuadratic => {
                if z.norm_sqr() == 0.0 {
                    COMPLEX_INFINITY
                } else {
                    -2.0 * (z * z * z).inv()
                }
            }
            IterationFormula::HyperbolicExponential => 2.0 * z * (z * z).cosh() + z.exp(),
        }
    }
}
