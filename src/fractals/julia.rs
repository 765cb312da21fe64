use num::complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::core::image_utils::ImageSpecification;

use super::{
    common::{ColorMapParams, EscapeTimeParams},
    dynamics::ConvergenceParams,
    variant::FractalVariant,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JuliaParams {
    pub image_specification: ImageSpecification,
    /// The fixed parameter `c`, as `[re, im]`.
    pub constant_term: [f64; 2],
    pub convergence_params: ConvergenceParams,
    #[serde(default)]
    pub color_map: ColorMapParams,
}

impl EscapeTimeParams for JuliaParams {
    fn image_specification(&self) -> &ImageSpecification {
        &self.image_specification
    }

    fn convergence_params(&self) -> &ConvergenceParams {
        &self.convergence_params
    }

    fn color_map(&self) -> &ColorMapParams {
        &self.color_map
    }

    fn variant(&self) -> FractalVariant {
        FractalVariant::Julia {
            constant_term: Complex64::new(self.constant_term[0], self.constant_term[1]),
        }
    }
}
