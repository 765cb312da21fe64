use serde::{Deserialize, Serialize};

use crate::core::image_utils::ImageSpecification;

use super::{
    common::{ColorMapParams, EscapeTimeParams},
    dynamics::ConvergenceParams,
    variant::FractalVariant,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MandelbrotParams {
    pub image_specification: ImageSpecification,
    pub convergence_params: ConvergenceParams,
    #[serde(default)]
    pub color_map: ColorMapParams,
}

impl EscapeTimeParams for MandelbrotParams {
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
        FractalVariant::Mandelbrot
    }
}
