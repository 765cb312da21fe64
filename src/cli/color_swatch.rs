use serde::{Deserialize, Serialize};

use crate::core::{
    color_map::{color_swatch, PaletteCoefficients},
    error::RenderResult,
    file_io::{serialize_to_json, FilePrefix},
    image_utils::save_image,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ColorSwatchParams {
    #[serde(default = "default_swatch_resolution")]
    pub resolution: (u32, u32),
    #[serde(default)]
    pub coefficients: PaletteCoefficients,
}

fn default_swatch_resolution() -> (u32, u32) {
    (512, 64)
}

pub fn generate_color_swatch(params: &ColorSwatchParams, file_prefix: FilePrefix) -> RenderResult<()> {
    serialize_to_json(&file_prefix.with_suffix(".json"), params)?;
    let imgbuf = color_swatch(&params.coefficients, params.resolution);
    save_image(
        &imgbuf,
        &file_prefix.with_suffix(".png"),
        image::ImageFormat::Png,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn test_swatch_params_defaults() {
        let params: ColorSwatchParams = serde_json::from_str(r#"{"coefficients": {"a": 1}}"#).unwrap();
        assert_eq!(params.resolution, (512, 64));
        assert_eq!(params.coefficients.a, 1.0);
    }

    #[test]
    fn test_generate_color_swatch_writes_png() {
        let directory = tempfile::tempdir().unwrap();
        let file_prefix = FilePrefix {
            directory_path: directory.path().to_path_buf(),
            file_base: "swatch".to_owned(),
        };
        let params = ColorSwatchParams {
            resolution: (32, 8),
            coefficients: PaletteCoefficients::default(),
        };
        generate_color_swatch(&params, file_prefix.clone()).unwrap();

        let imgbuf = image::open(file_prefix.with_suffix(".png")).unwrap();
        assert_eq!(imgbuf.dimensions(), (32, 8));
    }
}
