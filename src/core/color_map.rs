use image::Rgb;
use iter_num_tools::lin_space;
use serde::{Deserialize, Serialize};

/**
 * Twelve coefficients for the logistic-difference color curves, keyed `a` through `l`.
 * Any coefficient missing from a parameter file is zero.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct PaletteCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub i: f64,
    pub j: f64,
    pub k: f64,
    pub l: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaletteKind {
    #[default]
    Gray,
    Color,
}

pub trait ColorMapper {
    fn compute_pixel(&self, query: f64) -> Rgb<u8>;
}

/// Decreasing logistic curve: `1 / (1 + e^x)`.
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + x.exp())
}

/// Scale a channel intensity on [0,1] into an 8-bit value. Out-of-range
/// intensities saturate; NaN maps to zero.
pub fn channel_value(intensity: f64) -> u8 {
    (255.0 * intensity).round().clamp(0.0, 255.0) as u8
}

pub struct GrayscaleColorMap;

impl ColorMapper for GrayscaleColorMap {
    fn compute_pixel(&self, query: f64) -> Rgb<u8> {
        let value = channel_value(query);
        Rgb([value, value, value])
    }
}

/// Each channel is the difference of two logistic curves, which lets the
/// coefficients draw a band of color anywhere on the query domain.
pub struct LogisticCurveColorMap {
    pub coefficients: PaletteCoefficients,
}

impl LogisticCurveColorMap {
    /// Raw channel intensities before scaling and clamping.
    pub fn channel_curves(&self, query: f64) -> [f64; 3] {
        let k = &self.coefficients;
        [
            logistic(k.a * query + k.b) - logistic(k.c * query + k.d),
            logistic(k.e * query + k.f) - logistic(k.g * query + k.h),
            logistic(k.i * query + k.j) - logistic(k.k * query + k.l),
        ]
    }
}

impl ColorMapper for LogisticCurveColorMap {
    fn compute_pixel(&self, query: f64) -> Rgb<u8> {
        let [red, green, blue] = self.channel_curves(query);
        Rgb([
            channel_value(red),
            channel_value(green),
            channel_value(blue),
        ])
    }
}

/// The palette selected by a render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub kind: PaletteKind,
    pub coefficients: PaletteCoefficients,
}

impl ColorMapper for Palette {
    fn compute_pixel(&self, query: f64) -> Rgb<u8> {
        match self.kind {
            PaletteKind::Gray => GrayscaleColorMap.compute_pixel(query),
            PaletteKind::Color => LogisticCurveColorMap {
                coefficients: self.coefficients,
            }
            .compute_pixel(query),
        }
    }
}

/**
 * Preview of the color palette: column `x` is filled with the color at query `x / width`,
 * and each channel curve is traced on top as a two-pixel marker in its own primary color.
 */
pub fn color_swatch(coefficients: &PaletteCoefficients, resolution: (u32, u32)) -> image::RgbImage {
    let (width, height) = resolution;
    let color_map = LogisticCurveColorMap {
        coefficients: *coefficients,
    };
    let markers = [Rgb([255, 0, 0]), Rgb([0, 255, 0]), Rgb([0, 0, 255])];

    let mut imgbuf = image::RgbImage::new(width, height);
    for (x, query) in lin_space(0.0..1.0, width as usize).enumerate() {
        let x = x as u32;
        let color = color_map.compute_pixel(query);
        for y in 0..height {
            imgbuf.put_pixel(x, y, color);
        }

        for (curve, marker) in color_map.channel_curves(query).iter().zip(markers) {
            let row = (height as f64 * (1.0 - curve)).floor();
            for y in [row, row + 1.0] {
                if y >= 0.0 && y < height as f64 {
                    imgbuf.put_pixel(x, y as u32, marker);
                }
            }
        }
    }
    imgbuf
}
