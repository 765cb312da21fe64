use num::complex::Complex64;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{RenderError, RenderResult};

/// Convert the user-facing zoom level into the linear half-extent of the
/// shorter image axis. Each increment of two halves the visible region.
pub fn scale_from_zoom_level(zoom_level: f64) -> f64 {
    (-zoom_level / 2.0).exp2()
}

/// How a parameter file anchors an image into the complex plane.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageSpecification {
    pub resolution: nalgebra::Vector2<u32>,
    #[serde(default)]
    pub zoom_level: f64,
    #[serde(default = "zero_pan")]
    pub pan: nalgebra::Vector2<f64>,
}

fn zero_pan() -> nalgebra::Vector2<f64> {
    nalgebra::Vector2::new(0.0, 0.0)
}

impl ImageSpecification {
    pub fn scale(&self) -> f64 {
        scale_from_zoom_level(self.zoom_level)
    }
}

/**
 * Maps from pixel space into the complex plane.
 *
 * The shorter image axis spans `[-scale, scale]`, and the longer axis is
 * stretched so that pixels stay square regardless of the aspect ratio.
 * Row indices increase with the imaginary part, and the vertical pan
 * enters with a negative sign.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    x_half: f64,
    y_half: f64,
    pan: nalgebra::Vector2<f64>,
}

impl Viewport {
    pub fn new(
        resolution: &nalgebra::Vector2<u32>,
        scale: f64,
        pan: &nalgebra::Vector2<f64>,
    ) -> RenderResult<Viewport> {
        let (width, height) = (resolution[0], resolution[1]);
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let mut x_half = scale;
        let mut y_half = scale;
        if width >= height {
            x_half *= width as f64 / height as f64;
        } else {
            y_half *= height as f64 / width as f64;
        }

        Ok(Viewport {
            width,
            height,
            x_half,
            y_half,
            pan: *pan,
        })
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn half_extents(&self) -> (f64, f64) {
        (self.x_half, self.y_half)
    }

    // Map from pixel (integer) to point (complex)
    pub fn map(&self, px: u32, py: u32) -> Complex64 {
        Complex64::new(self.map_re(px), self.map_im(py))
    }

    pub fn map_re(&self, px: u32) -> f64 {
        self.x_half * 2.0 * px as f64 / self.width as f64 - self.x_half + self.pan[0]
    }

    pub fn map_im(&self, py: u32) -> f64 {
        self.y_half * 2.0 * py as f64 / self.height as f64 - self.y_half - self.pan[1]
    }

    /// Nearest pixel to a point in the complex plane. The result may lie
    /// outside the image.
    pub fn inverse_map(&self, point: &Complex64) -> (i64, i64) {
        let px = (point.re - self.pan[0] + self.x_half) * self.width as f64 / (2.0 * self.x_half);
        let py = (point.im + self.pan[1] + self.y_half) * self.height as f64 / (2.0 * self.y_half);
        (px.round() as i64, py.round() as i64)
    }

    /// Real-plane extent of a single pixel along each axis.
    pub fn pixel_size(&self) -> (f64, f64) {
        (
            self.x_half * 2.0 / self.width as f64,
            self.y_half * 2.0 / self.height as f64,
        )
    }

    /// Width of one pixel along the real axis; the reference length for
    /// distance-estimation coloring.
    pub fn dist_max(&self) -> f64 {
        (self.x_half * 2.0) / self.width as f64
    }
}

pub fn save_image(imgbuf: &image::RgbImage, path: &Path, format: image::ImageFormat) -> RenderResult<()> {
    match format {
        image::ImageFormat::Jpeg => {
            let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
            let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut file, 90);
            encoder.encode_image(imgbuf)?;
        }
        _ => imgbuf.save_with_format(path, format)?,
    }
    log::info!("Wrote image file to: {}", path.display());
    Ok(())
}
