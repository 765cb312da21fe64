use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::core::{
    color_map::{ColorMapper, Palette, PaletteCoefficients, PaletteKind},
    error::{RenderError, RenderResult},
    image_utils::Viewport,
};

use super::{coloring::ColoringKind, iteration_formula::IterationFormula, variant::FractalVariant};

/// Everything needed to render one frame. Built once per request and shared
/// read-only by every worker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub resolution: nalgebra::Vector2<u32>,
    /// Half-extent of the shorter image axis, already converted from the zoom level.
    pub scale: f64,
    pub pan: nalgebra::Vector2<f64>,
    pub max_iter_count: u32,
    pub formula: IterationFormula,
    pub coloring: ColoringKind,
    pub palette: PaletteKind,
    pub palette_coefficients: PaletteCoefficients,
}

impl RenderConfig {
    /// Structural checks that must pass before any worker is dispatched.
    pub fn validate(&self) -> RenderResult<()> {
        if self.resolution[0] == 0 || self.resolution[1] == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.resolution[0],
                height: self.resolution[1],
            });
        }
        if self.max_iter_count == 0 {
            return Err(RenderError::InvalidIterationCount);
        }
        Ok(())
    }

    pub fn viewport(&self) -> RenderResult<Viewport> {
        Viewport::new(&self.resolution, self.scale, &self.pan)
    }

    fn color_map(&self) -> Palette {
        Palette {
            kind: self.palette,
            coefficients: self.palette_coefficients,
        }
    }
}

/// Deployment-wide caps applied to incoming requests. `None` means uncapped.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderLimits {
    pub max_iter_count: Option<u32>,
    pub max_resolution: Option<u32>,
}

impl RenderLimits {
    pub fn apply(&self, config: &mut RenderConfig) {
        if let Some(cap) = self.max_iter_count.filter(|&cap| cap > 0) {
            if config.max_iter_count > cap {
                log::warn!(
                    "Capping iteration count from {} to {}",
                    config.max_iter_count,
                    cap
                );
                config.max_iter_count = cap;
            }
        }
        if let Some(cap) = self.max_resolution.filter(|&cap| cap > 0) {
            for dimension in config.resolution.iter_mut() {
                if *dimension > cap {
                    log::warn!("Capping image dimension from {} to {}", dimension, cap);
                    *dimension = cap;
                }
            }
        }
    }
}

/// Number of workers used by `render`: one per available processing unit.
pub fn default_worker_count() -> usize {
    rayon::current_num_threads()
}

/// Color of a single pixel: map, pick `(z0, c)`, iterate, color, palette.
pub fn render_pixel(
    config: &RenderConfig,
    viewport: &Viewport,
    variant: &FractalVariant,
    px: u32,
    py: u32,
) -> Rgb<u8> {
    let point = variant.fractal_point(viewport.map(px, py));
    let value = config.coloring.normalized_value(
        &config.formula,
        &point,
        config.max_iter_count,
        viewport.dist_max(),
    );
    config.color_map().compute_pixel(value)
}

pub fn render(config: &RenderConfig, variant: FractalVariant) -> RenderResult<RgbImage> {
    render_with_workers(config, variant, default_worker_count())
}

/**
 * Render a full frame with exactly `worker_count` workers.
 *
 * Rows are dealt out round-robin (row `r` goes to worker `r % worker_count`),
 * which balances the expensive rows near the set across workers. Each worker
 * receives mutable slices of its own rows only, so no locking is needed. A
 * dedicated pool is built for the call and joined before the image is
 * returned; the output does not depend on the worker count.
 */
pub fn render_with_workers(
    config: &RenderConfig,
    variant: FractalVariant,
    worker_count: usize,
) -> RenderResult<RgbImage> {
    config.validate()?;
    if worker_count == 0 {
        return Err(RenderError::InvalidWorkerCount);
    }
    let viewport = config.viewport()?;
    let (width, height) = viewport.resolution();
    log::debug!(
        "Rendering {}x{} image with {} workers ({:?}, {:?}, {:?})",
        width,
        height,
        worker_count,
        config.formula,
        config.coloring,
        config.palette
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count)
        .build()?;

    let mut imgbuf = RgbImage::new(width, height);
    let row_length = 3 * width as usize;

    let mut stripes: Vec<Vec<(u32, &mut [u8])>> = (0..worker_count).map(|_| Vec::new()).collect();
    for (py, row) in imgbuf.chunks_exact_mut(row_length).enumerate() {
        stripes[py % worker_count].push((py as u32, row));
    }

    let viewport = &viewport;
    let variant = &variant;
    pool.scope(|scope| {
        for stripe in stripes {
            scope.spawn(move |_| {
                for (py, row) in stripe {
                    for (px, pixel) in row.chunks_exact_mut(3).enumerate() {
                        let Rgb(color) = render_pixel(config, viewport, variant, px as u32, py);
                        pixel.copy_from_slice(&color);
                    }
                }
            });
        }
    });

    Ok(imgbuf)
}
