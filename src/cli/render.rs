use rand::Rng;

use crate::core::{
    error::RenderResult,
    file_io::{serialize_to_json, FilePrefix},
    image_utils::save_image,
    stopwatch::Stopwatch,
};
use crate::fractals::{
    common::FractalParams,
    renderer::{default_worker_count, render_with_workers, RenderLimits},
};

use super::args::OutputFormat;

/// Options that come from the command line rather than the parameter file.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub worker_count: Option<usize>,
    pub limits: RenderLimits,
    pub format: OutputFormat,
    pub random_constant: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            worker_count: None,
            limits: Default::default(),
            format: OutputFormat::Png,
            random_constant: false,
        }
    }
}

/// Draw a Julia constant uniformly from [-1, 1) x [-1, 1).
pub fn random_constant_term<R: Rng>(rng: &mut R) -> [f64; 2] {
    [rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)]
}

/**
 * Render a parameter file into `file_prefix`, writing the image, a copy of the
 * effective parameters, and a diagnostics file with stage timings.
 */
pub fn render_fractal(
    params: &FractalParams,
    options: &RenderOptions,
    file_prefix: FilePrefix,
) -> RenderResult<()> {
    let mut stopwatch = Stopwatch::new("Render Stopwatch".to_owned());

    let mut params = params.clone();
    if options.random_constant {
        match &mut params {
            FractalParams::Julia(inner_params) => {
                inner_params.constant_term = random_constant_term(&mut rand::thread_rng());
                log::info!(
                    "Using random Julia constant: {} + {}i",
                    inner_params.constant_term[0],
                    inner_params.constant_term[1]
                );
            }
            FractalParams::Mandelbrot(_) => {
                log::warn!("Ignoring --random-constant: the Mandelbrot set has no constant term");
            }
        }
    }

    let escape_time_params = params.escape_time_params();
    let config = escape_time_params.render_config(&options.limits);
    let variant = escape_time_params.variant();
    let worker_count = options.worker_count.unwrap_or_else(default_worker_count);

    serialize_to_json(&file_prefix.with_suffix(".json"), &params)?;
    stopwatch.record_split("basic setup");

    log::info!(
        "Rendering {} ({}x{}, {} iterations) with {} workers",
        params.project_name(),
        config.resolution[0],
        config.resolution[1],
        config.max_iter_count,
        worker_count
    );
    let imgbuf = render_with_workers(&config, variant, worker_count)?;
    stopwatch.record_split("render fractal");

    save_image(
        &imgbuf,
        &file_prefix.with_suffix(options.format.extension()),
        options.format.image_format(),
    )?;
    stopwatch.record_split("write image");

    let mut diagnostics_file = file_prefix.create_file_with_suffix("_diagnostics.txt")?;
    stopwatch.display(&mut diagnostics_file)?;

    Ok(())
}
