use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::fractals::renderer::RenderLimits;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct FractalRendererArgs {
    #[command(subcommand)]
    pub command: Option<CommandsEnum>,
}

#[derive(Debug, Subcommand)]
pub enum CommandsEnum {
    /// Render a Julia or Mandelbrot parameter file to an image.
    Render(RenderArgs),
    /// Render a preview strip of the color palette in a parameter file.
    ColorSwatch(ParameterFilePath),
}

#[derive(Debug, Args)]
pub struct ParameterFilePath {
    pub params_path: String,

    /// Write into a time-stamped sub-directory.
    #[clap(long, short)]
    pub date_time_out: bool,

    #[clap(long, short, default_value = "out")]
    pub output_directory: PathBuf,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub file: ParameterFilePath,

    /// Worker count; defaults to the number of available processing units.
    #[clap(long, short)]
    pub workers: Option<usize>,

    /// Cap on the iteration count (0 for uncapped).
    #[clap(long, default_value_t = 0)]
    pub cap_iters: u32,

    /// Cap on image width and height (0 for uncapped).
    #[clap(long, default_value_t = 0)]
    pub cap_res: u32,

    #[clap(long, short, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Replace the Julia constant with one drawn uniformly from [-1, 1) x [-1, 1).
    #[clap(long)]
    pub random_constant: bool,
}

impl RenderArgs {
    pub fn limits(&self) -> RenderLimits {
        RenderLimits {
            max_iter_count: Some(self.cap_iters).filter(|&cap| cap > 0),
            max_resolution: Some(self.cap_res).filter(|&cap| cap > 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Jpg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => ".png",
            OutputFormat::Jpg => ".jpg",
        }
    }

    pub fn image_format(&self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Jpg => image::ImageFormat::Jpeg,
        }
    }
}
