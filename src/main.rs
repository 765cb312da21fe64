use clap::Parser;
use serde::de::DeserializeOwned;

use julia_renderer::cli::{
    args::{CommandsEnum, FractalRendererArgs, ParameterFilePath},
    color_swatch::{generate_color_swatch, ColorSwatchParams},
    render::{render_fractal, RenderOptions},
};
use julia_renderer::core::{
    error::RenderResult,
    file_io::{build_output_path_with_date_time, extract_base_name, maybe_date_time_string, FilePrefix},
};
use julia_renderer::fractals::common::FractalParams;

fn read_params<T: DeserializeOwned>(path: &str) -> RenderResult<T> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn build_file_prefix(file: &ParameterFilePath, project: &str) -> RenderResult<FilePrefix> {
    Ok(FilePrefix {
        directory_path: build_output_path_with_date_time(
            &file.output_directory,
            project,
            &file.params_path,
            &maybe_date_time_string(file.date_time_out),
        )?,
        file_base: extract_base_name(&file.params_path).to_owned(),
    })
}

fn run(args: FractalRendererArgs) -> RenderResult<()> {
    match &args.command {
        Some(CommandsEnum::Render(render_args)) => {
            let params: FractalParams = read_params(&render_args.file.params_path)?;
            let file_prefix = build_file_prefix(&render_args.file, params.project_name())?;
            let options = RenderOptions {
                worker_count: render_args.workers,
                limits: render_args.limits(),
                format: render_args.format,
                random_constant: render_args.random_constant,
            };
            render_fractal(&params, &options, file_prefix)
        }

        Some(CommandsEnum::ColorSwatch(file)) => {
            let params: ColorSwatchParams = read_params(&file.params_path)?;
            generate_color_swatch(&params, build_file_prefix(file, "color_swatch")?)
        }

        None => {
            log::warn!("No command specified; see --help.");
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = run(FractalRendererArgs::parse()) {
        log::error!("{}", error);
        std::process::exit(1);
    }
}
