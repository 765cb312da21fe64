#[cfg(test)]
mod tests {
    use glob::glob;
    use julia_renderer::{
        cli::color_swatch::ColorSwatchParams,
        fractals::common::{EscapeTimeParams, FractalParams},
    };
    use serde::de::DeserializeOwned;
    use std::any::type_name;
    use std::fs;

    /// Parse every `.json` file below `directory`, returning how many were found.
    fn parse_all_parameter_files_or_panic<T: DeserializeOwned>(directory: &str) -> usize {
        let pattern = format!("{}/**/*.json", directory);

        let mut count = 0;
        for entry in glob(&pattern).expect("Failed to read glob pattern") {
            match entry {
                Ok(path) => {
                    let content = fs::read_to_string(&path)
                        .unwrap_or_else(|_| panic!("Failed to read file: {:?}", path));

                    let result: Result<T, _> = serde_json::from_str(&content);

                    match result {
                        Ok(_) => count += 1,
                        Err(err) => {
                            panic!(
                                "Failed to parse JSON file: {:?} as parameter type: `{}`.\n\n{:?}\n",
                                path,
                                type_name::<T>(),
                                err
                            );
                        }
                    }
                }
                Err(e) => panic!("Failed to read path: {:?}. Check permissions.", e),
            }
        }
        count
    }

    #[test]
    fn test_ensure_all_demo_files_can_be_parsed() {
        let root = env!("CARGO_MANIFEST_DIR");
        for sub_dir in ["julia", "mandelbrot"] {
            let count =
                parse_all_parameter_files_or_panic::<FractalParams>(&format!("{}/demos/{}", root, sub_dir));
            assert!(count > 0, "no parameter files found in demos/{}", sub_dir);
        }

        let count =
            parse_all_parameter_files_or_panic::<ColorSwatchParams>(&format!("{}/demos/color_swatch", root));
        assert!(count > 0);
    }

    #[test]
    fn test_demo_files_build_valid_render_configs() {
        for sub_dir in ["julia", "mandelbrot"] {
            let pattern = format!("{}/demos/{}/*.json", env!("CARGO_MANIFEST_DIR"), sub_dir);
            for path in glob(&pattern).unwrap().map(|entry| entry.unwrap()) {
                let params: FractalParams =
                    serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
                let config = params.escape_time_params().render_config(&Default::default());
                config
                    .validate()
                    .unwrap_or_else(|err| panic!("{:?} is not renderable: {}", path, err));
                assert!(config.viewport().is_ok());
            }
        }
    }
}
