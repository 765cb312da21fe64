use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::error::RenderResult;

pub fn extract_base_name(path: &str) -> &str {
    Path::new(path)
        .file_stem() // Get the base name component of the path
        .and_then(|name| name.to_str())
        .unwrap_or("params")
}

/// `<root>/<project>/<params base name>[/<datetime>]`, created on disk.
pub fn build_output_path_with_date_time(
    root: &Path,
    project: &str,
    params_path: &str,
    datetime: &Option<String>,
) -> RenderResult<PathBuf> {
    let mut directory_path = root.join(project).join(extract_base_name(params_path));
    if let Some(inner_datetime_str) = datetime {
        directory_path.push(inner_datetime_str);
    }
    std::fs::create_dir_all(&directory_path)?;
    Ok(directory_path)
}

pub fn date_time_string() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

pub fn maybe_date_time_string(enable: bool) -> Option<String> {
    if enable {
        Some(date_time_string())
    } else {
        None
    }
}

/**
 * Store a path and prefix together, making it easy to quickly generate
 * a collection of files with the same prefix, but separate suffixes.
 */
#[derive(Clone, Debug)]
pub struct FilePrefix {
    pub directory_path: PathBuf,
    pub file_base: String,
}

impl FilePrefix {
    pub fn with_suffix(&self, suffix: &str) -> PathBuf {
        self.directory_path.join(self.file_base.clone() + suffix)
    }

    pub fn create_file_with_suffix(
        &self,
        suffix: &str,
    ) -> RenderResult<std::io::BufWriter<std::fs::File>> {
        let file = std::fs::File::create(self.with_suffix(suffix))?;
        Ok(std::io::BufWriter::new(file))
    }
}

pub fn serialize_to_json<T: Serialize>(path: &Path, data: &T) -> RenderResult<()> {
    std::fs::write(path, serde_json::to_string_pretty(data)?)?;
    log::debug!("Wrote parameter file to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base_name() {
        assert_eq!(extract_base_name("demos/julia/spiral.json"), "spiral");
        assert_eq!(extract_base_name("plain"), "plain");
    }

    #[test]
    fn test_output_path_layout() {
        let root = tempfile::tempdir().unwrap();
        let path = build_output_path_with_date_time(
            root.path(),
            "julia",
            "demos/julia/spiral.json",
            &Some("20240101_000000".to_owned()),
        )
        .unwrap();
        assert_eq!(path, root.path().join("julia/spiral/20240101_000000"));
        assert!(path.is_dir());

        let prefix = FilePrefix {
            directory_path: path.clone(),
            file_base: "spiral".to_owned(),
        };
        assert_eq!(prefix.with_suffix(".png"), path.join("spiral.png"));
    }

    #[test]
    fn test_date_time_string_format() {
        let stamp = date_time_string();
        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes()[8], b'_');
        assert!(maybe_date_time_string(false).is_none());
    }
}
