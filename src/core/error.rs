/// Everything that can stop a render before or while it runs.
///
/// Numeric trouble inside the escape-time math (NaN inputs, derivative
/// overflow, `ln(0)`) is absent: those cases produce defined
/// pixel values instead of errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("maximum iteration count must be positive")]
    InvalidIterationCount,

    #[error("worker count must be positive")]
    InvalidWorkerCount,

    #[error("unable to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("parameter file error: {0}")]
    Params(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
