use thiserror::Error;

/// Top-level error type for part analysis.
#[derive(Debug, Error)]
pub enum PartscopeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors related to raw mesh geometry and analysis parameters.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("position stream of {len} floats is not a whole number of xyz triples")]
    MalformedPositions { len: usize },

    #[error("non-finite coordinate at vertex {index}")]
    NonFiniteCoordinate { index: usize },

    #[error("coordinate at vertex {index} exceeds ±{limit} at this precision")]
    CoordinateOutOfRange { index: usize, limit: f64 },
}

/// Errors related to camera setup.
#[derive(Debug, Error, PartialEq)]
pub enum CameraError {
    #[error("degenerate camera: {0}")]
    Degenerate(String),
}

/// Errors reported by the export view.
///
/// These are user-facing conditions, not internal failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("no meshes are marked as \"Keep\"")]
    NothingToExport,
}

/// Convenience type alias for results using [`PartscopeError`].
pub type Result<T> = std::result::Result<T, PartscopeError>;
