//! Screen-anchored info panel for the selected part.
//!
//! ```text
//! camera      perspective camera and viewport
//! projector   per-frame anchor and indicator line computation
//! ```

mod camera;
mod projector;

pub use camera::{Camera, CameraParams, Viewport};
pub use projector::{
    format_count, project_point, Annotation, AnnotationProjector, IndicatorLine, PanelContent,
    Projection,
};
