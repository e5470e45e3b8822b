use nalgebra::{Isometry3, Perspective3};

use crate::error::{CameraError, Result};
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

/// A screen rectangle in pixels, origin top-left, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Width over height, or `None` for an empty viewport.
    #[must_use]
    pub fn aspect(&self) -> Option<f64> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

/// Parameters of a perspective camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub eye: Point3,
    pub target: Point3,
    pub up: Vector3,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            eye: Point3::new(2.0, 2.0, 2.0),
            target: Point3::origin(),
            up: Vector3::y(),
        }
    }
}

impl CameraParams {
    fn validate(&self) -> Result<()> {
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(CameraError::Degenerate(format!(
                "field of view {} is outside (0, 180)",
                self.fov_y_degrees
            ))
            .into());
        }
        validate_aspect(self.aspect)?;
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(CameraError::Degenerate(format!(
                "clip range [{}, {}] is empty",
                self.near, self.far
            ))
            .into());
        }
        let view_dir = self.target - self.eye;
        let distance = view_dir.norm();
        if distance.is_nan() || distance < TOLERANCE {
            return Err(CameraError::Degenerate("eye and target coincide".into()).into());
        }
        if view_dir.cross(&self.up).norm() < TOLERANCE {
            return Err(CameraError::Degenerate("up vector is parallel to view".into()).into());
        }
        Ok(())
    }
}

fn validate_aspect(aspect: f64) -> Result<()> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(())
    } else {
        Err(CameraError::Degenerate(format!("aspect ratio {aspect} must be positive")).into())
    }
}

/// A perspective camera providing the view-projection transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    params: CameraParams,
    home: CameraParams,
}

impl Camera {
    /// Creates a camera; `params` also becomes the pose [`Self::reset`] returns to.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters describe a degenerate camera.
    pub fn new(params: CameraParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            home: params,
        })
    }

    #[must_use]
    pub fn params(&self) -> &CameraParams {
        &self.params
    }

    /// Moves the camera.
    ///
    /// # Errors
    ///
    /// Returns an error if the new pose is degenerate; the camera is unchanged.
    pub fn look_at(&mut self, eye: Point3, target: Point3) -> Result<()> {
        let params = CameraParams {
            eye,
            target,
            ..self.params
        };
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Updates the aspect ratio after a resize.
    ///
    /// # Errors
    ///
    /// Returns an error if `aspect` is not a positive number.
    pub fn set_aspect(&mut self, aspect: f64) -> Result<()> {
        validate_aspect(aspect)?;
        self.params.aspect = aspect;
        Ok(())
    }

    /// Returns to the initial pose, keeping the current aspect ratio.
    pub fn reset(&mut self) {
        self.params = CameraParams {
            aspect: self.params.aspect,
            ..self.home
        };
    }

    /// World-to-view transform.
    #[must_use]
    pub fn view(&self) -> Matrix4 {
        let CameraParams { eye, target, up, .. } = &self.params;
        Isometry3::look_at_rh(eye, target, up).to_homogeneous()
    }

    /// View-to-clip transform.
    #[must_use]
    pub fn projection(&self) -> Matrix4 {
        Perspective3::new(
            self.params.aspect,
            self.params.fov_y_degrees.to_radians(),
            self.params.near,
            self.params.far,
        )
        .to_homogeneous()
    }

    /// World-to-clip transform.
    #[must_use]
    pub fn view_projection(&self) -> Matrix4 {
        self.projection() * self.view()
    }
}
