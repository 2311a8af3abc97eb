//! Rotation matrices for 2D and 3D vectors.
//!
//! All angles are in radians. The 3D builders rotate about a single
//! coordinate axis: yaw about Y, pitch about X and roll about Z.

use std::str::FromStr;

use crate::error::LinalgError;
use crate::math::matrix::Matrix;
use crate::math::vector::Vector;

/// `[[cos, -sin], [sin, cos]]`
pub fn rotation_matrix_2d(theta: f64) -> Matrix {
    let (s, c) = theta.sin_cos();
    Matrix::from_parts(2, 2, vec![c, -s, s, c])
}

/// Rotation about the Y axis.
pub fn yaw_matrix(angle: f64) -> Matrix {
    let (s, c) = angle.sin_cos();
    Matrix::from_parts(3, 3, vec![c, 0.0, -s, 0.0, 1.0, 0.0, s, 0.0, c])
}

/// Rotation about the X axis.
pub fn pitch_matrix(angle: f64) -> Matrix {
    let (s, c) = angle.sin_cos();
    Matrix::from_parts(3, 3, vec![1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c])
}

/// Rotation about the Z axis.
pub fn roll_matrix(angle: f64) -> Matrix {
    let (s, c) = angle.sin_cos();
    Matrix::from_parts(3, 3, vec![c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0])
}

fn require_dim(v: &Vector, dim: usize, op: &'static str) -> Result<(), LinalgError> {
    if v.dim() != dim {
        return Err(LinalgError::mismatch(op, dim, v.dim()));
    }
    Ok(())
}

/// Rotate a 2D vector counter-clockwise by `theta`.
pub fn rotate_2d_vector(v: &Vector, theta: f64) -> Result<Vector, LinalgError> {
    require_dim(v, 2, "rotate 2D vector")?;
    rotation_matrix_2d(theta).transform_vector(v)
}

pub fn yaw(v: &Vector, angle: f64) -> Result<Vector, LinalgError> {
    require_dim(v, 3, "yaw")?;
    yaw_matrix(angle).transform_vector(v)
}

pub fn pitch(v: &Vector, angle: f64) -> Result<Vector, LinalgError> {
    require_dim(v, 3, "pitch")?;
    pitch_matrix(angle).transform_vector(v)
}

pub fn roll(v: &Vector, angle: f64) -> Result<Vector, LinalgError> {
    require_dim(v, 3, "roll")?;
    roll_matrix(angle).transform_vector(v)
}

/// Axis of a single 3D rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Yaw,
    Pitch,
    Roll,
}

impl Axis {
    pub fn matrix(self, angle: f64) -> Matrix {
        match self {
            Axis::Yaw => yaw_matrix(angle),
            Axis::Pitch => pitch_matrix(angle),
            Axis::Roll => roll_matrix(angle),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Yaw => "yaw",
            Axis::Pitch => "pitch",
            Axis::Roll => "roll",
        }
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaw" => Ok(Axis::Yaw),
            "pitch" => Ok(Axis::Pitch),
            "roll" => Ok(Axis::Roll),
            _ => Err(format!(
                "Unknown rotation axis: {}. Expected one of `yaw`, `pitch`, `roll`",
                s
            )),
        }
    }
}

/// Rotate a 3D vector about `axis`.
pub fn rotate_3d(v: &Vector, axis: Axis, angle: f64) -> Result<Vector, LinalgError> {
    log::trace!("Rotating {} by {} rad ({})", v, angle, axis.name());
    match axis {
        Axis::Yaw => yaw(v, angle),
        Axis::Pitch => pitch(v, angle),
        Axis::Roll => roll(v, angle),
    }
}
