// SPDX-License-Identifier: MPL-2.0
//! Ordered transform operations and perspective projection.
//!
//! A [`Transform`] is a list of [`TransformOp`]s applied in list order, the
//! same convention as CSS and React Native transform arrays: the first
//! operation is the outermost, so `[Perspective, RotateX, RotateY]` rotates
//! the layer first and then views it through the perspective.
//!
//! Layer coordinates are relative to the layer center, x to the right and
//! y down, in pixels. Every layer of the card shares the card center as its
//! origin.

use glam::{Mat4, Vec2, Vec3, Vec4};
use std::fmt;

/// Smallest homogeneous `w` still considered in front of the viewer.
const MIN_PROJECTED_W: f32 = 1e-4;

/// A single named transform operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    /// Viewer distance from the z = 0 plane, in pixels.
    Perspective(f32),
    /// Rotation around the horizontal axis, in degrees.
    RotateX(f32),
    /// Rotation around the vertical axis, in degrees.
    RotateY(f32),
    TranslateX(f32),
    TranslateY(f32),
    /// Uniform scale in the layer plane.
    Scale(f32),
}

impl TransformOp {
    /// Returns the 4×4 matrix of this operation.
    #[must_use]
    pub fn matrix(self) -> Mat4 {
        match self {
            TransformOp::Perspective(depth) => {
                let mut matrix = Mat4::IDENTITY;
                if depth.is_finite() && depth > 0.0 {
                    matrix.z_axis.w = -1.0 / depth;
                }
                matrix
            }
            TransformOp::RotateX(degrees) => Mat4::from_rotation_x(degrees.to_radians()),
            TransformOp::RotateY(degrees) => Mat4::from_rotation_y(degrees.to_radians()),
            TransformOp::TranslateX(x) => Mat4::from_translation(Vec3::new(x, 0.0, 0.0)),
            TransformOp::TranslateY(y) => Mat4::from_translation(Vec3::new(0.0, y, 0.0)),
            TransformOp::Scale(factor) => Mat4::from_scale(Vec3::new(factor, factor, 1.0)),
        }
    }
}

impl fmt::Display for TransformOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformOp::Perspective(depth) => write!(f, "perspective({depth})"),
            TransformOp::RotateX(degrees) => write!(f, "rotateX({degrees}deg)"),
            TransformOp::RotateY(degrees) => write!(f, "rotateY({degrees}deg)"),
            TransformOp::TranslateX(x) => write!(f, "translateX({x}px)"),
            TransformOp::TranslateY(y) => write!(f, "translateY({y}px)"),
            TransformOp::Scale(factor) => write!(f, "scale({factor})"),
        }
    }
}

/// An ordered list of transform operations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transform {
    ops: Vec<TransformOp>,
}

impl Transform {
    #[must_use]
    pub fn new(ops: Vec<TransformOp>) -> Self {
        Self { ops }
    }

    #[must_use]
    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Composes the operations into one matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.ops
            .iter()
            .fold(Mat4::IDENTITY, |matrix, op| matrix * op.matrix())
    }

    /// Returns the transform of a child layer drawn inside this one.
    #[must_use]
    pub fn nested(&self, child: &Transform) -> Transform {
        let mut ops = Vec::with_capacity(self.ops.len() + child.ops.len());
        ops.extend_from_slice(&self.ops);
        ops.extend_from_slice(&child.ops);
        Transform { ops }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, op) in self.ops.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

/// Projects a layer point through `matrix` onto the screen plane.
///
/// Returns `None` when the point ends up behind the viewer.
#[must_use]
pub fn project(matrix: &Mat4, point: Vec2) -> Option<Vec2> {
    let clip = *matrix * Vec4::new(point.x, point.y, 0.0, 1.0);
    if clip.w < MIN_PROJECTED_W {
        return None;
    }
    Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
}
