//! Per-part transform composition.
//!
//! A [`Transform`] is an ordered recipe of translate, rotate and scale
//! operations. The recipe is folded into a single model matrix each frame and
//! uploaded to the GPU as a [`ModelUniform`].

use std::ops::Mul;

use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};

/// One step of a transform recipe. Angles are in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Op {
    Translate(Vector3<f32>),
    /// Yaw
    RotateY(Deg<f32>),
    /// Pitch
    RotateX(Deg<f32>),
    RotateZ(Deg<f32>),
    Scale(Vector3<f32>),
}

impl Op {
    pub fn to_matrix(&self) -> Matrix4<f32> {
        match *self {
            Op::Translate(offset) => Matrix4::from_translation(offset),
            // from_angle_* converts the degrees into radians
            Op::RotateY(angle) => Matrix4::from_angle_y(angle),
            Op::RotateX(angle) => Matrix4::from_angle_x(angle),
            Op::RotateZ(angle) => Matrix4::from_angle_z(angle),
            Op::Scale(s) => Matrix4::from_nonuniform_scale(s.x, s.y, s.z),
        }
    }
}

/// An ordered list of operations, applied in the local frame built so far.
///
/// `Transform::new().translate(t).rotate_y(yaw).scale(s)` yields `T * Ry * S`:
/// the part is scaled first, then rotated about the translated pivot, then
/// moved into place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    ops: Vec<Op>,
}

impl Transform {
    /// The identity transform.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn translate(mut self, offset: impl Into<Vector3<f32>>) -> Self {
        self.ops.push(Op::Translate(offset.into()));
        self
    }

    pub fn rotate_y(mut self, degrees: f32) -> Self {
        self.ops.push(Op::RotateY(Deg(degrees)));
        self
    }

    pub fn rotate_x(mut self, degrees: f32) -> Self {
        self.ops.push(Op::RotateX(Deg(degrees)));
        self
    }

    pub fn rotate_z(mut self, degrees: f32) -> Self {
        self.ops.push(Op::RotateZ(Deg(degrees)));
        self
    }

    pub fn scale(mut self, factors: impl Into<Vector3<f32>>) -> Self {
        self.ops.push(Op::Scale(factors.into()));
        self
    }

    pub fn uniform_scale(self, factor: f32) -> Self {
        self.scale([factor; 3])
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Folds the recipe left to right: `m = m * op` for every op.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        self.ops
            .iter()
            .fold(Matrix4::identity(), |acc, op| acc * op.to_matrix())
    }

    pub fn to_raw(&self) -> ModelUniform {
        ModelUniform::new(self.to_matrix())
    }
}

impl<'a, 'b> Mul<&'b Transform> for &'a Transform {
    type Output = Transform;

    /// Appends `rhs` to `self`, i.e. `rhs` runs in the frame `self` established.
    fn mul(self, rhs: &'b Transform) -> Self::Output {
        let mut ops = self.ops.clone();
        ops.extend_from_slice(&rhs.ops);
        Transform { ops }
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(mut self, rhs: Transform) -> Self::Output {
        self.ops.extend(rhs.ops);
        self
    }
}

impl From<Vector3<f32>> for Transform {
    fn from(position: Vector3<f32>) -> Self {
        Transform::new().translate(position)
    }
}

/**
 * The raw model matrix as stored in the per-part uniform buffer.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn new(model: Matrix4<f32>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

impl Default for ModelUniform {
    fn default() -> Self {
        Self::new(Matrix4::identity())
    }
}
