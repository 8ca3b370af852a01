//! Orbiting camera, perspective projection and the matching GPU uniform.

use cgmath::{Deg, Matrix4, Point3, Rad, SquareMatrix, Vector3, perspective};

use crate::settings::Settings;

/// cgmath builds OpenGL style clip space (z in -1..1); wgpu expects 0..1.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// A camera circling the target at a fixed radius and height.
///
/// The orbit angle only ever grows: [`advance`](Self::advance) is called once
/// per frame and adds `speed` radians.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub angle: f32,
    pub speed: f32,
    pub radius: f32,
    pub height: f32,
    pub target: Point3<f32>,
}

impl OrbitCamera {
    pub fn new(radius: f32, height: f32, speed: f32) -> Self {
        Self {
            angle: 0.0,
            speed,
            radius,
            height,
            target: Point3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.orbit_radius,
            settings.orbit_height,
            settings.orbit_speed,
        )
    }

    pub fn advance(&mut self) {
        self.angle += self.speed;
    }

    pub fn eye(&self) -> Point3<f32> {
        Point3::new(
            self.radius * self.angle.cos(),
            self.height,
            self.radius * self.angle.sin(),
        )
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye(), self.target, Vector3::unit_y())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn from_settings(settings: &Settings, width: u32, height: u32) -> Self {
        Self::new(
            width,
            height,
            Deg(settings.fovy_degrees),
            settings.znear,
            settings.zfar,
        )
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// View and projection matrices shared by every part draw.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view: Matrix4::identity().into(),
            projection: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &OrbitCamera, projection: &Projection) {
        self.view = camera.calc_matrix().into();
        self.projection = projection.calc_matrix().into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct CameraResources {
    pub camera: OrbitCamera,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraResources {
    /// Pushes the current view/projection into the uniform buffer.
    pub fn write_to_buffer(&mut self, queue: &wgpu::Queue, projection: &Projection) {
        self.uniform.update_view_proj(&self.camera, projection);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
