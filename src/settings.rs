//! Runtime configuration.
//!
//! Every tunable of the demo lives in [`Settings`]. The defaults reproduce the
//! classic scene: an 800x600 window, 36-segment round meshes, a camera circling
//! the origin at radius 4 and height 3, and one-degree / 0.1-unit control steps.

/// Tunables for the window, meshes, camera and controls.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_colour: wgpu::Color,

    /// Angular resolution of the cannon barrel and the wheels.
    pub segments: u32,
    pub cannon_height: f32,
    pub cannon_radius: f32,
    pub wheel_radius: f32,
    pub wheel_width: f32,

    pub orbit_radius: f32,
    pub orbit_height: f32,
    /// Radians added to the orbit angle every frame.
    pub orbit_speed: f32,
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,

    pub yaw_step: f32,
    pub pitch_step: f32,
    pub move_step: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Tank 3D".to_string(),
            width: 800,
            height: 600,
            clear_colour: wgpu::Color::BLACK,
            segments: 36,
            cannon_height: 1.0,
            cannon_radius: 1.0,
            wheel_radius: 0.5,
            wheel_width: 0.2,
            orbit_radius: 4.0,
            orbit_height: 3.0,
            orbit_speed: 0.0001,
            fovy_degrees: 45.0,
            znear: 0.1,
            zfar: 100.0,
            yaw_step: 1.0,
            pitch_step: 1.0,
            move_step: 0.1,
        }
    }
}
