//! tank3d
//!
//! A small real-time tank scene. The tank (hull, tracks, wheels, turret and
//! cannon) is assembled from three procedurally generated meshes and drawn
//! every frame under a slowly orbiting camera. The turret and the chassis are
//! driven from the keyboard.
//!
//! High-level modules
//! - `camera`: orbiting camera, projection and their uniform
//! - `context`: central GPU and window context that owns device/queue/pipeline
//! - `controller`: keyboard mapping onto the tank's state
//! - `data_structures`: meshes, transforms and the tank's part list
//! - `flow`: the winit event loop driving each frame
//! - `pipelines`: the vertex-colour render pipeline
//! - `render`: per-part model uniforms and draw submission
//! - `resources`: mesh generators and GPU upload
//! - `settings`: window, mesh, camera and control tunables
//! - `tank`: the scene tying state, meshes and uniforms together
//!

pub mod camera;
pub mod context;
pub mod controller;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod settings;
pub mod tank;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath;
pub use settings::Settings;
pub use winit::event::WindowEvent;
