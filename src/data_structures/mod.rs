//! Engine data structures: meshes, transforms, the tank's part list and textures.
//!
//! - `model` contains vertex and mesh definitions, CPU- and GPU-side
//! - `instance` holds the per-part transform recipe and its uniform form
//! - `scene_graph` lists the tank's parts and how each one is placed
//! - `texture` wraps the depth buffer

pub mod instance;
pub mod model;
pub mod scene_graph;
pub mod texture;
