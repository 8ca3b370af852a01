//! Render pipeline definitions.
//!
//! - `basic` is the vertex-colour pipeline every tank part is drawn with

pub mod basic;
