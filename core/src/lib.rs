//! Client bindings for the dojo_starter world: the model schema, its
//! ordered wire codec, and the 20×20 treasure grid renderer.

pub mod codec;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod model;
pub mod registry;
pub mod render;
pub mod types;
pub mod view;
