//! HTTP middleware module.

pub mod cors;

pub use cors::{cors_layer_from_env, create_cors_layer, create_permissive_cors_layer};
