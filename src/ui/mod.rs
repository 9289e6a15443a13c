//! Terminal output for the `anisotropic` binary

pub mod json;
pub mod text;
