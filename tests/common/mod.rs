//! Common test utilities for anisotropic integration tests.
//!
//! This module provides:
//! - `TestProject`: an application root in a temp directory with installed
//!   package files and a madge dependency graph
//! - Fixtures: reusable graph and policy constants

#![allow(dead_code)]

pub mod fixtures;

pub use env::*;
pub use fixtures::*;
