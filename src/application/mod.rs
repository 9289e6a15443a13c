//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Transformer` - Per-file transform entry point for the host pipeline
//! - `CheckUseCase` - Evaluates every package file of a project

pub mod check;
pub mod transform;

pub use check::{CheckReport, CheckUseCase};
pub use transform::{HostCall, Transformer};
