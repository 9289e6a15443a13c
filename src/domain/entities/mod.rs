//! Domain Entities
//!
//! - `Violation` - A dependency edge that breaks a configured boundary

mod violation;

pub use violation::{Violation, ViolationKind};
