//! Domain Services
//!
//! Graph adaptation, policy evaluation and violation reporting.

mod dependency_graph;
mod policy_engine;
mod violation_report;

pub use dependency_graph::DependencyGraph;
pub use policy_engine::PolicyEngine;
pub use violation_report::{report, report_all};
