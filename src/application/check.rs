//! Check Use Case
//!
//! Runs the policy engine over every package file of a project, the way a
//! full bundler build would, without transforming anything.

use std::path::Path;

use crate::config::PolicyConfig;
use crate::domain::ports::ViolationResolver;
use crate::domain::services::{report_all, PolicyEngine};
use crate::error::AnisotropicResult;

/// Result of a project check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Package files evaluated
    pub files_checked: usize,
    /// Files outside the packages root or with an unrecognized extension
    pub skipped: usize,
    /// Violations handed to the resolver
    pub violations: usize,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.violations == 0
    }
}

/// Check Use Case
pub struct CheckUseCase<'a> {
    engine: &'a PolicyEngine,
}

impl<'a> CheckUseCase<'a> {
    pub fn new(engine: &'a PolicyEngine) -> Self {
        Self { engine }
    }

    /// Evaluate `files` in order, reporting each file's violations before
    /// moving on. Stops at the first error, including a resolver abort.
    pub fn execute<'f>(
        &self,
        files: impl IntoIterator<Item = &'f Path>,
        config: &PolicyConfig,
        resolver: &dyn ViolationResolver,
    ) -> AnisotropicResult<CheckReport> {
        let layout = self.engine.layout();
        let mut report = CheckReport::default();

        for file in files {
            if !layout.contains(file) || !config.graph.accepts(file) {
                report.skipped += 1;
                continue;
            }

            let violations = self.engine.evaluate(file, config)?;
            report.files_checked += 1;
            report.violations += violations.len();
            report_all(&violations, resolver)?;
        }

        tracing::debug!(
            checked = report.files_checked,
            skipped = report.skipped,
            violations = report.violations,
            "project check finished"
        );

        Ok(report)
    }
}
