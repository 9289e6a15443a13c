//! Violation resolvers that keep state

use std::sync::{Mutex, PoisonError};

use crate::domain::entities::Violation;
use crate::domain::ports::ViolationResolver;
use crate::error::AnisotropicResult;

/// Records every violation and lets the build continue.
///
/// Used to report all violations of a project before failing once.
#[derive(Debug, Default)]
pub struct CollectingResolver {
    violations: Mutex<Vec<Violation>>,
}

impl CollectingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.violations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain the violations recorded so far.
    pub fn take(&self) -> Vec<Violation> {
        std::mem::take(
            &mut *self
                .violations
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Consume the resolver, returning violations in the order received.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ViolationResolver for CollectingResolver {
    fn resolve(&self, violation: &Violation) -> AnisotropicResult<()> {
        self.violations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(violation.clone());
        Ok(())
    }
}
