//! Violation Resolver Port
//!
//! Every violation passes through exactly one resolver call, synchronously
//! and in emission order. Returning `Err` aborts the transform; returning
//! `Ok` lets it continue.

use crate::domain::entities::Violation;
use crate::error::{AnisotropicError, AnisotropicResult};

/// Decides what a violation does to the enclosing transform.
///
/// Implementations can be:
/// - `AbortResolver`: fails the transform (default)
/// - `WarnResolver`: logs and continues
/// - `CollectingResolver`: records and continues
pub trait ViolationResolver: Send + Sync {
    fn resolve(&self, violation: &Violation) -> AnisotropicResult<()>;
}

/// Resolver that always aborts with a `PolicyViolation` error.
pub struct AbortResolver;

impl ViolationResolver for AbortResolver {
    fn resolve(&self, violation: &Violation) -> AnisotropicResult<()> {
        Err(AnisotropicError::PolicyViolation(violation.clone()))
    }
}

/// Resolver that logs a warning and lets the build continue.
pub struct WarnResolver;

impl ViolationResolver for WarnResolver {
    fn resolve(&self, violation: &Violation) -> AnisotropicResult<()> {
        tracing::warn!(
            kind = violation.kind().config_key(),
            referrer = %violation.referrer().display(),
            "{}",
            violation
        );
        Ok(())
    }
}
