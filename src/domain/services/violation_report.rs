//! Violation reporting
//!
//! The single choke point between detection and reaction: every violation
//! reaches the resolver exactly once, in emission order, and the first
//! resolver error stops the report.

use crate::domain::entities::Violation;
use crate::domain::ports::ViolationResolver;
use crate::error::AnisotropicResult;

/// Hand one violation to the resolver.
pub fn report(violation: &Violation, resolver: &dyn ViolationResolver) -> AnisotropicResult<()> {
    resolver.resolve(violation)
}

/// Hand every violation to the resolver, stopping at the first error.
pub fn report_all(
    violations: &[Violation],
    resolver: &dyn ViolationResolver,
) -> AnisotropicResult<()> {
    violations
        .iter()
        .try_for_each(|violation| report(violation, resolver))
}
