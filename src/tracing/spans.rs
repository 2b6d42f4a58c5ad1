//! Span creation helpers for feescan operations.
//!
//! This module provides span creation functions following an orthogonal
//! design pattern where telemetry concerns are separated from business logic.
//! Instead of using `#[instrument]` attributes directly on functions, each
//! instrumented operation has a corresponding span helper function here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation();
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::{Level, Span};

/// Create span for producing a pre-submission fee estimate.
///
/// Parent: None (root span for this operation)
/// Children: the three concurrent chain reads
#[inline]
pub(crate) fn estimate_fees() -> Span {
    tracing::span!(Level::INFO, "feescan.estimate_fees")
}

/// Create span for reconciling a receipt against a prior estimate.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn reconcile_fees() -> Span {
    tracing::span!(Level::INFO, "feescan.reconcile_fees")
}
