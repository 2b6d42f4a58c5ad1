//! Error types for the feescan library.
//!
//! This module provides strongly-typed errors for all public APIs in feescan.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   (`EstimationError`, `ReconciliationError`)
//! - **Unified error type** (`FeescanError`) for convenience when you don't
//!   need to distinguish between error sources
//!
//! # Architecture
//!
//! - [`EstimationError`] - Errors from pre-submission fee estimation
//! - [`ReconciliationError`] - Errors from post-inclusion reconciliation
//! - [`RpcError`] - Shared error variants for blockchain RPC operations
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust,ignore
//! use feescan::{FeeReconciler, ReconciliationError};
//!
//! match reconciler.reconcile(&receipt, &estimate) {
//!     Ok(comparison) => println!("Drift: {}", comparison.estimation_error),
//!     Err(ReconciliationError::MissingDataFee) => {
//!         eprintln!("Receipt has no L1 fee; is this really a rollup chain?");
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust,ignore
//! use feescan::FeescanError;
//!
//! async fn example() -> Result<(), FeescanError> {
//!     let estimate = estimator.estimate(&request).await?;
//!     let comparison = reconciler.reconcile(&receipt, &estimate)?;
//!     // Errors automatically convert to FeescanError via From implementations
//!     Ok(())
//! }
//! ```

mod estimate;
mod reconcile;
mod rpc;

pub use estimate::EstimationError;
pub use reconcile::ReconciliationError;
pub use rpc::RpcError;

/// Unified error type for all feescan operations.
///
/// This enum wraps all module-specific error types, providing a convenient way
/// to handle errors when you don't need to distinguish between different error
/// sources. All module-specific error types automatically convert to
/// `FeescanError` via `From` implementations, so you can use `?` to propagate
/// errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum FeescanError {
    /// Error from pre-submission fee estimation.
    #[error("Fee estimation error: {0}")]
    Estimation(#[from] EstimationError),

    /// Error from post-inclusion reconciliation.
    #[error("Fee reconciliation error: {0}")]
    Reconciliation(#[from] ReconciliationError),

    /// Error from a blockchain RPC operation.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}
