//! Fee estimation and reconciliation domain for rollup chains.
//!
//! This module covers both halves of the estimate-then-reconcile flow:
//!
//! ## Public API
//!
//! - [`FeeEstimator`] - Pre-submission estimate of execution fee, L1 data
//!   fee, total, and data-fee share
//! - [`FeeReconciler`] - Post-inclusion recomputation from receipt data plus
//!   the estimation-error percentage
//! - [`FeeSource`] - The three injected chain reads estimation depends on
//! - [`ReceiptAdapter`] - Network-specific receipt field extraction
//!
//! ## Key Properties
//!
//! - All fee math is exact 256-bit integer arithmetic; floats appear only at
//!   the display boundary
//! - No retries, no partial results, no fallback pricing
//! - A receipt without an L1 data fee is an error, never a zero
//!
//! ## Internal Modules
//!
//! - `estimator` - The pure estimate core and its orchestrator
//! - `reconciler` - The pure comparison core and its orchestrator
//! - `source` - The chain-read seam and the OP Stack implementation
//! - `adapter` - Per-network receipt handling

pub mod adapter;
pub mod estimator;
pub mod reconciler;
pub mod source;

// Re-export public API
pub use adapter::{EthereumReceiptAdapter, OptimismReceiptAdapter, ReceiptAdapter};
pub use estimator::{FeeEstimate, FeeEstimator};
pub use reconciler::{FeeActual, FeeComparison, FeeReconciler};
pub use source::{
    FeeSource, FeeSourceConfig, OpStackFeeSource, GAS_PRICE_ORACLE_ADDRESS,
};
