// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Rollup transaction fee estimation and reconciliation.
//!
//! On a two-layer rollup, submitting a transaction costs two things: the
//! rollup's own execution fee (gas limit × gas price) and a separate L1 data
//! fee for publishing the transaction's data to the base chain. Feescan
//! produces a structured pre-submission estimate of both, and, once the
//! transaction is mined, recomputes the same breakdown from the receipt and
//! reports how far the estimate was off.
//!
//! # Quickstart
//!
//! ```rust,ignore
//! use feescan::{connect_op_http, FeeEstimator, FeeReconciler};
//!
//! let provider = connect_op_http("https://mainnet.optimism.io")?;
//! let estimator = FeeEstimator::op_stack(provider.clone());
//!
//! // Before submission: gas limit, gas price and L1 data fee are fetched
//! // concurrently and folded into one immutable estimate.
//! let estimate = estimator.estimate(&request).await?;
//! println!("Estimated total: {}", estimate.total_fee);
//! println!("Data fee share:  {}", estimate.data_fee_share);
//!
//! // ... submit the transaction and wait for its receipt ...
//!
//! // After inclusion: recompute from authoritative receipt figures and
//! // score the estimate.
//! let reconciler = FeeReconciler::op_stack();
//! let comparison = reconciler.reconcile(&receipt, &estimate)?;
//! println!("Estimation error: {}", comparison.estimation_error);
//! ```
//!
//! # Design
//!
//! - All fee quantities are exact 256-bit integers in wei; floating-point
//!   appears only at the display boundary.
//! - The estimation core is pure: the three chain reads sit behind the
//!   [`FeeSource`] trait, so the arithmetic is unit-testable without a
//!   network. Reconciliation is pure as well and performs no chain access.
//! - Failures are immediate and never retried; there are no partial results
//!   and no fallback pricing, because a silently substituted fee value would
//!   produce a misleading financial estimate.
//! - A receipt that does not report an L1 data fee is an error
//!   ([`ReconciliationError::MissingDataFee`]), not a zero: it means the
//!   reconciler was pointed at a non-rollup chain or a node that doesn't
//!   populate the field.

mod errors;
mod fees;
mod provider;
mod tracing;
mod types;

pub use errors::{EstimationError, FeescanError, ReconciliationError, RpcError};
pub use fees::{
    EthereumReceiptAdapter, FeeActual, FeeComparison, FeeEstimate, FeeEstimator, FeeReconciler,
    FeeSource, FeeSourceConfig, OpStackFeeSource, OptimismReceiptAdapter, ReceiptAdapter,
    GAS_PRICE_ORACLE_ADDRESS,
};
pub use provider::{connect_op_http, OpHttpProvider};
pub use types::fees::{DriftPercent, L1DataFee, Percentage};
pub use types::gas::{BlobGasPrice, GasAmount, GasPrice};
pub use types::wei::WeiAmount;
