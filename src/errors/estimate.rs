//! Error types for pre-submission fee estimation.
//!
//! Each variant pins down which of the three chain reads failed, so a caller
//! can tell a reverted gas simulation apart from a price oracle outage. None
//! of these failures are retried: a failed read aborts the whole estimate and
//! no partial result is produced.

use super::RpcError;

/// Errors that can occur while producing a [`FeeEstimate`](crate::FeeEstimate).
///
/// # Examples
///
/// ```rust,ignore
/// use feescan::{EstimationError, FeeEstimator};
///
/// match estimator.estimate(&request).await {
///     Ok(estimate) => println!("Total: {}", estimate.total_fee),
///     Err(EstimationError::GasEstimationFailed { .. }) => {
///         eprintln!("Simulation reverted or node unreachable");
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EstimationError {
    /// The gas limit simulation reverted or the network call failed.
    #[error("Gas limit estimation failed")]
    GasEstimationFailed {
        /// The underlying RPC failure
        #[source]
        source: RpcError,
    },

    /// The gas price oracle call failed.
    #[error("Gas price lookup failed")]
    PriceLookupFailed {
        /// The underlying RPC failure
        #[source]
        source: RpcError,
    },

    /// The L1 data fee estimation call failed.
    #[error("L1 data fee estimation failed")]
    DataFeeEstimationFailed {
        /// The underlying RPC failure
        #[source]
        source: RpcError,
    },
}

impl EstimationError {
    /// Create a `GasEstimationFailed` error.
    pub fn gas_estimation_failed(source: RpcError) -> Self {
        EstimationError::GasEstimationFailed { source }
    }

    /// Create a `PriceLookupFailed` error.
    pub fn price_lookup_failed(source: RpcError) -> Self {
        EstimationError::PriceLookupFailed { source }
    }

    /// Create a `DataFeeEstimationFailed` error.
    pub fn data_fee_estimation_failed(source: RpcError) -> Self {
        EstimationError::DataFeeEstimationFailed { source }
    }
}
