// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pre-submission fee estimation
//!
//! This module produces a structured [`FeeEstimate`] for an unsigned
//! transaction request: the rollup execution fee, the projected L1 data fee,
//! their sum, and the data-fee share of the total.
//!
//! # Examples
//!
//! ```rust,ignore
//! use feescan::{FeeEstimator, connect_op_http};
//!
//! let provider = connect_op_http("https://mainnet.optimism.io")?;
//! let estimator = FeeEstimator::op_stack(provider);
//!
//! let estimate = estimator.estimate(&request).await?;
//! println!("Estimated total fee: {}", estimate.total_fee);
//! println!("Data fee share: {}", estimate.data_fee_share);
//! ```

use std::marker::PhantomData;

use alloy_network::Network;
use alloy_provider::Provider;
use op_alloy_network::Optimism;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::EstimationError;
use crate::fees::source::{FeeSource, FeeSourceConfig, OpStackFeeSource};
use crate::tracing::spans;
use crate::types::fees::{L1DataFee, Percentage};
use crate::types::gas::{GasAmount, GasPrice};
use crate::types::wei::WeiAmount;

/// Pre-submission fee breakdown for a single transaction request
///
/// Produced once per request and held by the caller until reconciliation.
/// The derived fields (`execution_fee`, `total_fee`, `data_fee_share`) are
/// computed from the integer inputs at construction; nothing here is ever
/// recomputed from a floating-point value.
///
/// # Units
///
/// All fee fields are in wei. The share is a fraction of the total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeEstimate {
    /// Simulated gas limit for the request
    pub gas_limit: GasAmount,
    /// Suggested execution-layer gas price at estimation time
    pub gas_price: GasPrice,
    /// Execution fee: `gas_limit × gas_price`, exact
    pub execution_fee: WeiAmount,
    /// Projected cost of posting the request's data to the base layer
    pub data_fee: L1DataFee,
    /// Total fee: `execution_fee + data_fee`
    pub total_fee: WeiAmount,
    /// Share of the total that is data fee; 0% when the total is zero
    pub data_fee_share: Percentage,
}

impl FeeEstimate {
    /// Assemble an estimate from the three fetched quantities
    ///
    /// This is the pure core of estimation: no chain access, no retained
    /// state. The multiplication is exact; the total saturates at
    /// `U256::MAX` rather than wrapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use feescan::{FeeEstimate, GasAmount, GasPrice, L1DataFee};
    ///
    /// let estimate = FeeEstimate::new(
    ///     GasAmount::new(21_000),
    ///     GasPrice::from_gwei(1),
    ///     L1DataFee::new(U256::from(9_000_000_000_000u64)),
    /// );
    /// assert_eq!(estimate.total_fee.as_u256(), U256::from(30_000_000_000_000u64));
    /// assert_eq!(estimate.data_fee_share.format(), "30.00%");
    /// ```
    pub fn new(gas_limit: GasAmount, gas_price: GasPrice, data_fee: L1DataFee) -> Self {
        let execution_fee = gas_limit.cost(gas_price);
        let total_fee = data_fee.total_with_execution_fee(execution_fee);
        let data_fee_share = data_fee.share_of_total(total_fee);

        Self {
            gas_limit,
            gas_price,
            execution_fee,
            data_fee,
            total_fee,
            data_fee_share,
        }
    }
}

impl std::fmt::Display for FeeEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "execution {} + data {} = {} ({} data fee)",
            self.execution_fee, self.data_fee.as_wei(), self.total_fee, self.data_fee_share
        )
    }
}

/// Produces [`FeeEstimate`]s for transaction requests
///
/// Generic over the network and the [`FeeSource`] supplying the three chain
/// reads, so the estimation logic itself never touches a provider and can be
/// tested against a mock source.
pub struct FeeEstimator<N: Network, S: FeeSource<N>> {
    source: S,
    _network: PhantomData<N>,
}

impl<N: Network, S: FeeSource<N>> FeeEstimator<N, S> {
    /// Create an estimator over the given fee source
    pub fn new(source: S) -> Self {
        Self {
            source,
            _network: PhantomData,
        }
    }

    /// Estimate the full fee breakdown for a transaction request
    ///
    /// The three underlying reads are issued concurrently; each is idempotent
    /// and their completion order does not affect the result. Any read
    /// failing aborts the whole estimate; there is no partial
    /// [`FeeEstimate`] and no fallback pricing, because substituting a fee
    /// value would produce a misleading financial estimate.
    pub async fn estimate(
        &self,
        request: &N::TransactionRequest,
    ) -> Result<FeeEstimate, EstimationError> {
        let span = spans::estimate_fees();
        let _guard = span.enter();

        let (gas_limit, gas_price, data_fee) = futures::future::try_join3(
            async {
                self.source
                    .estimate_gas_limit(request)
                    .await
                    .map_err(EstimationError::gas_estimation_failed)
            },
            async {
                self.source
                    .gas_price()
                    .await
                    .map_err(EstimationError::price_lookup_failed)
            },
            async {
                self.source
                    .estimate_data_fee(request)
                    .await
                    .map_err(EstimationError::data_fee_estimation_failed)
            },
        )
        .await?;

        let estimate = FeeEstimate::new(gas_limit, gas_price, data_fee);

        info!(
            gas_limit = %estimate.gas_limit,
            gas_price = %estimate.gas_price,
            execution_fee = %estimate.execution_fee,
            data_fee = %estimate.data_fee,
            total_fee = %estimate.total_fee,
            data_fee_share = %estimate.data_fee_share,
            "Produced fee estimate"
        );

        Ok(estimate)
    }
}

impl<P: Provider<Optimism>> FeeEstimator<Optimism, OpStackFeeSource<P>> {
    /// Convenience constructor for OP Stack chains with default configuration
    pub fn op_stack(provider: P) -> Self {
        Self::new(OpStackFeeSource::new(provider))
    }

    /// Convenience constructor for OP Stack chains with custom configuration
    pub fn op_stack_with_config(provider: P, config: FeeSourceConfig) -> Self {
        Self::new(OpStackFeeSource::with_config(provider, config))
    }
}
