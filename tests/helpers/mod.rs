// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for feescan integration tests
//!
//! Provides a mock implementation of the [`FeeSource`] seam to enable
//! testing the estimation flow without real blockchain connections.

use alloy_network::Network;
use async_trait::async_trait;
use feescan::{FeeSource, GasAmount, GasPrice, L1DataFee, RpcError};

/// Which of the three chain reads should fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingRead {
    GasLimit,
    GasPrice,
    DataFee,
}

/// Mock FeeSource for testing FeeEstimator logic
///
/// Returns fixed quotes for the three chain reads, with optional failure
/// injection for any single read.
///
/// # Example
///
/// ```rust,ignore
/// let source = MockFeeSource::new(21_000, 1, 9_000_000_000_000)
///     .with_failure(FailingRead::GasPrice);
///
/// let estimator = FeeEstimator::new(source);
/// ```
pub struct MockFeeSource {
    gas_limit: GasAmount,
    gas_price: GasPrice,
    data_fee: L1DataFee,
    failing: Option<FailingRead>,
}

impl MockFeeSource {
    /// Create a mock returning the given quotes
    pub fn new(gas_limit: u64, gas_price_gwei: u64, data_fee_wei: u64) -> Self {
        Self {
            gas_limit: GasAmount::new(gas_limit),
            gas_price: GasPrice::from_gwei(gas_price_gwei),
            data_fee: L1DataFee::from(data_fee_wei),
            failing: None,
        }
    }

    /// Make one of the three reads fail with a simulated outage
    pub fn with_failure(mut self, read: FailingRead) -> Self {
        self.failing = Some(read);
        self
    }

    fn outage(operation: &str) -> RpcError {
        RpcError::chain_connection_failed(operation, std::io::Error::other("simulated outage"))
    }
}

#[async_trait]
impl<N: Network> FeeSource<N> for MockFeeSource {
    async fn estimate_gas_limit(
        &self,
        _request: &N::TransactionRequest,
    ) -> Result<GasAmount, RpcError> {
        if self.failing == Some(FailingRead::GasLimit) {
            return Err(Self::outage("eth_estimateGas"));
        }
        Ok(self.gas_limit)
    }

    async fn gas_price(&self) -> Result<GasPrice, RpcError> {
        if self.failing == Some(FailingRead::GasPrice) {
            return Err(Self::outage("eth_gasPrice"));
        }
        Ok(self.gas_price)
    }

    async fn estimate_data_fee(
        &self,
        _request: &N::TransactionRequest,
    ) -> Result<L1DataFee, RpcError> {
        if self.failing == Some(FailingRead::DataFee) {
            return Err(Self::outage("GasPriceOracle.getL1Fee"));
        }
        Ok(self.data_fee)
    }
}
