// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain-read primitives behind fee estimation
//!
//! The estimator needs exactly three reads: a gas limit simulation, the
//! current gas price, and the projected L1 data fee for a request. This
//! module defines that seam as the [`FeeSource`] trait and provides
//! [`OpStackFeeSource`], the implementation over an Alloy provider connected
//! to an OP Stack chain.
//!
//! Keeping the seam a trait means the estimation core is a pure function of
//! three integers and can be exercised without any live network dependency.

use alloy_chains::{Chain, NamedChain};
use alloy_consensus::{SignableTransaction, TxEip1559};
use alloy_eips::eip2930::AccessList;
use alloy_network::{Network, TransactionBuilder};
use alloy_primitives::{address, Address, Bytes, TxKind, U256};
use alloy_provider::Provider;
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;
use op_alloy_network::Optimism;
use tracing::trace;

use crate::errors::RpcError;
use crate::types::fees::L1DataFee;
use crate::types::gas::{GasAmount, GasPrice};

/// Address of the OP Stack [GasPriceOracle](https://github.com/ethereum-optimism/optimism/blob/develop/packages/contracts-bedrock/src/L2/GasPriceOracle.sol) predeploy.
pub const GAS_PRICE_ORACLE_ADDRESS: Address =
    address!("0x420000000000000000000000000000000000000F");

sol! {
    /// L1 fee portion of the OP Stack GasPriceOracle predeploy.
    contract GasPriceOracle {
        /// Computes the L1 portion of the fee based on the provided unsigned
        /// encoded transaction.
        function getL1Fee(bytes memory _data) external view returns (uint256);
    }
}

/// The three chain reads a fee estimate is assembled from
///
/// Every method is idempotent and side-effect-free; the estimator issues them
/// concurrently and their completion order does not affect the result. Each
/// returned integer is in the chain's smallest denomination.
#[async_trait]
pub trait FeeSource<N: Network>: Send + Sync {
    /// Simulate the request against current chain state to obtain a gas limit
    ///
    /// Fails if the simulation reverts or the node is unreachable; the
    /// failure is not retried here.
    async fn estimate_gas_limit(
        &self,
        request: &N::TransactionRequest,
    ) -> Result<GasAmount, RpcError>;

    /// Current suggested gas price on the execution layer
    async fn gas_price(&self) -> Result<GasPrice, RpcError>;

    /// Projected cost of publishing this request's data to the base layer
    ///
    /// Inherently an estimate: base-layer congestion between estimation time
    /// and inclusion time can change it materially, which is the primary
    /// source of reconciliation drift.
    async fn estimate_data_fee(
        &self,
        request: &N::TransactionRequest,
    ) -> Result<L1DataFee, RpcError>;
}

/// Configuration for [`OpStackFeeSource`]
///
/// The defaults cover standard OP Stack deployments; override the oracle
/// address for forks that relocate the predeploy, and the chain for requests
/// that don't carry an explicit chain id.
#[derive(Debug, Clone)]
pub struct FeeSourceConfig {
    /// Address of the GasPriceOracle contract to query for L1 fees
    pub gas_price_oracle: Address,
    /// Chain used as the chain-id fallback when assembling the unsigned
    /// payload for `getL1Fee`
    pub chain: NamedChain,
}

impl Default for FeeSourceConfig {
    fn default() -> Self {
        Self {
            gas_price_oracle: GAS_PRICE_ORACLE_ADDRESS,
            chain: NamedChain::Optimism,
        }
    }
}

/// [`FeeSource`] implementation over an Alloy provider for OP Stack chains
///
/// - gas limit via `eth_estimateGas`
/// - gas price via `eth_gasPrice`
/// - L1 data fee via `GasPriceOracle.getL1Fee` on the predeploy, passing the
///   RLP-encoded unsigned EIP-1559 payload assembled from the request
pub struct OpStackFeeSource<P> {
    provider: P,
    config: FeeSourceConfig,
}

impl<P> OpStackFeeSource<P> {
    /// Create a fee source with default configuration
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, FeeSourceConfig::default())
    }

    /// Create a fee source with custom configuration
    pub fn with_config(provider: P, config: FeeSourceConfig) -> Self {
        Self { provider, config }
    }
}

#[async_trait]
impl<P: Provider<Optimism>> FeeSource<Optimism> for OpStackFeeSource<P> {
    async fn estimate_gas_limit(
        &self,
        request: &<Optimism as Network>::TransactionRequest,
    ) -> Result<GasAmount, RpcError> {
        let gas = self
            .provider
            .estimate_gas(request.clone())
            .await
            .map_err(|e| RpcError::chain_connection_failed("eth_estimateGas", e))?;

        Ok(GasAmount::new(gas))
    }

    async fn gas_price(&self) -> Result<GasPrice, RpcError> {
        let price = self
            .provider
            .get_gas_price()
            .await
            .map_err(|e| RpcError::chain_connection_failed("eth_gasPrice", e))?;

        Ok(GasPrice::from(price))
    }

    async fn estimate_data_fee(
        &self,
        request: &<Optimism as Network>::TransactionRequest,
    ) -> Result<L1DataFee, RpcError> {
        let fallback_chain_id = Chain::from_named(self.config.chain).id();
        let payload = unsigned_tx_payload::<Optimism>(request, fallback_chain_id);

        trace!(
            payload_len = payload.len(),
            oracle = %self.config.gas_price_oracle,
            "Querying GasPriceOracle for L1 data fee"
        );

        let calldata = GasPriceOracle::getL1FeeCall { _data: payload }.abi_encode();
        let call = <Optimism as Network>::TransactionRequest::default()
            .with_to(self.config.gas_price_oracle)
            .with_input(Bytes::from(calldata));

        let raw = self
            .provider
            .call(call)
            .await
            .map_err(|e| RpcError::chain_connection_failed("GasPriceOracle.getL1Fee", e))?;

        let fee = GasPriceOracle::getL1FeeCall::abi_decode_returns(&raw)
            .map_err(|e| RpcError::call_decode_failed("GasPriceOracle.getL1Fee", e))?;

        Ok(L1DataFee::new(fee))
    }
}

/// Assemble the RLP-encoded unsigned EIP-1559 payload `getL1Fee` expects.
///
/// The oracle prices the payload's bytes, so gas fields left unset by the
/// caller default to zero without affecting the result meaningfully.
fn unsigned_tx_payload<N: Network>(
    request: &N::TransactionRequest,
    fallback_chain_id: u64,
) -> Bytes {
    let tx = TxEip1559 {
        chain_id: request.chain_id().unwrap_or(fallback_chain_id),
        nonce: request.nonce().unwrap_or_default(),
        gas_limit: request.gas_limit().unwrap_or_default(),
        max_fee_per_gas: request.max_fee_per_gas().unwrap_or_default(),
        max_priority_fee_per_gas: request.max_priority_fee_per_gas().unwrap_or_default(),
        to: request.kind().unwrap_or(TxKind::Create),
        value: request.value().unwrap_or(U256::ZERO),
        access_list: AccessList::default(),
        input: request.input().cloned().unwrap_or_default(),
    };

    tx.encoded_for_signing().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_network::Ethereum;

    #[test]
    fn test_get_l1_fee_selector() {
        // keccak256("getL1Fee(bytes)")[..4]
        assert_eq!(GasPriceOracle::getL1FeeCall::SELECTOR, [0x49, 0x94, 0x8e, 0x0e]);
    }

    #[test]
    fn test_default_config() {
        let config = FeeSourceConfig::default();
        assert_eq!(config.gas_price_oracle, GAS_PRICE_ORACLE_ADDRESS);
        assert_eq!(config.chain, NamedChain::Optimism);
    }

    #[test]
    fn test_unsigned_payload_is_typed_eip1559() {
        let request = <Ethereum as Network>::TransactionRequest::default()
            .with_to(Address::from([0x11; 20]))
            .with_input(Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]))
            .with_value(U256::from(1u64));

        let payload = unsigned_tx_payload::<Ethereum>(&request, 10);

        // EIP-2718 type byte for EIP-1559 transactions
        assert_eq!(payload[0], 0x02);
        assert!(payload.len() > 4);
    }

    #[test]
    fn test_unsigned_payload_grows_with_calldata() {
        let small = <Ethereum as Network>::TransactionRequest::default()
            .with_to(Address::from([0x11; 20]))
            .with_input(Bytes::from(vec![0u8; 4]));
        let large = <Ethereum as Network>::TransactionRequest::default()
            .with_to(Address::from([0x11; 20]))
            .with_input(Bytes::from(vec![0u8; 512]));

        let small_payload = unsigned_tx_payload::<Ethereum>(&small, 10);
        let large_payload = unsigned_tx_payload::<Ethereum>(&large, 10);

        assert!(large_payload.len() > small_payload.len() + 500);
    }

    #[test]
    fn test_unsigned_payload_uses_fallback_chain_id() {
        let request = <Ethereum as Network>::TransactionRequest::default()
            .with_to(Address::from([0x11; 20]));

        let on_optimism = unsigned_tx_payload::<Ethereum>(&request, 10);
        let on_base = unsigned_tx_payload::<Ethereum>(&request, 8453);

        // Different chain ids must produce different signing payloads
        assert_ne!(on_optimism, on_base);
    }
}
