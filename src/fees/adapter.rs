// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Receipt adapters for extracting fee data from different network types
//!
//! This module provides network-specific adapters for extracting the
//! authoritative fee components from transaction receipts. Different
//! blockchain networks have different receipt formats, particularly regarding
//! L1 data fees on rollup chains.
//!
//! # Network Types
//!
//! - **Ethereum**: L1 chains (Ethereum, Arbitrum, Polygon) with no L1 data fees
//! - **Optimism**: OP Stack chains (Base, Optimism, Mode) with L1 data fees
//!
//! A receipt that does not report an L1 fee yields `None` here; whether that
//! is an error is the reconciler's call, not the adapter's. In particular the
//! OP Stack adapter does NOT collapse a missing `l1Fee` field to zero: a
//! zeroed data fee and an unreported one are very different findings.

use alloy_network::{Ethereum, Network};
use alloy_primitives::U256;
use op_alloy_network::Optimism;

use crate::types::fees::L1DataFee;
use crate::types::gas::{BlobGasPrice, GasAmount, GasPrice};

/// Trait for network-specific receipt handling
///
/// Different blockchain networks use different receipt formats and have
/// different fee components. This trait abstracts over these differences to
/// provide a uniform interface for extracting fee data.
///
/// # Implementors
///
/// - [`EthereumReceiptAdapter`]: For L1 chains without L1 data fees
/// - [`OptimismReceiptAdapter`]: For OP Stack chains with L1 data fees
pub trait ReceiptAdapter<N: Network> {
    /// Extract the amount of gas used by a transaction
    fn gas_used(&self, receipt: &N::ReceiptResponse) -> GasAmount;

    /// Extract the effective gas price paid for the transaction
    ///
    /// For EIP-1559 transactions, this is the actual price paid per gas unit,
    /// which may be lower than the max fee per gas.
    fn effective_gas_price(&self, receipt: &N::ReceiptResponse) -> GasPrice;

    /// Extract the L1 data fee, if the receipt reports one
    ///
    /// # Returns
    ///
    /// - `Some(fee)`: the base-layer posting cost charged to this transaction
    /// - `None`: the receipt carries no L1 fee field (non-rollup chain, or a
    ///   node that does not populate it)
    fn l1_data_fee(&self, receipt: &N::ReceiptResponse) -> Option<L1DataFee>;

    /// Extract the base-layer blob base fee observed at posting time, if any
    ///
    /// Only present on chains using blob-based data posting. Informational;
    /// it never contributes to a fee total.
    fn l1_blob_base_fee(&self, receipt: &N::ReceiptResponse) -> Option<BlobGasPrice>;
}

/// Receipt adapter for Ethereum and Ethereum-like chains
///
/// Use this adapter for chains that don't have L1 data fees: Ethereum itself,
/// Arbitrum, Polygon, Avalanche, BNB Chain. Reconciling a rollup fee estimate
/// against one of these receipts will fail with a missing data fee, which is
/// the intended signal that the reconciler was pointed at the wrong kind of
/// chain.
pub struct EthereumReceiptAdapter;

impl ReceiptAdapter<Ethereum> for EthereumReceiptAdapter {
    fn gas_used(&self, receipt: &<Ethereum as Network>::ReceiptResponse) -> GasAmount {
        GasAmount::new(receipt.gas_used)
    }

    fn effective_gas_price(&self, receipt: &<Ethereum as Network>::ReceiptResponse) -> GasPrice {
        GasPrice::from(receipt.effective_gas_price)
    }

    fn l1_data_fee(&self, _receipt: &<Ethereum as Network>::ReceiptResponse) -> Option<L1DataFee> {
        None
    }

    fn l1_blob_base_fee(
        &self,
        _receipt: &<Ethereum as Network>::ReceiptResponse,
    ) -> Option<BlobGasPrice> {
        None
    }
}

/// Receipt adapter for OP Stack chains
///
/// Use this adapter for chains that have L1 data fees: Base, Optimism, Mode,
/// Fraxtal. These chains pay an additional L1 data fee to cover the cost of
/// posting transaction data to Ethereum, reported on the receipt alongside
/// the usual execution figures.
pub struct OptimismReceiptAdapter;

impl ReceiptAdapter<Optimism> for OptimismReceiptAdapter {
    fn gas_used(&self, receipt: &<Optimism as Network>::ReceiptResponse) -> GasAmount {
        GasAmount::new(receipt.inner.gas_used)
    }

    fn effective_gas_price(&self, receipt: &<Optimism as Network>::ReceiptResponse) -> GasPrice {
        GasPrice::from(receipt.inner.effective_gas_price)
    }

    fn l1_data_fee(&self, receipt: &<Optimism as Network>::ReceiptResponse) -> Option<L1DataFee> {
        receipt
            .l1_block_info
            .l1_fee
            .map(|fee| L1DataFee::new(U256::from(fee)))
    }

    fn l1_blob_base_fee(
        &self,
        receipt: &<Optimism as Network>::ReceiptResponse,
    ) -> Option<BlobGasPrice> {
        receipt.l1_block_info.l1_blob_base_fee.map(BlobGasPrice::from)
    }
}
