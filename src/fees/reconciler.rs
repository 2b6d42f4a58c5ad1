// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Post-inclusion fee reconciliation
//!
//! Once a transaction is mined, its receipt carries the authoritative fee
//! figures: the gas actually used, the effective gas price actually charged,
//! and (on rollups) the L1 data fee actually paid. This module recomputes the
//! same breakdown the estimator produced, from those figures, and reports how
//! far the estimate was off.
//!
//! Reconciliation is pure: it works on a receipt the caller already holds and
//! performs no chain access. The caller decides when a receipt is final
//! enough to reconcile against; this module does not define finality.

use std::marker::PhantomData;

use alloy_network::{Ethereum, Network};
use op_alloy_network::Optimism;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ReconciliationError;
use crate::fees::adapter::{EthereumReceiptAdapter, OptimismReceiptAdapter, ReceiptAdapter};
use crate::fees::estimator::FeeEstimate;
use crate::tracing::spans;
use crate::types::fees::{DriftPercent, L1DataFee, Percentage};
use crate::types::gas::{BlobGasPrice, GasAmount, GasPrice};
use crate::types::wei::WeiAmount;

/// Post-inclusion fee breakdown, computed from authoritative receipt data
///
/// Same decomposition as [`FeeEstimate`], but every input is a figure the
/// network actually charged, never a projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeActual {
    /// Gas the transaction actually consumed
    pub gas_used: GasAmount,
    /// Effective gas price actually charged per gas unit
    pub effective_gas_price: GasPrice,
    /// Execution fee: `gas_used × effective_gas_price`, exact
    pub execution_fee: WeiAmount,
    /// L1 data fee the receipt reports
    pub data_fee: L1DataFee,
    /// Total fee: `execution_fee + data_fee`
    pub total_fee: WeiAmount,
    /// Share of the total that is data fee; 0% when the total is zero
    pub data_fee_share: Percentage,
    /// Base-layer blob base fee observed at posting time, when the receipt
    /// exposes one. Informational only; not part of any total.
    pub l1_blob_base_fee: Option<BlobGasPrice>,
}

impl FeeActual {
    /// Assemble the actual breakdown from receipt figures
    pub fn new(
        gas_used: GasAmount,
        effective_gas_price: GasPrice,
        data_fee: L1DataFee,
        l1_blob_base_fee: Option<BlobGasPrice>,
    ) -> Self {
        let execution_fee = gas_used.cost(effective_gas_price);
        let total_fee = data_fee.total_with_execution_fee(execution_fee);
        let data_fee_share = data_fee.share_of_total(total_fee);

        Self {
            gas_used,
            effective_gas_price,
            execution_fee,
            data_fee,
            total_fee,
            data_fee_share,
            l1_blob_base_fee,
        }
    }
}

impl std::fmt::Display for FeeActual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "execution {} + data {} = {} ({} data fee)",
            self.execution_fee, self.data_fee.as_wei(), self.total_fee, self.data_fee_share
        )?;
        if let Some(blob_fee) = self.l1_blob_base_fee {
            write!(f, ", blob base fee {}", blob_fee)?;
        }
        Ok(())
    }
}

/// Outcome of comparing a prior estimate against the mined reality
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeComparison {
    /// The pre-submission estimate being judged
    pub estimate: FeeEstimate,
    /// The authoritative post-inclusion breakdown
    pub actual: FeeActual,
    /// Signed error of the estimate's total; positive means the actual cost
    /// exceeded the estimate
    pub estimation_error: DriftPercent,
}

impl FeeComparison {
    /// Compare an actual fee breakdown against the estimate that preceded it
    ///
    /// # Errors
    ///
    /// [`ReconciliationError::EstimateWasZero`] when the estimate's total is
    /// zero: drift against a zero baseline is undefined, and a zero-valued
    /// estimate is itself an anomaly worth surfacing rather than reporting
    /// as 0% error.
    pub fn between(
        estimate: FeeEstimate,
        actual: FeeActual,
    ) -> Result<Self, ReconciliationError> {
        let estimation_error = DriftPercent::from_totals(actual.total_fee, estimate.total_fee)
            .ok_or(ReconciliationError::EstimateWasZero)?;

        Ok(Self {
            estimate,
            actual,
            estimation_error,
        })
    }
}

impl std::fmt::Display for FeeComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "estimated {}, paid {} ({} off)",
            self.estimate.total_fee, self.actual.total_fee, self.estimation_error
        )
    }
}

/// Recomputes fee breakdowns from receipts and scores prior estimates
///
/// Generic over the network and the [`ReceiptAdapter`] that knows where that
/// network's receipts keep their fee fields.
pub struct FeeReconciler<N: Network, A: ReceiptAdapter<N>> {
    adapter: A,
    _network: PhantomData<N>,
}

impl<N: Network, A: ReceiptAdapter<N>> FeeReconciler<N, A> {
    /// Create a reconciler over the given receipt adapter
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            _network: PhantomData,
        }
    }

    /// Compute the actual fee breakdown from a mined receipt
    ///
    /// # Errors
    ///
    /// [`ReconciliationError::MissingDataFee`] when the receipt does not
    /// report an L1 data fee. The fee is never silently treated as zero:
    /// doing so would corrupt the percentage breakdown and mask a
    /// configuration error (a non-rollup chain, or a node that does not
    /// populate the field).
    pub fn actual_fees(
        &self,
        receipt: &N::ReceiptResponse,
    ) -> Result<FeeActual, ReconciliationError> {
        let gas_used = self.adapter.gas_used(receipt);
        let effective_gas_price = self.adapter.effective_gas_price(receipt);
        let data_fee = self
            .adapter
            .l1_data_fee(receipt)
            .ok_or(ReconciliationError::MissingDataFee)?;
        let l1_blob_base_fee = self.adapter.l1_blob_base_fee(receipt);

        Ok(FeeActual::new(
            gas_used,
            effective_gas_price,
            data_fee,
            l1_blob_base_fee,
        ))
    }

    /// Reconcile a mined receipt against the estimate that preceded it
    ///
    /// Fails fast on the first problem (a receipt without a data fee, or a
    /// zero-valued prior estimate) and produces no partial result.
    pub fn reconcile(
        &self,
        receipt: &N::ReceiptResponse,
        estimate: &FeeEstimate,
    ) -> Result<FeeComparison, ReconciliationError> {
        let span = spans::reconcile_fees();
        let _guard = span.enter();

        let actual = self.actual_fees(receipt)?;
        let comparison = FeeComparison::between(estimate.clone(), actual)?;

        info!(
            estimated_total = %comparison.estimate.total_fee,
            actual_total = %comparison.actual.total_fee,
            estimation_error = %comparison.estimation_error,
            "Reconciled fees against estimate"
        );

        Ok(comparison)
    }
}

impl FeeReconciler<Optimism, OptimismReceiptAdapter> {
    /// Convenience constructor for OP Stack receipts
    pub fn op_stack() -> Self {
        Self::new(OptimismReceiptAdapter)
    }
}

impl FeeReconciler<Ethereum, EthereumReceiptAdapter> {
    /// Convenience constructor for Ethereum-like receipts
    ///
    /// Mostly useful to demonstrate the missing-data-fee failure mode, since
    /// these receipts never carry one.
    pub fn ethereum() -> Self {
        Self::new(EthereumReceiptAdapter)
    }
}
