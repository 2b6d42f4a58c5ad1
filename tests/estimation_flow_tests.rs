// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for the estimate-then-reconcile flow
//!
//! These tests run the full flow against a mock fee source and receipt
//! fixtures, without any blockchain connection.

mod helpers;

use alloy_network::Network;
use feescan::{
    EstimationError, FeeEstimate, FeeEstimator, FeeReconciler, GasAmount, GasPrice, L1DataFee,
    Percentage, ReconciliationError, WeiAmount,
};
use helpers::{FailingRead, MockFeeSource};
use op_alloy_network::Optimism;

fn op_request() -> <Optimism as Network>::TransactionRequest {
    Default::default()
}

/// Create an OP Stack receipt with known fee figures
fn op_receipt(
    gas_used: u64,
    effective_gas_price: u128,
    l1_fee: Option<u128>,
    l1_blob_base_fee: Option<u128>,
) -> <Optimism as Network>::ReceiptResponse {
    let json = serde_json::json!({
        "transactionHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "blockHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "blockNumber": "0x1",
        "transactionIndex": "0x0",
        "from": "0x0000000000000000000000000000000000000000",
        "to": "0x0000000000000000000000000000000000000000",
        "cumulativeGasUsed": format!("0x{:x}", gas_used),
        "gasUsed": format!("0x{:x}", gas_used),
        "effectiveGasPrice": format!("0x{:x}", effective_gas_price),
        "logs": [],
        "logsBloom": "0x00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "status": "0x1",
        "type": "0x2",
        "l1Fee": l1_fee.map(|fee| format!("0x{:x}", fee)),
        "l1BlobBaseFee": l1_blob_base_fee.map(|fee| format!("0x{:x}", fee)),
        "l1GasUsed": "0x0",
        "l1GasPrice": "0x0"
    });

    serde_json::from_value(json).expect("Failed to create test Optimism receipt")
}

fn ethereum_receipt(
    gas_used: u64,
    effective_gas_price: u128,
) -> <alloy_network::Ethereum as Network>::ReceiptResponse {
    let json = serde_json::json!({
        "transactionHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "blockHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "blockNumber": "0x1",
        "transactionIndex": "0x0",
        "from": "0x0000000000000000000000000000000000000000",
        "to": "0x0000000000000000000000000000000000000000",
        "cumulativeGasUsed": format!("0x{:x}", gas_used),
        "gasUsed": format!("0x{:x}", gas_used),
        "effectiveGasPrice": format!("0x{:x}", effective_gas_price),
        "logs": [],
        "logsBloom": "0x00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
        "status": "0x1",
        "type": "0x2"
    });

    serde_json::from_value(json).expect("Failed to create test Ethereum receipt")
}

const GWEI: u128 = 1_000_000_000;

#[tokio::test]
async fn estimate_produces_expected_breakdown() -> anyhow::Result<()> {
    // 21000 gas at 1 gwei plus a 9e12 wei data fee: 30e12 total, 30% data
    let estimator: FeeEstimator<Optimism, _> =
        FeeEstimator::new(MockFeeSource::new(21_000, 1, 9_000_000_000_000));

    let estimate = estimator.estimate(&op_request()).await?;

    assert_eq!(
        estimate.execution_fee,
        WeiAmount::from(21_000_000_000_000u64)
    );
    assert_eq!(estimate.total_fee, WeiAmount::from(30_000_000_000_000u64));
    assert_eq!(estimate.data_fee_share.format(), "30.00%");
    Ok(())
}

#[tokio::test]
async fn estimate_then_reconcile_matching_receipt_has_zero_drift() -> anyhow::Result<()> {
    let estimator: FeeEstimator<Optimism, _> =
        FeeEstimator::new(MockFeeSource::new(21_000, 1, 9_000_000_000_000));
    let estimate = estimator.estimate(&op_request()).await?;

    // Receipt reports exactly the estimated figures
    let receipt = op_receipt(21_000, GWEI, Some(9_000_000_000_000), None);
    let comparison = FeeReconciler::op_stack().reconcile(&receipt, &estimate)?;

    assert!(comparison.estimation_error.is_zero());
    assert_eq!(comparison.actual.total_fee, estimate.total_fee);
    assert_eq!(comparison.actual.data_fee_share.format(), "30.00%");
    Ok(())
}

#[tokio::test]
async fn reconcile_reports_ten_percent_overrun() -> anyhow::Result<()> {
    let estimator: FeeEstimator<Optimism, _> =
        FeeEstimator::new(MockFeeSource::new(21_000, 1, 9_000_000_000_000));
    let estimate = estimator.estimate(&op_request()).await?;

    // Data fee came in 3e12 higher: 33e12 actual against the 30e12 estimate
    let receipt = op_receipt(21_000, GWEI, Some(12_000_000_000_000), None);
    let comparison = FeeReconciler::op_stack().reconcile(&receipt, &estimate)?;

    assert_eq!(
        comparison.actual.total_fee,
        WeiAmount::from(33_000_000_000_000u64)
    );
    assert_eq!(comparison.estimation_error.format(), "+10.00%");
    assert!(comparison.estimation_error.is_overrun());
    Ok(())
}

#[tokio::test]
async fn reconcile_fails_when_receipt_has_no_l1_fee() {
    let estimate = FeeEstimate::new(
        GasAmount::new(21_000),
        GasPrice::from_gwei(1),
        L1DataFee::from(9_000_000_000_000u64),
    );

    // Execution figures are present and valid, but the L1 fee is unreported
    let receipt = op_receipt(21_000, GWEI, None, None);
    let result = FeeReconciler::op_stack().reconcile(&receipt, &estimate);

    assert_eq!(result.unwrap_err(), ReconciliationError::MissingDataFee);
}

#[tokio::test]
async fn reconcile_fails_on_non_rollup_receipt() {
    let estimate = FeeEstimate::new(
        GasAmount::new(21_000),
        GasPrice::from_gwei(1),
        L1DataFee::from(9_000_000_000_000u64),
    );

    // Ethereum receipts never carry an L1 data fee
    let receipt = ethereum_receipt(21_000, GWEI);
    let result = FeeReconciler::ethereum().reconcile(&receipt, &estimate);

    assert_eq!(result.unwrap_err(), ReconciliationError::MissingDataFee);
}

#[tokio::test]
async fn reconcile_fails_against_zero_estimate() {
    let zero_estimate = FeeEstimate::new(GasAmount::ZERO, GasPrice::new(0), L1DataFee::ZERO);

    // Actual fee values are valid; the baseline is the problem
    let receipt = op_receipt(21_000, GWEI, Some(9_000_000_000_000), None);
    let result = FeeReconciler::op_stack().reconcile(&receipt, &zero_estimate);

    assert_eq!(result.unwrap_err(), ReconciliationError::EstimateWasZero);
}

#[tokio::test]
async fn reconcile_surfaces_blob_base_fee_without_affecting_totals() -> anyhow::Result<()> {
    let estimator: FeeEstimator<Optimism, _> =
        FeeEstimator::new(MockFeeSource::new(21_000, 1, 9_000_000_000_000));
    let estimate = estimator.estimate(&op_request()).await?;

    let receipt = op_receipt(21_000, GWEI, Some(9_000_000_000_000), Some(2 * GWEI));
    let comparison = FeeReconciler::op_stack().reconcile(&receipt, &estimate)?;

    let blob_fee = comparison.actual.l1_blob_base_fee.expect("blob fee reported");
    assert!((blob_fee.as_gwei_f64() - 2.0).abs() < 0.0001);
    // Informational only: totals match the blob-less case exactly
    assert_eq!(comparison.actual.total_fee, estimate.total_fee);
    assert!(comparison.estimation_error.is_zero());
    Ok(())
}

#[tokio::test]
async fn failed_gas_simulation_aborts_the_estimate() {
    let estimator: FeeEstimator<Optimism, _> = FeeEstimator::new(
        MockFeeSource::new(21_000, 1, 9_000_000_000_000).with_failure(FailingRead::GasLimit),
    );

    let result = estimator.estimate(&op_request()).await;

    assert!(matches!(
        result.unwrap_err(),
        EstimationError::GasEstimationFailed { .. }
    ));
}

#[tokio::test]
async fn failed_price_lookup_aborts_the_estimate() {
    let estimator: FeeEstimator<Optimism, _> = FeeEstimator::new(
        MockFeeSource::new(21_000, 1, 9_000_000_000_000).with_failure(FailingRead::GasPrice),
    );

    let result = estimator.estimate(&op_request()).await;

    assert!(matches!(
        result.unwrap_err(),
        EstimationError::PriceLookupFailed { .. }
    ));
}

#[tokio::test]
async fn failed_data_fee_estimation_aborts_the_estimate() {
    let estimator: FeeEstimator<Optimism, _> = FeeEstimator::new(
        MockFeeSource::new(21_000, 1, 9_000_000_000_000).with_failure(FailingRead::DataFee),
    );

    let result = estimator.estimate(&op_request()).await;

    assert!(matches!(
        result.unwrap_err(),
        EstimationError::DataFeeEstimationFailed { .. }
    ));
}

#[tokio::test]
async fn zero_total_estimate_is_well_formed() -> anyhow::Result<()> {
    let estimator: FeeEstimator<Optimism, _> = FeeEstimator::new(MockFeeSource::new(0, 0, 0));

    let estimate = estimator.estimate(&op_request()).await?;

    // 0% rather than NaN
    assert_eq!(estimate.data_fee_share, Percentage::ZERO);
    assert!(estimate.total_fee.is_zero());
    Ok(())
}
