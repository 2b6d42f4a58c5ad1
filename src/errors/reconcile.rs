//! Error types for post-inclusion fee reconciliation.

/// Errors that can occur while reconciling a receipt against a prior
/// [`FeeEstimate`](crate::FeeEstimate).
///
/// Both variants are deliberate refusals rather than transport failures:
/// reconciliation works on data the caller already holds, so the only ways it
/// can fail are a receipt that doesn't carry what a rollup receipt must carry,
/// or a prior estimate that can't serve as a comparison baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReconciliationError {
    /// The receipt does not report a base-layer data fee.
    ///
    /// This signals either a non-rollup chain or a client/node that does not
    /// populate the field. Treating the missing fee as zero would corrupt the
    /// percentage breakdown and mask the configuration error, so the
    /// reconciler refuses instead.
    #[error("Receipt does not report an L1 data fee")]
    MissingDataFee,

    /// The prior estimate's total fee is zero.
    ///
    /// An estimation-error percentage against a zero baseline is undefined,
    /// and a zero-valued estimate is itself an anomaly worth surfacing.
    #[error("Cannot compute estimation error against a zero-valued estimate")]
    EstimateWasZero,
}
