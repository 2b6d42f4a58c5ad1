// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for fee-related values
//!
//! Separates the L1 data-posting component from execution costs, and keeps
//! percentage values distinct from raw wei amounts. Shares and drift are
//! computed in integer basis points before the single lossy conversion to
//! f64 at the display boundary; fee totals themselves never touch
//! floating-point.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::ops::Add;

use crate::types::wei::WeiAmount;

/// Scale a part/whole ratio to basis points, doing the division in U256.
fn ratio_basis_points(part: U256, whole: U256) -> f64 {
    if whole.is_zero() {
        return 0.0;
    }
    match part.checked_mul(U256::from(10_000u64)) {
        Some(scaled) => (scaled / whole).to_string().parse::<f64>().unwrap_or(0.0),
        None => {
            // part is within 10^4 of U256::MAX; integer scaling can't help here
            let p = part.to_string().parse::<f64>().unwrap_or(0.0);
            let w = whole.to_string().parse::<f64>().unwrap_or(1.0);
            p / w * 10_000.0
        }
    }
}

/// L1 data fee for rollup transactions
///
/// Rollups post transaction data to the base layer for data availability.
/// This fee is the cost of that posting (in wei) and is conceptually separate
/// from the rollup's own execution cost. For transactions with large calldata
/// it can dominate the total.
///
/// # Fee Structure
///
/// Total transaction cost = execution fee + L1 data fee
///
/// - **Execution fee**: gas consumed on the rollup × rollup gas price
/// - **L1 data fee**: cost to post tx data to the base layer (this type)
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use feescan::{L1DataFee, WeiAmount};
///
/// let data_fee = L1DataFee::new(U256::from(9_000_000_000_000u64));
/// let execution_fee = WeiAmount::new(U256::from(21_000_000_000_000u64));
///
/// let total = data_fee.total_with_execution_fee(execution_fee);
/// assert_eq!(total, WeiAmount::new(U256::from(30_000_000_000_000u64)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct L1DataFee(U256);

impl L1DataFee {
    /// Zero L1 data fee
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new L1 data fee from wei
    pub const fn new(fee_wei: U256) -> Self {
        Self(fee_wei)
    }

    /// Get the inner U256 value (in wei)
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// View this fee as a plain wei amount
    pub const fn as_wei(&self) -> WeiAmount {
        WeiAmount::new(self.0)
    }

    /// Check if the L1 data fee is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Add the L1 data fee to an execution fee for the total transaction cost
    ///
    /// Uses saturating addition to prevent overflow.
    pub fn total_with_execution_fee(&self, execution_fee: WeiAmount) -> WeiAmount {
        WeiAmount::new(self.0.saturating_add(execution_fee.as_u256()))
    }

    /// Calculate the share of a total cost that is L1 data fee
    ///
    /// Returns a [`Percentage`] (0.0 = 0%, 1.0 = 100%). A zero total yields
    /// 0% so the result is always well-formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use feescan::{L1DataFee, Percentage, WeiAmount};
    ///
    /// let data_fee = L1DataFee::new(U256::from(9_000u64));
    /// let total = WeiAmount::new(U256::from(30_000u64));
    /// assert_eq!(data_fee.share_of_total(total).format(), "30.00%");
    /// ```
    pub fn share_of_total(&self, total: WeiAmount) -> Percentage {
        if total.is_zero() {
            return Percentage::ZERO;
        }
        Percentage::new(ratio_basis_points(self.0, total.as_u256()) / 10_000.0)
    }
}

impl From<u64> for L1DataFee {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for L1DataFee {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for L1DataFee {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Add for L1DataFee {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::fmt::Display for L1DataFee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (L1 data fee)", self.as_wei())
    }
}

/// A percentage value in the range [0.0, 1.0]
///
/// Used for the data-fee share of a total. The value is stored as a fraction
/// (0.0 = 0%, 1.0 = 100%) and clamped on construction; a share of a total can
/// never leave that range. For the signed estimate-vs-actual error, see
/// [`DriftPercent`].
///
/// # Examples
///
/// ```
/// use feescan::Percentage;
///
/// let percent = Percentage::new(0.75);
/// assert_eq!(percent.format(), "75.00%");
/// assert_eq!(percent.as_basis_points(), 7500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent (0%)
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent (100%)
    pub const ONE_HUNDRED: Self = Self(1.0);

    /// Create a percentage, clamping to [0.0, 1.0]
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Create a percentage from basis points (10000 = 100%)
    pub fn from_basis_points(bps: u64) -> Self {
        Self::new(bps as f64 / 10_000.0)
    }

    /// Get the inner f64 value (0.0 to 1.0)
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Convert to basis points (10000 = 100%)
    pub fn as_basis_points(&self) -> u64 {
        (self.0 * 10_000.0).round() as u64
    }

    /// Format as percentage string (e.g., "25.50%")
    pub fn format(&self) -> String {
        format!("{:.2}%", self.0 * 100.0)
    }

    /// Check if percentage is zero
    pub fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0 * 100.0)
    }
}

/// Signed estimate-vs-actual error, as a fraction of the estimate
///
/// `0.10` means the actual total came in 10% above the estimate; negative
/// values mean the estimate was too high. Unlike [`Percentage`] this value is
/// not clamped; an actual cost several times the estimate is a legitimate
/// (if alarming) result.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use feescan::{DriftPercent, WeiAmount};
///
/// let actual = WeiAmount::new(U256::from(33_000u64));
/// let estimate = WeiAmount::new(U256::from(30_000u64));
/// let drift = DriftPercent::from_totals(actual, estimate).unwrap();
/// assert_eq!(drift.format(), "+10.00%");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriftPercent(f64);

impl DriftPercent {
    /// Zero drift (estimate matched reality exactly)
    pub const ZERO: Self = Self(0.0);

    /// Create a drift value from a signed fraction
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Compute the drift of an actual total against an estimated total
    ///
    /// Returns `None` when the estimate is zero: drift against a zero
    /// estimate is undefined and callers are expected to surface that as an
    /// error rather than report 0%.
    pub fn from_totals(actual: WeiAmount, estimate: WeiAmount) -> Option<Self> {
        if estimate.is_zero() {
            return None;
        }
        let (diff, sign) = if actual.as_u256() >= estimate.as_u256() {
            (actual.as_u256() - estimate.as_u256(), 1.0)
        } else {
            (estimate.as_u256() - actual.as_u256(), -1.0)
        };
        let fraction = ratio_basis_points(diff, estimate.as_u256()) / 10_000.0;
        Some(Self(sign * fraction))
    }

    /// Get the inner signed fraction
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Whether the actual cost exceeded the estimate
    pub fn is_overrun(&self) -> bool {
        self.0 > 0.0
    }

    /// Check if drift is zero
    pub fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }

    /// Format as a signed percentage string (e.g., "+10.00%")
    pub fn format(&self) -> String {
        format!("{:+.2}%", self.0 * 100.0)
    }
}

impl std::fmt::Display for DriftPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.2}%", self.0 * 100.0)
    }
}
