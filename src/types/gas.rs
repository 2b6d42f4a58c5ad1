// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for gas-related values
//!
//! This module provides newtype wrappers around U256 to add type safety
//! for fee calculations and prevent mixing incompatible units. The only way
//! this crate produces an execution fee is `GasAmount × GasPrice`, which
//! yields a [`WeiAmount`].

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

use crate::types::wei::WeiAmount;

/// Amount of gas in gas units
///
/// Represents either an estimated gas limit (pre-submission) or the gas a
/// transaction actually consumed (from its receipt). This is a count of gas
/// units, not a cost; multiply by [`GasPrice`] to get a cost.
///
/// # Example
/// ```
/// use alloy_primitives::U256;
/// use feescan::GasAmount;
///
/// let gas = GasAmount::new(21000);
/// assert_eq!(gas.as_u256(), U256::from(21000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GasAmount(U256);

impl GasAmount {
    /// Zero gas units
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new gas amount
    pub const fn new(amount: u64) -> Self {
        Self(U256::from_limbs([amount, 0, 0, 0]))
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Convert to u64 if it fits, otherwise None
    pub fn as_u64(&self) -> Option<u64> {
        self.0.try_into().ok()
    }

    /// Multiply gas amount by gas price to get total cost in wei
    ///
    /// The multiplication is exact for any realistic magnitudes; it saturates
    /// at `U256::MAX` instead of wrapping.
    pub fn cost(&self, price: GasPrice) -> WeiAmount {
        WeiAmount::new(self.0.saturating_mul(price.0))
    }
}

impl From<u64> for GasAmount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<U256> for GasAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Add for GasAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::fmt::Display for GasAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} gas", self.0)
    }
}

/// Gas price in wei per unit of gas
///
/// Represents either a suggested price (pre-submission) or the effective
/// price a transaction actually paid (from its receipt).
///
/// # Example
/// ```
/// use feescan::{GasAmount, GasPrice};
///
/// let price = GasPrice::from_gwei(50); // 50 gwei
/// let gas = GasAmount::new(21000);
/// let cost = gas.cost(price);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GasPrice(U256);

impl GasPrice {
    /// Create a new gas price from wei
    pub const fn new(price_wei: u64) -> Self {
        Self(U256::from_limbs([price_wei, 0, 0, 0]))
    }

    /// Create from gwei (convenience constructor)
    pub fn from_gwei(gwei: u64) -> Self {
        Self(U256::from(gwei).saturating_mul(U256::from(1_000_000_000u64)))
    }

    /// Get the inner U256 value (in wei)
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Convert to gwei as f64 (lossy, for display purposes)
    pub fn as_gwei_f64(&self) -> f64 {
        self.0.to_string().parse::<f64>().unwrap_or(0.0) / 1e9
    }

    /// Multiply by gas amount to get total cost in wei
    pub fn total_cost(&self, amount: GasAmount) -> WeiAmount {
        WeiAmount::new(self.0.saturating_mul(amount.0))
    }
}

impl From<u64> for GasPrice {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<u128> for GasPrice {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for GasPrice {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for GasPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let gwei = self.as_gwei_f64();
        if gwei >= 1.0 {
            write!(f, "{:.2} gwei", gwei)
        } else {
            write!(f, "{} wei", self.0)
        }
    }
}

/// Type-safe multiplication: GasAmount × GasPrice = Wei cost
impl Mul<GasPrice> for GasAmount {
    type Output = WeiAmount;

    fn mul(self, rhs: GasPrice) -> Self::Output {
        self.cost(rhs)
    }
}

/// Type-safe multiplication: GasPrice × GasAmount = Wei cost
impl Mul<GasAmount> for GasPrice {
    type Output = WeiAmount;

    fn mul(self, rhs: GasAmount) -> Self::Output {
        self.total_cost(rhs)
    }
}

/// Blob gas price in wei per blob-gas unit
///
/// Some OP Stack receipts report the base-layer blob base fee that was in
/// effect when the transaction's data was posted. It is surfaced purely as an
/// observability signal and never enters a fee total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobGasPrice(U256);

impl BlobGasPrice {
    /// Zero blob gas price
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new blob gas price from wei
    pub const fn new(price_wei: U256) -> Self {
        Self(price_wei)
    }

    /// Create from gwei (convenience constructor)
    pub fn from_gwei(gwei: u64) -> Self {
        Self(U256::from(gwei).saturating_mul(U256::from(1_000_000_000u64)))
    }

    /// Get the inner U256 value (in wei per blob-gas unit)
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Convert to gwei as f64 (lossy, for display purposes)
    pub fn as_gwei_f64(&self) -> f64 {
        self.0.to_string().parse::<f64>().unwrap_or(0.0) / 1e9
    }
}

impl From<u64> for BlobGasPrice {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for BlobGasPrice {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for BlobGasPrice {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for BlobGasPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let gwei = self.as_gwei_f64();
        if gwei >= 1.0 {
            write!(f, "{:.2} gwei per blob gas", gwei)
        } else {
            write!(f, "{} wei per blob gas", self.0)
        }
    }
}
