// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for native currency amounts
//!
//! This module provides a newtype wrapper for native currency (ETH on OP Stack
//! chains) in wei, the unit every fee component in this crate is carried in.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// An amount of native currency in wei
///
/// Every fee quantity in this crate (execution fee, data fee, totals) is a
/// `WeiAmount`. The inner value is an exact 256-bit integer; conversions to
/// gwei or ether are lossy and exist only for display.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use feescan::WeiAmount;
///
/// let fee = WeiAmount::new(U256::from(21_000_000_000_000u64)); // 0.000021 ETH
/// let eth = fee.to_ether();
/// assert!((eth - 0.000021).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct WeiAmount(U256);

impl WeiAmount {
    /// Zero wei
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new wei amount
    pub const fn new(wei: U256) -> Self {
        Self(wei)
    }

    /// Get the inner U256 value (in wei)
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Convert to u64 if it fits, otherwise None
    pub fn as_u64(&self) -> Option<u64> {
        self.0.try_into().ok()
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Convert to gwei (1 gwei = 10^9 wei)
    ///
    /// Returns f64 for display purposes. This is a lossy conversion.
    pub fn to_gwei(&self) -> f64 {
        let gwei_divisor = U256::from(1_000_000_000u64);
        self.0.to_string().parse::<f64>().unwrap_or(0.0)
            / gwei_divisor.to_string().parse::<f64>().unwrap_or(1.0)
    }

    /// Convert to ether (1 ETH = 10^18 wei)
    ///
    /// Returns f64 for display purposes. This is a lossy conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use feescan::WeiAmount;
    ///
    /// let amount = WeiAmount::new(U256::from(1_500_000_000_000_000_000u128)); // 1.5 ETH
    /// let eth = amount.to_ether();
    /// assert!((eth - 1.5).abs() < 0.0001);
    /// ```
    pub fn to_ether(&self) -> f64 {
        let eth_divisor = U256::from(1_000_000_000_000_000_000u128);
        self.0.to_string().parse::<f64>().unwrap_or(0.0)
            / eth_divisor.to_string().parse::<f64>().unwrap_or(1.0)
    }
}

impl From<u64> for WeiAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for WeiAmount {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for WeiAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Add for WeiAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let eth = self.to_ether();
        if eth < 0.000001 {
            write!(f, "{} wei", self.0)
        } else {
            write!(f, "{:.6} ETH", eth)
        }
    }
}
