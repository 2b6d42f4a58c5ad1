// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across feescan.
//!
//! This module provides newtype wrappers for the domain quantities:
//! - Wei amounts and gas units/prices
//! - L1 data fees
//! - Percentage shares and signed estimation drift

pub mod fees;
pub mod gas;
pub mod wei;

// Note: Public types are re-exported from lib.rs, not here
