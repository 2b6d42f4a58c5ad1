// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider construction helpers
//!
//! Feescan works with any `alloy_provider::Provider` the caller brings. This
//! module only offers a convenience for the common case: an HTTP provider
//! speaking to an OP Stack chain.

use alloy_provider::{ProviderBuilder, RootProvider};
use alloy_rpc_client::ClientBuilder;
use op_alloy_network::Optimism;

use crate::errors::RpcError;

/// Type alias for an HTTP provider using the Optimism network
///
/// Suitable for any OP Stack chain (Optimism, Base, Mode, Fraxtal).
pub type OpHttpProvider = RootProvider<Optimism>;

/// Create an HTTP provider for an OP Stack chain
///
/// Returns a plain `RootProvider` with recommended fillers disabled; fee
/// estimation only issues reads and needs none of the transaction-filling
/// machinery.
///
/// # Examples
///
/// ```rust,no_run
/// use feescan::connect_op_http;
///
/// let provider = connect_op_http("https://mainnet.optimism.io")?;
/// # Ok::<(), feescan::RpcError>(())
/// ```
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn connect_op_http(rpc_url: &str) -> Result<OpHttpProvider, RpcError> {
    let url: url::Url = rpc_url
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{e}")))?;

    let client = ClientBuilder::default().http(url);

    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .network::<Optimism>()
        .connect_client(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_rejects_invalid_url() {
        let result = connect_op_http("not a url");
        assert!(matches!(result, Err(RpcError::ProviderUrlInvalid(_))));
    }

    #[test]
    fn test_connect_accepts_valid_url() {
        // Construction is offline; no request is issued here
        assert!(connect_op_http("https://mainnet.optimism.io").is_ok());
    }
}
