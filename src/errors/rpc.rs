//! Shared RPC error types for blockchain provider operations.
//!
//! This module provides error types for common RPC failures that can occur
//! when the fee source reads from a blockchain provider.

/// Errors that can occur during blockchain RPC operations.
///
/// This error type captures common failure modes when interacting with
/// blockchain providers (e.g., via Alloy). It includes context about what
/// operation was being performed to aid in debugging.
///
/// # Examples
///
/// ```rust
/// use feescan::RpcError;
///
/// let error = RpcError::ProviderUrlInvalid("relative URL without a base".to_string());
/// println!("Error: {}", error);
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Failed to connect to the blockchain or execute an RPC call.
    ///
    /// This is a catch-all for RPC failures such as network errors, timeouts,
    /// provider downtime, or a reverted `eth_estimateGas` simulation.
    #[error("Chain connection failed during {operation}")]
    ChainConnectionFailed {
        /// Description of the operation that failed
        operation: String,
        /// The underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An `eth_call` succeeded but its return data could not be decoded.
    ///
    /// This typically means the target contract is not the expected one, for
    /// example a fee oracle address pointing at a chain that does not deploy
    /// it.
    #[error("Failed to decode return data from {operation}")]
    CallDecodeFailed {
        /// Description of the call whose output failed to decode
        operation: String,
        /// The underlying decode error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The provider URL could not be parsed.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),
}

impl RpcError {
    /// Helper to create a `ChainConnectionFailed` error from any error type.
    pub fn chain_connection_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::ChainConnectionFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `CallDecodeFailed` error from any error type.
    pub fn call_decode_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::CallDecodeFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }
}
