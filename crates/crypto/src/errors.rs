//! Error types for signature handling.

use thiserror::Error;

use crate::signature::SIGNATURE_LEN;

/// Errors that can occur while decoding or recovering a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Input is not exactly the recoverable encoding length.
    #[error("malformed signature: expected {SIGNATURE_LEN} bytes, got {0}")]
    InvalidLength(usize),

    /// Recovery indicator is not one of `0`, `1`, `27` or `28`.
    #[error("malformed signature: invalid recovery id {0}")]
    InvalidRecoveryId(u8),

    /// The `r`/`s` pair does not describe a valid signature.
    #[error("malformed signature: invalid compact encoding")]
    InvalidEncoding,

    /// No public key can be recovered for this signature and digest.
    #[error("malformed signature: public key recovery failed")]
    RecoveryFailed,

    /// Secret key bytes are not a valid secp256k1 scalar.
    #[error("invalid secret key")]
    InvalidSecretKey,
}
