//! Cryptographic primitives for committee authorization.
//!
//! Signers produce 65-byte recoverable ECDSA signatures over an EIP-191
//! wrapped digest. This crate recovers the signing identity from such a
//! signature; whether that identity is authorized is decided by the caller.

pub mod digest;
pub mod errors;
pub mod keys;
pub mod recovery;
pub mod signature;

pub use digest::{eth_signed_digest, message_digest};
pub use errors::SignatureError;
pub use keys::{SigningKey, identity_of};
pub use recovery::recover_signer;
pub use signature::{RecoverableSignature, SIGNATURE_LEN};
