//! Message digesting.

use alloy_primitives::{B256, keccak256};

/// Prefix applied by personal-sign wallets to a 32-byte payload.
const ETH_SIGNED_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Wraps a 32-byte hash in the EIP-191 personal-sign envelope and hashes it.
pub fn eth_signed_digest(hash: &B256) -> B256 {
    let mut buf = Vec::with_capacity(ETH_SIGNED_PREFIX.len() + 32);
    buf.extend_from_slice(ETH_SIGNED_PREFIX);
    buf.extend_from_slice(hash.as_slice());
    keccak256(&buf)
}

/// Computes the digest that committee members sign for a canonical message.
pub fn message_digest(message: &[u8]) -> B256 {
    eth_signed_digest(&keccak256(message))
}
