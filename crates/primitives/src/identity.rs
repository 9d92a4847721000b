//! Signer and account identities.

use alloy_primitives::{Address, keccak256};

/// Identity of a committee member or token holder.
///
/// This is an EVM-style address: the last 20 bytes of the keccak256 hash of the
/// uncompressed public key (without its `0x04` tag byte).
pub type Identity = Address;

/// Derives the identity that corresponds to a 64-byte raw public key (`x || y`).
pub fn identity_from_raw_pubkey(raw: &[u8; 64]) -> Identity {
    let hash = keccak256(raw);
    Address::from_slice(&hash[12..])
}

/// Renders an identity the way it appears inside signed messages: lowercase hex
/// with a `0x` prefix.
pub fn format_identity(identity: &Identity) -> String {
    format!("{identity:#x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_identity_is_lowercase_prefixed() {
        let id: Identity = "0x52908400098527886E0F7030069857D2E4169EE7".parse().unwrap();
        assert_eq!(
            format_identity(&id),
            "0x52908400098527886e0f7030069857d2e4169ee7"
        );
    }

    #[test]
    fn test_format_zero_identity() {
        assert_eq!(
            format_identity(&Address::ZERO),
            "0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_identity_from_raw_pubkey_takes_hash_tail() {
        let raw = [7u8; 64];
        let id = identity_from_raw_pubkey(&raw);
        assert_eq!(id.as_slice(), &keccak256(raw)[12..]);
    }
}
