//! Recoverable signature encoding.

use alloy_primitives::Bytes;

use crate::errors::SignatureError;

/// Length of a recoverable signature: `r || s || v`.
pub const SIGNATURE_LEN: usize = 65;

/// A 65-byte recoverable ECDSA signature in `r || s || v` order.
///
/// `v` is accepted both in raw form (`0`/`1`) and in the Ethereum-offset form
/// (`27`/`28`) that wallets emit for personal-sign messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoverableSignature([u8; SIGNATURE_LEN]);

impl RecoverableSignature {
    pub fn new(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Parses a signature from an arbitrary byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        let bytes: [u8; SIGNATURE_LEN] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidLength(bytes.len()))?;
        Ok(Self(bytes))
    }

    /// Get the compact signature (r || s) without the recovery indicator.
    pub fn compact(&self) -> [u8; 64] {
        let mut compact = [0u8; 64];
        compact.copy_from_slice(&self.0[..64]);
        compact
    }

    /// Get the raw recovery indicator byte (`v`).
    pub fn v(&self) -> u8 {
        self.0[64]
    }

    /// Normalized recovery id in `0..=1`.
    pub fn recovery_id(&self) -> Result<u8, SignatureError> {
        match self.v() {
            v @ (0 | 1) => Ok(v),
            v @ (27 | 28) => Ok(v - 27),
            v => Err(SignatureError::InvalidRecoveryId(v)),
        }
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.0)
    }
}

impl TryFrom<&[u8]> for RecoverableSignature {
    type Error = SignatureError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(value)
    }
}

impl From<RecoverableSignature> for Bytes {
    fn from(value: RecoverableSignature) -> Self {
        value.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_lengths() {
        assert_eq!(
            RecoverableSignature::from_slice(&[0u8; 64]),
            Err(SignatureError::InvalidLength(64))
        );
        assert_eq!(
            RecoverableSignature::from_slice(&[0u8; 66]),
            Err(SignatureError::InvalidLength(66))
        );
        assert!(RecoverableSignature::from_slice(&[]).is_err());
    }

    #[test]
    fn test_signature_components() {
        let mut raw = [0u8; SIGNATURE_LEN];
        raw[..32].copy_from_slice(&[0xAA; 32]); // r
        raw[32..64].copy_from_slice(&[0xBB; 32]); // s
        raw[64] = 28;

        let sig = RecoverableSignature::new(raw);
        assert_eq!(&sig.compact()[..32], &[0xAA; 32]);
        assert_eq!(&sig.compact()[32..], &[0xBB; 32]);
        assert_eq!(sig.recovery_id(), Ok(1));
    }

    #[test]
    fn test_recovery_id_normalization() {
        let mut raw = [0u8; SIGNATURE_LEN];
        for (v, want) in [(0, Ok(0)), (1, Ok(1)), (27, Ok(0)), (28, Ok(1))] {
            raw[64] = v;
            assert_eq!(RecoverableSignature::new(raw).recovery_id(), want);
        }
        raw[64] = 2;
        assert_eq!(
            RecoverableSignature::new(raw).recovery_id(),
            Err(SignatureError::InvalidRecoveryId(2))
        );
    }
}
