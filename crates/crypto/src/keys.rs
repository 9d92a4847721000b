//! Signing keys for committee members.

use alloy_primitives::B256;
use secp256k1::{Message, PublicKey, SECP256K1, SecretKey};
use wrapbridge_primitives::{Identity, identity::identity_from_raw_pubkey};

use crate::{errors::SignatureError, signature::RecoverableSignature};

/// Derives the identity of a secp256k1 public key.
pub fn identity_of(pubkey: &PublicKey) -> Identity {
    let uncompressed = pubkey.serialize_uncompressed();
    let mut raw = [0u8; 64];
    raw.copy_from_slice(&uncompressed[1..]);
    identity_from_raw_pubkey(&raw)
}

/// A secp256k1 secret key able to produce committee signatures.
#[derive(Debug, Clone)]
pub struct SigningKey {
    secret: SecretKey,
    identity: Identity,
}

impl SigningKey {
    pub fn new(secret: SecretKey) -> Self {
        let identity = identity_of(&PublicKey::from_secret_key_global(&secret));
        Self { secret, identity }
    }

    /// Generates a fresh key from the OS RNG.
    #[cfg(feature = "rand")]
    pub fn generate() -> Self {
        Self::new(SecretKey::new(&mut rand::thread_rng()))
    }

    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, SignatureError> {
        let secret = SecretKey::from_slice(bytes).map_err(|_| SignatureError::InvalidSecretKey)?;
        Ok(Self::new(secret))
    }

    /// Deterministic key whose scalar is `seed`. Intended for tests and local
    /// fixtures only.
    pub fn from_seed(seed: u8) -> Self {
        let mut bytes = [0u8; 32];
        bytes[31] = seed.max(1);
        let secret = SecretKey::from_slice(&bytes).expect("small non-zero scalar is valid");
        Self::new(secret)
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn secret_bytes(&self) -> [u8; 32] {
        self.secret.secret_bytes()
    }

    /// Signs a digest, producing an `r || s || v` signature with `v` in
    /// Ethereum form (`27`/`28`).
    pub fn sign_digest(&self, digest: &B256) -> RecoverableSignature {
        let message = Message::from_digest(digest.0);
        let sig = SECP256K1.sign_ecdsa_recoverable(&message, &self.secret);
        let (recovery_id, compact) = sig.serialize_compact();

        let mut result = [0u8; 65];
        result[..64].copy_from_slice(&compact);
        result[64] = recovery_id.to_i32() as u8 + 27;
        RecoverableSignature::new(result)
    }
}
