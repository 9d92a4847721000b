//! Signer recovery from recoverable ECDSA signatures.

use alloy_primitives::B256;
use secp256k1::{
    Message, SECP256K1,
    ecdsa::{self, RecoveryId},
};
use wrapbridge_primitives::Identity;

use crate::{errors::SignatureError, keys::identity_of, signature::RecoverableSignature};

/// Recovers the identity that produced `signature` over `digest`.
///
/// The recovered identity is not checked against any committee; an unrelated
/// key yields a well-formed but unauthorized identity.
pub fn recover_signer(
    digest: &B256,
    signature: &RecoverableSignature,
) -> Result<Identity, SignatureError> {
    let message = Message::from_digest(digest.0);

    let recovery_id = RecoveryId::from_i32(signature.recovery_id()? as i32)
        .map_err(|_| SignatureError::InvalidRecoveryId(signature.v()))?;

    let recoverable_sig =
        ecdsa::RecoverableSignature::from_compact(&signature.compact(), recovery_id)
            .map_err(|_| SignatureError::InvalidEncoding)?;

    let pubkey = SECP256K1
        .recover_ecdsa(&message, &recoverable_sig)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(identity_of(&pubkey))
}
