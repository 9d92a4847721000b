//! Threshold verification of committee signatures.

use std::collections::HashSet;

use alloy_primitives::{B256, Bytes};
use thiserror::Error;
use tracing::debug;
use wrapbridge_crypto::{RecoverableSignature, SignatureError, recover_signer};

use crate::{registry::SignerRegistry, threshold::ThresholdPolicy};

/// Reasons a signature set fails to authorize a message.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("not enough signatures: provided {provided}, required {required}")]
    NotEnoughSignatures { provided: usize, required: usize },

    #[error("too many signatures: provided {provided}, committee has {signers}")]
    TooManySignatures { provided: usize, signers: usize },

    /// A signature could not be decoded or recovered.
    #[error("signature at index {index}: {source}")]
    MalformedSignature {
        index: usize,
        #[source]
        source: SignatureError,
    },

    /// Fewer than `required` distinct committee members signed.
    #[error("invalid signatures: {valid} distinct valid signers, required {required}")]
    InvalidSignatures { valid: usize, required: usize },
}

/// Checks signature sets against the current committee and threshold.
///
/// Validation never mutates state; callers apply effects only after it
/// succeeds.
#[derive(Debug, Clone, Copy)]
pub struct MultisigValidator<'a> {
    registry: &'a SignerRegistry,
    threshold: &'a ThresholdPolicy,
}

impl<'a> MultisigValidator<'a> {
    pub fn new(registry: &'a SignerRegistry, threshold: &'a ThresholdPolicy) -> Self {
        Self {
            registry,
            threshold,
        }
    }

    /// Accepts once `threshold` distinct registered signers are recovered from
    /// `signatures`, scanning in input order.
    ///
    /// # Verification Steps
    ///
    /// 1. The count must lie in `threshold..=committee size`.
    /// 2. Each signature is recovered; identities that are not registered, or
    ///    that were already counted in this call, are skipped.
    /// 3. The scan stops as soon as the threshold is reached, so signatures
    ///    after that point are never decoded.
    pub fn validate(&self, digest: &B256, signatures: &[Bytes]) -> Result<(), ValidationError> {
        let provided = signatures.len();
        let required = self.threshold.get() as usize;
        let signers = self.registry.len();

        if provided < required {
            return Err(ValidationError::NotEnoughSignatures { provided, required });
        }

        if provided > signers {
            return Err(ValidationError::TooManySignatures { provided, signers });
        }

        let mut seen = HashSet::with_capacity(required);
        for (index, raw) in signatures.iter().enumerate() {
            let signature = RecoverableSignature::from_slice(raw)
                .map_err(|source| ValidationError::MalformedSignature { index, source })?;
            let identity = recover_signer(digest, &signature)
                .map_err(|source| ValidationError::MalformedSignature { index, source })?;

            if !self.registry.is_signer(&identity) {
                debug!(index, %identity, "skipping signature from non-signer");
                continue;
            }

            if !seen.insert(identity) {
                debug!(index, %identity, "skipping duplicate signer");
                continue;
            }

            if seen.len() == required {
                debug!(processed = index + 1, provided, "signature threshold reached");
                return Ok(());
            }
        }

        Err(ValidationError::InvalidSignatures {
            valid: seen.len(),
            required,
        })
    }
}
