//! Envelope describing every bridge entry point.

use alloy_primitives::{B256, Bytes};
use serde::{Deserialize, Serialize};
use wrapbridge_msg_fmt::GovernedMessage;
use wrapbridge_primitives::{Amount, Identity, OperationKind};

use crate::state::BridgeState;

/// A call against the bridge, as submitted by `caller`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BridgeCall {
    Wrap {
        amount: Amount,
        trx_id: String,
        op_in_trx: u32,
        #[serde(default)]
        signatures: Vec<Bytes>,
    },
    Unwrap {
        amount: Amount,
        username: String,
    },
    Transfer {
        to: Identity,
        amount: Amount,
    },
    AddSigner {
        identity: Identity,
        username: String,
        #[serde(default)]
        signatures: Vec<Bytes>,
    },
    RemoveSigner {
        identity: Identity,
        #[serde(default)]
        signatures: Vec<Bytes>,
    },
    UpdateThreshold {
        new_threshold: u8,
        #[serde(default)]
        signatures: Vec<Bytes>,
    },
    Pause {
        #[serde(default)]
        signatures: Vec<Bytes>,
    },
    Unpause {
        #[serde(default)]
        signatures: Vec<Bytes>,
    },
}

/// The exact text and digest committee members sign to authorize a call.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SigningRequest {
    pub message: String,
    pub digest: B256,
}

impl BridgeCall {
    /// Whether this call needs committee signatures.
    pub fn is_governed(&self) -> bool {
        !matches!(self, BridgeCall::Unwrap { .. } | BridgeCall::Transfer { .. })
    }

    /// Signatures attached to the call; empty for ungoverned calls.
    pub fn signatures(&self) -> &[Bytes] {
        match self {
            BridgeCall::Wrap { signatures, .. }
            | BridgeCall::AddSigner { signatures, .. }
            | BridgeCall::RemoveSigner { signatures, .. }
            | BridgeCall::UpdateThreshold { signatures, .. }
            | BridgeCall::Pause { signatures }
            | BridgeCall::Unpause { signatures } => signatures,
            BridgeCall::Unwrap { .. } | BridgeCall::Transfer { .. } => &[],
        }
    }

    /// Replaces the attached signatures. No-op for ungoverned calls.
    pub fn set_signatures(&mut self, sigs: Vec<Bytes>) {
        match self {
            BridgeCall::Wrap { signatures, .. }
            | BridgeCall::AddSigner { signatures, .. }
            | BridgeCall::RemoveSigner { signatures, .. }
            | BridgeCall::UpdateThreshold { signatures, .. }
            | BridgeCall::Pause { signatures }
            | BridgeCall::Unpause { signatures } => *signatures = sigs,
            BridgeCall::Unwrap { .. } | BridgeCall::Transfer { .. } => {}
        }
    }
}

/// Builds the governed message for `call` against the current nonces.
pub(crate) fn governed_message<'a>(
    state: &BridgeState,
    caller: &'a Identity,
    call: &'a BridgeCall,
) -> Option<GovernedMessage<'a>> {
    let msg = match call {
        BridgeCall::Wrap {
            amount,
            trx_id,
            op_in_trx,
            ..
        } => GovernedMessage::Wrap {
            caller,
            amount,
            trx_id,
            op_in_trx: *op_in_trx,
        },
        BridgeCall::AddSigner {
            identity, username, ..
        } => GovernedMessage::AddSigner {
            identity,
            username,
            nonce: state.nonce(OperationKind::AddSigner),
        },
        BridgeCall::RemoveSigner { identity, .. } => GovernedMessage::RemoveSigner {
            identity,
            nonce: state.nonce(OperationKind::RemoveSigner),
        },
        BridgeCall::UpdateThreshold { new_threshold, .. } => GovernedMessage::UpdateThreshold {
            new_threshold: *new_threshold,
            nonce: state.nonce(OperationKind::UpdateThreshold),
        },
        BridgeCall::Pause { .. } => GovernedMessage::Pause {
            nonce: state.nonce(OperationKind::Pause),
        },
        BridgeCall::Unpause { .. } => GovernedMessage::Unpause {
            nonce: state.nonce(OperationKind::Unpause),
        },
        BridgeCall::Unwrap { .. } | BridgeCall::Transfer { .. } => return None,
    };
    Some(msg)
}

impl BridgeState {
    /// What committee members must sign for `caller` to submit `call` now.
    ///
    /// Returns `None` for calls that need no signatures.
    pub fn signing_request(&self, caller: &Identity, call: &BridgeCall) -> Option<SigningRequest> {
        let msg = governed_message(self, caller, call)?;
        Some(SigningRequest {
            message: msg.encode(self.contract()),
            digest: msg.digest(self.contract()),
        })
    }
}
