//! Canonical encoding of the messages that committee members sign.
//!
//! Every governed call is rendered as `;`-separated text: an operation tag,
//! the call arguments in declared order, the operation nonce (absent for
//! `wrap`, whose replay protection is the mint ledger) and finally the bridge's
//! own identity. The layouts must match the signers' tooling byte for byte:
//!
//! ```text
//! wrap;<caller>;<amount>;<trx_id>;<op_in_trx>;<contract>
//! addSigner;<identity>;<username>;<nonce>;<contract>
//! removeSigner;<identity>;<nonce>;<contract>
//! updateMultisigThreshold;<threshold>;<nonce>;<contract>
//! pause;<nonce>;<contract>
//! unpause;<nonce>;<contract>
//! ```

use wrapbridge_crypto::message_digest;
use wrapbridge_primitives::{
    Amount, B256, Identity, OperationKind, identity::format_identity,
};

/// Field separator.
pub const DELIMITER: char = ';';

/// Tag opening a `wrap` message.
pub const WRAP_TAG: &str = "wrap";

/// A governed call, as it appears in the signed message.
///
/// Arguments are carried raw: a message over an argument that later fails
/// validation is still well-defined and can still be signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GovernedMessage<'a> {
    Wrap {
        caller: &'a Identity,
        amount: &'a Amount,
        trx_id: &'a str,
        op_in_trx: u32,
    },
    AddSigner {
        identity: &'a Identity,
        username: &'a str,
        nonce: u64,
    },
    RemoveSigner {
        identity: &'a Identity,
        nonce: u64,
    },
    UpdateThreshold {
        new_threshold: u8,
        nonce: u64,
    },
    Pause {
        nonce: u64,
    },
    Unpause {
        nonce: u64,
    },
}

impl GovernedMessage<'_> {
    /// Operation kind whose nonce this message embeds, if any.
    pub fn kind(&self) -> Option<OperationKind> {
        match self {
            GovernedMessage::Wrap { .. } => None,
            GovernedMessage::AddSigner { .. } => Some(OperationKind::AddSigner),
            GovernedMessage::RemoveSigner { .. } => Some(OperationKind::RemoveSigner),
            GovernedMessage::UpdateThreshold { .. } => Some(OperationKind::UpdateThreshold),
            GovernedMessage::Pause { .. } => Some(OperationKind::Pause),
            GovernedMessage::Unpause { .. } => Some(OperationKind::Unpause),
        }
    }

    fn tag(&self) -> &'static str {
        self.kind().map_or(WRAP_TAG, OperationKind::tag)
    }

    /// Renders the message bound to the bridge at `contract`.
    pub fn encode(&self, contract: &Identity) -> String {
        let mut fields: Vec<String> = vec![self.tag().to_owned()];
        match *self {
            GovernedMessage::Wrap {
                caller,
                amount,
                trx_id,
                op_in_trx,
            } => {
                fields.push(format_identity(caller));
                fields.push(amount.to_string());
                fields.push(trx_id.to_owned());
                fields.push(op_in_trx.to_string());
            }
            GovernedMessage::AddSigner {
                identity,
                username,
                nonce,
            } => {
                fields.push(format_identity(identity));
                fields.push(username.to_owned());
                fields.push(nonce.to_string());
            }
            GovernedMessage::RemoveSigner { identity, nonce } => {
                fields.push(format_identity(identity));
                fields.push(nonce.to_string());
            }
            GovernedMessage::UpdateThreshold {
                new_threshold,
                nonce,
            } => {
                fields.push(new_threshold.to_string());
                fields.push(nonce.to_string());
            }
            GovernedMessage::Pause { nonce } | GovernedMessage::Unpause { nonce } => {
                fields.push(nonce.to_string());
            }
        }
        fields.push(format_identity(contract));
        fields.join(&DELIMITER.to_string())
    }

    /// Digest committee members sign for this message.
    pub fn digest(&self, contract: &Identity) -> B256 {
        message_digest(self.encode(contract).as_bytes())
    }
}
