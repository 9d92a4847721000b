use std::fmt;

use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

/// Governed operations that carry their own replay-protection nonce.
///
/// `wrap` is governed too, but its replay protection comes from the mint
/// ledger rather than from a nonce, so it has no variant here.
#[repr(u8)]
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Arbitrary,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    AddSigner,
    RemoveSigner,
    UpdateThreshold,
    Pause,
    Unpause,
}

impl OperationKind {
    /// Number of variants.
    pub const COUNT: usize = 5;

    /// All kinds, in discriminant order.
    pub const ALL: [OperationKind; Self::COUNT] = [
        OperationKind::AddSigner,
        OperationKind::RemoveSigner,
        OperationKind::UpdateThreshold,
        OperationKind::Pause,
        OperationKind::Unpause,
    ];

    /// Tag that opens the signed message for this operation.
    pub fn tag(self) -> &'static str {
        match self {
            OperationKind::AddSigner => "addSigner",
            OperationKind::RemoveSigner => "removeSigner",
            OperationKind::UpdateThreshold => "updateMultisigThreshold",
            OperationKind::Pause => "pause",
            OperationKind::Unpause => "unpause",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
