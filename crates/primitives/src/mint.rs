//! Keys identifying bridge-origin events that may produce a mint.

use std::fmt;

use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

/// Reference to an operation inside a source-chain transaction.
///
/// A given key can authorize at most one mint.
#[derive(
    Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Arbitrary, Serialize, Deserialize,
)]
pub struct MintKey {
    /// Source-chain transaction id.
    pub trx_id: String,
    /// Index of the operation within that transaction.
    pub op_in_trx: u32,
}

impl MintKey {
    pub fn new(trx_id: impl Into<String>, op_in_trx: u32) -> Self {
        Self {
            trx_id: trx_id.into(),
            op_in_trx,
        }
    }
}

impl fmt::Display for MintKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.trx_id, self.op_in_trx)
    }
}
