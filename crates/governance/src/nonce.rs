use serde::{Deserialize, Serialize};
use wrapbridge_primitives::OperationKind;

/// One replay-protection counter per governed operation kind.
///
/// Counters start at zero and are advanced exactly once per committed
/// operation of their kind. They are never reset or decremented.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct NonceLedger {
    counters: [u64; OperationKind::COUNT],
}

impl NonceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nonce the next `kind` message must embed.
    pub fn current(&self, kind: OperationKind) -> u64 {
        self.counters[kind.index()]
    }

    /// Marks the current `kind` nonce as consumed.
    pub(crate) fn advance(&mut self, kind: OperationKind) {
        self.counters[kind.index()] += 1;
    }
}
