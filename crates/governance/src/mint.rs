use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use wrapbridge_primitives::MintKey;

use crate::errors::BridgeError;

/// Write-once record of source-chain references that have produced a mint.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MintLedger {
    minted: BTreeSet<MintKey>,
}

impl MintLedger {
    pub fn is_minted(&self, key: &MintKey) -> bool {
        self.minted.contains(key)
    }

    pub fn ensure_unminted(&self, key: &MintKey) -> Result<(), BridgeError> {
        if self.is_minted(key) {
            return Err(BridgeError::AlreadyMinted(key.clone()));
        }
        Ok(())
    }

    /// Records `key`. Callers check [`Self::ensure_unminted`] first.
    pub(crate) fn record(&mut self, key: MintKey) {
        let fresh = self.minted.insert(key);
        debug_assert!(fresh, "mint key recorded twice");
    }

    pub fn len(&self) -> usize {
        self.minted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_distinguish_operation_index() {
        let mut ledger = MintLedger::default();
        ledger.record(MintKey::new("tx1", 0));

        assert!(ledger.is_minted(&MintKey::new("tx1", 0)));
        assert!(!ledger.is_minted(&MintKey::new("tx1", 1)));
        assert!(!ledger.is_minted(&MintKey::new("tx2", 0)));
        assert_eq!(
            ledger.ensure_unminted(&MintKey::new("tx1", 0)),
            Err(BridgeError::AlreadyMinted(MintKey::new("tx1", 0)))
        );
        assert!(ledger.ensure_unminted(&MintKey::new("tx1", 1)).is_ok());
    }
}
