//! Persisted bridge state.

use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use wrapbridge_governance::{Bridge, BridgeState, EventSink, InMemoryBalances};
use wrapbridge_params::{BridgeParams, ParamsError};

/// Governance state plus token balances, as written by `run --output`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Snapshot {
    pub(crate) state: BridgeState,
    #[serde(default)]
    pub(crate) balances: InMemoryBalances,
}

impl Snapshot {
    pub(crate) fn genesis(params: &BridgeParams) -> Result<Self, ParamsError> {
        Ok(Self {
            state: BridgeState::from_params(params)?,
            balances: InMemoryBalances::new(),
        })
    }

    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse snapshot {}", path.display()))
    }

    pub(crate) fn save(&self, path: &Path) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write snapshot {}", path.display()))
    }

    pub(crate) fn into_bridge<E: EventSink>(self, events: E) -> Bridge<InMemoryBalances, E> {
        Bridge::new(self.state, self.balances, events)
    }

    pub(crate) fn from_bridge<E: EventSink>(bridge: Bridge<InMemoryBalances, E>) -> Self {
        let (state, balances, _) = bridge.into_parts();
        Self { state, balances }
    }
}

#[cfg(test)]
mod tests {
    use wrapbridge_primitives::Address;
    use wrapbridge_test_utils::TestCommittee;

    use super::*;

    fn genesis() -> (TestCommittee, Snapshot) {
        let committee = TestCommittee::new(3);
        let params = committee.params(Address::repeat_byte(0xb1), 3, 2);
        (committee, Snapshot::genesis(&params).unwrap())
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let (_, snapshot) = genesis();

        snapshot.save(&path).unwrap();
        assert_eq!(Snapshot::load(&path).unwrap(), snapshot);
    }

    #[test]
    fn test_load_rejects_edited_committee() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let (committee, snapshot) = genesis();
        snapshot.save(&path).unwrap();

        // One real member listed three times behind a threshold of three.
        let mut json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let member = committee.identity(0);
        json["state"]["registry"]["signers"] = serde_json::json!([member, member, member]);
        json["state"]["registry"]["labels"] =
            serde_json::json!({ member.to_string(): committee.username(0) });
        json["state"]["threshold"]["threshold"] = serde_json::json!(3);
        fs::write(&path, json.to_string()).unwrap();

        let err = Snapshot::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("more than once"), "{err:#}");
    }
}
