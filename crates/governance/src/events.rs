//! Notifications for off-chain observers.

use serde::{Deserialize, Serialize};
use tracing::info;
use wrapbridge_primitives::{Amount, Identity, MintKey, Username};

/// Structured record describing a committed effect.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeEvent {
    SignerAdded {
        identity: Identity,
        username: Username,
    },
    SignerRemoved {
        identity: Identity,
        username: Username,
    },
    ThresholdUpdated {
        old: u8,
        new: u8,
    },
    Paused,
    Unpaused,
    Wrapped {
        to: Identity,
        amount: Amount,
        mint_key: MintKey,
    },
    /// Hand-off to the return leg: `amount` was burned from `from` and is to
    /// be released to `username` on the other chain.
    Unwrapped {
        from: Identity,
        amount: Amount,
        username: Username,
    },
    Transferred {
        from: Identity,
        to: Identity,
        amount: Amount,
    },
}

/// Receives events in commit order.
pub trait EventSink {
    fn emit(&mut self, event: BridgeEvent);
}

/// Sink that keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<BridgeEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[BridgeEvent] {
        &self.events
    }

    pub fn last(&self) -> Option<&BridgeEvent> {
        self.events.last()
    }

    /// Takes all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<BridgeEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: BridgeEvent) {
        self.events.push(event);
    }
}

/// Sink that writes each event to the tracing subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: BridgeEvent) {
        info!(target: "wrapbridge::events", ?event, "bridge event");
    }
}
