//! Serialization point for concurrent submitters.

use std::sync::Arc;

use parking_lot::Mutex;
use wrapbridge_primitives::Identity;

use crate::{
    balances::BalanceLedger, bridge::Bridge, call::BridgeCall, errors::BridgeError,
    events::EventSink,
};

/// A bridge shared between threads.
///
/// Every call runs to completion under a single lock, so calls are applied in
/// one total order and nonce and mint-uniqueness checks can never interleave.
#[derive(Debug)]
pub struct SharedBridge<B, E> {
    inner: Arc<Mutex<Bridge<B, E>>>,
}

impl<B, E> Clone for SharedBridge<B, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: BalanceLedger, E: EventSink> SharedBridge<B, E> {
    pub fn new(bridge: Bridge<B, E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bridge)),
        }
    }

    pub fn execute(&self, caller: &Identity, call: &BridgeCall) -> Result<(), BridgeError> {
        self.inner.lock().execute(caller, call)
    }

    /// Runs `f` against a consistent view of the bridge.
    pub fn read<R>(&self, f: impl FnOnce(&Bridge<B, E>) -> R) -> R {
        let guard = self.inner.lock();
        f(&*guard)
    }
}
