//! Governance and validation core of the wrapped-token bridge.
//!
//! A committee of registered signers authorizes every privileged transition
//! (minting wrapped value, changing the committee, changing the threshold,
//! pausing) with recoverable ECDSA signatures over a canonical message. Each
//! operation kind carries its own nonce for replay protection; mints are
//! additionally keyed by their source-chain reference so that each bridge
//! event mints at most once.

mod balances;
mod bridge;
mod call;
mod errors;
mod events;
mod mint;
mod nonce;
mod pause;
mod registry;
mod shared;
mod state;
mod threshold;
mod validator;

pub use balances::{BalanceError, BalanceLedger, InMemoryBalances};
pub use bridge::Bridge;
pub use call::{BridgeCall, SigningRequest};
pub use errors::{BridgeError, StateError};
pub use events::{BridgeEvent, EventLog, EventSink, TracingSink};
pub use mint::MintLedger;
pub use nonce::NonceLedger;
pub use pause::PauseGate;
pub use registry::{Signer, SignerRegistry};
pub use shared::SharedBridge;
pub use state::BridgeState;
pub use threshold::{ThresholdError, ThresholdPolicy};
pub use validator::{MultisigValidator, ValidationError};
