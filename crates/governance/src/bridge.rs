//! Governed entry points.

use alloy_primitives::Bytes;
use tracing::{info, warn};
use wrapbridge_msg_fmt::GovernedMessage;
use wrapbridge_params::{BridgeParams, ParamsError};
use wrapbridge_primitives::{Amount, Identity, MintKey, OperationKind, Username};

use crate::{
    balances::BalanceLedger,
    call::BridgeCall,
    errors::BridgeError,
    events::{BridgeEvent, EventSink},
    state::BridgeState,
};


/// A committee-governed bridge bound to its balance and event collaborators.
///
/// Every governed entry point follows the same sequence:
/// 1. Check the pause gate.
/// 2. Build the canonical message with the current nonce for the operation.
/// 3. Validate the signature set against the committee.
/// 4. Validate the call arguments.
/// 5. Apply the effect and advance the operation's nonce.
/// 6. Emit an event.
///
/// Steps 1 through 4 have no side effects, so any rejection leaves the bridge
/// untouched.
#[derive(Debug)]
pub struct Bridge<B, E> {
    state: BridgeState,
    balances: B,
    events: E,
}

impl<B: BalanceLedger, E: EventSink> Bridge<B, E> {
    pub fn new(state: BridgeState, balances: B, events: E) -> Self {
        Self {
            state,
            balances,
            events,
        }
    }

    /// Creates a bridge in its genesis state.
    pub fn from_params(params: &BridgeParams, balances: B, events: E) -> Result<Self, ParamsError> {
        Ok(Self::new(BridgeState::from_params(params)?, balances, events))
    }

    pub fn state(&self) -> &BridgeState {
        &self.state
    }

    pub fn balances(&self) -> &B {
        &self.balances
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn into_parts(self) -> (BridgeState, B, E) {
        (self.state, self.balances, self.events)
    }

    pub fn balance_of(&self, account: &Identity) -> Amount {
        self.balances.balance_of(account)
    }

    fn authorize(
        &self,
        msg: &GovernedMessage<'_>,
        signatures: &[Bytes],
    ) -> Result<(), BridgeError> {
        let digest = msg.digest(self.state.contract());
        self.state.validator().validate(&digest, signatures)?;
        Ok(())
    }

    fn emit(&mut self, event: BridgeEvent) {
        self.events.emit(event);
    }

    /// Mints `amount` to `caller` for the bridge event `(trx_id, op_in_trx)`.
    pub fn wrap(
        &mut self,
        caller: &Identity,
        amount: Amount,
        trx_id: &str,
        op_in_trx: u32,
        signatures: &[Bytes],
    ) -> Result<(), BridgeError> {
        self.state.pause().ensure_not_paused()?;

        let msg = GovernedMessage::Wrap {
            caller,
            amount: &amount,
            trx_id,
            op_in_trx,
        };
        self.authorize(&msg, signatures)?;

        if amount.is_zero() {
            return Err(BridgeError::MustBeNonZero);
        }

        let mint_key = MintKey::new(trx_id, op_in_trx);
        self.state.mint_ledger().ensure_unminted(&mint_key)?;

        self.balances.credit(caller, amount)?;
        self.state.minted_mut().record(mint_key.clone());

        info!(to = %caller, %amount, %mint_key, "wrapped");
        self.emit(BridgeEvent::Wrapped {
            to: *caller,
            amount,
            mint_key,
        });
        Ok(())
    }

    /// Burns `amount` from `caller` and requests release to `username` on the
    /// other chain. Needs no signatures and carries no replay guard.
    pub fn unwrap(
        &mut self,
        caller: &Identity,
        amount: Amount,
        username: &str,
    ) -> Result<(), BridgeError> {
        self.state.pause().ensure_not_paused()?;

        let username = Username::try_new(username)?;

        if amount.is_zero() {
            return Err(BridgeError::MustBeNonZero);
        }

        self.balances.debit(caller, amount)?;

        info!(from = %caller, %amount, %username, "unwrapped");
        self.emit(BridgeEvent::Unwrapped {
            from: *caller,
            amount,
            username,
        });
        Ok(())
    }

    /// Moves balance between holders. Blocked while paused.
    pub fn transfer(
        &mut self,
        caller: &Identity,
        to: &Identity,
        amount: Amount,
    ) -> Result<(), BridgeError> {
        self.state.pause().ensure_not_paused()?;

        self.balances.transfer(caller, to, amount)?;

        self.emit(BridgeEvent::Transferred {
            from: *caller,
            to: *to,
            amount,
        });
        Ok(())
    }

    pub fn add_signer(
        &mut self,
        identity: &Identity,
        username: &str,
        signatures: &[Bytes],
    ) -> Result<(), BridgeError> {
        self.state.pause().ensure_not_paused()?;

        let nonce = self.state.nonce(OperationKind::AddSigner);
        let msg = GovernedMessage::AddSigner {
            identity,
            username,
            nonce,
        };
        self.authorize(&msg, signatures)?;

        let username = self.state.registry_mut().add(*identity, username)?;
        self.state.nonces_mut().advance(OperationKind::AddSigner);

        info!(%identity, %username, nonce, "signer added");
        self.emit(BridgeEvent::SignerAdded {
            identity: *identity,
            username,
        });
        Ok(())
    }

    pub fn remove_signer(
        &mut self,
        identity: &Identity,
        signatures: &[Bytes],
    ) -> Result<(), BridgeError> {
        self.state.pause().ensure_not_paused()?;

        let nonce = self.state.nonce(OperationKind::RemoveSigner);
        let msg = GovernedMessage::RemoveSigner { identity, nonce };
        self.authorize(&msg, signatures)?;

        let threshold = self.state.threshold();
        let username = self.state.registry_mut().remove(identity, threshold)?;
        self.state.nonces_mut().advance(OperationKind::RemoveSigner);

        info!(%identity, %username, nonce, "signer removed");
        self.emit(BridgeEvent::SignerRemoved {
            identity: *identity,
            username,
        });
        Ok(())
    }

    pub fn update_threshold(
        &mut self,
        new_threshold: u8,
        signatures: &[Bytes],
    ) -> Result<(), BridgeError> {
        self.state.pause().ensure_not_paused()?;

        let nonce = self.state.nonce(OperationKind::UpdateThreshold);
        let msg = GovernedMessage::UpdateThreshold {
            new_threshold,
            nonce,
        };
        self.authorize(&msg, signatures)?;

        let old = self.state.threshold();
        let signers = self.state.registry().len();
        self.state.threshold_mut().set(new_threshold, signers)?;
        self.state.nonces_mut().advance(OperationKind::UpdateThreshold);

        info!(old, new = new_threshold, nonce, "multisig threshold updated");
        if new_threshold as usize == signers {
            // Losing any single key now locks the committee out for good.
            warn!(
                threshold = new_threshold,
                signers,
                "threshold equals committee size, no signer can be lost"
            );
        }
        self.emit(BridgeEvent::ThresholdUpdated {
            old,
            new: new_threshold,
        });
        Ok(())
    }

    pub fn pause(&mut self, signatures: &[Bytes]) -> Result<(), BridgeError> {
        self.state.pause().ensure_not_paused()?;

        let nonce = self.state.nonce(OperationKind::Pause);
        self.authorize(&GovernedMessage::Pause { nonce }, signatures)?;

        self.state.pause_mut().engage();
        self.state.nonces_mut().advance(OperationKind::Pause);

        info!(nonce, "bridge paused");
        self.emit(BridgeEvent::Paused);
        Ok(())
    }

    pub fn unpause(&mut self, signatures: &[Bytes]) -> Result<(), BridgeError> {
        self.state.pause().ensure_paused()?;

        let nonce = self.state.nonce(OperationKind::Unpause);
        self.authorize(&GovernedMessage::Unpause { nonce }, signatures)?;

        self.state.pause_mut().release();
        self.state.nonces_mut().advance(OperationKind::Unpause);

        info!(nonce, "bridge unpaused");
        self.emit(BridgeEvent::Unpaused);
        Ok(())
    }

    /// Dispatches `call` submitted by `caller`.
    pub fn execute(&mut self, caller: &Identity, call: &BridgeCall) -> Result<(), BridgeError> {
        match call {
            BridgeCall::Wrap {
                amount,
                trx_id,
                op_in_trx,
                signatures,
            } => self.wrap(caller, *amount, trx_id, *op_in_trx, signatures),
            BridgeCall::Unwrap { amount, username } => self.unwrap(caller, *amount, username),
            BridgeCall::Transfer { to, amount } => self.transfer(caller, to, *amount),
            BridgeCall::AddSigner {
                identity,
                username,
                signatures,
            } => self.add_signer(identity, username, signatures),
            BridgeCall::RemoveSigner {
                identity,
                signatures,
            } => self.remove_signer(identity, signatures),
            BridgeCall::UpdateThreshold {
                new_threshold,
                signatures,
            } => self.update_threshold(*new_threshold, signatures),
            BridgeCall::Pause { signatures } => self.pause(signatures),
            BridgeCall::Unpause { signatures } => self.unpause(signatures),
        }
    }
}
