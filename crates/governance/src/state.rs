use serde::{Deserialize, Serialize};
use wrapbridge_params::{BridgeParams, ParamsError};
use wrapbridge_primitives::{Address, Identity, MintKey, OperationKind};

use crate::{
    errors::StateError,
    mint::MintLedger,
    nonce::NonceLedger,
    pause::PauseGate,
    registry::{Signer, SignerRegistry},
    threshold::ThresholdPolicy,
    validator::MultisigValidator,
};

/// Everything the governance core persists for one committee.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBridgeState")]
pub struct BridgeState {
    /// Persistent identity of the bridge, bound into every signed message.
    contract: Identity,
    registry: SignerRegistry,
    threshold: ThresholdPolicy,
    nonces: NonceLedger,
    minted: MintLedger,
    pause: PauseGate,
}

#[derive(Debug, Deserialize)]
struct RawBridgeState {
    contract: Identity,
    registry: SignerRegistry,
    threshold: ThresholdPolicy,
    nonces: NonceLedger,
    minted: MintLedger,
    pause: PauseGate,
}

impl TryFrom<RawBridgeState> for BridgeState {
    type Error = StateError;

    fn try_from(raw: RawBridgeState) -> Result<Self, Self::Error> {
        if raw.contract == Address::ZERO {
            return Err(ParamsError::ZeroContract.into());
        }

        let threshold = raw.threshold.get();
        if threshold as usize > raw.registry.len() {
            return Err(ParamsError::InvalidThreshold {
                threshold,
                signers: raw.registry.len(),
            }
            .into());
        }

        Ok(Self {
            contract: raw.contract,
            registry: raw.registry,
            threshold: raw.threshold,
            nonces: raw.nonces,
            minted: raw.minted,
            pause: raw.pause,
        })
    }
}

impl BridgeState {
    /// Builds the genesis state from validated parameters.
    pub fn from_params(params: &BridgeParams) -> Result<Self, ParamsError> {
        params.validate()?;

        let registry = SignerRegistry::from_members(
            params
                .signers
                .iter()
                .map(|signer| (signer.address, signer.username.clone())),
        )?;

        Ok(Self {
            contract: params.contract_address,
            registry,
            threshold: ThresholdPolicy::new(params.threshold),
            nonces: NonceLedger::new(),
            minted: MintLedger::default(),
            pause: PauseGate::default(),
        })
    }

    pub fn contract(&self) -> &Identity {
        &self.contract
    }

    pub fn registry(&self) -> &SignerRegistry {
        &self.registry
    }

    pub fn signers(&self) -> Vec<Signer> {
        self.registry.all()
    }

    pub fn is_signer(&self, identity: &Identity) -> bool {
        self.registry.is_signer(identity)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold.get()
    }

    pub fn nonces(&self) -> &NonceLedger {
        &self.nonces
    }

    pub fn nonce(&self, kind: OperationKind) -> u64 {
        self.nonces.current(kind)
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn is_minted(&self, trx_id: &str, op_in_trx: u32) -> bool {
        self.minted.is_minted(&MintKey::new(trx_id, op_in_trx))
    }

    pub fn mint_ledger(&self) -> &MintLedger {
        &self.minted
    }

    pub fn validator(&self) -> MultisigValidator<'_> {
        MultisigValidator::new(&self.registry, &self.threshold)
    }

    pub(crate) fn registry_mut(&mut self) -> &mut SignerRegistry {
        &mut self.registry
    }

    pub(crate) fn threshold_mut(&mut self) -> &mut ThresholdPolicy {
        &mut self.threshold
    }

    pub(crate) fn nonces_mut(&mut self) -> &mut NonceLedger {
        &mut self.nonces
    }

    pub(crate) fn minted_mut(&mut self) -> &mut MintLedger {
        &mut self.minted
    }

    pub(crate) fn pause(&self) -> &PauseGate {
        &self.pause
    }

    pub(crate) fn pause_mut(&mut self) -> &mut PauseGate {
        &mut self.pause
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use wrapbridge_params::GenesisSigner;
    use wrapbridge_primitives::Username;

    use super::*;

    fn params() -> BridgeParams {
        BridgeParams {
            contract_address: Address::repeat_byte(0xb1),
            signers: vec![
                GenesisSigner {
                    address: Address::repeat_byte(1),
                    username: Username::try_new("alice").unwrap(),
                },
                GenesisSigner {
                    address: Address::repeat_byte(2),
                    username: Username::try_new("bob").unwrap(),
                },
            ],
            threshold: NonZero::new(2).unwrap(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = BridgeState::from_params(&params()).unwrap();

        assert_eq!(state.threshold(), 2);
        assert_eq!(state.signers().len(), 2);
        assert!(state.is_signer(&Address::repeat_byte(1)));
        assert!(!state.is_paused());
        for kind in OperationKind::ALL {
            assert_eq!(state.nonce(kind), 0);
        }
        assert!(state.mint_ledger().is_empty());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut p = params();
        p.threshold = NonZero::new(3).unwrap();
        assert!(matches!(
            BridgeState::from_params(&p),
            Err(ParamsError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn test_state_json_roundtrip_preserves_registry() {
        let state = BridgeState::from_params(&params()).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let decoded: BridgeState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, decoded);
    }

    #[test]
    fn test_duplicate_genesis_signer_keeps_its_identity() {
        let mut p = params();
        p.signers[1].address = Address::repeat_byte(1);
        assert!(matches!(
            BridgeState::from_params(&p),
            Err(ParamsError::DuplicateSigner(dup)) if dup == Address::repeat_byte(1)
        ));

        p.signers[1].address = Address::ZERO;
        assert!(matches!(
            BridgeState::from_params(&p),
            Err(ParamsError::ZeroIdentity)
        ));
    }

    fn tampered(edit: impl FnOnce(&mut serde_json::Value)) -> String {
        let state = BridgeState::from_params(&params()).unwrap();
        let mut json = serde_json::to_value(&state).unwrap();
        edit(&mut json);
        serde_json::from_value::<BridgeState>(json)
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_load_rejects_repeated_signer_entries() {
        let err = tampered(|json| {
            let alice = json["registry"]["signers"][0].clone();
            json["registry"]["signers"] = serde_json::json!([alice, alice, alice]);
            json["registry"]["labels"] = serde_json::json!({ Address::repeat_byte(1).to_string(): "alice" });
            json["threshold"]["threshold"] = serde_json::json!(3);
        });
        assert!(err.contains("more than once"), "{err}");
    }

    #[test]
    fn test_load_rejects_unreachable_threshold() {
        let err = tampered(|json| {
            json["threshold"]["threshold"] = serde_json::json!(3);
        });
        assert!(err.contains("exceeds committee size 2"), "{err}");
    }

    #[test]
    fn test_load_rejects_zero_contract() {
        let err = tampered(|json| {
            json["contract"] = serde_json::to_value(Address::ZERO).unwrap();
        });
        assert!(err.contains("contract address must not be zero"), "{err}");
    }
}
