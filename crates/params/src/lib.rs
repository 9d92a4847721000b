//! Genesis parameters of a bridge committee.

use std::{collections::HashSet, num::NonZero, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wrapbridge_primitives::{Address, Identity, Username};

/// Default value for `threshold` in [`BridgeParams`].
const DEFAULT_THRESHOLD: u8 = 1;

/// A committee member present at genesis.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GenesisSigner {
    pub address: Identity,
    pub username: Username,
}

/// Parameters a bridge is initialized with.
///
/// Loaded from TOML:
///
/// ```toml
/// contract_address = "0x00000000000000000000000000000000000000b1"
/// threshold = 1
///
/// [[signers]]
/// address = "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
/// username = "alice"
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BridgeParams {
    /// Persistent identity of the bridge, bound into every signed message.
    pub contract_address: Identity,

    /// Initial committee. Must not be empty.
    pub signers: Vec<GenesisSigner>,

    /// Initial multisig threshold.
    #[serde(default = "default_threshold")]
    pub threshold: NonZero<u8>,
}

fn default_threshold() -> NonZero<u8> {
    NonZero::new(DEFAULT_THRESHOLD).expect("default threshold is non-zero")
}

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("committee is empty")]
    EmptyCommittee,

    #[error("committee contains the zero identity")]
    ZeroIdentity,

    #[error("committee lists {0} more than once")]
    DuplicateSigner(Identity),

    #[error("invalid threshold: {threshold} exceeds committee size {signers}")]
    InvalidThreshold { threshold: u8, signers: usize },

    #[error("contract address must not be zero")]
    ZeroContract,

    #[error("failed to read params file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse params: {0}")]
    Parse(#[from] toml::de::Error),
}

impl BridgeParams {
    /// Single-signer parameters with threshold 1.
    pub fn single_signer(contract_address: Identity, address: Identity, username: Username) -> Self {
        Self {
            contract_address,
            signers: vec![GenesisSigner { address, username }],
            threshold: default_threshold(),
        }
    }

    /// Checks the invariants the runtime operations maintain afterwards.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.contract_address == Address::ZERO {
            return Err(ParamsError::ZeroContract);
        }

        if self.signers.is_empty() {
            return Err(ParamsError::EmptyCommittee);
        }

        let mut seen = HashSet::with_capacity(self.signers.len());
        for signer in &self.signers {
            if signer.address == Address::ZERO {
                return Err(ParamsError::ZeroIdentity);
            }
            if !seen.insert(signer.address) {
                return Err(ParamsError::DuplicateSigner(signer.address));
            }
        }

        if self.threshold.get() as usize > self.signers.len() {
            return Err(ParamsError::InvalidThreshold {
                threshold: self.threshold.get(),
                signers: self.signers.len(),
            });
        }

        Ok(())
    }

    /// Parses and validates params from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ParamsError> {
        let params: Self = toml::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    /// Reads, parses and validates params from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
contract_address = "0x00000000000000000000000000000000000000b1"

[[signers]]
address = "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
username = "alice"

[[signers]]
address = "0x2b5ad5c4795c026514f8317c7a215e218dccd6cf"
username = "bob"
"#;

    #[test]
    fn test_parse_sample_with_default_threshold() {
        let params = BridgeParams::from_toml_str(SAMPLE).unwrap();
        assert_eq!(params.signers.len(), 2);
        assert_eq!(params.threshold.get(), 1);
        assert_eq!(params.signers[1].username.as_str(), "bob");
    }

    #[test]
    fn test_threshold_exceeding_committee() {
        let raw = format!("threshold = 3\n{SAMPLE}");
        assert!(matches!(
            BridgeParams::from_toml_str(&raw),
            Err(ParamsError::InvalidThreshold {
                threshold: 3,
                signers: 2
            })
        ));
    }

    #[test]
    fn test_zero_threshold_rejected_by_parser() {
        let raw = format!("threshold = 0\n{SAMPLE}");
        assert!(matches!(
            BridgeParams::from_toml_str(&raw),
            Err(ParamsError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_username_rejected_by_parser() {
        let raw = SAMPLE.replace("\"bob\"", "\"bo\"");
        assert!(matches!(
            BridgeParams::from_toml_str(&raw),
            Err(ParamsError::Parse(_))
        ));
    }

    #[test]
    fn test_duplicate_and_zero_signers() {
        let alice: Identity = "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf".parse().unwrap();
        let contract = Address::repeat_byte(0xb1);
        let name = Username::try_new("alice").unwrap();

        let mut params = BridgeParams::single_signer(contract, alice, name.clone());
        params.validate().unwrap();

        params.signers.push(GenesisSigner {
            address: alice,
            username: name.clone(),
        });
        assert!(matches!(params.validate(), Err(ParamsError::DuplicateSigner(a)) if a == alice));

        let zero = BridgeParams::single_signer(contract, Address::ZERO, name.clone());
        assert!(matches!(zero.validate(), Err(ParamsError::ZeroIdentity)));

        let no_contract = BridgeParams::single_signer(Address::ZERO, alice, name);
        assert!(matches!(no_contract.validate(), Err(ParamsError::ZeroContract)));
    }

    #[test]
    fn test_empty_committee() {
        let raw = "contract_address = \"0x00000000000000000000000000000000000000b1\"\nsigners = []\n";
        assert!(matches!(
            BridgeParams::from_toml_str(raw),
            Err(ParamsError::EmptyCommittee)
        ));
    }
}
