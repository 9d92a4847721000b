use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wrapbridge_params::ParamsError;
use wrapbridge_primitives::{Address, Identity, Username};

use crate::{
    errors::{BridgeError, StateError},
    threshold::ThresholdError,
};

/// A registered committee member.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Signer {
    pub identity: Identity,
    pub username: Username,
}

/// The authoritative committee.
///
/// An identity is a signer iff it has a label. The backing sequence carries no
/// meaning in its order; removal swaps the last entry into the vacated slot.
/// Deserialization re-checks that both sides describe the same non-empty set.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSignerRegistry")]
pub struct SignerRegistry {
    signers: Vec<Identity>,
    labels: BTreeMap<Identity, Username>,
}

/// Unchecked wire form of [`SignerRegistry`].
#[derive(Debug, Deserialize)]
struct RawSignerRegistry {
    signers: Vec<Identity>,
    labels: BTreeMap<Identity, Username>,
}

impl TryFrom<RawSignerRegistry> for SignerRegistry {
    type Error = StateError;

    fn try_from(raw: RawSignerRegistry) -> Result<Self, Self::Error> {
        let members = raw
            .signers
            .iter()
            .map(|id| {
                raw.labels
                    .get(id)
                    .map(|username| (*id, username.clone()))
                    .ok_or(StateError::MissingUsername(*id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let registry = Self::from_members(members)?;

        if let Some(orphan) = raw.labels.keys().find(|id| !registry.is_signer(id)) {
            return Err(StateError::OrphanUsername(*orphan));
        }

        Ok(registry)
    }
}

impl SignerRegistry {
    /// Builds a committee of unique, non-zero identities. Refuses an empty one.
    pub(crate) fn from_members(
        members: impl IntoIterator<Item = (Identity, Username)>,
    ) -> Result<Self, ParamsError> {
        let mut registry = Self::default();
        for (identity, username) in members {
            if identity == Address::ZERO {
                return Err(ParamsError::ZeroIdentity);
            }
            if registry.is_signer(&identity) {
                return Err(ParamsError::DuplicateSigner(identity));
            }
            registry.signers.push(identity);
            registry.labels.insert(identity, username);
        }

        if registry.is_empty() {
            return Err(ParamsError::EmptyCommittee);
        }

        Ok(registry)
    }

    pub fn is_signer(&self, identity: &Identity) -> bool {
        self.labels.contains_key(identity)
    }

    pub fn username(&self, identity: &Identity) -> Option<&Username> {
        self.labels.get(identity)
    }

    pub fn len(&self) -> usize {
        self.signers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }

    /// Snapshot of the committee. Order is not stable across removals.
    pub fn all(&self) -> Vec<Signer> {
        self.signers
            .iter()
            .filter_map(|id| {
                self.labels.get(id).map(|username| Signer {
                    identity: *id,
                    username: username.clone(),
                })
            })
            .collect()
    }

    /// Registers `identity` under `username`, returning the validated label.
    pub(crate) fn add(
        &mut self,
        identity: Identity,
        username: &str,
    ) -> Result<Username, BridgeError> {
        if identity == Address::ZERO {
            return Err(BridgeError::ZeroIdentity);
        }

        let username = Username::try_new(username)?;

        if self.is_signer(&identity) {
            return Err(BridgeError::SignerAlreadyExists(identity));
        }

        self.signers.push(identity);
        self.labels.insert(identity, username.clone());
        Ok(username)
    }

    /// Deregisters `identity`, refusing to leave fewer than `threshold`
    /// signers behind. Returns the label the signer was registered under.
    pub(crate) fn remove(
        &mut self,
        identity: &Identity,
        threshold: u8,
    ) -> Result<Username, BridgeError> {
        if !self.is_signer(identity) {
            return Err(BridgeError::SignerDoesNotExist(*identity));
        }

        let remaining = self.signers.len() - 1;
        if remaining < threshold as usize {
            return Err(ThresholdError::RemovalBelowThreshold {
                threshold,
                remaining,
            }
            .into());
        }

        let username = self
            .labels
            .remove(identity)
            .ok_or(BridgeError::SignerDoesNotExist(*identity))?;

        if let Some(pos) = self.signers.iter().position(|s| s == identity) {
            self.signers.swap_remove(pos);
        }

        Ok(username)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use wrapbridge_primitives::UsernameError;

    use super::*;

    fn id(b: u8) -> Identity {
        Address::repeat_byte(b)
    }

    fn registry(ids: &[u8]) -> SignerRegistry {
        let mut reg = SignerRegistry::default();
        for &b in ids {
            reg.add(id(b), &format!("signer{b}")).unwrap();
        }
        reg
    }

    #[test]
    fn test_add_validations_in_order() {
        let mut reg = registry(&[1]);

        assert_eq!(reg.add(Address::ZERO, "x"), Err(BridgeError::ZeroIdentity));
        assert_eq!(
            reg.add(id(2), "xy"),
            Err(BridgeError::InvalidUsername(UsernameError::InvalidLength { len: 2 }))
        );
        assert_eq!(
            reg.add(id(1), "again"),
            Err(BridgeError::SignerAlreadyExists(id(1)))
        );
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_label_presence_is_registration() {
        let mut reg = registry(&[1, 2]);
        assert!(reg.is_signer(&id(2)));
        assert_eq!(reg.username(&id(2)).unwrap().as_str(), "signer2");

        reg.remove(&id(2), 1).unwrap();
        assert!(!reg.is_signer(&id(2)));
        assert!(reg.username(&id(2)).is_none());
    }

    #[test]
    fn test_remove_swaps_and_keeps_members() {
        let mut reg = registry(&[1, 2, 3, 4]);
        let removed = reg.remove(&id(1), 1).unwrap();
        assert_eq!(removed.as_str(), "signer1");

        let members: HashSet<_> = reg.all().into_iter().map(|s| s.identity).collect();
        assert_eq!(members, HashSet::from([id(2), id(3), id(4)]));
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_remove_unknown_and_below_threshold() {
        let mut reg = registry(&[1, 2]);
        assert_eq!(
            reg.remove(&id(9), 1),
            Err(BridgeError::SignerDoesNotExist(id(9)))
        );
        assert_eq!(
            reg.remove(&id(1), 2),
            Err(BridgeError::InvalidThreshold(
                ThresholdError::RemovalBelowThreshold {
                    threshold: 2,
                    remaining: 1
                }
            ))
        );
        assert_eq!(reg.len(), 2);
        assert!(reg.is_signer(&id(1)));
    }

    fn members(ids: &[u8]) -> Vec<(Identity, Username)> {
        ids.iter()
            .map(|&b| (id(b), Username::try_new(format!("signer{b}")).unwrap()))
            .collect()
    }

    #[test]
    fn test_from_members_checks_committee() {
        let reg = SignerRegistry::from_members(members(&[1, 2])).unwrap();
        assert_eq!(reg, registry(&[1, 2]));

        assert!(matches!(
            SignerRegistry::from_members(members(&[1, 2, 1])),
            Err(ParamsError::DuplicateSigner(dup)) if dup == id(1)
        ));
        assert!(matches!(
            SignerRegistry::from_members(members(&[0])),
            Err(ParamsError::ZeroIdentity)
        ));
        assert!(matches!(
            SignerRegistry::from_members(members(&[])),
            Err(ParamsError::EmptyCommittee)
        ));
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_registry() {
        let a = id(1);
        let b = id(2);
        let decode = |value: serde_json::Value| {
            serde_json::from_value::<SignerRegistry>(value).map_err(|e| e.to_string())
        };

        let repeated = serde_json::json!({ "signers": [a, a, a], "labels": { a.to_string(): "alice" } });
        let err = decode(repeated).unwrap_err();
        assert!(err.contains("more than once"), "{err}");

        let unlabelled = serde_json::json!({ "signers": [a, b], "labels": { a.to_string(): "alice" } });
        let err = decode(unlabelled).unwrap_err();
        assert!(err.contains("has no username"), "{err}");

        let orphan = serde_json::json!({
            "signers": [a],
            "labels": { a.to_string(): "alice", b.to_string(): "bob" },
        });
        let err = decode(orphan).unwrap_err();
        assert!(err.contains("not a signer"), "{err}");

        let empty = serde_json::json!({ "signers": [], "labels": {} });
        let err = decode(empty).unwrap_err();
        assert!(err.contains("committee is empty"), "{err}");
    }

    #[test]
    fn test_last_signer_cannot_be_removed() {
        let mut reg = registry(&[1]);
        assert!(reg.remove(&id(1), 1).is_err());
        assert_eq!(reg.len(), 1);
    }
}
