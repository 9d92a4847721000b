//! Deterministic committees of signing keys.

use std::num::NonZero;

use alloy_primitives::{B256, Bytes};
use wrapbridge_crypto::SigningKey;
use wrapbridge_params::{BridgeParams, GenesisSigner};
use wrapbridge_primitives::{Identity, Username};

/// A set of committee keys derived from small scalar seeds.
///
/// Member `i` is named `signer{i}` and is derived from seed `offset + i + 1`,
/// so two committees with disjoint seed ranges never share a member.
#[derive(Debug, Clone)]
pub struct TestCommittee {
    keys: Vec<SigningKey>,
}

impl TestCommittee {
    pub fn new(size: usize) -> Self {
        Self::with_seed_offset(size, 0)
    }

    /// # Panics
    ///
    /// If a seed would pass 255.
    pub fn with_seed_offset(size: usize, offset: u8) -> Self {
        let keys = (0..size)
            .map(|i| {
                let seed = u8::try_from(offset as usize + i + 1)
                    .expect("committee seeds must fit in a byte");
                SigningKey::from_seed(seed)
            })
            .collect();
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn key(&self, i: usize) -> &SigningKey {
        &self.keys[i]
    }

    pub fn identity(&self, i: usize) -> Identity {
        self.keys[i].identity()
    }

    pub fn username(&self, i: usize) -> Username {
        Username::try_new(format!("signer{i}")).expect("fixture usernames are valid")
    }

    /// `(identity, username)` of every member, in index order.
    pub fn members(&self) -> impl Iterator<Item = (Identity, Username)> + '_ {
        (0..self.keys.len()).map(|i| (self.identity(i), self.username(i)))
    }

    /// Signature by member `i` over `digest`.
    pub fn sign(&self, i: usize, digest: &B256) -> Bytes {
        self.keys[i].sign_digest(digest).to_bytes()
    }

    /// Signatures by the listed members, in the listed order.
    pub fn sign_by(&self, members: &[usize], digest: &B256) -> Vec<Bytes> {
        members.iter().map(|&i| self.sign(i, digest)).collect()
    }

    /// Genesis params registering the first `registered` members.
    pub fn params(&self, contract: Identity, registered: usize, threshold: u8) -> BridgeParams {
        let signers = (0..registered)
            .map(|i| GenesisSigner {
                address: self.identity(i),
                username: self.username(i),
            })
            .collect();
        BridgeParams {
            contract_address: contract,
            signers,
            threshold: NonZero::new(threshold).expect("fixture threshold is non-zero"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committee_reaches_last_seed() {
        let committee = TestCommittee::with_seed_offset(5, 250);
        assert_eq!(committee.len(), 5);
        assert_eq!(committee.identity(4), SigningKey::from_seed(255).identity());
    }

    #[test]
    #[should_panic(expected = "committee seeds must fit in a byte")]
    fn test_committee_past_last_seed_panics() {
        TestCommittee::with_seed_offset(6, 250);
    }
}
