use thiserror::Error;
use wrapbridge_params::ParamsError;
use wrapbridge_primitives::{Identity, MintKey, UsernameError};

use crate::{balances::BalanceError, threshold::ThresholdError, validator::ValidationError};

/// Reasons a bridge call is rejected. A rejected call has no effect.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BridgeError {
    /// The pause gate is engaged.
    #[error("bridge is paused")]
    Paused,

    /// `unpause` was called while the gate is open.
    #[error("bridge is not paused")]
    NotPaused,

    /// The signature set did not authorize the call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The null identity cannot be registered.
    #[error("signer identity must not be zero")]
    ZeroIdentity,

    #[error("signer {0} already exists")]
    SignerAlreadyExists(Identity),

    #[error("signer {0} does not exist")]
    SignerDoesNotExist(Identity),

    #[error(transparent)]
    InvalidThreshold(#[from] ThresholdError),

    #[error(transparent)]
    InvalidUsername(#[from] UsernameError),

    /// The source-chain reference has already produced a mint.
    #[error("already minted for {0}")]
    AlreadyMinted(MintKey),

    #[error("amount must be non-zero")]
    MustBeNonZero,

    /// Failure reported by the balance collaborator.
    #[error(transparent)]
    Balance(#[from] BalanceError),
}

/// Reasons a persisted [`BridgeState`](crate::BridgeState) is refused on load.
#[derive(Debug, Error)]
pub enum StateError {
    /// The committee or threshold breaks a genesis rule.
    #[error(transparent)]
    Committee(#[from] ParamsError),

    #[error("signer {0} has no username")]
    MissingUsername(Identity),

    #[error("username recorded for {0}, which is not a signer")]
    OrphanUsername(Identity),
}
