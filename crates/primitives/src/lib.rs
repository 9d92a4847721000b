//! Data types shared by every layer of the bridge governance core.

pub mod errors;
pub mod identity;
pub mod mint;
pub mod operation;
pub mod username;

pub use alloy_primitives::{Address, B256, U256};
pub use errors::UsernameError;
pub use identity::Identity;
pub use mint::MintKey;
pub use operation::OperationKind;
pub use username::Username;

/// Token amounts are full-width 256-bit integers.
pub type Amount = U256;
