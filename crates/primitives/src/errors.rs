//! Errors raised while constructing primitives.

use thiserror::Error;

use crate::username::{MAX_USERNAME_LEN, MIN_USERNAME_LEN};

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum UsernameError {
    /// Username length is outside of the accepted range.
    #[error(
        "invalid username length {len}: expected between {MIN_USERNAME_LEN} and \
         {MAX_USERNAME_LEN} characters"
    )]
    InvalidLength { len: usize },
}
