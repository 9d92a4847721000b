//! Human-readable labels attached to signers and to return transfers.

use std::{fmt, str::FromStr};

use arbitrary::Arbitrary;
use serde::{Deserialize, Serialize};

use crate::errors::UsernameError;

/// Minimum accepted username length, in characters.
pub const MIN_USERNAME_LEN: usize = 3;

/// Maximum accepted username length, in characters.
pub const MAX_USERNAME_LEN: usize = 16;

/// A username whose length has been checked to lie in
/// [`MIN_USERNAME_LEN`]..=[`MAX_USERNAME_LEN`].
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn try_new(raw: impl Into<String>) -> Result<Self, UsernameError> {
        let raw = raw.into();
        let len = raw.chars().count();
        if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len) {
            return Err(UsernameError::InvalidLength { len });
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl FromStr for Username {
    type Err = UsernameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'a> Arbitrary<'a> for Username {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(MIN_USERNAME_LEN..=MAX_USERNAME_LEN)?;
        let mut name = String::with_capacity(len);
        for _ in 0..len {
            let c = u.int_in_range(b'a'..=b'z')?;
            name.push(c as char);
        }
        Ok(Self(name))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_username_length_bounds() {
        assert!(Username::try_new("ab").is_err());
        assert!(Username::try_new("abc").is_ok());
        assert!(Username::try_new("a".repeat(16)).is_ok());
        assert_eq!(
            Username::try_new("a".repeat(17)),
            Err(UsernameError::InvalidLength { len: 17 })
        );
        assert!(Username::try_new("").is_err());
    }

    #[test]
    fn test_username_counts_characters_not_bytes() {
        // 3 characters, 6 bytes.
        assert!(Username::try_new("äöü").is_ok());
    }

    #[test]
    fn test_username_serde_rejects_invalid() {
        let ok: Username = serde_json::from_str("\"alice\"").unwrap();
        assert_eq!(ok.as_str(), "alice");
        assert!(serde_json::from_str::<Username>("\"al\"").is_err());
    }

    proptest! {
        #[test]
        fn test_username_accepts_exactly_the_range(name in "[a-z]{0,24}") {
            let accepted = Username::try_new(name.clone()).is_ok();
            prop_assert_eq!(accepted, (3..=16).contains(&name.len()));
        }
    }
}
