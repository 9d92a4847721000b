use std::num::NonZero;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ways a threshold value can violate the committee policy.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ThresholdError {
    #[error("invalid threshold: must be non-zero")]
    Zero,

    #[error("invalid threshold: {threshold} exceeds signer count {signers}")]
    ExceedsSigners { threshold: u8, signers: usize },

    #[error("invalid threshold: already set to {0}")]
    Unchanged(u8),

    #[error("invalid threshold: removal would leave {remaining} signers under threshold {threshold}")]
    RemovalBelowThreshold { threshold: u8, remaining: usize },
}

/// Minimum number of distinct committee signatures a governed call needs.
///
/// Never zero and never above the committee size.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    threshold: NonZero<u8>,
}

impl ThresholdPolicy {
    pub fn new(threshold: NonZero<u8>) -> Self {
        Self { threshold }
    }

    pub fn get(&self) -> u8 {
        self.threshold.get()
    }

    /// Replaces the threshold. No-op updates are rejected so that callers
    /// notice they signed a stale request.
    pub(crate) fn set(&mut self, new_value: u8, signer_count: usize) -> Result<(), ThresholdError> {
        let threshold = NonZero::new(new_value).ok_or(ThresholdError::Zero)?;

        if new_value as usize > signer_count {
            return Err(ThresholdError::ExceedsSigners {
                threshold: new_value,
                signers: signer_count,
            });
        }

        if threshold == self.threshold {
            return Err(ThresholdError::Unchanged(new_value));
        }

        self.threshold = threshold;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(t: u8) -> ThresholdPolicy {
        ThresholdPolicy::new(NonZero::new(t).unwrap())
    }

    #[test]
    fn test_set_table() {
        struct Case {
            current: u8,
            new_value: u8,
            signers: usize,
            want: Result<(), ThresholdError>,
        }

        let cases = vec![
            Case {
                current: 1,
                new_value: 2,
                signers: 2,
                want: Ok(()),
            },
            Case {
                current: 2,
                new_value: 1,
                signers: 3,
                want: Ok(()),
            },
            Case {
                current: 1,
                new_value: 0,
                signers: 3,
                want: Err(ThresholdError::Zero),
            },
            Case {
                current: 1,
                new_value: 4,
                signers: 3,
                want: Err(ThresholdError::ExceedsSigners {
                    threshold: 4,
                    signers: 3,
                }),
            },
            Case {
                current: 2,
                new_value: 2,
                signers: 3,
                want: Err(ThresholdError::Unchanged(2)),
            },
        ];

        for case in cases {
            let mut p = policy(case.current);
            let got = p.set(case.new_value, case.signers);
            assert_eq!(got, case.want, "{} -> {}", case.current, case.new_value);

            let expected_value = if got.is_ok() {
                case.new_value
            } else {
                case.current
            };
            assert_eq!(p.get(), expected_value);
        }
    }
}
