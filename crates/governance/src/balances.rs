//! The fungible-balance collaborator.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wrapbridge_primitives::{Amount, Identity};

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum BalanceError {
    #[error("insufficient balance for {account}: has {balance}, needs {requested}")]
    InsufficientBalance {
        account: Identity,
        balance: Amount,
        requested: Amount,
    },

    #[error("balance overflow")]
    Overflow,
}

/// Balance store that wrapped value is minted into and burned from.
///
/// Implementations must apply each call atomically: a call that returns an
/// error leaves every balance unchanged.
pub trait BalanceLedger {
    fn balance_of(&self, account: &Identity) -> Amount;

    fn total_supply(&self) -> Amount;

    /// Mints `amount` to `account`.
    fn credit(&mut self, account: &Identity, amount: Amount) -> Result<(), BalanceError>;

    /// Burns `amount` from `account`.
    fn debit(&mut self, account: &Identity, amount: Amount) -> Result<(), BalanceError>;

    /// Moves `amount` from `from` to `to` without changing total supply.
    fn transfer(&mut self, from: &Identity, to: &Identity, amount: Amount)
    -> Result<(), BalanceError>;
}

/// In-memory [`BalanceLedger`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct InMemoryBalances {
    balances: BTreeMap<Identity, Amount>,
    total_supply: Amount,
}

impl InMemoryBalances {
    pub fn new() -> Self {
        Self::default()
    }

    fn checked_debit_amount(
        &self,
        account: &Identity,
        amount: Amount,
    ) -> Result<Amount, BalanceError> {
        let balance = self.balance_of(account);
        balance
            .checked_sub(amount)
            .ok_or(BalanceError::InsufficientBalance {
                account: *account,
                balance,
                requested: amount,
            })
    }

    fn set_balance(&mut self, account: &Identity, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, amount);
        }
    }
}

impl BalanceLedger for InMemoryBalances {
    fn balance_of(&self, account: &Identity) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn credit(&mut self, account: &Identity, amount: Amount) -> Result<(), BalanceError> {
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(BalanceError::Overflow)?;
        // Cannot overflow once the supply addition succeeded.
        let balance = self.balance_of(account) + amount;
        self.total_supply = supply;
        self.set_balance(account, balance);
        Ok(())
    }

    fn debit(&mut self, account: &Identity, amount: Amount) -> Result<(), BalanceError> {
        let balance = self.checked_debit_amount(account, amount)?;
        self.set_balance(account, balance);
        self.total_supply -= amount;
        Ok(())
    }

    fn transfer(
        &mut self,
        from: &Identity,
        to: &Identity,
        amount: Amount,
    ) -> Result<(), BalanceError> {
        let from_balance = self.checked_debit_amount(from, amount)?;
        self.set_balance(from, from_balance);
        let to_balance = self.balance_of(to) + amount;
        self.set_balance(to, to_balance);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wrapbridge_primitives::{Address, U256};

    use super::*;

    #[test]
    fn test_credit_debit_conserve_supply() {
        let a = Address::repeat_byte(1);
        let mut ledger = InMemoryBalances::new();

        ledger.credit(&a, U256::from(100)).unwrap();
        ledger.debit(&a, U256::from(30)).unwrap();

        assert_eq!(ledger.balance_of(&a), U256::from(70));
        assert_eq!(ledger.total_supply(), U256::from(70));
    }

    #[test]
    fn test_debit_insufficient_leaves_state() {
        let a = Address::repeat_byte(1);
        let mut ledger = InMemoryBalances::new();
        ledger.credit(&a, U256::from(5)).unwrap();

        assert_eq!(
            ledger.debit(&a, U256::from(6)),
            Err(BalanceError::InsufficientBalance {
                account: a,
                balance: U256::from(5),
                requested: U256::from(6),
            })
        );
        assert_eq!(ledger.balance_of(&a), U256::from(5));
        assert_eq!(ledger.total_supply(), U256::from(5));
    }

    #[test]
    fn test_transfer_including_self() {
        let a = Address::repeat_byte(1);
        let b = Address::repeat_byte(2);
        let mut ledger = InMemoryBalances::new();
        ledger.credit(&a, U256::from(10)).unwrap();

        ledger.transfer(&a, &b, U256::from(4)).unwrap();
        ledger.transfer(&b, &b, U256::from(4)).unwrap();

        assert_eq!(ledger.balance_of(&a), U256::from(6));
        assert_eq!(ledger.balance_of(&b), U256::from(4));
        assert_eq!(ledger.total_supply(), U256::from(10));
    }

    #[test]
    fn test_credit_overflow() {
        let a = Address::repeat_byte(1);
        let mut ledger = InMemoryBalances::new();
        ledger.credit(&a, U256::MAX).unwrap();
        assert_eq!(ledger.credit(&a, U256::from(1)), Err(BalanceError::Overflow));
        assert_eq!(ledger.balance_of(&a), U256::MAX);
    }
}
