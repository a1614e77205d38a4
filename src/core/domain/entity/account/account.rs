use thiserror::Error;

use crate::core::domain::entity::account::{Account, Money};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountValidationError {
    #[error("Account name must not be blank")]
    BlankName,
    #[error("Account balance must not be negative, got {0}")]
    NegativeBalance(Money),
}

#[derive(Debug)]
pub struct UnvalidatedAccountInput {
    pub id: i32,
    pub name: String,
    pub money: Money,
}

impl TryFrom<UnvalidatedAccountInput> for Account {
    type Error = AccountValidationError;

    fn try_from(value: UnvalidatedAccountInput) -> Result<Self, Self::Error> {
        let name = value.name.trim();
        if name.is_empty() {
            return Err(AccountValidationError::BlankName);
        }
        if value.money < 0 {
            return Err(AccountValidationError::NegativeBalance(value.money));
        }
        Ok(Account {
            id: value.id,
            name: name.to_string(),
            money: value.money,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_name() {
        let account = Account::try_from(UnvalidatedAccountInput {
            id: 7,
            name: "  aaa ".to_string(),
            money: 10,
        })
        .unwrap();
        assert_eq!(account.name, "aaa");
    }

    #[test]
    fn rejects_blank_name_and_negative_balance() {
        let blank = Account::try_from(UnvalidatedAccountInput {
            id: 1,
            name: "   ".to_string(),
            money: 0,
        });
        assert_eq!(blank.unwrap_err(), AccountValidationError::BlankName);

        let negative = Account::try_from(UnvalidatedAccountInput {
            id: 1,
            name: "aaa".to_string(),
            money: -1,
        });
        assert_eq!(
            negative.unwrap_err(),
            AccountValidationError::NegativeBalance(-1)
        );
    }
}
