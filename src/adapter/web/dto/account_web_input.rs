use serde::{Deserialize, Serialize};

use crate::core::domain::entity::account::account::UnvalidatedAccountInput;
use crate::core::domain::entity::account::Money;

impl From<AccountWebInput> for UnvalidatedAccountInput {
    fn from(value: AccountWebInput) -> Self {
        Self {
            id: value.id,
            name: value.name,
            money: value.money,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccountWebInput {
    pub id: i32,
    pub name: String,
    pub money: Money,
}

/// Body of `PUT /accounts/:id`; the id comes from the path.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdateAccountWebInput {
    pub name: String,
    pub money: Money,
}

impl UpdateAccountWebInput {
    pub fn with_id(self, id: i32) -> UnvalidatedAccountInput {
        UnvalidatedAccountInput {
            id,
            name: self.name,
            money: self.money,
        }
    }
}
