use serde::{Deserialize, Serialize};

use crate::core::domain::entity::account::Money;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TransferWebInput {
    pub source: String,
    pub target: String,
    pub amount: Money,
}
