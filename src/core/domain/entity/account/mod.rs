pub mod account;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::domain::command::CommandError;

/// Balances are kept in minor currency units.
pub type Money = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i32,
    pub name: String,
    pub money: Money,
}

/// Persistence port for accounts. Implementations decide whether writes go
/// through the caller's active transaction.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Account>, CommandError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Account>, CommandError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Account>, CommandError>;
    async fn insert(&self, account: Account) -> Result<(), CommandError>;
    async fn update(&self, account: Account) -> Result<(), CommandError>;
    async fn delete(&self, id: i32) -> Result<(), CommandError>;
}
