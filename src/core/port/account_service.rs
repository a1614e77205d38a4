use async_trait::async_trait;
use thiserror::Error;

use crate::core::domain::command::CommandError;
use crate::core::domain::entity::account::{Account, Money};
use crate::core::domain::transaction::TransactionError;

#[async_trait]
pub trait AccountService: Send + Sync {
    async fn find_all_accounts(&self) -> Result<Vec<Account>, AccountServiceError>;

    async fn find_account_by_id(&self, id: i32) -> Result<Option<Account>, AccountServiceError>;

    async fn save_account(&self, account: Account) -> Result<(), AccountServiceError>;

    async fn update_account(&self, account: Account) -> Result<(), AccountServiceError>;

    async fn delete_account(&self, id: i32) -> Result<(), AccountServiceError>;

    /// Moves `amount` from the account named `source_name` to the account
    /// named `target_name`.
    async fn transfer(
        &self,
        source_name: &str,
        target_name: &str,
        amount: Money,
    ) -> Result<(), AccountServiceError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusinessRuleViolation {
    #[error("insufficient funds in {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: String,
        balance: Money,
        requested: Money,
    },

    #[error("transfer amount must be positive, got {0}")]
    NonPositiveAmount(Money),

    #[error("cannot transfer from {0} to itself")]
    SelfTransfer(String),

    #[error("balance of {0} would overflow")]
    BalanceOverflow(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountServiceError {
    /// `None` is the canonical violation handed out once the detail has been
    /// stripped.
    #[error("Business rule violation{}", .0.as_ref().map(|v| format!(": {}", v)).unwrap_or_default())]
    BusinessRule(Option<BusinessRuleViolation>),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

impl From<BusinessRuleViolation> for AccountServiceError {
    fn from(value: BusinessRuleViolation) -> Self {
        AccountServiceError::BusinessRule(Some(value))
    }
}
