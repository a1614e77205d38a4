use async_trait::async_trait;
use std::sync::Arc;

use crate::core::domain::command::CommandError;
use crate::core::domain::entity::account::{Account, AccountRepository, Money};
use crate::core::port::account_service::{
    AccountService, AccountServiceError, BusinessRuleViolation,
};

/// Account business logic. It does not manage transactions itself; wrap it
/// with the transactional proxy to make each operation atomic.
pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    async fn find_by_name(&self, name: &str) -> Result<Account, AccountServiceError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| AccountServiceError::AccountNotFound(name.to_string()))
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn find_all_accounts(&self) -> Result<Vec<Account>, AccountServiceError> {
        Ok(self.repository.find_all().await?)
    }

    async fn find_account_by_id(&self, id: i32) -> Result<Option<Account>, AccountServiceError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn save_account(&self, account: Account) -> Result<(), AccountServiceError> {
        if self.repository.find_by_name(&account.name).await?.is_some() {
            return Err(CommandError::account_name_taken(&account.name).into());
        }
        Ok(self.repository.insert(account).await?)
    }

    async fn update_account(&self, account: Account) -> Result<(), AccountServiceError> {
        if let Some(existing) = self.repository.find_by_name(&account.name).await? {
            if existing.id != account.id {
                return Err(CommandError::account_name_taken(&account.name).into());
            }
        }
        Ok(self.repository.update(account).await?)
    }

    async fn delete_account(&self, id: i32) -> Result<(), AccountServiceError> {
        Ok(self.repository.delete(id).await?)
    }

    async fn transfer(
        &self,
        source_name: &str,
        target_name: &str,
        amount: Money,
    ) -> Result<(), AccountServiceError> {
        let mut source = self.find_by_name(source_name).await?;
        let mut target = self.find_by_name(target_name).await?;

        if amount <= 0 {
            return Err(BusinessRuleViolation::NonPositiveAmount(amount).into());
        }
        if source.id == target.id {
            return Err(BusinessRuleViolation::SelfTransfer(source.name).into());
        }

        source.money = match source.money.checked_sub(amount) {
            Some(balance) if balance >= 0 => balance,
            _ => {
                return Err(BusinessRuleViolation::InsufficientFunds {
                    account: source.name,
                    balance: source.money,
                    requested: amount,
                }
                .into())
            }
        };
        self.repository.update(source).await?;

        // The debit above is already written; a failure here leaves the
        // transfer half applied until the surrounding transaction rolls back.
        target.money = target
            .money
            .checked_add(amount)
            .ok_or_else(|| BusinessRuleViolation::BalanceOverflow(target.name.clone()))?;
        self.repository.update(target).await?;

        tracing::debug!(source_name, target_name, amount, "transfer applied");
        Ok(())
    }
}
