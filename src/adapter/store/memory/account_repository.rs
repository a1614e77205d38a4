use async_trait::async_trait;
use std::sync::Arc;

use crate::adapter::store::memory::store::AccountStore;
use crate::core::domain::command::CommandError;
use crate::core::domain::entity::account::{Account, AccountRepository};

pub struct InMemoryAccountRepository {
    store: Arc<AccountStore>,
}

impl InMemoryAccountRepository {
    pub fn new(store: Arc<AccountStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>, CommandError> {
        Ok(self.store.snapshot())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Account>, CommandError> {
        Ok(self.store.read(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Account>, CommandError> {
        Ok(self.store.find_by_name(name))
    }

    async fn insert(&self, account: Account) -> Result<(), CommandError> {
        if self.store.read(account.id).is_some() {
            return Err(CommandError::account_already_exists(account.id));
        }
        self.store.write(account.id, Some(account));
        Ok(())
    }

    async fn update(&self, account: Account) -> Result<(), CommandError> {
        if self.store.read(account.id).is_none() {
            return Err(CommandError::account_not_found(account.id));
        }
        self.store.write(account.id, Some(account));
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), CommandError> {
        if self.store.read(id).is_none() {
            return Err(CommandError::account_not_found(id));
        }
        self.store.write(id, None);
        Ok(())
    }
}
