use axum::http::StatusCode;
use std::sync::Arc;

use crate::adapter::web::dto::account_web_input::{AccountWebInput, UpdateAccountWebInput};
use crate::adapter::web::presenter::account::AccountPresenter;
use crate::core::domain::entity::account::account::UnvalidatedAccountInput;
use crate::core::domain::entity::account::Account;
use crate::core::port::account_service::AccountService;

pub struct AccountHandler {
    service: Arc<dyn AccountService>,
}

impl AccountHandler {
    pub fn new(service: Arc<dyn AccountService>) -> Self {
        Self { service }
    }

    pub async fn list(&self) -> Result<Vec<Account>, (StatusCode, String)> {
        self.service
            .find_all_accounts()
            .await
            .map_err(AccountPresenter::failure)
    }

    pub async fn get(&self, id: i32) -> Result<Account, (StatusCode, String)> {
        match self.service.find_account_by_id(id).await {
            Ok(Some(account)) => Ok(account),
            Ok(None) => Err((StatusCode::NOT_FOUND, format!("Account not found: {}", id))),
            Err(error) => Err(AccountPresenter::failure(error)),
        }
    }

    pub async fn create(&self, input: AccountWebInput) -> Result<StatusCode, (StatusCode, String)> {
        let account = Account::try_from(UnvalidatedAccountInput::from(input))
            .map_err(AccountPresenter::invalid)?;
        self.service
            .save_account(account)
            .await
            .map_err(AccountPresenter::failure)?;
        Ok(StatusCode::CREATED)
    }

    pub async fn update(
        &self,
        id: i32,
        input: UpdateAccountWebInput,
    ) -> Result<StatusCode, (StatusCode, String)> {
        let account = Account::try_from(input.with_id(id)).map_err(AccountPresenter::invalid)?;
        self.service
            .update_account(account)
            .await
            .map_err(AccountPresenter::failure)?;
        Ok(StatusCode::NO_CONTENT)
    }

    pub async fn delete(&self, id: i32) -> Result<StatusCode, (StatusCode, String)> {
        self.service
            .delete_account(id)
            .await
            .map_err(AccountPresenter::failure)?;
        Ok(StatusCode::NO_CONTENT)
    }
}
