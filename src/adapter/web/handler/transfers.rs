use axum::http::StatusCode;
use std::sync::Arc;

use crate::adapter::web::dto::transfer_web_input::TransferWebInput;
use crate::adapter::web::presenter::account::AccountPresenter;
use crate::core::port::account_service::AccountService;

pub struct TransferHandler {
    service: Arc<dyn AccountService>,
}

impl TransferHandler {
    pub fn new(service: Arc<dyn AccountService>) -> Self {
        Self { service }
    }

    pub async fn transfer(
        &self,
        input: TransferWebInput,
    ) -> Result<StatusCode, (StatusCode, String)> {
        match self
            .service
            .transfer(&input.source, &input.target, input.amount)
            .await
        {
            Ok(()) => Ok(StatusCode::NO_CONTENT),
            Err(error) => Err(AccountPresenter::failure(error)),
        }
    }
}
