use axum::http::StatusCode;

use crate::core::domain::command::CommandError;
use crate::core::domain::entity::account::account::AccountValidationError;
use crate::core::port::account_service::AccountServiceError;

pub struct AccountPresenter;

impl AccountPresenter {
    pub(crate) fn invalid(error: AccountValidationError) -> (StatusCode, String) {
        (StatusCode::BAD_REQUEST, error.to_string())
    }

    pub(crate) fn failure(error: AccountServiceError) -> (StatusCode, String) {
        let status = match &error {
            AccountServiceError::BusinessRule(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AccountServiceError::AccountNotFound(_)
            | AccountServiceError::Command(CommandError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AccountServiceError::Command(CommandError::AlreadyExists { .. }) => StatusCode::CONFLICT,
            AccountServiceError::Transaction(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        if status.is_server_error() {
            tracing::error!(%error, "account request failed");
        }
        (status, error.to_string())
    }
}
