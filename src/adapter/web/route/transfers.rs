use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::dto::transfer_web_input::TransferWebInput;
use crate::adapter::web::handler::transfers::TransferHandler;

pub async fn post(
    State(state): State<Arc<AppState>>,
    Json(transfer): Json<TransferWebInput>,
) -> Result<StatusCode, (StatusCode, String)> {
    let handler = TransferHandler::new(state.account_service.clone());
    handler.transfer(transfer).await
}
