use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::dto::account_web_input::{AccountWebInput, UpdateAccountWebInput};
use crate::adapter::web::handler::accounts::AccountHandler;
use crate::core::domain::entity::account::Account;

pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Account>>, (StatusCode, String)> {
    let handler = AccountHandler::new(state.account_service.clone());
    handler.list().await.map(Json)
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Account>, (StatusCode, String)> {
    let handler = AccountHandler::new(state.account_service.clone());
    handler.get(id).await.map(Json)
}

pub async fn post(
    State(state): State<Arc<AppState>>,
    Json(account): Json<AccountWebInput>,
) -> Result<StatusCode, (StatusCode, String)> {
    let handler = AccountHandler::new(state.account_service.clone());
    handler.create(account).await
}

pub async fn put(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(account): Json<UpdateAccountWebInput>,
) -> Result<StatusCode, (StatusCode, String)> {
    let handler = AccountHandler::new(state.account_service.clone());
    handler.update(id, account).await
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, (StatusCode, String)> {
    let handler = AccountHandler::new(state.account_service.clone());
    handler.delete(id).await
}
