use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::middleware::transaction_scope;
use crate::adapter::web::route::{accounts, transfers};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/accounts", get(accounts::list).post(accounts::post))
        .route(
            "/accounts/:id",
            get(accounts::get).put(accounts::put).delete(accounts::delete),
        )
        .route("/transfers", post(transfers::post))
        .layer(middleware::from_fn(transaction_scope))
        .with_state(state)
}
