use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use transactional_proxy::adapter::config::AppConfig;
use transactional_proxy::adapter::init::AppInitializer;
use transactional_proxy::adapter::store::memory::scope;
use transactional_proxy::adapter::web::app_state::AppState;
use transactional_proxy::adapter::web::dto::account_web_input::{
    AccountWebInput, UpdateAccountWebInput,
};
use transactional_proxy::adapter::web::dto::transfer_web_input::TransferWebInput;
use transactional_proxy::adapter::web::route::{accounts, transfers};

fn seeded_state() -> Arc<AppState> {
    AppInitializer::initialize(&AppConfig::default())
}

fn transfer(source: &str, target: &str, amount: i64) -> Json<TransferWebInput> {
    Json(TransferWebInput {
        source: source.to_string(),
        target: target.to_string(),
        amount,
    })
}

async fn balance(state: &Arc<AppState>, id: i32) -> i64 {
    scope(accounts::get(State(state.clone()), Path(id)))
        .await
        .unwrap()
        .0
        .money
}

#[tokio::test]
async fn seeded_accounts_are_listed() {
    let state = seeded_state();

    let Json(listed) = scope(accounts::list(State(state))).await.unwrap();

    let names: Vec<&str> = listed.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["aaa", "bbb", "ccc"]);
    assert!(listed.iter().all(|a| a.money == 1000));
}

#[tokio::test]
async fn transfer_statuses() {
    let state = seeded_state();

    let ok = scope(transfers::post(State(state.clone()), transfer("aaa", "bbb", 100))).await;
    assert_eq!(ok, Ok(StatusCode::NO_CONTENT));
    assert_eq!(balance(&state, 1).await, 900);
    assert_eq!(balance(&state, 2).await, 1100);

    let (status, body) = scope(transfers::post(
        State(state.clone()),
        transfer("aaa", "bbb", 5000),
    ))
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, "Business rule violation");
    assert_eq!(balance(&state, 1).await, 900);

    let (status, _) = scope(transfers::post(
        State(state.clone()),
        transfer("aaa", "zzz", 1),
    ))
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn account_lifecycle() {
    let state = seeded_state();
    let input = AccountWebInput {
        id: 4,
        name: "ddd".to_string(),
        money: 10,
    };

    let created = scope(accounts::post(State(state.clone()), Json(input.clone()))).await;
    assert_eq!(created, Ok(StatusCode::CREATED));

    let duplicate = scope(accounts::post(State(state.clone()), Json(input))).await;
    assert_eq!(duplicate.unwrap_err().0, StatusCode::CONFLICT);

    let updated = scope(accounts::put(
        State(state.clone()),
        Path(4),
        Json(UpdateAccountWebInput {
            name: "ddd".to_string(),
            money: 20,
        }),
    ))
    .await;
    assert_eq!(updated, Ok(StatusCode::NO_CONTENT));
    assert_eq!(balance(&state, 4).await, 20);

    let deleted = scope(accounts::delete(State(state.clone()), Path(4))).await;
    assert_eq!(deleted, Ok(StatusCode::NO_CONTENT));

    let missing = scope(accounts::get(State(state.clone()), Path(4))).await;
    assert_eq!(missing.unwrap_err().0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_account_input_is_rejected_before_the_service() {
    let state = seeded_state();

    let result = scope(accounts::post(
        State(state),
        Json(AccountWebInput {
            id: 9,
            name: " ".to_string(),
            money: 0,
        }),
    ))
    .await;

    assert_eq!(result.unwrap_err().0, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn requests_outside_a_transaction_scope_are_unavailable() {
    let state = seeded_state();

    let (status, _) = accounts::list(State(state)).await.unwrap_err();

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
