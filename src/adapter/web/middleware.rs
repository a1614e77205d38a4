use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::adapter::store::memory;

/// Gives every request its own transaction slot.
pub async fn transaction_scope(request: Request, next: Next) -> Response {
    memory::scope(next.run(request)).await
}
