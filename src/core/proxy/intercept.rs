use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use tracing::Instrument;

use crate::core::domain::invocation::Invocation;
use crate::core::domain::transaction::TransactionError;
use crate::core::domain::transaction_manager::TransactionManager;

/// Classification of a capability interface's error type, as seen by the
/// transactional proxy.
pub trait TransactionalError: Sized + fmt::Display {
    fn is_business_rule_violation(&self) -> bool;

    /// The canonical, detail-free business rule violation.
    fn business_rule_violation() -> Self;

    /// Wraps a failing transaction manager call.
    fn collaborator_unavailable(error: TransactionError) -> Self;
}

/// Runs `dispatch` inside a transaction of `manager`.
///
/// The manager sees `begin_transaction`, then exactly one of `commit` or
/// `rollback`, then `release`. `release` is attempted on every exit path,
/// including a panicking dispatch and a failed begin, except when begin
/// reports [`TransactionError::AlreadyActive`]: that transaction belongs to
/// another caller. If the returned future is dropped between begin and the
/// end of release, the manager is told to `abandon` instead. Business rule
/// violations are replaced by the canonical violation; every other failure is
/// rolled back and returned unchanged.
pub async fn intercept<T, E, F>(
    manager: &dyn TransactionManager,
    invocation: Invocation,
    dispatch: F,
) -> Result<T, E>
where
    E: TransactionalError,
    F: Future<Output = Result<T, E>>,
{
    let span = tracing::debug_span!(
        "transactional",
        operation = invocation.operation,
        arguments = %invocation.arguments
    );
    run(manager, dispatch).instrument(span).await
}

async fn run<T, E, F>(manager: &dyn TransactionManager, dispatch: F) -> Result<T, E>
where
    E: TransactionalError,
    F: Future<Output = Result<T, E>>,
{
    if let Err(error) = manager.begin_transaction().await {
        tracing::error!(%error, "failed to begin transaction");
        if error != TransactionError::AlreadyActive {
            if let Err(release_error) = manager.release().await {
                tracing::warn!(error = %release_error, "release after failed begin also failed");
            }
        }
        return Err(E::collaborator_unavailable(error));
    }
    tracing::debug!("transaction begun");
    let mut open = OpenTransaction {
        manager,
        armed: true,
    };

    let result = match AssertUnwindSafe(dispatch).catch_unwind().await {
        Ok(Ok(value)) => match manager.commit().await {
            Ok(()) => {
                tracing::debug!("transaction committed");
                Ok(value)
            }
            Err(error) => {
                tracing::error!(%error, "commit failed");
                Err(E::collaborator_unavailable(error))
            }
        },
        Ok(Err(failure)) => Err(roll_back(manager, failure).await),
        Err(payload) => {
            tracing::error!("operation panicked, rolling back");
            if let Err(error) = manager.rollback().await {
                tracing::error!(%error, "rollback after panic failed");
            }
            if let Err(error) = manager.release().await {
                tracing::error!(%error, "release after panic failed");
            }
            open.armed = false;
            panic::resume_unwind(payload);
        }
    };

    let released = manager.release().await;
    open.armed = false;
    match released {
        Ok(()) => {
            tracing::debug!("transaction released");
            result
        }
        Err(error) if result.is_ok() => {
            tracing::error!(%error, "release failed");
            Err(E::collaborator_unavailable(error))
        }
        Err(error) => {
            tracing::warn!(%error, "release failed after a failed operation");
            result
        }
    }
}

/// Abandons the transaction if the invocation is dropped before release.
struct OpenTransaction<'a> {
    manager: &'a dyn TransactionManager,
    armed: bool,
}

impl Drop for OpenTransaction<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!("invocation dropped before release, abandoning transaction");
            self.manager.abandon();
        }
    }
}

async fn roll_back<E: TransactionalError>(manager: &dyn TransactionManager, failure: E) -> E {
    let business = failure.is_business_rule_violation();
    match manager.rollback().await {
        Ok(()) if business => {
            tracing::debug!(%failure, "rolled back business rule violation");
            E::business_rule_violation()
        }
        Ok(()) => {
            tracing::debug!(%failure, "rolled back failed operation");
            failure
        }
        Err(error) => {
            tracing::error!(%error, %failure, "rollback failed");
            E::collaborator_unavailable(error)
        }
    }
}
