use async_trait::async_trait;
use std::mem;
use std::sync::Arc;

use crate::adapter::store::memory::session::{with_slot, Session};
use crate::adapter::store::memory::store::AccountStore;
use crate::core::domain::transaction::TransactionError;
use crate::core::domain::transaction_manager::TransactionManager;

/// Binds one transaction per task (see [`scope`](super::session::scope)).
/// Staged writes become visible to other tasks on commit. A second task's
/// begin waits until the open transaction is released.
pub struct InMemoryTransactionManager {
    store: Arc<AccountStore>,
}

impl InMemoryTransactionManager {
    pub fn new(store: Arc<AccountStore>) -> Self {
        Self { store }
    }
}

fn no_scope() -> TransactionError {
    TransactionError::ConnectionError("no transaction scope on the current task".to_string())
}

#[async_trait]
impl TransactionManager for InMemoryTransactionManager {
    async fn begin_transaction(&self) -> Result<(), TransactionError> {
        match with_slot(|slot| slot.is_some()) {
            None => return Err(no_scope()),
            Some(true) => return Err(TransactionError::AlreadyActive),
            Some(false) => {}
        }
        let writer = self.store.lock_writer().await;
        with_slot(|slot| *slot = Some(Session::new(writer))).ok_or_else(no_scope)
    }

    async fn commit(&self) -> Result<(), TransactionError> {
        let writes = with_slot(|slot| slot.as_mut().map(|session| mem::take(&mut session.writes)))
            .ok_or_else(no_scope)?
            .ok_or(TransactionError::NoActiveTransaction)?;
        tracing::trace!(writes = writes.len(), "applying staged writes");
        self.store.apply(writes);
        Ok(())
    }

    async fn rollback(&self) -> Result<(), TransactionError> {
        let discarded = with_slot(|slot| slot.as_mut().map(|session| mem::take(&mut session.writes)))
            .ok_or_else(no_scope)?
            .ok_or(TransactionError::NoActiveTransaction)?;
        tracing::trace!(writes = discarded.len(), "discarded staged writes");
        Ok(())
    }

    async fn release(&self) -> Result<(), TransactionError> {
        unbind("released");
        Ok(())
    }

    fn abandon(&self) {
        unbind("abandoned");
    }
}

fn unbind(how: &'static str) {
    if let Some(Some(session)) = with_slot(Option::take) {
        if !session.writes.is_empty() {
            tracing::warn!(
                writes = session.writes.len(),
                "{} a transaction with uncommitted writes",
                how
            );
        }
    }
}
