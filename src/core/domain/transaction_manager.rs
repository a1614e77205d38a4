use async_trait::async_trait;

use crate::core::domain::transaction::TransactionError;

/// Resource manager driving one transaction at a time for the calling task.
///
/// The manager keeps its transactional resource in ambient state (per task),
/// so none of the operations take or return a handle. `release` must tolerate
/// being called when no transaction is bound.
#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn begin_transaction(&self) -> Result<(), TransactionError>;
    async fn commit(&self) -> Result<(), TransactionError>;
    async fn rollback(&self) -> Result<(), TransactionError>;
    async fn release(&self) -> Result<(), TransactionError>;

    /// Called from `Drop` when an invocation is cancelled after a successful
    /// begin and before its release finished. Must not block.
    fn abandon(&self) {}
}
