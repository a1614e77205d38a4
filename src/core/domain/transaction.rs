use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Connection error: {0}")]
    ConnectionError(String),
    #[error("A transaction is already active on this task")]
    AlreadyActive,
    #[error("No active transaction on this task")]
    NoActiveTransaction,
}
