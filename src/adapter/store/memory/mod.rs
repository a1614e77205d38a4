//! In-memory account storage with task-scoped transactions.

pub mod account_repository;
pub mod session;
pub mod store;
pub mod transaction_manager;

pub use session::scope;
