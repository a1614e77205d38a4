//! Account service whose operations each run in their own transaction,
//! supplied by a transactional proxy around the plain business logic.

pub mod adapter;
pub mod core;
pub mod error;
