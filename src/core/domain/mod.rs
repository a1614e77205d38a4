pub mod command;
pub mod entity;
pub mod invocation;
pub mod transaction;
pub mod transaction_manager;
