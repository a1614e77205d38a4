//! Transactional proxies for capability interfaces.
//!
//! A proxy implements the same trait as its target and runs every call
//! through [`intercept`]: begin, dispatch, commit or rollback, release.

pub mod account_service;
pub mod intercept;

use std::sync::Arc;

use crate::core::domain::transaction_manager::TransactionManager;

pub use account_service::TransactionalAccountService;
pub use intercept::{intercept, TransactionalError};

/// Implemented by capability interfaces (as `dyn Trait`) that know how to
/// wrap themselves in a transactional decorator.
pub trait TransactionalCapability: Send + Sync {
    fn with_transactions(self: Arc<Self>, manager: Arc<dyn TransactionManager>) -> Arc<Self>;
}

pub struct TransactionalProxyFactory;

impl TransactionalProxyFactory {
    /// Returns a substitute for `target` that wraps every call in a
    /// transaction of `transaction_manager`. Nothing is called on either
    /// collaborator until the proxy is used.
    pub fn create_transactional_proxy<I>(
        target: Arc<I>,
        transaction_manager: Arc<dyn TransactionManager>,
    ) -> Arc<I>
    where
        I: TransactionalCapability + ?Sized,
    {
        target.with_transactions(transaction_manager)
    }
}
