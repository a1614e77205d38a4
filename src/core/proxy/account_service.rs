use async_trait::async_trait;
use std::sync::Arc;

use crate::core::domain::entity::account::{Account, Money};
use crate::core::domain::invocation::Invocation;
use crate::core::domain::transaction::TransactionError;
use crate::core::domain::transaction_manager::TransactionManager;
use crate::core::port::account_service::{AccountService, AccountServiceError};
use crate::core::proxy::intercept::{intercept, TransactionalError};
use crate::core::proxy::TransactionalCapability;

impl TransactionalError for AccountServiceError {
    fn is_business_rule_violation(&self) -> bool {
        matches!(self, AccountServiceError::BusinessRule(_))
    }

    fn business_rule_violation() -> Self {
        AccountServiceError::BusinessRule(None)
    }

    fn collaborator_unavailable(error: TransactionError) -> Self {
        AccountServiceError::Transaction(error)
    }
}

/// [`AccountService`] decorator running every operation in its own
/// transaction.
pub struct TransactionalAccountService {
    target: Arc<dyn AccountService>,
    transaction_manager: Arc<dyn TransactionManager>,
}

impl TransactionalAccountService {
    pub fn new(
        target: Arc<dyn AccountService>,
        transaction_manager: Arc<dyn TransactionManager>,
    ) -> Self {
        Self {
            target,
            transaction_manager,
        }
    }
}

impl TransactionalCapability for dyn AccountService {
    fn with_transactions(self: Arc<Self>, manager: Arc<dyn TransactionManager>) -> Arc<Self> {
        Arc::new(TransactionalAccountService::new(self, manager))
    }
}

#[async_trait]
impl AccountService for TransactionalAccountService {
    async fn find_all_accounts(&self) -> Result<Vec<Account>, AccountServiceError> {
        intercept(
            self.transaction_manager.as_ref(),
            Invocation::new("find_all_accounts", &()),
            self.target.find_all_accounts(),
        )
        .await
    }

    async fn find_account_by_id(&self, id: i32) -> Result<Option<Account>, AccountServiceError> {
        intercept(
            self.transaction_manager.as_ref(),
            Invocation::new("find_account_by_id", &(id,)),
            self.target.find_account_by_id(id),
        )
        .await
    }

    async fn save_account(&self, account: Account) -> Result<(), AccountServiceError> {
        intercept(
            self.transaction_manager.as_ref(),
            Invocation::new("save_account", &(&account,)),
            self.target.save_account(account),
        )
        .await
    }

    async fn update_account(&self, account: Account) -> Result<(), AccountServiceError> {
        intercept(
            self.transaction_manager.as_ref(),
            Invocation::new("update_account", &(&account,)),
            self.target.update_account(account),
        )
        .await
    }

    async fn delete_account(&self, id: i32) -> Result<(), AccountServiceError> {
        intercept(
            self.transaction_manager.as_ref(),
            Invocation::new("delete_account", &(id,)),
            self.target.delete_account(id),
        )
        .await
    }

    async fn transfer(
        &self,
        source_name: &str,
        target_name: &str,
        amount: Money,
    ) -> Result<(), AccountServiceError> {
        intercept(
            self.transaction_manager.as_ref(),
            Invocation::new("transfer", &(source_name, target_name, amount)),
            self.target.transfer(source_name, target_name, amount),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::port::account_service::BusinessRuleViolation;
    use parking_lot::Mutex;

    type Log = Arc<Mutex<Vec<String>>>;

    struct RecordingManager {
        log: Log,
    }

    #[async_trait]
    impl TransactionManager for RecordingManager {
        async fn begin_transaction(&self) -> Result<(), TransactionError> {
            self.log.lock().push("begin".to_string());
            Ok(())
        }
        async fn commit(&self) -> Result<(), TransactionError> {
            self.log.lock().push("commit".to_string());
            Ok(())
        }
        async fn rollback(&self) -> Result<(), TransactionError> {
            self.log.lock().push("rollback".to_string());
            Ok(())
        }
        async fn release(&self) -> Result<(), TransactionError> {
            self.log.lock().push("release".to_string());
            Ok(())
        }
    }

    /// Target whose `transfer` fails for amounts above 100.
    struct ScriptedService {
        log: Log,
    }

    impl ScriptedService {
        fn record(&self, call: String) {
            self.log.lock().push(call);
        }
    }

    fn sample(id: i32) -> Account {
        Account {
            id,
            name: format!("acc-{}", id),
            money: 10,
        }
    }

    #[async_trait]
    impl AccountService for ScriptedService {
        async fn find_all_accounts(&self) -> Result<Vec<Account>, AccountServiceError> {
            self.record("find_all_accounts".to_string());
            Ok(vec![sample(1), sample(2)])
        }

        async fn find_account_by_id(
            &self,
            id: i32,
        ) -> Result<Option<Account>, AccountServiceError> {
            self.record(format!("find_account_by_id({})", id));
            Ok((id == 1).then(|| sample(1)))
        }

        async fn save_account(&self, account: Account) -> Result<(), AccountServiceError> {
            self.record(format!("save_account({})", account.id));
            Ok(())
        }

        async fn update_account(&self, account: Account) -> Result<(), AccountServiceError> {
            self.record(format!("update_account({})", account.id));
            Ok(())
        }

        async fn delete_account(&self, id: i32) -> Result<(), AccountServiceError> {
            self.record(format!("delete_account({})", id));
            Err(AccountServiceError::AccountNotFound(id.to_string()))
        }

        async fn transfer(
            &self,
            source_name: &str,
            target_name: &str,
            amount: Money,
        ) -> Result<(), AccountServiceError> {
            self.record(format!("transfer({}, {}, {})", source_name, target_name, amount));
            if amount > 100 {
                return Err(BusinessRuleViolation::InsufficientFunds {
                    account: source_name.to_string(),
                    balance: 100,
                    requested: amount,
                }
                .into());
            }
            Ok(())
        }
    }

    fn proxied() -> (Arc<dyn AccountService>, Arc<dyn AccountService>, Log) {
        let log: Log = Arc::new(Mutex::new(Vec::new()));
        let target: Arc<dyn AccountService> = Arc::new(ScriptedService { log: log.clone() });
        let manager = Arc::new(RecordingManager { log: log.clone() });
        let proxy = target.clone().with_transactions(manager);
        (proxy, target, log)
    }

    fn drain(log: &Log) -> Vec<String> {
        std::mem::take(&mut *log.lock())
    }

    #[tokio::test]
    async fn successful_transfer_is_committed() {
        let (proxy, _, log) = proxied();

        proxy.transfer("aaa", "bbb", 100).await.unwrap();

        assert_eq!(
            drain(&log),
            vec!["begin", "transfer(aaa, bbb, 100)", "commit", "release"]
        );
    }

    #[tokio::test]
    async fn violated_transfer_is_rolled_back_with_canonical_error() {
        let (proxy, _, log) = proxied();

        let error = proxy.transfer("aaa", "bbb", 500).await.unwrap_err();

        assert_eq!(error, AccountServiceError::BusinessRule(None));
        assert_eq!(error.to_string(), "Business rule violation");
        assert_eq!(
            drain(&log),
            vec!["begin", "transfer(aaa, bbb, 500)", "rollback", "release"]
        );
    }

    #[tokio::test]
    async fn unclassified_failure_is_rolled_back_and_passed_through() {
        let (proxy, _, log) = proxied();

        assert_eq!(
            proxy.delete_account(4).await.unwrap_err(),
            AccountServiceError::AccountNotFound("4".to_string())
        );
        assert_eq!(
            drain(&log),
            vec!["begin", "delete_account(4)", "rollback", "release"]
        );
    }

    #[tokio::test]
    async fn proxy_returns_what_the_target_returns() {
        let (proxy, target, log) = proxied();

        assert_eq!(
            proxy.find_all_accounts().await.unwrap(),
            target.find_all_accounts().await.unwrap()
        );
        assert_eq!(
            proxy.find_account_by_id(1).await.unwrap(),
            target.find_account_by_id(1).await.unwrap()
        );
        assert_eq!(proxy.find_account_by_id(2).await.unwrap(), None);
        proxy.save_account(sample(3)).await.unwrap();
        proxy.update_account(sample(3)).await.unwrap();

        let log = drain(&log);
        for call in ["save_account(3)", "update_account(3)"] {
            let at = log.iter().position(|entry| entry == call).unwrap();
            assert_eq!(log[at - 1], "begin");
            assert_eq!(log[at + 1], "commit");
            assert_eq!(log[at + 2], "release");
        }
    }
}
