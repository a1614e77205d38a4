use std::sync::Arc;

use crate::adapter::config::AppConfig;
use crate::adapter::store::memory::account_repository::InMemoryAccountRepository;
use crate::adapter::store::memory::store::AccountStore;
use crate::adapter::store::memory::transaction_manager::InMemoryTransactionManager;
use crate::adapter::web::app_state::AppState;
use crate::core::domain::entity::account::Account;
use crate::core::port::account_service::AccountService;
use crate::core::proxy::TransactionalProxyFactory;
use crate::core::use_case::account_service::AccountServiceImpl;

pub struct AppInitializer;

impl AppInitializer {
    pub fn initialize(config: &AppConfig) -> Arc<AppState> {
        let store = Arc::new(if config.seed_accounts() {
            AccountStore::with_accounts(Self::seed_accounts())
        } else {
            AccountStore::new()
        });

        let transaction_manager = Arc::new(InMemoryTransactionManager::new(store.clone()));
        let account_repository = Arc::new(InMemoryAccountRepository::new(store));
        let account_service: Arc<dyn AccountService> =
            Arc::new(AccountServiceImpl::new(account_repository));

        Arc::new(AppState {
            account_service: TransactionalProxyFactory::create_transactional_proxy(
                account_service,
                transaction_manager,
            ),
        })
    }

    fn seed_accounts() -> Vec<Account> {
        ["aaa", "bbb", "ccc"]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| Account {
                id,
                name: name.to_string(),
                money: 1000,
            })
            .collect()
    }
}
