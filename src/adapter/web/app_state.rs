use std::sync::Arc;

use crate::core::port::account_service::AccountService;

pub struct AppState {
    /// Already wrapped by the transactional proxy.
    pub account_service: Arc<dyn AccountService>,
}
