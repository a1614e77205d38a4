use std::cell::RefCell;
use std::collections::BTreeMap;
use std::future::Future;
use tokio::sync::OwnedMutexGuard;

use crate::core::domain::entity::account::Account;

/// Writes staged by the transaction bound to the current task. `None` marks a
/// deleted account.
pub(crate) type WriteSet = BTreeMap<i32, Option<Account>>;

/// A transaction bound to the current task. It holds the store's writer lock
/// until it is dropped, so transactions on one store never interleave.
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) writes: WriteSet,
    _writer: OwnedMutexGuard<()>,
}

impl Session {
    pub(crate) fn new(writer: OwnedMutexGuard<()>) -> Self {
        Self {
            writes: WriteSet::new(),
            _writer: writer,
        }
    }
}

tokio::task_local! {
    static SESSION: RefCell<Option<Session>>;
}

/// Runs `future` with its own transaction slot. Transactions begun inside are
/// invisible to every other task until they commit.
pub async fn scope<F: Future>(future: F) -> F::Output {
    SESSION.scope(RefCell::new(None), future).await
}

/// Gives `f` the current task's slot, or returns `None` outside [`scope`].
pub(crate) fn with_slot<R>(f: impl FnOnce(&mut Option<Session>) -> R) -> Option<R> {
    SESSION.try_with(|slot| f(&mut slot.borrow_mut())).ok()
}
