use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::adapter::store::memory::session::{with_slot, WriteSet};
use crate::core::domain::entity::account::Account;

/// Committed account state shared by every task.
///
/// Transactions are serialized by `writer`, held from begin to release.
/// Writes made outside a transaction apply immediately and do not take it.
#[derive(Debug, Default)]
pub struct AccountStore {
    committed: RwLock<BTreeMap<i32, Account>>,
    writer: Arc<Mutex<()>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        Self {
            committed: RwLock::new(accounts.into_iter().map(|a| (a.id, a)).collect()),
            writer: Arc::default(),
        }
    }

    /// Committed state only, ignoring any transaction of the calling task.
    pub fn committed(&self, id: i32) -> Option<Account> {
        self.committed.read().get(&id).cloned()
    }

    /// Waits until no other transaction is open on this store.
    pub(crate) async fn lock_writer(&self) -> OwnedMutexGuard<()> {
        self.writer.clone().lock_owned().await
    }

    pub(crate) fn read(&self, id: i32) -> Option<Account> {
        let staged = with_slot(|slot| {
            slot.as_ref()
                .and_then(|session| session.writes.get(&id).cloned())
        })
        .flatten();
        match staged {
            Some(entry) => entry,
            None => self.committed(id),
        }
    }

    /// All visible accounts ordered by id.
    pub(crate) fn snapshot(&self) -> Vec<Account> {
        let mut view = self.committed.read().clone();
        with_slot(|slot| {
            if let Some(session) = slot.as_ref() {
                overlay(&mut view, session.writes.clone());
            }
        });
        view.into_values().collect()
    }

    pub(crate) fn find_by_name(&self, name: &str) -> Option<Account> {
        let committed = self.committed.read();
        with_slot(|slot| {
            let writes = slot.as_ref().map(|session| &session.writes);
            find_named(&committed, writes, name)
        })
        .unwrap_or_else(|| find_named(&committed, None, name))
    }

    /// Stages the write in the task's transaction, or applies it directly when
    /// no transaction is bound.
    pub(crate) fn write(&self, id: i32, entry: Option<Account>) {
        let pending = with_slot(|slot| match slot.as_mut() {
            Some(session) => {
                session.writes.insert(id, entry.clone());
                true
            }
            None => false,
        })
        .unwrap_or(false);

        if !pending {
            let mut writes = WriteSet::new();
            writes.insert(id, entry);
            self.apply(writes);
        }
    }

    pub(crate) fn apply(&self, writes: WriteSet) {
        overlay(&mut self.committed.write(), writes);
    }
}

fn find_named(
    committed: &BTreeMap<i32, Account>,
    writes: Option<&WriteSet>,
    name: &str,
) -> Option<Account> {
    if let Some(account) = writes
        .into_iter()
        .flat_map(|writes| writes.values().flatten())
        .find(|account| account.name == name)
    {
        return Some(account.clone());
    }
    committed
        .values()
        .find(|account| {
            account.name == name && !writes.is_some_and(|writes| writes.contains_key(&account.id))
        })
        .cloned()
}

fn overlay(view: &mut BTreeMap<i32, Account>, writes: WriteSet) {
    for (id, entry) in writes {
        match entry {
            Some(account) => {
                view.insert(id, account);
            }
            None => {
                view.remove(&id);
            }
        }
    }
}
