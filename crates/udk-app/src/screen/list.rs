use udk_client::UsersClient;
use udk_core::{Mutation, RecordStore, User, UserId};

use crate::view::ViewState;

/// The list view
///
/// Owns the record store for the whole session. After a mutation succeeds
/// remotely, the store is reconciled through [`ListScreen::apply`] rather than
/// re-fetched.
#[derive(Debug, Default)]
pub struct ListScreen {
    state: ViewState<RecordStore>,
}

impl ListScreen {
    /// Current view state.
    pub fn state(&self) -> &ViewState<RecordStore> {
        &self.state
    }

    /// The record store, once loaded.
    pub fn store(&self) -> Option<&RecordStore> {
        self.state.loaded()
    }

    /// Look up a record by identifier in the loaded store.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.store()?.get(id)
    }

    /// Fetch-on-entry of the full collection. Returns whether the view ended
    /// up loaded; on failure the state carries the error for the alert render.
    pub async fn fetch(&mut self, client: &UsersClient) -> bool {
        self.state = ViewState::Loading;
        let result = client.list().await.map(RecordStore::new);
        let ok = result.is_ok();
        self.state.resolve(result);
        ok
    }

    /// Fold a successful mutation into the store. A no-op unless loaded.
    pub fn apply(&mut self, mutation: Mutation) -> Option<UserId> {
        self.state.loaded_mut()?.apply(mutation)
    }

    #[cfg(test)]
    pub(crate) fn loaded(store: RecordStore) -> Self {
        Self {
            state: ViewState::Loaded(store),
        }
    }
}
