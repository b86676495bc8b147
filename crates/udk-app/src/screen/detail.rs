use udk_client::UsersClient;
use udk_core::{User, UserId};

use crate::view::ViewState;

/// The detail view of one record, addressed by its route identifier
#[derive(Debug)]
pub struct DetailScreen {
    id: UserId,
    state: ViewState<User>,
}

impl DetailScreen {
    /// A detail view for `/users/{id}`, not yet fetched.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            state: ViewState::Idle,
        }
    }

    /// Identifier from the route.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState<User> {
        &self.state
    }

    /// The fetched record, once loaded.
    pub fn user(&self) -> Option<&User> {
        self.state.loaded()
    }

    /// Fetch-on-entry of the routed record. Returns whether the view ended up
    /// loaded.
    pub async fn fetch(&mut self, client: &UsersClient) -> bool {
        self.state = ViewState::Loading;
        let result = client.get(self.id).await;
        let ok = result.is_ok();
        self.state.resolve(result);
        ok
    }

    #[cfg(test)]
    pub(crate) fn loaded(user: User) -> Self {
        Self {
            id: user.id,
            state: ViewState::Loaded(user),
        }
    }
}
