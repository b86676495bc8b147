use udk_client::{ClientError, UsersClient};
use udk_core::{Mutation, User};

/// The delete confirmation dialog
#[derive(Debug)]
pub struct ConfirmDelete {
    user: User,
}

impl ConfirmDelete {
    /// Dialog for deleting one record.
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// The record pending deletion.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Prompt line shown to the user.
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete {}? [y/N]", self.user.name)
    }

    /// Issue the remote delete. On success the returned mutation removes the
    /// record from the store; on failure prior state is untouched.
    pub async fn confirm(&self, client: &UsersClient) -> Result<Mutation, ClientError> {
        client.delete(self.user.id).await?;
        Ok(Mutation::Delete { id: self.user.id })
    }
}
