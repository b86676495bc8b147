//! Session-scoped record store and its reconciliation reducer
//!
//! The list view trusts this store for the lifetime of a session: after a
//! mutation succeeds remotely, the store is reconciled in place instead of
//! re-fetched. The reducer is pure so every transformation can be tested
//! without network access.

use crate::model::{CreateReceipt, User, UserDraft, UserId};

/// Derive a username from a display name: whitespace stripped, upper-cased,
/// prefixed `USER-`. "John Q Public" becomes `USER-JOHNQPUBLIC`.
pub fn derive_username(name: &str) -> String {
    let stripped: String = name.split_whitespace().collect();
    format!("USER-{}", stripped.to_uppercase())
}

/// A successful remote mutation, ready to be folded into the store
#[derive(Debug, Clone)]
pub enum Mutation {
    /// A create succeeded remotely; the receipt carries whatever the service
    /// assigned. Missing pieces are derived locally.
    Create {
        /// The submitted form data
        draft: UserDraft,
        /// Remote-assigned identifier and username, either possibly absent
        receipt: CreateReceipt,
    },
    /// An update succeeded remotely; the record replaces its predecessor.
    Update {
        /// The updated record, identifier preserved
        record: User,
    },
    /// A delete succeeded remotely.
    Delete {
        /// Identifier of the removed record
        id: UserId,
    },
}

/// In-memory ordered collection of user records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    users: Vec<User>,
}

impl RecordStore {
    /// Seed the store from a fetched collection.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Records in display order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a record by identifier.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Next locally-assigned identifier: one past the current maximum, or 1
    /// for an empty store.
    pub fn next_id(&self) -> UserId {
        self.users.iter().map(|u| u.id).max().map_or(1, |max| max + 1)
    }

    /// Fold a successful mutation into the store.
    ///
    /// Returns the identifier of the affected record, or `None` when an update
    /// or delete targets a record that is no longer present (last response to
    /// resolve wins; stale completions fall through harmlessly).
    pub fn apply(&mut self, mutation: Mutation) -> Option<UserId> {
        match mutation {
            Mutation::Create { draft, receipt } => {
                let id = receipt.id.unwrap_or_else(|| self.next_id());
                let username = receipt
                    .username
                    .unwrap_or_else(|| derive_username(&draft.name));
                self.users.push(draft.into_user(id, username));
                Some(id)
            }
            Mutation::Update { record } => {
                let position = self.users.iter().position(|u| u.id == record.id)?;
                let id = record.id;
                self.users[position] = record;
                Some(id)
            }
            Mutation::Delete { id } => {
                let position = self.users.iter().position(|u| u.id == id)?;
                self.users.remove(position);
                Some(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Address;

    fn user(id: UserId, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: name.to_lowercase().replace(' ', "_"),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "555-0100".to_string(),
            website: None,
            address: Address {
                street: "Main St".to_string(),
                city: "Springfield".to_string(),
            },
            company: None,
        }
    }

    fn draft(name: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            username: "submitted".to_string(),
            email: "new@example.com".to_string(),
            phone: "555-0101".to_string(),
            website: None,
            address: Address {
                street: "Oak Ave".to_string(),
                city: "Shelbyville".to_string(),
            },
            company: None,
        }
    }

    fn seeded() -> RecordStore {
        RecordStore::new(vec![user(1, "Ada"), user(4, "Grace"), user(3, "Edsger")])
    }

    #[test]
    fn test_derive_username() {
        assert_eq!(derive_username("John Q Public"), "USER-JOHNQPUBLIC");
        assert_eq!(derive_username("ada"), "USER-ADA");
        assert_eq!(derive_username("  spaced   out  "), "USER-SPACEDOUT");
    }

    #[test]
    fn test_create_appends_and_assigns_next_id() {
        let mut store = seeded();
        let id = store.apply(Mutation::Create {
            draft: draft("John Q Public"),
            receipt: CreateReceipt::default(),
        });

        // max(1, 4, 3) + 1
        assert_eq!(id, Some(5));
        assert_eq!(store.len(), 4);

        let created = store.users().last().unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(created.username, "USER-JOHNQPUBLIC");
        assert_eq!(created.name, "John Q Public");
    }

    #[test]
    fn test_create_into_empty_store_uses_id_one() {
        let mut store = RecordStore::default();
        let id = store.apply(Mutation::Create {
            draft: draft("First User"),
            receipt: CreateReceipt::default(),
        });

        assert_eq!(id, Some(1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_prefers_remote_assignments() {
        let mut store = seeded();
        let id = store.apply(Mutation::Create {
            draft: draft("John Q Public"),
            receipt: CreateReceipt {
                id: Some(42),
                username: Some("remote_handle".to_string()),
            },
        });

        assert_eq!(id, Some(42));
        let created = store.get(42).unwrap();
        assert_eq!(created.username, "remote_handle");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = seeded();
        let mut record = user(4, "Grace Hopper");
        record.email = "grace@navy.mil".to_string();

        let id = store.apply(Mutation::Update { record });

        assert_eq!(id, Some(4));
        assert_eq!(store.len(), 3);

        // Position preserved: Grace is still the middle entry
        let ids: Vec<UserId> = store.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 4, 3]);
        assert_eq!(store.users()[1].name, "Grace Hopper");
        assert_eq!(store.users()[1].email, "grace@navy.mil");
    }

    #[test]
    fn test_update_of_missing_record_is_a_noop() {
        let mut store = seeded();
        let before = store.clone();

        let id = store.apply(Mutation::Update {
            record: user(99, "Ghost"),
        });

        assert_eq!(id, None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_removes_exactly_one_and_keeps_order() {
        let mut store = seeded();
        let id = store.apply(Mutation::Delete { id: 4 });

        assert_eq!(id, Some(4));
        assert_eq!(store.len(), 2);
        assert!(store.get(4).is_none());

        let ids: Vec<UserId> = store.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_of_missing_record_is_a_noop() {
        let mut store = seeded();
        let before = store.clone();

        let id = store.apply(Mutation::Delete { id: 99 });

        assert_eq!(id, None);
        assert_eq!(store, before);
    }
}
