use serde::{Deserialize, Serialize};

/// Identifier of a user record.
///
/// Unique within the local record store for the lifetime of a session only;
/// the remote fixture service does not durably persist writes.
pub type UserId = u64;

/// Postal address of a user (only the fields the UI shows)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line
    pub street: String,
    /// City name
    pub city: String,
}

/// Company a user belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Company name
    pub name: String,
}

/// User record as served by the remote collection
///
/// The wire shape matches the fixture API; extra remote fields (suite, zipcode,
/// geo coordinates, company catch phrases) are ignored on deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique record identifier
    pub id: UserId,
    /// Full display name
    pub name: String,
    /// Login-style handle
    pub username: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Optional website, stored without a scheme by the fixture service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Postal address
    pub address: Address,
    /// Optional company
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

/// Form output: a user record without an identifier
///
/// Doubles as the request body for create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    /// Full display name
    pub name: String,
    /// Login-style handle
    pub username: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Optional website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Postal address
    pub address: Address,
    /// Optional company
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

impl UserDraft {
    /// Prefill a draft from an existing record, for the edit form.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
            address: user.address.clone(),
            company: user.company.clone(),
        }
    }

    /// Promote a draft to a full record with a settled identifier and username.
    pub fn into_user(self, id: UserId, username: String) -> User {
        User {
            id,
            name: self.name,
            username,
            email: self.email,
            phone: self.phone,
            website: self.website,
            address: self.address,
            company: self.company,
        }
    }
}

/// Remote-assigned portions of a create response
///
/// The fixture service may omit either field, in which case the store derives
/// them locally during reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateReceipt {
    /// Identifier assigned by the remote service, if any
    #[serde(default)]
    pub id: Option<UserId>,
    /// Username echoed or assigned by the remote service, if any
    #[serde(default)]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_fixture_shape() {
        // A record as JSONPlaceholder serves it, including fields we don't keep
        let json = r#"{
            "id": 7,
            "name": "Kurtis Weissnat",
            "username": "Elwyn.Skiles",
            "email": "Telly.Hoeger@billy.biz",
            "phone": "210.067.6132",
            "website": "elvis.io",
            "address": {
                "street": "Rex Trail",
                "suite": "Suite 280",
                "city": "Howemouth",
                "zipcode": "58804-1099",
                "geo": { "lat": "24.8918", "lng": "21.8984" }
            },
            "company": {
                "name": "Johns Group",
                "catchPhrase": "Configurable multimedia task-force",
                "bs": "generate enterprise e-tailers"
            }
        }"#;

        let user: User = serde_json::from_str(json).expect("fixture record should deserialize");
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "Elwyn.Skiles");
        assert_eq!(user.address.street, "Rex Trail");
        assert_eq!(user.address.city, "Howemouth");
        assert_eq!(user.company.as_ref().unwrap().name, "Johns Group");
        assert_eq!(user.website.as_deref(), Some("elvis.io"));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{
            "id": 1,
            "name": "Jane Doe",
            "username": "jane",
            "email": "jane@example.com",
            "phone": "555-0100",
            "address": { "street": "Main St", "city": "Springfield" }
        }"#;

        let user: User = serde_json::from_str(json).expect("minimal record should deserialize");
        assert!(user.website.is_none());
        assert!(user.company.is_none());
    }

    #[test]
    fn test_serialize_draft_omits_absent_optionals() {
        let draft = UserDraft {
            name: "Jane Doe".to_string(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            website: None,
            address: Address {
                street: "Main St".to_string(),
                city: "Springfield".to_string(),
            },
            company: None,
        };

        let json = serde_json::to_value(&draft).expect("draft should serialize");
        assert!(json.get("website").is_none());
        assert!(json.get("company").is_none());
        assert_eq!(json["address"]["city"], "Springfield");
    }

    #[test]
    fn test_create_receipt_tolerates_omissions() {
        let receipt: CreateReceipt = serde_json::from_str("{}").expect("empty reply is valid");
        assert!(receipt.id.is_none());
        assert!(receipt.username.is_none());

        let receipt: CreateReceipt =
            serde_json::from_str(r#"{"id": 11, "username": "echo", "name": "ignored"}"#)
                .expect("reply with extras is valid");
        assert_eq!(receipt.id, Some(11));
        assert_eq!(receipt.username.as_deref(), Some("echo"));
    }

    #[test]
    fn test_draft_round_trip_through_user() {
        let draft = UserDraft {
            name: "Jane Doe".to_string(),
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            website: Some("https://example.com".to_string()),
            address: Address {
                street: "Main St".to_string(),
                city: "Springfield".to_string(),
            },
            company: Some(Company {
                name: "Acme Corp".to_string(),
            }),
        };

        let user = draft.clone().into_user(4, "jane".to_string());
        assert_eq!(user.id, 4);
        assert_eq!(UserDraft::from_user(&user), draft);
    }
}
