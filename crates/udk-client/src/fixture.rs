//! In-process stand-in for the remote fixture API
//!
//! Spawns an axum server on an ephemeral port that mimics the user collection
//! endpoint closely enough for integration tests: it serves a seed collection,
//! answers mutations with configurable echoes, and counts requests so tests
//! can assert that validation failures never reach the network.
//!
//! Like the real fixture service, it never persists writes: a create or delete
//! does not change what a later `GET /users` returns.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use udk_core::{Address, Company, User, UserId};

/// Builder for a fixture server
#[derive(Debug)]
pub struct Fixture {
    users: Vec<User>,
    assigned_id: Option<UserId>,
    echo_username: bool,
    fail_mutations: bool,
}

impl Fixture {
    /// Fixture seeded with [`dummy_users`].
    pub fn new() -> Self {
        Self {
            users: dummy_users(),
            assigned_id: None,
            echo_username: false,
            fail_mutations: false,
        }
    }

    /// Fixture with an empty collection.
    pub fn empty() -> Self {
        Self::new().with_users(Vec::new())
    }

    /// Replace the seed collection.
    pub fn with_users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Make create responses carry a remote-assigned identifier.
    pub fn assign_id(mut self, id: UserId) -> Self {
        self.assigned_id = Some(id);
        self
    }

    /// Make create responses echo the submitted username.
    pub fn echo_username(mut self) -> Self {
        self.echo_username = true;
        self
    }

    /// Make every mutation answer 500.
    pub fn failing_mutations(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    /// Bind an ephemeral port and serve until the test process exits.
    pub async fn spawn(self) -> FixtureApi {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = Arc::new(FixtureState {
            users: self.users,
            assigned_id: self.assigned_id,
            echo_username: self.echo_username,
            fail_mutations: self.fail_mutations,
            hits: Arc::clone(&hits),
        });

        let app = Router::new()
            .route("/users", get(list_users).post(create_user))
            .route(
                "/users/{id}",
                get(get_user).put(update_user).delete(delete_user),
            )
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind fixture listener");
        let addr = listener.local_addr().expect("fixture listener has an address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fixture server failed");
        });

        FixtureApi {
            base_url: format!("http://{addr}"),
            hits,
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a running fixture server
#[derive(Debug)]
pub struct FixtureApi {
    /// Base URL to point a `UsersClient` at
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FixtureApi {
    /// Number of requests the fixture has served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

struct FixtureState {
    users: Vec<User>,
    assigned_id: Option<UserId>,
    echo_username: bool,
    fail_mutations: bool,
    hits: Arc<AtomicUsize>,
}

/// Seed collection in the shape the real fixture service uses.
pub fn dummy_users() -> Vec<User> {
    fn user(id: UserId, name: &str, username: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            phone: "1-770-736-8031".to_string(),
            website: Some("hildegard.org".to_string()),
            address: Address {
                street: "Kulas Light".to_string(),
                city: "Gwenborough".to_string(),
            },
            company: Some(Company {
                name: "Romaguera-Crona".to_string(),
            }),
        }
    }

    vec![
        user(1, "John Doe", "john_doe", "john.doe@example.com"),
        user(2, "Jane Smith", "jane_smith", "jane.smith@example.com"),
        user(3, "Bob Wilson", "bob_wilson", "bob.wilson@example.com"),
        user(4, "Alice Johnson", "alice_johnson", "alice.johnson@example.com"),
        user(5, "Charlie Brown", "charlie_brown", "charlie.brown@example.com"),
    ]
}

async fn list_users(State(state): State<Arc<FixtureState>>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    Json(state.users.clone())
}

async fn get_user(
    State(state): State<Arc<FixtureState>>,
    Path(id): Path<UserId>,
) -> axum::response::Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if let Some(user) = state.users.iter().find(|u| u.id == id) {
        (StatusCode::OK, Json(user.clone())).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "User not found",
                "id": id
            })),
        )
            .into_response()
    }
}

async fn create_user(
    State(state): State<Arc<FixtureState>>,
    Json(payload): Json<serde_json::Value>,
) -> axum::response::Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if state.fail_mutations {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal server error"})),
        )
            .into_response();
    }

    let mut reply = serde_json::Map::new();
    if let Some(id) = state.assigned_id {
        reply.insert("id".to_string(), json!(id));
    }
    if state.echo_username {
        if let Some(username) = payload.get("username") {
            reply.insert("username".to_string(), username.clone());
        }
    }

    (StatusCode::CREATED, Json(serde_json::Value::Object(reply))).into_response()
}

async fn update_user(
    State(state): State<Arc<FixtureState>>,
    Path(id): Path<UserId>,
    Json(payload): Json<serde_json::Value>,
) -> axum::response::Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if state.fail_mutations {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal server error"})),
        )
            .into_response();
    }

    if state.users.iter().any(|u| u.id == id) {
        let mut reply = payload;
        if let Some(object) = reply.as_object_mut() {
            object.insert("id".to_string(), json!(id));
        }
        (StatusCode::OK, Json(reply)).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "User not found",
                "id": id
            })),
        )
            .into_response()
    }
}

async fn delete_user(
    State(state): State<Arc<FixtureState>>,
    Path(id): Path<UserId>,
) -> axum::response::Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if state.fail_mutations {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal server error"})),
        )
            .into_response();
    }

    if state.users.iter().any(|u| u.id == id) {
        (StatusCode::OK, Json(json!({}))).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "User not found",
                "id": id
            })),
        )
            .into_response()
    }
}
