use udk_core::UserId;

/// A navigable location: the list at `/`, or one record at `/users/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The user list
    List,
    /// The detail view of one record
    Detail(UserId),
}

impl Route {
    /// Parse a path into a route. Trailing slashes are tolerated.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Some(Self::List);
        }
        let id = path.strip_prefix("/users/")?.parse().ok()?;
        Some(Self::Detail(id))
    }

    /// Path form of the route.
    pub fn path(self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::Detail(id) => format!("/users/{id}"),
        }
    }
}
