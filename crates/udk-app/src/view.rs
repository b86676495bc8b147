//! Explicit per-view finite state
//!
//! Each view owns exactly one request at a time, and its state is transitioned
//! only by that request completing. There is no ambient loading flag shared
//! between views.

use udk_client::ClientError;

/// State of a view with a single owning request
#[derive(Debug, Default)]
pub enum ViewState<T> {
    /// No request issued yet
    #[default]
    Idle,
    /// The owning request is in flight
    Loading,
    /// The request resolved with data
    Loaded(T),
    /// The request failed; rendered as a blocking alert with no retry affordance
    Failed(ClientError),
}

impl<T> ViewState<T> {
    /// True while the owning request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded data, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Mutable access to the loaded data, if any.
    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Complete the owning request.
    pub fn resolve(&mut self, result: Result<T, ClientError>) {
        *self = match result {
            Ok(data) => Self::Loaded(data),
            Err(error) => Self::Failed(error),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use udk_client::StatusCode;

    #[test]
    fn test_default_is_idle() {
        let state: ViewState<u32> = ViewState::default();
        assert!(matches!(state, ViewState::Idle));
        assert!(!state.is_loading());
        assert!(state.loaded().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_resolve_success() {
        let mut state = ViewState::Loading;
        state.resolve(Ok(42));
        assert_eq!(state.loaded(), Some(&42));
    }

    #[test]
    fn test_resolve_failure() {
        let mut state: ViewState<u32> = ViewState::Loading;
        state.resolve(Err(ClientError::Unexpected(
            StatusCode::INTERNAL_SERVER_ERROR,
        )));
        assert!(state.loaded().is_none());
        assert!(matches!(state.error(), Some(ClientError::Unexpected(_))));
    }
}
