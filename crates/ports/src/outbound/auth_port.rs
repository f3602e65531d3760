//! Authentication port - read-only view of the current user
//!
//! The auth provider pushes a continuously-updated "current user or none"
//! signal; the submission core mirrors it and never calls back to mutate
//! authentication state.

use serde::{Deserialize, Serialize};

use promovote_domain::UserId;

/// The signed-in user as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub display_name: Option<String>,
}

/// Authentication state as mirrored by the submission core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AuthState {
    /// The provider has not yet reported a state
    Loading,
    /// No user is signed in
    Unauthenticated,
    /// A user is signed in
    Authenticated(AuthenticatedUser),
    /// The provider failed to resolve a state
    Error,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Continuously-updated authentication signal.
///
/// NOTE: intentionally object-safe so the application layer can hold an
/// `Arc<dyn AuthenticationPort>` without depending on a concrete auth SDK.
/// Hand-rolled mock below; mockall cannot generate mocks for methods
/// taking boxed callbacks.
pub trait AuthenticationPort: Send + Sync {
    /// The most recently observed authentication state.
    fn current(&self) -> AuthState;

    /// Register a callback invoked on every authentication state change.
    fn on_auth_change(&self, callback: Box<dyn Fn(AuthState) + Send + Sync>);
}

#[cfg(feature = "testing")]
mod testing {
    use std::sync::{Arc, Mutex};

    use super::{AuthState, AuthenticationPort};

    struct Inner {
        current: AuthState,
        callbacks: Vec<Box<dyn Fn(AuthState) + Send + Sync>>,
    }

    /// Mock `AuthenticationPort` for tests.
    ///
    /// Lets tests drive the auth signal (`set_state`) and assert that
    /// consumers subscribed (`callback_count`).
    #[derive(Clone)]
    pub struct MockAuthenticationPort {
        inner: Arc<Mutex<Inner>>,
    }

    impl MockAuthenticationPort {
        pub fn new(initial: AuthState) -> Self {
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    current: initial,
                    callbacks: Vec::new(),
                })),
            }
        }

        /// Update the reported state and notify every registered callback.
        pub fn set_state(&self, state: AuthState) {
            let mut inner = self.inner.lock().expect("auth mock lock poisoned");
            inner.current = state.clone();
            for callback in &inner.callbacks {
                callback(state.clone());
            }
        }

        /// How many callbacks have been registered so far.
        pub fn callback_count(&self) -> usize {
            self.inner
                .lock()
                .expect("auth mock lock poisoned")
                .callbacks
                .len()
        }
    }

    impl Default for MockAuthenticationPort {
        fn default() -> Self {
            Self::new(AuthState::Unauthenticated)
        }
    }

    impl AuthenticationPort for MockAuthenticationPort {
        fn current(&self) -> AuthState {
            self.inner
                .lock()
                .expect("auth mock lock poisoned")
                .current
                .clone()
        }

        fn on_auth_change(&self, callback: Box<dyn Fn(AuthState) + Send + Sync>) {
            self.inner
                .lock()
                .expect("auth mock lock poisoned")
                .callbacks
                .push(callback);
        }
    }
}

#[cfg(feature = "testing")]
pub use testing::MockAuthenticationPort;
