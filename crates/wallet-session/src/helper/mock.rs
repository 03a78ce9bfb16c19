/*
[INPUT]:  Scripted outcomes per helper operation
[OUTPUT]: Deterministic AuthHelper behavior for tests and demos
[POS]:    Helper layer - mock SDK implementation
[UPDATE]: When the AuthHelper contract changes
*/

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{Result, SessionError};
use crate::types::{Chain, UserProfile};

use super::AuthHelper;

/// Mock authentication helper for testing
///
/// Outcomes are scripted at construction: each operation either succeeds
/// against an in-memory session flag or fails with a predetermined
/// message. Keys are stored per chain.
#[derive(Debug, Default)]
pub struct MockAuthHelper {
    inner: RwLock<MockInner>,
}

#[derive(Debug, Default)]
struct MockInner {
    authenticated: bool,
    initialize_failure: Option<String>,
    login_failure: Option<String>,
    logout_failure: Option<String>,
    private_keys: HashMap<Chain, String>,
    profile: UserProfile,
}

impl MockAuthHelper {
    /// Create a mock with no session, no keys, and all operations succeeding
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already-active session (a cached SDK session)
    pub fn authenticated(self, value: bool) -> Self {
        self.inner.write().unwrap().authenticated = value;
        self
    }

    /// Script a bootstrap failure for `initialize`
    pub fn fail_initialize(self, message: impl Into<String>) -> Self {
        self.inner.write().unwrap().initialize_failure = Some(message.into());
        self
    }

    /// Script an auth-flow failure for `login`
    pub fn fail_login(self, message: impl Into<String>) -> Self {
        self.inner.write().unwrap().login_failure = Some(message.into());
        self
    }

    /// Script an auth-flow failure for `logout`
    pub fn fail_logout(self, message: impl Into<String>) -> Self {
        self.inner.write().unwrap().logout_failure = Some(message.into());
        self
    }

    /// Register a private key served for the given chain
    pub fn with_private_key(self, chain: Chain, key: impl Into<String>) -> Self {
        self.inner
            .write()
            .unwrap()
            .private_keys
            .insert(chain, key.into());
        self
    }

    /// Set the profile returned by `user_details`
    pub fn with_profile(self, profile: UserProfile) -> Self {
        self.inner.write().unwrap().profile = profile;
        self
    }
}

#[async_trait]
impl AuthHelper for MockAuthHelper {
    async fn initialize(&self) -> Result<()> {
        let guard = self.inner.read().unwrap();
        match &guard.initialize_failure {
            Some(message) => Err(SessionError::helper(message.clone())),
            None => Ok(()),
        }
    }

    fn is_authenticated(&self) -> bool {
        self.inner.read().unwrap().authenticated
    }

    async fn login(&self) -> Result<()> {
        let mut guard = self.inner.write().unwrap();
        match &guard.login_failure {
            Some(message) => Err(SessionError::auth(message.clone())),
            None => {
                guard.authenticated = true;
                Ok(())
            }
        }
    }

    async fn logout(&self) -> Result<()> {
        let mut guard = self.inner.write().unwrap();
        match &guard.logout_failure {
            Some(message) => Err(SessionError::auth(message.clone())),
            None => {
                guard.authenticated = false;
                Ok(())
            }
        }
    }

    fn private_key(&self, chain: Chain) -> Result<String> {
        let guard = self.inner.read().unwrap();
        if !guard.authenticated {
            return Err(SessionError::NoSession);
        }
        guard
            .private_keys
            .get(&chain)
            .cloned()
            .ok_or(SessionError::UnsupportedChain { chain })
    }

    fn user_details(&self) -> Result<UserProfile> {
        let guard = self.inner.read().unwrap();
        if !guard.authenticated {
            return Err(SessionError::NoSession);
        }
        Ok(guard.profile.clone())
    }
}
