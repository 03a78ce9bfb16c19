/*
[INPUT]:  Helper factory + login/logout/initialize commands
[OUTPUT]: Published SessionState on a watch channel, key/profile passthrough
[POS]:    Session layer - orchestrates helper calls as fire-and-forget tasks
[UPDATE]: When changing publication guarantees or failure routing
*/

use std::fmt;
use std::sync::{Arc, RwLock};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{Result, SessionError};
use crate::helper::AuthHelper;
use crate::types::{Chain, SessionState, SessionStatus, UserProfile};

type HelperFactory = dyn Fn() -> Arc<dyn AuthHelper> + Send + Sync;

/// Observable session facade over an external authentication helper.
///
/// Each mutating operation spawns an independent Tokio task and returns
/// its `JoinHandle`; callers may drop the handle (fire-and-forget) or
/// await it before reading state. All published writes go through a
/// single watch channel, so observers never see a torn `SessionState`.
/// Racing operations are last-completed-write-wins; there is no
/// cancellation, retry, or timeout.
pub struct SessionFacade {
    factory: Arc<HelperFactory>,
    helper: Arc<RwLock<Option<Arc<dyn AuthHelper>>>>,
    state_tx: watch::Sender<SessionState>,
}

impl SessionFacade {
    /// Create a facade that builds its helper lazily on `initialize`.
    ///
    /// The factory seam is what lets tests and demos inject a
    /// `MockAuthHelper` while production wires the real SDK handle.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Arc<dyn AuthHelper> + Send + Sync + 'static,
    {
        let (state_tx, _) = watch::channel(SessionState::default());
        Self {
            factory: Arc::new(factory),
            helper: Arc::new(RwLock::new(None)),
            state_tx,
        }
    }

    /// Convenience constructor wrapping a ready-made helper handle
    pub fn with_helper(helper: Arc<dyn AuthHelper>) -> Self {
        Self::new(move || helper.clone())
    }

    /// Subscribe to published session state changes
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the currently published state
    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Dismiss a previously published login/logout error
    pub fn clear_error(&self) {
        self.state_tx.send_modify(|state| state.error = None);
    }

    /// Create (or replace) the helper handle and run its bootstrap.
    ///
    /// On success the helper's session status is published as
    /// `Authenticated`/`Unauthenticated`. A bootstrap failure publishes
    /// `InitFailed` and leaves the error field untouched; re-invoking
    /// `initialize` replaces the handle and retries from scratch.
    pub fn initialize(&self) -> JoinHandle<()> {
        let helper = (self.factory)();
        {
            let mut guard = self.helper.write().unwrap();
            *guard = Some(helper.clone());
        }

        let state_tx = self.state_tx.clone();
        tokio::spawn(async move {
            match helper.initialize().await {
                Ok(()) => {
                    let status = if helper.is_authenticated() {
                        SessionStatus::Authenticated
                    } else {
                        SessionStatus::Unauthenticated
                    };
                    tracing::info!(status = ?status, "helper bootstrap complete");
                    state_tx.send_modify(|state| state.status = status);
                }
                Err(err) => {
                    tracing::error!(error = %err, "helper bootstrap failed");
                    state_tx.send_modify(|state| state.status = SessionStatus::InitFailed);
                }
            }
        })
    }

    /// Drive the helper's login flow.
    ///
    /// Success publishes `Authenticated`. Failure publishes the failure
    /// description in the error field and leaves the status unchanged.
    pub fn login(&self) -> JoinHandle<()> {
        let helper = self.current_helper();
        let state_tx = self.state_tx.clone();

        tokio::spawn(async move {
            let Some(helper) = helper else {
                publish_not_initialized(&state_tx, "login");
                return;
            };

            match helper.login().await {
                Ok(()) => {
                    tracing::info!("login complete");
                    state_tx.send_modify(|state| state.status = SessionStatus::Authenticated);
                }
                Err(err) => {
                    tracing::error!(error = %err, "login failed");
                    state_tx.send_modify(|state| state.error = Some(err.user_message()));
                }
            }
        })
    }

    /// Tear down the helper's session.
    ///
    /// Success publishes `Unauthenticated`. Failure publishes the
    /// failure description and leaves the status unchanged, so a stale
    /// `Authenticated` reading is possible after a failed logout.
    pub fn logout(&self) -> JoinHandle<()> {
        let helper = self.current_helper();
        let state_tx = self.state_tx.clone();

        tokio::spawn(async move {
            let Some(helper) = helper else {
                publish_not_initialized(&state_tx, "logout");
                return;
            };

            match helper.logout().await {
                Ok(()) => {
                    tracing::info!("logout complete");
                    state_tx.send_modify(|state| state.status = SessionStatus::Unauthenticated);
                }
                Err(err) => {
                    tracing::error!(error = %err, "logout failed");
                    state_tx.send_modify(|state| state.error = Some(err.user_message()));
                }
            }
        })
    }

    /// Wallet private key for the given chain.
    ///
    /// Synchronous passthrough; failures return to the caller and never
    /// touch the published error field.
    pub fn private_key(&self, chain: Chain) -> Result<String> {
        let helper = self.current_helper().ok_or(SessionError::NotInitialized)?;
        helper.private_key(chain)
    }

    /// Profile of the logged-in user; same passthrough contract as
    /// `private_key`
    pub fn user_info(&self) -> Result<UserProfile> {
        let helper = self.current_helper().ok_or(SessionError::NotInitialized)?;
        helper.user_details()
    }

    fn current_helper(&self) -> Option<Arc<dyn AuthHelper>> {
        self.helper.read().unwrap().clone()
    }
}

fn publish_not_initialized(state_tx: &watch::Sender<SessionState>, operation: &str) {
    tracing::warn!(operation, "facade used before initialize");
    state_tx.send_modify(|state| {
        state.error = Some(SessionError::NotInitialized.user_message());
    });
}

impl fmt::Debug for SessionFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionFacade")
            .field("state", &*self.state_tx.borrow())
            .field("helper_initialized", &self.helper.read().unwrap().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::MockAuthHelper;

    #[tokio::test]
    async fn test_initialize_publishes_cached_session() {
        let helper = Arc::new(MockAuthHelper::new().authenticated(true));
        let facade = SessionFacade::with_helper(helper);

        facade.initialize().await.unwrap();

        let state = facade.state();
        assert_eq!(state.status, SessionStatus::Authenticated);
        assert!(!state.has_error());
    }

    #[tokio::test]
    async fn test_queries_fail_before_initialize() {
        let facade = SessionFacade::with_helper(Arc::new(MockAuthHelper::new()));

        assert!(matches!(
            facade.private_key(Chain::Solana),
            Err(SessionError::NotInitialized)
        ));
        assert!(matches!(
            facade.user_info(),
            Err(SessionError::NotInitialized)
        ));
        // Published state stays untouched by query failures.
        assert_eq!(facade.state(), SessionState::default());
    }

    #[tokio::test]
    async fn test_login_before_initialize_publishes_error() {
        let facade = SessionFacade::with_helper(Arc::new(MockAuthHelper::new()));

        facade.login().await.unwrap();

        let state = facade.state();
        assert_eq!(state.status, SessionStatus::Uninitialized);
        assert!(state.error.as_deref().unwrap().contains("not initialized"));
    }

    #[tokio::test]
    async fn test_clear_error_keeps_status() {
        let helper = Arc::new(MockAuthHelper::new().fail_login("denied"));
        let facade = SessionFacade::with_helper(helper);

        facade.initialize().await.unwrap();
        facade.login().await.unwrap();
        assert!(facade.state().has_error());

        facade.clear_error();
        let state = facade.state();
        assert!(!state.has_error());
        assert_eq!(state.status, SessionStatus::Unauthenticated);
    }
}
