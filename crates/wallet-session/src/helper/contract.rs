/*
[INPUT]:  Session commands and key/profile queries
[OUTPUT]: Helper results (session state, keys, profile records)
[POS]:    Helper layer - external SDK abstraction
[UPDATE]: When the SDK adds capabilities or changes failure modes
*/

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Chain, UserProfile};

/// Trait for the external authentication helper SDK.
///
/// Implement this trait over your SDK handle (Web3Auth, a custodial
/// signer, etc.). The mutating operations are async because the SDK
/// drives network calls and interactive auth flows; the queries are
/// synchronous reads of the SDK's local session.
#[async_trait]
pub trait AuthHelper: Send + Sync {
    /// Bootstrap the SDK (restore cached sessions, warm network state)
    async fn initialize(&self) -> Result<()>;

    /// Whether the SDK currently holds an active session
    fn is_authenticated(&self) -> bool;

    /// Drive the interactive login flow to completion
    async fn login(&self) -> Result<()>;

    /// Tear down the active session
    async fn logout(&self) -> Result<()>;

    /// Wallet private key for the given chain
    ///
    /// Fails with `NoSession` when unauthenticated and
    /// `UnsupportedChain` when the SDK cannot derive for that chain.
    fn private_key(&self, chain: Chain) -> Result<String>;

    /// Profile of the logged-in user; fails with `NoSession` when
    /// unauthenticated
    fn user_details(&self) -> Result<UserProfile>;
}
