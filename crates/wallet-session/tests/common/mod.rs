/*
[INPUT]:  Test configuration and scripted helper requirements
[OUTPUT]: Shared test utilities and fixtures
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for wallet-session tests

use std::sync::Arc;

use wallet_session::{AuthHelper, Chain, MockAuthHelper, SessionFacade, UserProfile};

pub const TEST_SOLANA_KEY: &str = "5J3mBbAH58CpQ3Y5RNJpUKPE62SQ5tfcvU2JpbnkeyhfsYB1Jcn";

/// Profile matching the Web3Auth-style record the helper returns
pub fn sample_profile() -> UserProfile {
    UserProfile {
        email: Some("ayush@example.com".to_string()),
        name: Some("Ayush".to_string()),
        profile_image: None,
        verifier: "torus".to_string(),
        verifier_id: "ayush@example.com".to_string(),
        type_of_login: "google".to_string(),
    }
}

/// Helper with no cached session and every operation succeeding
pub fn fresh_helper() -> Arc<MockAuthHelper> {
    Arc::new(
        MockAuthHelper::new()
            .with_private_key(Chain::Solana, TEST_SOLANA_KEY)
            .with_profile(sample_profile()),
    )
}

/// Helper that already holds an active session
pub fn authenticated_helper() -> Arc<MockAuthHelper> {
    Arc::new(
        MockAuthHelper::new()
            .authenticated(true)
            .with_private_key(Chain::Solana, TEST_SOLANA_KEY)
            .with_profile(sample_profile()),
    )
}

/// Facade wired to the given helper handle
pub fn facade_with(helper: Arc<MockAuthHelper>) -> SessionFacade {
    SessionFacade::with_helper(helper as Arc<dyn AuthHelper>)
}
