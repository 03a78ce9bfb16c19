/*
[INPUT]:  Mock helper wired through the facade
[OUTPUT]: Console walkthrough of the session lifecycle
[POS]:    Examples - session facade demonstration
[UPDATE]: When the facade surface changes
*/

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use wallet_session::{AuthHelper, Chain, MockAuthHelper, SessionFacade, UserProfile};

/// Example: Session facade lifecycle
///
/// This example demonstrates the full observable flow:
/// 1. Construct the facade with a helper factory
/// 2. Initialize (helper bootstrap + cached-session check)
/// 3. Login and observe the published state
/// 4. Query the private key and user profile
/// 5. Logout
///
/// In production, implement `AuthHelper` over your SDK handle
/// (e.g. Web3Auth) and pass that factory instead of the mock.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Wallet Session Facade Example ===\n");

    let facade = SessionFacade::new(|| {
        let profile = UserProfile {
            email: Some("demo@example.com".to_string()),
            name: Some("Demo User".to_string()),
            profile_image: None,
            verifier: "torus".to_string(),
            verifier_id: "demo@example.com".to_string(),
            type_of_login: "google".to_string(),
        };
        Arc::new(
            MockAuthHelper::new()
                .with_private_key(Chain::Solana, "4fWh1demo-key")
                .with_profile(profile),
        ) as Arc<dyn AuthHelper>
    });
    let mut updates = facade.subscribe();
    println!("✓ Facade created, status: {:?}", facade.state().status);

    if facade.initialize().await.is_err() {
        eprintln!("initialize task panicked");
        return;
    }
    println!("✓ Initialized, status: {:?}", facade.state().status);

    // Fire-and-forget: the UI would react to the watch channel instead
    // of awaiting the handle. Here we await so the demo stays ordered.
    if facade.login().await.is_err() {
        eprintln!("login task panicked");
        return;
    }
    if updates.changed().await.is_ok() {
        let state = updates.borrow_and_update().clone();
        println!("✓ Login observed, authenticated: {}", state.is_authenticated());
    }

    match facade.private_key(Chain::Solana) {
        Ok(key) => println!("✓ Solana private key: {key}"),
        Err(e) => eprintln!("private key unavailable: {e}"),
    }

    match facade.user_info() {
        Ok(profile) => println!("✓ Logged in as: {:?}", profile.name),
        Err(e) => eprintln!("profile unavailable: {e}"),
    }

    if facade.logout().await.is_err() {
        eprintln!("logout task panicked");
        return;
    }
    println!("✓ Logged out, status: {:?}", facade.state().status);
}
