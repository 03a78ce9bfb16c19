/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public wallet-session crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod error;
pub mod helper;
pub mod session;
pub mod types;

// Re-export commonly used types from error
pub use error::{Result, SessionError};

// Re-export the helper boundary
pub use helper::{AuthHelper, MockAuthHelper};

// Re-export the facade
pub use session::SessionFacade;

// Re-export all types
pub use types::*;
