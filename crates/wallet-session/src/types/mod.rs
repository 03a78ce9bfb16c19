/*
[INPUT]:  Session state and profile schema requirements
[OUTPUT]: Typed session/profile definitions for the facade and its observers
[POS]:    Data layer - type definitions shared across the crate
[UPDATE]: When session state or profile schema changes
*/

pub mod enums;
pub mod models;

pub use enums::{Chain, SessionStatus};
pub use models::{SessionState, UserProfile};
