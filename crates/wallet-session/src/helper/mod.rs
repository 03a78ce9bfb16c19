/*
[INPUT]:  External authentication SDK capabilities
[OUTPUT]: Helper boundary trait and mock implementation
[POS]:    Helper layer - contract with the external auth SDK
[UPDATE]: When the SDK contract gains or loses capabilities
*/

pub mod contract;
pub mod mock;

pub use contract::AuthHelper;
pub use mock::MockAuthHelper;
