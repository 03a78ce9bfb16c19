/*
[INPUT]:  Helper SDK schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - chain and session lifecycle enums
[UPDATE]: When supported chains or lifecycle states change
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Solana,
    Evm,
}

/// Session lifecycle as observed through the facade.
///
/// `InitFailed` surfaces helper bootstrap failures that would otherwise
/// vanish inside the fire-and-forget initialize task; observers can treat
/// it as a terminal "retry initialize" state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Uninitialized,
    InitFailed,
    Unauthenticated,
    Authenticated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Chain::Solana).unwrap(), "\"solana\"");
        assert_eq!(serde_json::to_string(&Chain::Evm).unwrap(), "\"evm\"");
    }

    #[test]
    fn test_status_default_is_uninitialized() {
        assert_eq!(SessionStatus::default(), SessionStatus::Uninitialized);
    }
}
