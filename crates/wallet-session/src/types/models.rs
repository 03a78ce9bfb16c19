/*
[INPUT]:  Helper SDK schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - published session state and user profile
[UPDATE]: When published fields or the profile schema change
*/

use serde::{Deserialize, Serialize};

use super::enums::SessionStatus;

/// Snapshot published to observers through the facade's watch channel.
///
/// The error field holds the most recent failed login/logout description;
/// it is never `Some("")`, so presence of a value is the error flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub status: SessionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SessionState {
    /// True iff the last completed operation left an active session
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// True iff a login/logout failure has been published and not cleared
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// User profile returned by the helper SDK.
///
/// Field names follow the Web3Auth-style camelCase wire format; the
/// facade fetches this on demand and never caches it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub verifier: String,
    pub verifier_id: String,
    pub type_of_login: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_clean() {
        let state = SessionState::default();
        assert_eq!(state.status, SessionStatus::Uninitialized);
        assert!(!state.is_authenticated());
        assert!(!state.has_error());
    }

    #[test]
    fn test_profile_camel_case_wire_format() {
        let json = serde_json::json!({
            "email": "ayush@example.com",
            "name": "Ayush",
            "profileImage": "https://example.com/avatar.png",
            "verifier": "torus",
            "verifierId": "ayush@example.com",
            "typeOfLogin": "google",
        });

        let profile: UserProfile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.verifier_id, "ayush@example.com");
        assert_eq!(profile.type_of_login, "google");

        let back = serde_json::to_value(&profile).unwrap();
        assert!(back.get("verifierId").is_some());
        assert!(back.get("verifier_id").is_none());
    }

    #[test]
    fn test_profile_optional_fields_may_be_missing() {
        let json = serde_json::json!({
            "verifier": "torus",
            "verifierId": "user-1",
            "typeOfLogin": "jwt",
        });

        let profile: UserProfile = serde_json::from_value(json).unwrap();
        assert!(profile.email.is_none());
        assert!(profile.profile_image.is_none());
    }
}
