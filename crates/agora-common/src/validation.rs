//! Input validation utilities.
//!
//! Centralized validation helpers used across API routes.

use validator::Validate;

use crate::error::AgoraError;

/// Validate a request body, returning an AgoraError::Validation on failure.
pub fn validate_request<T: Validate>(body: &T) -> Result<(), AgoraError> {
    body.validate().map_err(|e| AgoraError::Validation {
        message: format_validation_errors(e),
    })
}

/// Format validation errors into a human-readable string.
fn format_validation_errors(errors: validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for '{field}'"))
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UpsertUserRequest;

    #[test]
    fn validation_errors_become_agora_errors() {
        let req = UpsertUserRequest {
            wallet_address: "not-a-wallet".into(),
            username: "bob".into(),
            profile_picture_url: None,
            is_verified: false,
        };
        let err = validate_request(&req).unwrap_err();
        match err {
            AgoraError::Validation { message } => {
                assert!(message.contains("Invalid wallet address"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn valid_requests_pass() {
        let req = UpsertUserRequest {
            wallet_address: "0xABC".into(),
            username: "bob".into(),
            profile_picture_url: Some("https://example.com/pfp.png".into()),
            is_verified: true,
        };
        assert!(validate_request(&req).is_ok());
    }
}
