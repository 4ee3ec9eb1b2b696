//! Response branching shared by every endpoint.
//!
//! The backend signals failure in-band: any JSON object carrying
//! `"success": false` is an error regardless of the HTTP status, and its
//! `message` is what the user should see. Everything else is decoded into the
//! type the caller expects.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::ApiError;
use store::User;

const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Decode a response body, branching on the `success` flag first.
pub fn parse_reply<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let ok_status = (200..300).contains(&status);

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if ok_status => return Err(ApiError::Decode(e)),
        Err(_) => {
            let text = body.trim();
            return Err(ApiError::Status {
                status,
                message: if text.is_empty() {
                    format!("Request failed with status {status}")
                } else {
                    text.to_string()
                },
            });
        }
    };

    if value.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError::Rejected(message_of(&value)));
    }

    if !ok_status {
        return Err(ApiError::Status {
            status,
            message: message_of(&value),
        });
    }

    Ok(serde_json::from_value(value)?)
}

fn message_of(value: &Value) -> String {
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_MESSAGE)
        .to_string()
}

/// `/api/user/update/:id` has answered both `{"user": {...}}` and the bare user.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum UserEnvelope {
    Wrapped { user: User },
    Bare(User),
}

impl UserEnvelope {
    pub(crate) fn into_user(self) -> User {
        match self {
            UserEnvelope::Wrapped { user } => user,
            UserEnvelope::Bare(user) => user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Listing;

    #[test]
    fn test_success_false_is_an_error_even_with_200() {
        let err = parse_reply::<Listing>(
            200,
            r#"{"success": false, "statusCode": 401, "message": "Unauthorized"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Rejected(ref m) if m == "Unauthorized"));
        assert_eq!(err.to_string(), "Unauthorized");
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        let err = parse_reply::<Value>(500, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err.to_string(), "Something went wrong");
    }

    #[test]
    fn test_plain_error_status() {
        let err = parse_reply::<Value>(404, r#"{"message": "Listing not found!"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
        assert_eq!(err.to_string(), "Listing not found!");

        let err = parse_reply::<Value>(502, "Bad Gateway").unwrap_err();
        assert_eq!(err.to_string(), "Bad Gateway");

        let err = parse_reply::<Value>(503, "").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 503");
    }

    #[test]
    fn test_success_decodes_payload() {
        let listing: Listing =
            parse_reply(201, r#"{"_id": "abc", "name": "Flat", "success": true}"#).unwrap();
        assert_eq!(listing.id, "abc");

        let listings: Vec<Listing> = parse_reply(200, r#"[{"_id": "1"}, {"_id": "2"}]"#).unwrap();
        assert_eq!(listings.len(), 2);
    }

    #[test]
    fn test_garbage_with_ok_status_is_decode_error() {
        let err = parse_reply::<Listing>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_user_envelope_shapes() {
        let wrapped: UserEnvelope =
            serde_json::from_str(r#"{"user": {"_id": "u1", "username": "ada"}}"#).unwrap();
        assert_eq!(wrapped.into_user().username, "ada");

        let bare: UserEnvelope =
            serde_json::from_str(r#"{"_id": "u2", "username": "bob"}"#).unwrap();
        assert_eq!(bare.into_user().id, "u2");
    }
}
