// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Body deserialization failures are reported as VALIDATION_ERROR carrying
/// the message the failing constructor produced.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = validation_message(&err.to_string());
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Serde wraps custom messages as
/// `Json deserialize error: <message> at line N column M`. Clients get the
/// message alone.
fn validation_message(raw: &str) -> String {
    let body = raw.strip_prefix("Json deserialize error: ").unwrap_or(raw);
    match body.rfind(" at line ") {
        Some(idx) => body[..idx].to_string(),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_unwraps_serde_framing() {
        assert_eq!(
            validation_message(
                "Json deserialize error: ID number must be exactly 12 digits at line 1 column 42"
            ),
            "ID number must be exactly 12 digits"
        );
    }

    #[test]
    fn test_validation_message_passes_plain_errors_through() {
        assert_eq!(validation_message("Content type error"), "Content type error");
    }
}
