use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use tracing;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        is_verified: bool,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: token_type.to_string(),
            is_verified,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    /// Generate an access token
    fn generate_access_token(
        &self,
        user_id: Uuid,
        is_verified: bool,
    ) -> Result<String, TokenError> {
        let expiry_seconds = self.config.access_token_expiry;
        self.generate_token(user_id, is_verified, "access", expiry_seconds)
    }

    /// Verify and decode a token
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Unknown error");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::support::load_test_env;

    use super::*;

    // Helper function to create a test JwtTokenService
    fn create_test_jwt_service() -> JwtTokenService {
        let config = JwtConfig {
            secret_key: std::env::var("TEST_JWT_SECRET")
                .unwrap_or_else(|_| "FAKE_JWT_SECRET_DO_NOT_USE".to_string()),
            access_token_expiry: 3600, // 1 hour
        };
        JwtTokenService::new(config)
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let jwt_service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        // Generate token
        let token = jwt_service
            .generate_access_token(user_id, true)
            .expect("Token should be generated");

        // Verify token
        let claims = jwt_service.verify_token(&token);
        assert!(claims.is_ok(), "Token should be valid");
        let claims = claims.unwrap();
        assert_eq!(claims.sub, user_id, "User ID should match");
        assert_eq!(claims.token_type, "access");
        assert_eq!(claims.is_verified, true);
    }

    #[test]
    fn test_generate_and_verify_access_token_unverified_user() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        // Generate token for unverified user
        let token = service
            .generate_access_token(user_id, false)
            .expect("Token should be generated");

        // Verify token
        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.is_verified, false);
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = create_test_jwt_service();

        // Invalid token
        let invalid_token = "invalid.jwt.token";
        let result = service.verify_token(invalid_token);

        assert!(result.is_err(), "Invalid token should fail verification");
        assert!(matches!(result.unwrap_err(), TokenError::MalformedToken));
    }

    #[test]
    fn test_malformed_token_base64_error() {
        let service = create_test_jwt_service();

        // Token with invalid base64
        let result = service.verify_token("not.a.valid@base64.token!");

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), TokenError::MalformedToken));
    }

    #[test]
    fn test_token_with_invalid_json() {
        use base64::{engine::general_purpose, Engine as _};
        let service = create_test_jwt_service();

        // Create a token with invalid JSON in payload
        let header = general_purpose::STANDARD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = general_purpose::STANDARD.encode("not valid json");
        let invalid_token = format!("{}.{}.fakesignature", header, payload);

        let result = service.verify_token(&invalid_token);
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token() {
        let config = JwtConfig {
            secret_key: std::env::var("TEST_JWT_SECRET")
                .unwrap_or_else(|_| "FAKE_JWT_SECRET_DO_NOT_USE".to_string()),
            access_token_expiry: -35, // Already expired (beyond leeway)
        };

        let jwt_service = JwtTokenService::new(config);
        let user_id = Uuid::new_v4();

        // Generate token (will be immediately expired)
        let token = jwt_service
            .generate_access_token(user_id, true)
            .expect("Token should be generated");

        // Verify expired token (no sleep needed)
        let result = jwt_service.verify_token(&token);

        assert!(result.is_err(), "Expired token should be invalid");
        assert!(matches!(result.unwrap_err(), TokenError::TokenExpired));
    }

    #[test]
    fn test_invalid_signature() {
        load_test_env();

        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = service.generate_access_token(user_id, true).unwrap();

        // Guaranteed to differ from the signing secret, whatever the env says
        let different_secret = format!("{}_DIFFERENT", service.config.secret_key);

        let different_service = JwtTokenService::new(JwtConfig {
            secret_key: different_secret,
            access_token_expiry: 3600,
        });

        let result = different_service.verify_token(&token);

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), TokenError::InvalidSignature));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let mut token = service.generate_access_token(user_id, true).unwrap();
        token.push('x');

        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn test_jwt_claims_has_required_fields() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = service.generate_access_token(user_id, true).unwrap();
        let claims = service.verify_token(&token).unwrap();

        // Verify all required fields are present
        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > 0);
        assert!(claims.iat > 0);
        assert!(claims.nbf > 0);
        assert!(!claims.token_type.is_empty());
    }

    #[test]
    fn test_token_expiry_is_in_future() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = service.generate_access_token(user_id, true).unwrap();
        let claims = service.verify_token(&token).unwrap();

        let now = Utc::now().timestamp();
        assert!(claims.exp > now, "Expiry should be in the future");
        assert!(claims.iat <= now, "Issued at should be now or in the past");
        assert!(claims.nbf <= now, "Not before should be now or in the past");
    }

    #[test]
    fn test_jwt_error_display() {
        assert_eq!(format!("{}", TokenError::TokenExpired), "Token has expired");
        assert_eq!(
            format!("{}", TokenError::TokenNotYetValid),
            "Token is not yet valid"
        );
        assert_eq!(
            format!("{}", TokenError::InvalidTokenType("access".to_string())),
            "Invalid token type, expected: access"
        );
        assert_eq!(
            format!("{}", TokenError::InvalidSignature),
            "Invalid token signature"
        );
        assert_eq!(format!("{}", TokenError::MalformedToken), "Malformed token");
        assert_eq!(
            format!("{}", TokenError::EncodingError("test error".to_string())),
            "Token encoding error: test error"
        );
    }

    #[test]
    fn test_jwt_error_is_error_trait() {
        let error: Box<dyn std::error::Error> = Box::new(TokenError::TokenExpired);
        assert_eq!(error.to_string(), "Token has expired");
    }

    #[test]
    fn test_jwt_service_debug() {
        let service = create_test_jwt_service();
        let debug_str = format!("{:?}", service);
        assert!(debug_str.contains("JwtTokenService"));
    }

    #[test]
    fn test_jwt_service_clone() {
        let service = create_test_jwt_service();
        let cloned_service = service.clone();

        let user_id = Uuid::new_v4();
        let token1 = service.generate_access_token(user_id, true).unwrap();
        let token2 = cloned_service.generate_access_token(user_id, true).unwrap();

        // Both services should produce valid tokens
        assert!(service.verify_token(&token1).is_ok());
        assert!(cloned_service.verify_token(&token2).is_ok());
    }
}
