#[cfg(test)]
pub mod test_helpers {
    use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};

    pub fn create_test_jwt_service() -> JwtTokenService {
        let jwt_config = JwtConfig {
            secret_key: "test_secret_key_for_testing_only_32b".to_string(),
            access_token_expiry: 3600,
        };
        JwtTokenService::new(jwt_config)
    }
}
