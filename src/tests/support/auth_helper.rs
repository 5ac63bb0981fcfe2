use actix_web::{dev::ServiceResponse, test, web};
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

pub const TEST_USER_ID: i32 = 1;

const TOKEN_PREFIX: &str = "test-token-";

/// Accepts only tokens minted by `token_for`.
pub struct StubTokenProvider;

impl StubTokenProvider {
    pub fn token_for(user_id: i32) -> String {
        format!("{}{}", TOKEN_PREFIX, user_id)
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: i32, _email: &str) -> Result<String, TokenError> {
        Ok(Self::token_for(user_id))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let user_id = token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|id| id.parse::<i32>().ok())
            .ok_or(TokenError::InvalidSignature)?;

        let now = Utc::now().timestamp();
        Ok(TokenClaims {
            sub: user_id,
            email: format!("user{}@example.com", user_id),
            iss: "test".to_string(),
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        })
    }
}

pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider);
    web::Data::new(provider)
}

pub fn bearer() -> (&'static str, String) {
    (
        "Authorization",
        format!("Bearer {}", StubTokenProvider::token_for(TEST_USER_ID)),
    )
}

pub async fn read_json(resp: ServiceResponse) -> serde_json::Value {
    test::read_body_json(resp).await
}
