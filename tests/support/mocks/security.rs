// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use conduit_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenSubject},
    error::ApplicationError,
    ports::security::{PasswordHasher, TokenManager},
};
use conduit_core::domain::user::UserId;

/// 検証に必ず失敗するトークン
pub const INVALID_TOKEN: &str = "forged-token";

const TOKEN_PREFIX: &str = "token-";

/// The token `FakeTokenManager` issues for a user id.
pub fn token_for(id: UserId) -> String {
    format!("{TOKEN_PREFIX}{id}")
}

/* -------------------------------- TokenManager -------------------------------- */

/// Tokens are `token-<user id>`; anything else fails verification.
#[derive(Clone, Debug, Default)]
pub struct FakeTokenManager;

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        Ok(AuthTokenDto {
            token: token_for(subject.user_id),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<TokenSubject> {
        let id = token
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|raw| raw.parse::<i64>().ok())
            .and_then(|raw| UserId::new(raw).ok())
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))?;
        Ok(TokenSubject {
            user_id: id,
            username: String::new(),
        })
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// Reversible "hash" so tests can run without Argon2's cost.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash.strip_prefix("plain:") == Some(password) {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
