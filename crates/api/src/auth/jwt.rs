//! JWT access/refresh token issuance and validation.
//!
//! Both token kinds are signed JWTs over the same [`Claims`] payload; the
//! `typ` claim keeps a refresh token from being accepted as an access token
//! and vice versa. Tokens are stateless: there is no revocation list.

use std::str::FromStr;

use jobboard_core::roles::has_any_role;
use jobboard_core::types::DbId;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which of the two token kinds a JWT is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims embedded in every token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    pub email: String,
    pub name: String,
    /// Role slugs held by the user when the token was issued.
    pub roles: Vec<String>,
    pub typ: TokenType,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Access + refresh token pair returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// The identity a token pair is issued for.
#[derive(Debug, Clone, Copy)]
pub struct TokenSubject<'a> {
    pub user_id: DbId,
    pub email: &'a str,
    pub name: &'a str,
    pub roles: &'a [String],
}

/// Why a bearer token was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Missing Authorization header")]
    Missing,
    #[error("Invalid Authorization format. Expected: Bearer <token>")]
    WrongScheme,
    #[error("Token has expired")]
    Expired,
    #[error("Invalid token")]
    Malformed,
    #[error("Wrong token type")]
    WrongType,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret used to sign and verify tokens.
    pub secret: String,
    /// One of `HS256`, `HS384`, `HS512`.
    pub algorithm: Algorithm,
    /// Access token lifetime in minutes (default: 30).
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days (default: 7).
    pub refresh_token_expiry_days: i64,
}

const DEFAULT_ALGORITHM: &str = "HS256";
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 30;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ALGORITHM`            | no       | `HS256` |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `30`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is missing or empty, if the algorithm is not an
    /// HMAC algorithm, or if an expiry does not parse to a positive number.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let algorithm_name =
            std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| DEFAULT_ALGORITHM.into());
        let algorithm = parse_algorithm(&algorithm_name)
            .unwrap_or_else(|| panic!("Unsupported JWT_ALGORITHM '{algorithm_name}'"));

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");
        assert!(access_token_expiry_mins > 0, "JWT_ACCESS_EXPIRY_MINS must be positive");

        let refresh_token_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");
        assert!(refresh_token_expiry_days > 0, "JWT_REFRESH_EXPIRY_DAYS must be positive");

        Self {
            secret,
            algorithm,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        }
    }

    fn ttl_secs(&self, typ: TokenType) -> i64 {
        match typ {
            TokenType::Access => self.access_token_expiry_mins * 60,
            TokenType::Refresh => self.refresh_token_expiry_days * 24 * 60 * 60,
        }
    }
}

/// Only the shared-secret algorithms are accepted.
pub fn parse_algorithm(name: &str) -> Option<Algorithm> {
    match Algorithm::from_str(name.trim()) {
        Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Some(alg),
        _ => None,
    }
}

/// Sign a single token of the given type for `subject`.
pub fn generate_token(
    subject: TokenSubject<'_>,
    typ: TokenType,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: subject.user_id,
        email: subject.email.to_string(),
        name: subject.name.to_string(),
        roles: subject.roles.to_vec(),
        typ,
        iat: now,
        exp: now + config.ttl_secs(typ),
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(config.algorithm),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Issue a fresh access + refresh token pair.
pub fn issue_token_pair(
    subject: TokenSubject<'_>,
    config: &JwtConfig,
) -> Result<TokenPair, jsonwebtoken::errors::Error> {
    Ok(TokenPair {
        access_token: generate_token(subject, TokenType::Access, config)?,
        refresh_token: generate_token(subject, TokenType::Refresh, config)?,
        token_type: "Bearer",
        expires_in: config.ttl_secs(TokenType::Access),
    })
}

/// Verify signature and expiry of a token and check its `typ`.
pub fn validate_token(
    token: &str,
    expected: TokenType,
    config: &JwtConfig,
) -> Result<Claims, TokenError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::new(config.algorithm),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    })?;

    if claims.typ != expected {
        return Err(TokenError::WrongType);
    }
    if claims.sub <= 0 {
        return Err(TokenError::Malformed);
    }
    Ok(claims)
}

/// Validate an `Authorization` header value carrying an access token.
pub fn validate_bearer(header: Option<&str>, config: &JwtConfig) -> Result<Claims, TokenError> {
    let header = header.ok_or(TokenError::Missing)?;
    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(TokenError::WrongScheme)?;
    validate_token(token, TokenType::Access, config)
}

/// Fail-closed decode of an access token: any failure yields `None`.
pub fn decode_claims(token: &str, config: &JwtConfig) -> Option<Claims> {
    validate_token(token, TokenType::Access, config).ok()
}

/// The user id carried by a valid access token.
pub fn extract_user_id(token: &str, config: &JwtConfig) -> Option<DbId> {
    decode_claims(token, config).map(|claims| claims.sub)
}

/// Whether the token's roles include any of `required`.
pub fn authorized_for_any(claims: &Claims, required: &[&str]) -> bool {
    has_any_role(&claims.roles, required)
}
