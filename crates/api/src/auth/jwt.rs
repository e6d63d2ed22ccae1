//! Admin token generation and validation.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. There is a
//! single admin principal, so the subject is fixed.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject of every admin token.
pub const ADMIN_SUBJECT: &str = "admin";
/// Role carried by admin tokens.
pub const ROLE_ADMIN: &str = "admin";

/// Default token lifetime in minutes (12 hours).
const DEFAULT_EXPIRY_MINS: i64 = 720;

/// JWT claims embedded in every admin token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Configuration for token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    pub expiry_mins: i64,
}

impl JwtConfig {
    /// Load JWT configuration through `lookup`.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is missing or empty, or if `JWT_EXPIRY_MINS`
    /// does not parse.
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .expect("JWT_SECRET must be set when ADMIN_PASSWORD_HASH is set");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_mins: i64 = lookup("JWT_EXPIRY_MINS")
            .unwrap_or_else(|| DEFAULT_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            expiry_mins,
        }
    }
}

/// Generate an admin token. Returns the encoded token and its claims.
pub fn generate_admin_token(
    config: &JwtConfig,
) -> Result<(String, Claims), jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: ADMIN_SUBJECT.to_string(),
        role: ROLE_ADMIN.to_string(),
        exp: now + config.expiry_mins * 60,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    let token = encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;
    Ok((token, claims))
}

/// Validate and decode a token, returning the embedded [`Claims`].
///
/// Checks the signature and expiry.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_mins: 15,
        }
    }

    #[test]
    fn generated_token_validates() {
        let config = test_config();
        let (token, issued) = generate_admin_token(&config).unwrap();

        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.sub, ADMIN_SUBJECT);
        assert_eq!(claims.role, ROLE_ADMIN);
        assert_eq!(claims.exp, issued.exp);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn expired_token_fails() {
        let config = test_config();
        // Well past the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: ADMIN_SUBJECT.to_string(),
            role: ROLE_ADMIN.to_string(),
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn token_from_other_secret_fails() {
        let (token, _) = generate_admin_token(&JwtConfig {
            secret: "secret-alpha".to_string(),
            expiry_mins: 15,
        })
        .unwrap();

        let other = JwtConfig {
            secret: "secret-bravo".to_string(),
            expiry_mins: 15,
        };
        assert!(validate_token(&token, &other).is_err());
    }
}
