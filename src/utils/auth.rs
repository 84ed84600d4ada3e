use chrono::{DateTime, Utc};
use jsonwebtoken::{self, EncodingKey, Header};

use crate::core::config::TokenConfig;
use crate::core::error::{ConfigError, Error};
use crate::types::Claims;

/// Mint an access token shaped like the ones the auth-service issues.
pub(crate) fn encode_jwt(
    user_id: i64,
    username: &str,
    role: &str,
    config: &TokenConfig,
) -> Result<String, Error> {
    encode_jwt_at(user_id, username, role, config, Utc::now())
}

pub(crate) fn encode_jwt_at(
    user_id: i64,
    username: &str,
    role: &str,
    config: &TokenConfig,
    now: DateTime<Utc>,
) -> Result<String, Error> {
    if username.is_empty() {
        return Err(Error::InvalidUsername);
    }

    let iat = now.timestamp();
    let exp = iat
        .checked_add(config.expiration_seconds)
        .ok_or(ConfigError::InvalidExpiration(config.expiration_seconds))?;

    let claims = Claims {
        sub: username.to_owned(),
        user_id,
        role: role.to_owned(),
        authorities: Vec::new(),
        iat,
        exp,
    };

    let token = jsonwebtoken::encode(
        &Header::new(config.algorithm.into()),
        &claims,
        &EncodingKey::from_secret(&config.secret),
    )?;

    tracing::debug!(user_id, role, exp, "signed token for {}", username);

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::user::default_identities;
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
    use chrono::{Duration, TimeZone};
    use jsonwebtoken::errors::ErrorKind;
    use jsonwebtoken::{Algorithm, DecodingKey, Validation};
    use serde_json::{Value, json};

    fn verify(token: &str, secret: &[u8]) -> jsonwebtoken::errors::Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        jsonwebtoken::decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
            .map(|data| data.claims)
    }

    fn segment(token: &str, index: usize) -> Value {
        let part = token.split('.').nth(index).unwrap();
        serde_json::from_slice(&URL_SAFE_NO_PAD.decode(part).unwrap()).unwrap()
    }

    #[test]
    fn test_token_has_three_segments() {
        let config = TokenConfig::default();

        for identity in default_identities() {
            let token =
                encode_jwt(identity.id, &identity.username, &identity.role, &config).unwrap();

            assert_eq!(token.matches('.').count(), 2);
            assert!(token.split('.').all(|part| !part.is_empty()));
            assert!(!token.contains('='));
        }
    }

    #[test]
    fn test_header_is_hs256() {
        let token = encode_jwt(5, "test_admin_001", "ADMIN", &TokenConfig::default()).unwrap();

        assert_eq!(segment(&token, 0), json!({"typ": "JWT", "alg": "HS256"}));
    }

    #[test]
    fn test_payload_reproduces_identity() {
        let config = TokenConfig::default();

        for identity in default_identities() {
            let token =
                encode_jwt(identity.id, &identity.username, &identity.role, &config).unwrap();
            let payload = segment(&token, 1);

            assert_eq!(payload["sub"], json!(identity.username));
            assert_eq!(payload["userId"], json!(identity.id));
            assert_eq!(payload["role"], json!(identity.role));
            assert_eq!(payload["authorities"], json!([]));

            let iat = payload["iat"].as_i64().unwrap();
            let exp = payload["exp"].as_i64().unwrap();
            assert_eq!(exp - iat, 3600);
        }
    }

    #[test]
    fn test_customer_token_end_to_end() {
        let now = Utc::now();
        let token = encode_jwt_at(
            4,
            "test_customer_001",
            "CUSTOMER",
            &TokenConfig::default(),
            now,
        )
        .unwrap();

        assert_eq!(
            segment(&token, 1),
            json!({
                "sub": "test_customer_001",
                "userId": 4,
                "role": "CUSTOMER",
                "authorities": [],
                "iat": now.timestamp(),
                "exp": now.timestamp() + 3600,
            })
        );
    }

    #[test]
    fn test_iat_is_current_time() {
        let before = Utc::now().timestamp();
        let token = encode_jwt(1, "agustin", "CUSTOMER", &TokenConfig::default()).unwrap();
        let after = Utc::now().timestamp();

        let iat = segment(&token, 1)["iat"].as_i64().unwrap();
        assert!(before <= iat && iat <= after);
    }

    #[test]
    fn test_verifies_with_same_secret_only() {
        let config = TokenConfig::default();
        let token = encode_jwt(6, "test_customer_002", "CUSTOMER", &config).unwrap();

        let claims = verify(&token, &config.secret).unwrap();
        assert_eq!(claims.sub, "test_customer_002");
        assert_eq!(claims.user_id, 6);
        assert!(claims.authorities.is_empty());

        let err = verify(&token, b"mySecretKey123456789PackedGoAuth2025VerySecureKeX").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));

        let err = verify(&token, b"").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn test_tokens_at_different_instants() {
        let config = TokenConfig::default();
        let first_at = Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap();
        let second_at = first_at + Duration::seconds(1);

        let first = encode_jwt_at(7, "test_admin_002", "ADMIN", &config, first_at).unwrap();
        let second = encode_jwt_at(7, "test_admin_002", "ADMIN", &config, second_at).unwrap();
        assert_ne!(first, second);

        let first = verify(&first, &config.secret).unwrap();
        let second = verify(&second, &config.secret).unwrap();
        assert_eq!(first.iat, first_at.timestamp());
        assert_eq!(second.iat, first.iat + 1);
        assert_eq!(second.exp, first.exp + 1);
    }

    #[test]
    fn test_role_is_not_validated() {
        let token = encode_jwt(9, "guest", "not-a-role", &TokenConfig::default()).unwrap();
        assert_eq!(segment(&token, 1)["role"], json!("not-a-role"));
    }

    #[test]
    fn test_custom_config() {
        let config = TokenConfig {
            secret: b"local-only".to_vec(),
            expiration_seconds: 90,
            ..TokenConfig::default()
        };
        let token = encode_jwt(5, "test_admin_001", "ADMIN", &config).unwrap();

        let claims = verify(&token, b"local-only").unwrap();
        assert_eq!(claims.exp - claims.iat, 90);
        assert!(verify(&token, TokenConfig::default().secret.as_slice()).is_err());
    }

    #[test]
    fn test_rejects_overflowing_expiration() {
        let config = TokenConfig {
            expiration_seconds: i64::MAX,
            ..TokenConfig::default()
        };

        let result = encode_jwt(1, "agustin", "CUSTOMER", &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidExpiration(i64::MAX)))
        ));
    }

    #[test]
    fn test_rejects_empty_username() {
        let result = encode_jwt(1, "", "CUSTOMER", &TokenConfig::default());
        assert!(matches!(result, Err(Error::InvalidUsername)));
    }
}
