use base64::{Engine as _, engine::general_purpose::STANDARD};
use config::{Config, Environment, File, Source};
use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::types::request::default_requests;
use crate::types::user::default_identities;
use crate::types::{ExampleRequest, Identity};

pub(crate) const CONFIG_FILE: &str = "packedgo-jwt";
pub(crate) const ENV_PREFIX: &str = "PACKEDGO_JWT";

/// Secret from the auth-service `.env`.
pub(crate) const DEFAULT_SECRET: &str = "mySecretKey123456789PackedGoAuth2025VerySecureKey";
/// Matches `JWT_EXPIRATION=3600000` (milliseconds) on the auth-service.
pub(crate) const DEFAULT_EXPIRATION_SECONDS: i64 = 3600;
/// Ten years.
pub(crate) const MAX_EXPIRATION_SECONDS: i64 = 10 * 365 * 24 * 3600;

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SigningAlgorithm {
    #[default]
    HS256,
}

impl From<SigningAlgorithm> for jsonwebtoken::Algorithm {
    fn from(algorithm: SigningAlgorithm) -> Self {
        match algorithm {
            SigningAlgorithm::HS256 => jsonwebtoken::Algorithm::HS256,
        }
    }
}

/// How the configured secret string turns into key bytes.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SecretEncoding {
    /// UTF-8 bytes of the string as written.
    #[default]
    Raw,
    /// Standard base64, decoded the way the auth-service decodes its key.
    Base64,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    #[serde(default = "default_secret")]
    pub(crate) secret: String,
    #[serde(default)]
    pub(crate) secret_encoding: SecretEncoding,
    #[serde(default)]
    pub(crate) algorithm: SigningAlgorithm,
    #[serde(default = "default_expiration")]
    pub(crate) expiration: i64,
    #[serde(default = "default_log_level")]
    pub(crate) log_level: String,
    #[serde(default = "default_identities")]
    pub(crate) identities: Vec<Identity>,
    #[serde(default = "default_requests")]
    pub(crate) requests: Vec<ExampleRequest>,
}

fn default_secret() -> String {
    DEFAULT_SECRET.to_owned()
}

fn default_expiration() -> i64 {
    DEFAULT_EXPIRATION_SECONDS
}

fn default_log_level() -> String {
    "warn".to_owned()
}

/// Everything the token builder needs, passed explicitly on every call.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct TokenConfig {
    pub(crate) secret: Vec<u8>,
    pub(crate) algorithm: SigningAlgorithm,
    pub(crate) expiration_seconds: i64,
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("algorithm", &self.algorithm)
            .field("expiration_seconds", &self.expiration_seconds)
            .finish()
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.as_bytes().to_vec(),
            algorithm: SigningAlgorithm::default(),
            expiration_seconds: DEFAULT_EXPIRATION_SECONDS,
        }
    }
}

impl Args {
    /// Optional `packedgo-jwt.toml` in the working directory, then
    /// `PACKEDGO_JWT_*` environment variables.
    pub(crate) fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            File::with_name(CONFIG_FILE).required(false),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Later sources win: serde defaults, then `file`, then `env`.
    pub(crate) fn load_from<F>(file: F, env: Environment) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
    {
        let config = Config::builder().add_source(file).add_source(env).build()?;

        Ok(config.try_deserialize::<Args>()?)
    }

    pub(crate) fn token_config(&self) -> Result<TokenConfig, ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        if self.expiration <= 0 || self.expiration > MAX_EXPIRATION_SECONDS {
            return Err(ConfigError::InvalidExpiration(self.expiration));
        }

        let secret = match self.secret_encoding {
            SecretEncoding::Raw => self.secret.as_bytes().to_vec(),
            SecretEncoding::Base64 => STANDARD.decode(&self.secret)?,
        };

        Ok(TokenConfig {
            secret,
            algorithm: self.algorithm,
            expiration_seconds: self.expiration,
        })
    }
}
