#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid base64 secret: {0}")]
    InvalidSecret(#[from] base64::DecodeError),
    #[error("Secret must not be empty")]
    EmptySecret,
    #[error("Invalid expiration: {0} seconds")]
    InvalidExpiration(i64),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Invalid username")]
    InvalidUsername,
}
