use serde::{Deserialize, Serialize};

pub(crate) type Username = String;

/// A test user the report mints a token for.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Identity {
    pub(crate) id: i64,
    pub(crate) username: Username,
    pub(crate) role: String,
    pub(crate) description: String,
}

impl Identity {
    pub(crate) fn new(id: i64, username: &str, role: &str, description: &str) -> Self {
        Self {
            id,
            username: username.to_owned(),
            role: role.to_owned(),
            description: description.to_owned(),
        }
    }

    /// Shell variable the token is exported under, e.g. `TOKEN_CUSTOMER_4`.
    pub(crate) fn env_var(&self) -> String {
        format!("TOKEN_{}_{}", self.role, self.id)
    }
}

/// Users seeded in the auth-service test database.
pub(crate) fn default_identities() -> Vec<Identity> {
    vec![
        Identity::new(1, "agustin", "CUSTOMER", "Real customer (Agustin)"),
        Identity::new(4, "test_customer_001", "CUSTOMER", "Test Customer 001"),
        Identity::new(6, "test_customer_002", "CUSTOMER", "Test Customer 002"),
        Identity::new(5, "test_admin_001", "ADMIN", "Test Admin 001"),
        Identity::new(7, "test_admin_002", "ADMIN", "Test Admin 002"),
    ]
}

/// Payload of the access tokens issued by the auth-service.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Claims {
    pub(crate) sub: Username,
    #[serde(rename = "userId")]
    pub(crate) user_id: i64,
    pub(crate) role: String,
    pub(crate) authorities: Vec<String>,
    pub(crate) iat: i64,
    pub(crate) exp: i64,
}
