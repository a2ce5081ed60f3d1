use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims a caller asks to have signed into a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentityClaims {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Caller identity recovered from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
}

impl Identity {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn owns(&self, email: &str) -> bool {
        self.email == email
    }
}
