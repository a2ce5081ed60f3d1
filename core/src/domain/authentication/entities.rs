use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::authentication::value_objects::{Identity, IdentityClaims};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaim {
    pub fn new(claims: IdentityClaims, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            email: claims.email,
            name: claims.name,
            photo: claims.photo,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}

impl From<JwtClaim> for Identity {
    fn from(claim: JwtClaim) -> Self {
        Identity {
            email: claim.email,
            name: claim.name,
            photo: claim.photo,
        }
    }
}

/// A signed session token and the moment it stops being accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jwt {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
