use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct IssueTokenValidator {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub photo: Option<String>,
}
