use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum FoodStatus {
    #[default]
    Available,
    Requested,
}

impl FoodStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodStatus::Available => "Available",
            FoodStatus::Requested => "Requested",
        }
    }
}

impl fmt::Display for FoodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Stored values are constrained to the two variants by the schema.
impl From<&str> for FoodStatus {
    fn from(value: &str) -> Self {
        match value {
            "Requested" => FoodStatus::Requested,
            _ => FoodStatus::Available,
        }
    }
}

/// Descriptive fields of a donation. These are the only fields an update may touch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetails {
    pub food_name: Option<String>,
    /// Stored exactly as submitted: `5`, `"5"` and `"10 plates"` are all kept verbatim.
    #[schema(value_type = Option<Object>)]
    pub quantity: Option<Value>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub photo: Option<String>,
    pub notes: Option<String>,
}

/// Who donated the food.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    pub email: Option<String>,
    pub donator_name: Option<String>,
    pub donator_photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub details: FoodDetails,
    #[serde(flatten)]
    pub donor: Donor,
    /// `None` for records created by an update to an unknown id; those never list as available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FoodStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct FoodConfig {
    pub details: FoodDetails,
    pub donor: Donor,
    pub status: Option<FoodStatus>,
}

impl Food {
    pub fn new(config: FoodConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            details: config.details,
            donor: config.donor,
            status: Some(config.status.unwrap_or_default()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Record created by an update addressed to an id that does not exist yet.
    /// It carries the descriptive fields only: no donor and no status.
    pub fn upserted(id: Uuid, details: FoodDetails) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id,
            details,
            donor: Donor::default(),
            status: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == Some(FoodStatus::Available)
    }

    /// Overwrites the descriptive fields and reports whether anything changed.
    pub fn replace_details(&mut self, details: FoodDetails) -> bool {
        if self.details == details {
            return false;
        }

        self.details = details;
        self.updated_at = Utc::now();
        true
    }

    /// Moves an available item to `Requested`. Returns false if it was not available.
    pub fn mark_requested(&mut self) -> bool {
        if !self.is_available() {
            return false;
        }

        self.status = Some(FoodStatus::Requested);
        self.updated_at = Utc::now();
        true
    }
}
