//! Vehicle records, identified by license plate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::any_field_matches;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: i64,
    pub placa: String,
    pub marca: String,
    pub modelo: String,
    pub color: String,
    /// Model year; the API stores it as a string.
    pub anno: String,
    pub tipo: Option<String>,
    pub foto: Option<String>,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.marca, self.modelo, self.placa)
    }

    pub fn matches_query(&self, query: &str) -> bool {
        any_field_matches(
            &[
                Some(&self.placa),
                Some(&self.marca),
                Some(&self.modelo),
                Some(&self.color),
            ],
            query,
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVehicle {
    pub placa: String,
    pub marca: String,
    pub modelo: String,
    pub color: String,
    pub anno: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Server-side search parameters for `GET /vehicles/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modelo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
