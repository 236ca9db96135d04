//! Property records: addresses with optional map coordinates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::any_field_matches;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub tipo: String,
    pub descripcion: String,
    pub direccion: String,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub foto: Option<String>,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Coordinates for the map marker, when the record has been geocoded.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitud, self.longitud) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    pub fn matches_query(&self, query: &str) -> bool {
        any_field_matches(
            &[
                Some(&self.tipo),
                Some(&self.descripcion),
                Some(&self.direccion),
            ],
            query,
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub tipo: String,
    pub descripcion: String,
    pub direccion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitud: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitud: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Server-side search parameters for `GET /properties/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
}
