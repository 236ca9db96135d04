//! Location records: named points of interest with mandatory coordinates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::any_field_matches;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub nombre: String,
    pub descripcion: String,
    pub tipo: String,
    pub latitud: f64,
    pub longitud: f64,
    pub foto: Option<String>,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitud, self.longitud)
    }

    pub fn matches_query(&self, query: &str) -> bool {
        any_field_matches(
            &[
                Some(&self.nombre),
                Some(&self.descripcion),
                Some(&self.tipo),
            ],
            query,
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    pub nombre: String,
    pub descripcion: String,
    pub tipo: String,
    pub latitud: f64,
    pub longitud: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Server-side search parameters for `GET /locations/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_location_serializes_coordinates() {
        let location = NewLocation {
            nombre: "Puesto Norte".to_string(),
            descripcion: "Retén en la entrada norte".to_string(),
            tipo: "Retén".to_string(),
            latitud: 10.0,
            longitud: -84.2,
            observaciones: None,
        };
        let value = serde_json::to_value(&location).unwrap();
        assert_eq!(value["latitud"], 10.0);
        assert_eq!(value["longitud"], -84.2);
        assert!(value.get("observaciones").is_none());
    }
}
