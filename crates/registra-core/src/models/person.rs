//! Person records: individuals identified by their cédula.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::any_field_matches;

/// A person record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub cedula: String,
    pub nombre: String,
    pub apellidos: String,
    pub nacionalidad: String,
    pub alias: Option<String>,
    pub genero: Option<String>,
    pub fecha_nacimiento: Option<String>,
    pub foto: Option<String>,
    pub observaciones: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellidos)
    }

    /// Client-side list filter: matches the card text the way the list
    /// screens search it.
    pub fn matches_query(&self, query: &str) -> bool {
        any_field_matches(
            &[
                Some(&self.cedula),
                Some(&self.nombre),
                Some(&self.apellidos),
                self.alias.as_deref(),
            ],
            query,
        )
    }
}

/// Payload for creating or updating a person. Sent as multipart text
/// fields; `None` fields are omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub cedula: String,
    pub nombre: String,
    pub apellidos: String,
    pub nacionalidad: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genero: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Server-side search parameters for `GET /people/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cedula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apellidos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Person {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "cedula": "1-2345-6789",
            "nombre": "Juan",
            "apellidos": "Pérez Mora",
            "nacionalidad": "CR",
            "alias": "El Rápido",
            "genero": null,
            "fechaNacimiento": "1990-04-12",
            "foto": null,
            "observaciones": null,
            "createdAt": "2024-05-01T12:00:00.000Z",
            "updatedAt": "2024-05-02T08:30:00.000Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_wire_shape_parses() {
        let person = sample();
        assert_eq!(person.fecha_nacimiento.as_deref(), Some("1990-04-12"));
        assert_eq!(person.full_name(), "Juan Pérez Mora");
    }

    #[test]
    fn test_matches_query_across_fields() {
        let person = sample();
        assert!(person.matches_query("pérez"));
        assert!(person.matches_query("2345"));
        assert!(person.matches_query("rápido"));
        assert!(!person.matches_query("gonzález"));
    }
}
