//! Multipart form construction for record create/update calls.
//!
//! The backend accepts record payloads as `multipart/form-data` so the
//! optional photo can ride along with the textual fields in one request.
//! Every record kind uses the same shape: one text part per field, plus a
//! `photo` part when an image is attached.

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

use super::{ApiError, Result};

/// Form field name for the attached image.
const PHOTO_FIELD: &str = "photo";

/// An image attachment for a record.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    /// Build an upload from a file name and raw bytes, inferring the MIME
    /// type from the extension. Unknown extensions fall back to JPEG,
    /// which is what the capture flow produces.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = match file_name.rsplit('.').next() {
            Some(ext) if !ext.is_empty() && !ext.contains('/') => {
                format!("image/{}", ext.to_lowercase())
            }
            _ => "image/jpeg".to_string(),
        };
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }
}

/// Flatten a serialized payload into (name, value) text fields.
/// Nulls are skipped; strings are sent verbatim; everything else uses its
/// JSON rendering (numbers, booleans).
fn text_fields<T: Serialize>(data: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(data)
        .map_err(|e| ApiError::Validation(format!("Unserializable form payload: {e}")))?;

    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(ApiError::Validation(format!(
                "Form payload must be an object, got {other}"
            )))
        }
    };

    let mut fields = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => continue,
            Value::String(s) => fields.push((key, s)),
            other => fields.push((key, other.to_string())),
        }
    }
    Ok(fields)
}

/// Build a multipart form from a record payload and an optional photo.
pub fn form_from<T: Serialize>(data: &T, photo: Option<PhotoUpload>) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in text_fields(data)? {
        form = form.text(name, value);
    }

    if let Some(photo) = photo {
        let part = Part::bytes(photo.bytes)
            .file_name(photo.file_name)
            .mime_str(&photo.mime_type)
            .map_err(|e| ApiError::Validation(format!("Invalid photo MIME type: {e}")))?;
        form = form.part(PHOTO_FIELD, part);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Payload {
        nombre: String,
        latitud: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        alias: Option<String>,
        observaciones: Option<String>,
    }

    #[test]
    fn test_text_fields_flattening() {
        let payload = Payload {
            nombre: "Comisaría Central".to_string(),
            latitud: 9.93,
            alias: None,
            observaciones: None,
        };
        let mut fields = text_fields(&payload).unwrap();
        fields.sort();

        // Nulls dropped whether skipped by serde or serialized as null
        assert_eq!(
            fields,
            vec![
                ("latitud".to_string(), "9.93".to_string()),
                ("nombre".to_string(), "Comisaría Central".to_string()),
            ]
        );
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let result = text_fields(&vec![1, 2, 3]);
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_mime_inferred_from_extension() {
        let photo = PhotoUpload::new("scene.PNG", vec![0u8; 4]);
        assert_eq!(photo.mime_type, "image/png");

        let photo = PhotoUpload::new("no_extension", vec![0u8; 4]);
        assert_eq!(photo.mime_type, "image/jpeg");
    }

    #[test]
    fn test_form_builds_with_photo() {
        let payload = Payload {
            nombre: "x".to_string(),
            latitud: 0.0,
            alias: Some("y".to_string()),
            observaciones: None,
        };
        let photo = PhotoUpload::new("photo.jpg", vec![1, 2, 3]);
        assert!(form_from(&payload, Some(photo)).is_ok());
    }
}
