//! The authenticated user's profile.
//!
//! The client passes this record through unmodified; nothing in the core
//! interprets its fields beyond serializing it for persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_round_trips_for_persistence() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 12,
            "name": "Ana Rojas",
            "email": "ana@example.com",
            "username": "arojas",
            "role": "officer",
            "createdAt": "2024-03-10T09:00:00Z",
            "updatedAt": "2024-03-12T15:45:00Z"
        }))
        .unwrap();

        let serialized = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored.username, "arojas");
        assert_eq!(restored.role, "officer");
    }
}
