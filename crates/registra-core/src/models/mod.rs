//! Data models for the record-keeping API.
//!
//! This module contains the four record kinds tracked by the system plus
//! the authenticated user profile:
//!
//! - `Person`: individuals with identity documents
//! - `Vehicle`: vehicles by plate
//! - `Property`: properties with an address and optional coordinates
//! - `Location`: points of interest with mandatory coordinates
//! - `User`: the authenticated profile, passed through opaquely
//!
//! Field names follow the API's Spanish vocabulary; wire encoding is
//! camelCase JSON. Each kind has a `New*` payload for create/update and a
//! `*Query` for the server-side search endpoint.

pub mod location;
pub mod person;
pub mod property;
pub mod user;
pub mod vehicle;

pub use location::{Location, LocationQuery, NewLocation};
pub use person::{NewPerson, Person, PersonQuery};
pub use property::{NewProperty, Property, PropertyQuery};
pub use user::User;
pub use vehicle::{NewVehicle, Vehicle, VehicleQuery};

/// Case-insensitive substring match used by the client-side list filters.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when any of the given fields contains the query. An empty query
/// matches everything, mirroring an empty search box.
pub(crate) fn any_field_matches(fields: &[Option<&str>], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .flatten()
        .any(|field| contains_ignore_case(field, query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Toyota Corolla", "corolla"));
        assert!(contains_ignore_case("PÉREZ", "pérez"));
        assert!(!contains_ignore_case("Toyota", "Honda"));
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert!(any_field_matches(&[Some("anything")], ""));
        assert!(any_field_matches(&[None], ""));
    }

    #[test]
    fn test_none_fields_skipped() {
        assert!(!any_field_matches(&[None, None], "x"));
        assert!(any_field_matches(&[None, Some("max")], "x"));
    }
}
