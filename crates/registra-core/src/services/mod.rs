//! Endpoint services, one per API area.
//!
//! Each service holds a clone of the shared [`crate::api::ApiClient`] and
//! exposes the REST operations for its record kind. All four record
//! services follow the same list/get/search/create/update/delete shape;
//! locations add a proximity query.

pub mod auth;
pub mod locations;
pub mod people;
pub mod properties;
pub mod vehicles;

pub use auth::{AuthResponse, AuthService, NewUser, ProfileUpdate};
pub use locations::{LocationsService, NearbyQuery};
pub use people::PeopleService;
pub use properties::PropertiesService;
pub use vehicles::VehiclesService;
