//! CRUD operations for location records, plus proximity search.

use serde::Serialize;

use crate::api::{form_from, ApiClient, PhotoUpload, Result};
use crate::models::{Location, LocationQuery, NewLocation};

/// Query parameters for `GET /locations/nearby`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    /// Search radius in meters.
    pub radius: f64,
}

#[derive(Clone)]
pub struct LocationsService {
    client: ApiClient,
}

impl LocationsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Location>> {
        self.client.get("/locations").await
    }

    pub async fn get(&self, id: i64) -> Result<Location> {
        self.client.get(&format!("/locations/{id}")).await
    }

    pub async fn search(&self, query: &LocationQuery) -> Result<Vec<Location>> {
        self.client.get_query("/locations/search", query).await
    }

    /// Locations within `radius` meters of the given point.
    pub async fn nearby(&self, query: NearbyQuery) -> Result<Vec<Location>> {
        self.client.get_query("/locations/nearby", &query).await
    }

    pub async fn create(
        &self,
        location: &NewLocation,
        photo: Option<PhotoUpload>,
    ) -> Result<Location> {
        let form = form_from(location, photo)?;
        self.client.post_multipart("/locations", form).await
    }

    pub async fn update(
        &self,
        id: i64,
        location: &NewLocation,
        photo: Option<PhotoUpload>,
    ) -> Result<Location> {
        let form = form_from(location, photo)?;
        self.client
            .put_multipart(&format!("/locations/{id}"), form)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/locations/{id}")).await
    }
}
