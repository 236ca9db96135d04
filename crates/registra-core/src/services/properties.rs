//! CRUD operations for property records.

use crate::api::{form_from, ApiClient, PhotoUpload, Result};
use crate::models::{NewProperty, Property, PropertyQuery};

#[derive(Clone)]
pub struct PropertiesService {
    client: ApiClient,
}

impl PropertiesService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Property>> {
        self.client.get("/properties").await
    }

    pub async fn get(&self, id: i64) -> Result<Property> {
        self.client.get(&format!("/properties/{id}")).await
    }

    pub async fn search(&self, query: &PropertyQuery) -> Result<Vec<Property>> {
        self.client.get_query("/properties/search", query).await
    }

    pub async fn create(
        &self,
        property: &NewProperty,
        photo: Option<PhotoUpload>,
    ) -> Result<Property> {
        let form = form_from(property, photo)?;
        self.client.post_multipart("/properties", form).await
    }

    pub async fn update(
        &self,
        id: i64,
        property: &NewProperty,
        photo: Option<PhotoUpload>,
    ) -> Result<Property> {
        let form = form_from(property, photo)?;
        self.client
            .put_multipart(&format!("/properties/{id}"), form)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/properties/{id}")).await
    }
}
