//! CRUD operations for vehicle records.

use crate::api::{form_from, ApiClient, PhotoUpload, Result};
use crate::models::{NewVehicle, Vehicle, VehicleQuery};

#[derive(Clone)]
pub struct VehiclesService {
    client: ApiClient,
}

impl VehiclesService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>> {
        self.client.get("/vehicles").await
    }

    pub async fn get(&self, id: i64) -> Result<Vehicle> {
        self.client.get(&format!("/vehicles/{id}")).await
    }

    pub async fn search(&self, query: &VehicleQuery) -> Result<Vec<Vehicle>> {
        self.client.get_query("/vehicles/search", query).await
    }

    pub async fn create(&self, vehicle: &NewVehicle, photo: Option<PhotoUpload>) -> Result<Vehicle> {
        let form = form_from(vehicle, photo)?;
        self.client.post_multipart("/vehicles", form).await
    }

    pub async fn update(
        &self,
        id: i64,
        vehicle: &NewVehicle,
        photo: Option<PhotoUpload>,
    ) -> Result<Vehicle> {
        let form = form_from(vehicle, photo)?;
        self.client.put_multipart(&format!("/vehicles/{id}"), form).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/vehicles/{id}")).await
    }
}
