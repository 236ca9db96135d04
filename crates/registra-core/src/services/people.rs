//! CRUD operations for person records.

use crate::api::{form_from, ApiClient, PhotoUpload, Result};
use crate::models::{NewPerson, Person, PersonQuery};

#[derive(Clone)]
pub struct PeopleService {
    client: ApiClient,
}

impl PeopleService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Person>> {
        self.client.get("/people").await
    }

    pub async fn get(&self, id: i64) -> Result<Person> {
        self.client.get(&format!("/people/{id}")).await
    }

    pub async fn search(&self, query: &PersonQuery) -> Result<Vec<Person>> {
        self.client.get_query("/people/search", query).await
    }

    /// Create a person; the optional photo rides along in the same
    /// multipart request.
    pub async fn create(&self, person: &NewPerson, photo: Option<PhotoUpload>) -> Result<Person> {
        let form = form_from(person, photo)?;
        self.client.post_multipart("/people", form).await
    }

    pub async fn update(
        &self,
        id: i64,
        person: &NewPerson,
        photo: Option<PhotoUpload>,
    ) -> Result<Person> {
        let form = form_from(person, photo)?;
        self.client.put_multipart(&format!("/people/{id}"), form).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/people/{id}")).await
    }
}
