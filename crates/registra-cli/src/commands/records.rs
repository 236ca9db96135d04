//! CRUD commands for the four record kinds.
//!
//! Create/update payloads and search parameters arrive as JSON on the
//! command line and are checked against the typed wire models before
//! anything is sent. The four handlers are intentionally parallel; the
//! backend treats the kinds identically apart from their fields.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use registra_core::models::{
    LocationQuery, NewLocation, NewPerson, NewProperty, NewVehicle, PersonQuery, PropertyQuery,
    VehicleQuery,
};
use registra_core::services::{
    LocationsService, NearbyQuery, PeopleService, PropertiesService, VehiclesService,
};

use crate::cli::{LocationAction, RecordAction};
use crate::commands::{confirm, load_photo, Ctx};
use crate::output;

fn parse_json<T: DeserializeOwned>(what: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).with_context(|| format!("Invalid {what} JSON payload"))
}

/// Bail out of a delete unless confirmed; an abort exits non-zero.
fn ensure_confirmed(kind: &str, id: i64, yes: bool) -> Result<()> {
    if yes || confirm(&format!("Delete {kind} {id}? This cannot be undone."))? {
        Ok(())
    } else {
        anyhow::bail!("Aborted")
    }
}

pub async fn people(ctx: &Ctx, action: RecordAction) -> Result<()> {
    let service = PeopleService::new(ctx.client.clone());
    match action {
        RecordAction::List { query } => {
            let mut records = service.list().await?;
            if let Some(ref q) = query {
                records.retain(|r| r.matches_query(q));
            }
            output::json_pretty(&records)
        }
        RecordAction::Get { id } => output::json_pretty(&service.get(id).await?),
        RecordAction::Search { json } => {
            let query: PersonQuery = parse_json("search", &json)?;
            output::json_pretty(&service.search(&query).await?)
        }
        RecordAction::Create { data, photo } => {
            let person: NewPerson = parse_json("person", &data)?;
            let photo = photo.as_deref().map(load_photo).transpose()?;
            let created = service.create(&person, photo).await?;
            output::success("Person created");
            output::json_pretty(&created)
        }
        RecordAction::Update { id, data, photo } => {
            let person: NewPerson = parse_json("person", &data)?;
            let photo = photo.as_deref().map(load_photo).transpose()?;
            let updated = service.update(id, &person, photo).await?;
            output::success("Person updated");
            output::json_pretty(&updated)
        }
        RecordAction::Delete { id, yes } => {
            ensure_confirmed("person", id, yes)?;
            service.delete(id).await?;
            output::success("Person deleted");
            Ok(())
        }
    }
}

pub async fn vehicles(ctx: &Ctx, action: RecordAction) -> Result<()> {
    let service = VehiclesService::new(ctx.client.clone());
    match action {
        RecordAction::List { query } => {
            let mut records = service.list().await?;
            if let Some(ref q) = query {
                records.retain(|r| r.matches_query(q));
            }
            output::json_pretty(&records)
        }
        RecordAction::Get { id } => output::json_pretty(&service.get(id).await?),
        RecordAction::Search { json } => {
            let query: VehicleQuery = parse_json("search", &json)?;
            output::json_pretty(&service.search(&query).await?)
        }
        RecordAction::Create { data, photo } => {
            let vehicle: NewVehicle = parse_json("vehicle", &data)?;
            let photo = photo.as_deref().map(load_photo).transpose()?;
            let created = service.create(&vehicle, photo).await?;
            output::success("Vehicle created");
            output::json_pretty(&created)
        }
        RecordAction::Update { id, data, photo } => {
            let vehicle: NewVehicle = parse_json("vehicle", &data)?;
            let photo = photo.as_deref().map(load_photo).transpose()?;
            let updated = service.update(id, &vehicle, photo).await?;
            output::success("Vehicle updated");
            output::json_pretty(&updated)
        }
        RecordAction::Delete { id, yes } => {
            ensure_confirmed("vehicle", id, yes)?;
            service.delete(id).await?;
            output::success("Vehicle deleted");
            Ok(())
        }
    }
}

pub async fn properties(ctx: &Ctx, action: RecordAction) -> Result<()> {
    let service = PropertiesService::new(ctx.client.clone());
    match action {
        RecordAction::List { query } => {
            let mut records = service.list().await?;
            if let Some(ref q) = query {
                records.retain(|r| r.matches_query(q));
            }
            output::json_pretty(&records)
        }
        RecordAction::Get { id } => output::json_pretty(&service.get(id).await?),
        RecordAction::Search { json } => {
            let query: PropertyQuery = parse_json("search", &json)?;
            output::json_pretty(&service.search(&query).await?)
        }
        RecordAction::Create { data, photo } => {
            let property: NewProperty = parse_json("property", &data)?;
            let photo = photo.as_deref().map(load_photo).transpose()?;
            let created = service.create(&property, photo).await?;
            output::success("Property created");
            output::json_pretty(&created)
        }
        RecordAction::Update { id, data, photo } => {
            let property: NewProperty = parse_json("property", &data)?;
            let photo = photo.as_deref().map(load_photo).transpose()?;
            let updated = service.update(id, &property, photo).await?;
            output::success("Property updated");
            output::json_pretty(&updated)
        }
        RecordAction::Delete { id, yes } => {
            ensure_confirmed("property", id, yes)?;
            service.delete(id).await?;
            output::success("Property deleted");
            Ok(())
        }
    }
}

pub async fn locations(ctx: &Ctx, action: LocationAction) -> Result<()> {
    let service = LocationsService::new(ctx.client.clone());
    let action = match action {
        LocationAction::Nearby { lat, lng, radius } => {
            let nearby = service.nearby(NearbyQuery { lat, lng, radius }).await?;
            return output::json_pretty(&nearby);
        }
        LocationAction::Record(action) => action,
    };

    match action {
        RecordAction::List { query } => {
            let mut records = service.list().await?;
            if let Some(ref q) = query {
                records.retain(|r| r.matches_query(q));
            }
            output::json_pretty(&records)
        }
        RecordAction::Get { id } => output::json_pretty(&service.get(id).await?),
        RecordAction::Search { json } => {
            let query: LocationQuery = parse_json("search", &json)?;
            output::json_pretty(&service.search(&query).await?)
        }
        RecordAction::Create { data, photo } => {
            let location: NewLocation = parse_json("location", &data)?;
            let photo = photo.as_deref().map(load_photo).transpose()?;
            let created = service.create(&location, photo).await?;
            output::success("Location created");
            output::json_pretty(&created)
        }
        RecordAction::Update { id, data, photo } => {
            let location: NewLocation = parse_json("location", &data)?;
            let photo = photo.as_deref().map(load_photo).transpose()?;
            let updated = service.update(id, &location, photo).await?;
            output::success("Location updated");
            output::json_pretty(&updated)
        }
        RecordAction::Delete { id, yes } => {
            ensure_confirmed("location", id, yes)?;
            service.delete(id).await?;
            output::success("Location deleted");
            Ok(())
        }
    }
}
