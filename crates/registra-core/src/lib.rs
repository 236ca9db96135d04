//! registra-core - client library for the Registros Policiales API.
//!
//! This crate holds everything needed to talk to the record-keeping
//! backend:
//!
//! - [`api::ApiClient`]: the authenticated request pipeline with uniform
//!   error mapping
//! - [`auth::SessionManager`] and [`auth::CredentialStore`]: the session
//!   lifecycle over pluggable secure storage
//! - [`services`]: auth endpoints plus one CRUD service per record kind
//!   (people, vehicles, properties, locations)
//! - [`models`]: the wire types for all record kinds and the user profile
//!
//! The UI layer that sequences user flows lives outside this crate; it is
//! expected to assemble one [`api::ApiClient`], hand it to a
//! [`auth::SessionManager`] plus the services it needs, and surface the
//! mapped [`api::ApiError`] kinds to the user.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod services;

pub use api::{ApiClient, ApiError, PhotoUpload, Result};
pub use auth::{default_store, SessionManager, SessionState};
pub use config::Config;
