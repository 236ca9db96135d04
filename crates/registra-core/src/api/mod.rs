//! Authenticated request pipeline for the record-keeping API.
//!
//! This module provides the shared [`ApiClient`] that injects the active
//! bearer token into every outgoing request and normalizes all transport
//! and status failures into [`ApiError`] kinds. It is the single point
//! through which every service in the crate talks to the backend.

pub mod client;
pub mod error;
pub mod multipart;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use multipart::{form_from, PhotoUpload};
