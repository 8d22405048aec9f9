//! UNLSH Admin Content Client
//!
//! Headless client library for the UNLSH admin dashboard: a typed content
//! store over the site's REST API, schema-driven form validation, and the
//! generic list + form state machine driving the per-collection admin
//! sections.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod fields;
pub mod manager;
pub mod models;
pub mod schema;
pub mod sections;
pub mod store;
pub mod upload;
