//! External collaborators: HTTP client for the schema, validation, and
//! attendance endpoints, plus endpoint configuration.

pub mod client;
pub mod config;

pub use client::{AttendanceSaveResponse, ClientError, RegistryApi, RegistryClient};
pub use config::RegistryConfig;
