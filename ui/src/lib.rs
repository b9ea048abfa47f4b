//! Client-side widgets for the event registry: a step-progress tracker
//! for multi-step workflows, a schema-driven form renderer with
//! pre-submit validation, and a per-event attendance tracker.
//!
//! Each widget owns its state exclusively and communicates upward only
//! through typed event payloads; the host page composes them and decides
//! what the events mean.

pub mod app;
pub use app::RegistryApp;

pub mod attendance;
pub mod components;
pub mod forms;
pub mod services;
pub mod utils;
pub mod workflow;
