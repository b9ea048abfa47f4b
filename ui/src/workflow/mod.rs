//! Step-progress state machine for multi-step registry workflows.
//!
//! The tracker renders an ordered breadcrumb of workflow steps and gates
//! navigation to completed steps only. All status derivation lives here,
//! independent of the rendering layer.

pub mod events;
pub mod types;

pub use events::WorkflowNavigation;
pub use types::{Step, StepStatus, WorkflowConfig};
