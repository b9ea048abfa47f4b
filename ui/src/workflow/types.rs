use std::collections::BTreeSet;

use crate::utils::parse::{parse_comma_list, parse_index_set, parse_u32_or};

/// Derived status of a single workflow step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Current => "current",
            StepStatus::Upcoming => "upcoming",
        }
    }
}

/// One stage of a multi-stage workflow, identified by 1-based index.
#[derive(Clone, PartialEq, Debug)]
pub struct Step {
    pub index: u32,
    pub name: String,
    pub url: Option<String>,
    pub status: StepStatus,
}

impl Step {
    /// Completed steps with a URL are navigable; current and upcoming
    /// steps never are.
    pub fn is_navigable(&self) -> bool {
        self.status == StepStatus::Completed && self.url.is_some()
    }

    pub fn aria_label(&self) -> String {
        match self.status {
            StepStatus::Completed => format!("Go to completed {}", self.name),
            StepStatus::Current => format!("Current step: {}", self.name),
            StepStatus::Upcoming => format!("Upcoming step: {}", self.name),
        }
    }
}

/// Parsed configuration for the step-progress tracker.
///
/// Built leniently from the raw attribute strings the host page supplies:
/// unparseable integers fall back to `1`, empty lists to `[]`.
#[derive(Clone, PartialEq, Debug)]
pub struct WorkflowConfig {
    pub current_step: u32,
    pub total_steps: u32,
    pub step_names: Vec<String>,
    pub step_urls: Vec<String>,
    pub completed_steps: BTreeSet<u32>,
}

impl WorkflowConfig {
    pub fn from_attributes(
        current_step: &str,
        total_steps: &str,
        step_names: &str,
        step_urls: &str,
        completed_steps: &str,
    ) -> Self {
        Self {
            current_step: parse_u32_or(current_step, 1),
            total_steps: parse_u32_or(total_steps, 1),
            step_names: parse_comma_list(step_names),
            step_urls: parse_comma_list(step_urls),
            completed_steps: parse_index_set(completed_steps),
        }
    }

    /// Status of step `index`.
    ///
    /// The current step takes precedence over membership in the
    /// completed set, so exactly one step is `Current` whenever
    /// `current_step <= total_steps`. When `current_step` exceeds
    /// `total_steps` every step reads as completed.
    pub fn status_of(&self, index: u32) -> StepStatus {
        if index == self.current_step && self.current_step <= self.total_steps {
            StepStatus::Current
        } else if self.completed_steps.contains(&index) || index < self.current_step {
            StepStatus::Completed
        } else {
            StepStatus::Upcoming
        }
    }

    /// Derive the ordered step sequence for one render cycle.
    ///
    /// Missing names synthesize `"Step {i}"`; missing or empty URLs make
    /// the step inert.
    pub fn steps(&self) -> Vec<Step> {
        (1..=self.total_steps)
            .map(|i| {
                let name = self
                    .step_names
                    .get(i as usize - 1)
                    .filter(|n| !n.is_empty())
                    .cloned()
                    .unwrap_or_else(|| format!("Step {}", i));
                let url = self
                    .step_urls
                    .get(i as usize - 1)
                    .filter(|u| !u.is_empty())
                    .cloned();
                Step {
                    index: i,
                    name,
                    url,
                    status: self.status_of(i),
                }
            })
            .collect()
    }
}
