/// Payload emitted upward when a completed step is activated, before any
/// navigation request is issued.
#[derive(Clone, PartialEq, Debug)]
pub struct WorkflowNavigation {
    pub from_step: u32,
    pub to_step: u32,
    pub step_name: String,
}
