//! Task and project input models.
//!
//! These types mirror the structure an upstream task generator emits for a
//! project plan. Generator output is best-effort data: fields may be missing
//! or out of vocabulary, so every field carries a permissive serde default
//! and unknown priority strings fold to [`Priority::Medium`]. Fallback rules
//! for the remaining degraded-data cases live in the consumers
//! ([`crate::cost`] and [`crate::scheduler`]).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A unit of work in a project plan.
///
/// Produced by the task generator, consumed by the cost estimator and the
/// dependency scheduler. `depends_on` is semantically a set of task IDs;
/// duplicates, self-references, and IDs absent from the plan are tolerated
/// downstream rather than rejected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier within a project (e.g. "T1").
    pub id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Short description for the assignee.
    #[serde(default)]
    pub description: String,
    /// Estimated effort in hours. Missing → 0.
    #[serde(default)]
    pub hours: u32,
    /// Scheduling priority.
    #[serde(default)]
    pub priority: Priority,
    /// Role key into the rate table. Missing → "default".
    #[serde(default = "default_role")]
    pub role: String,
    /// IDs of tasks that must finish before this one starts.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

fn default_role() -> String {
    "default".to_string()
}

impl Task {
    /// Creates a new task with the given ID and zero effort.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            hours: 0,
            priority: Priority::default(),
            role: default_role(),
            depends_on: Vec::new(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the estimated effort in hours.
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Adds a dependency on another task.
    pub fn with_dependency(mut self, id: impl Into<String>) -> Self {
        self.depends_on.push(id.into());
        self
    }
}

/// Task priority.
///
/// The generator is asked for a closed vocabulary but may stray; anything
/// unrecognized deserializes as `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }
}

/// Project metadata attached to a generated plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectInfo {
    /// Project title.
    #[serde(default)]
    pub title: String,
    /// Short summary.
    #[serde(default)]
    pub summary: String,
}

impl ProjectInfo {
    /// Creates project metadata.
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }
}

/// The full structure a task generator returns for one project.
///
/// `critical_paths` is opaque pass-through data: the engine neither computes
/// nor validates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskGenerationResult {
    /// Project metadata.
    #[serde(default)]
    pub project: ProjectInfo,
    /// The generated task list.
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Opaque critical-path annotations from the generator.
    #[serde(default)]
    pub critical_paths: Vec<Value>,
}
