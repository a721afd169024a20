//! Project estimation engine.
//!
//! Takes a generated task list for a project and computes a deterministic,
//! dependency-aware timeline plus a role-based cost estimate. Task
//! generation itself (an LLM call in production) sits behind the
//! [`generator::TaskGenerator`] capability interface; everything on this
//! side of that boundary is pure, synchronous, and infallible on malformed
//! data — degraded input resolves through explicit fallback rules instead
//! of errors.
//!
//! # Modules
//!
//! - **`models`**: Value types — `Task`, `RateTable`, `CostEstimate`,
//!   `ScheduledTask`, `Timeline`, `EstimationRequest`, `EstimationReport`
//! - **`cost`**: Role-based cost rollup
//! - **`scheduler`**: Dependency ordering, date placement, buffering
//! - **`generator`**: Task-generation boundary trait and its error
//! - **`estimator`**: Orchestration of one estimation run
//! - **`validation`**: Advisory data-quality findings (never fail a run)
//!
//! # Capacity model
//!
//! Each role owns a single serial track: one fully dedicated worker per
//! role, no parallel assignments within a role. Task durations derive from
//! hours at a configurable daily capacity (default 6 h/day) plus a
//! configurable schedule buffer (default 20%).

pub mod cost;
pub mod estimator;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use cost::estimate_cost;
pub use estimator::ProjectEstimator;
pub use generator::{GenerationError, TaskGenerator};
pub use models::{
    CostEstimate, CostLine, EstimationReport, EstimationRequest, Priority, ProjectInfo, RateTable,
    ScheduledTask, Task, TaskGenerationResult, Timeline,
};
pub use scheduler::{StallPolicy, TimelineScheduler};
