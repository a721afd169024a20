//! Estimation domain models.
//!
//! Value types for the estimation pipeline, input side to output side:
//!
//! | Type | Stage |
//! |------|-------|
//! | `Task`, `TaskGenerationResult` | generator output (input to the engine) |
//! | `RateTable` | deployment configuration |
//! | `CostLine`, `CostEstimate` | cost rollup output |
//! | `ScheduledTask`, `Timeline` | scheduler output |
//! | `EstimationRequest`, `EstimationReport` | caller-facing boundary |
//!
//! Derived types are immutable value objects owned by the computation that
//! produced them; nothing here is shared mutable state.

mod cost;
mod report;
mod task;
mod timeline;

pub use cost::{CostEstimate, CostLine, RateTable, DEFAULT_ROLE};
pub use report::{EstimationReport, EstimationRequest};
pub use task::{Priority, ProjectInfo, Task, TaskGenerationResult};
pub use timeline::{ScheduledTask, Timeline};
