//! Dependency-aware timeline scheduling.
//!
//! Turns a flat task list into a dated schedule: [`order`] resolves the
//! dependency graph into deterministic ready batches (with an explicit
//! stall policy for cycles), and [`TimelineScheduler`] places dates against
//! one serial track per role, pads with a schedule buffer, and aggregates
//! the whole-project [`crate::models::Timeline`].
//!
//! The whole pass is pure and synchronous; it never fails on malformed
//! input. Degraded data (cycles, dangling references, zero-hour tasks)
//! resolves through the documented fallback rules instead.

mod engine;
mod order;

pub use engine::{TimelineScheduler, DEFAULT_BUFFER_FACTOR, DEFAULT_DAILY_CAPACITY_HOURS};
pub use order::{ready_batches, StallPolicy};
