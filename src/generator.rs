//! Task generation boundary.
//!
//! The engine never talks to a concrete LLM provider; it depends on the
//! [`TaskGenerator`] capability interface alone. Production wires in an
//! LLM-backed implementation, tests substitute a deterministic stub. The
//! generator call is the one suspension point in an estimation run —
//! timeouts, retries, and backoff all belong behind this boundary, not in
//! the engine.

use async_trait::async_trait;

use crate::models::TaskGenerationResult;

/// Failure to obtain a usable task structure from the generator.
///
/// This is the only error an estimation run can surface: a request either
/// yields a complete report or exactly one of these. The engine propagates
/// it without retrying.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The generator responded, but no task structure could be read from
    /// its output.
    #[error("no usable task structure in generator output: {0}")]
    InvalidStructure(String),

    /// The generator backend itself failed (transport, provider, quota).
    #[error("task generation backend failed: {0}")]
    Backend(String),
}

/// Produces a structured task list from a project title and spec text.
#[async_trait]
pub trait TaskGenerator: Send + Sync {
    /// Generates project metadata, tasks, and critical-path annotations.
    ///
    /// Inputs arrive whitespace-normalized. Implementations own their
    /// retry and timeout policy; the caller treats any error as final.
    async fn generate_tasks(
        &self,
        title: &str,
        spec_text: &str,
    ) -> Result<TaskGenerationResult, GenerationError>;
}
