//! Estimation orchestration.
//!
//! [`ProjectEstimator`] composes the three stages of an estimation run:
//! task generation (through the injected [`TaskGenerator`]), the cost
//! rollup, and the dependency scheduler anchored at today's date. The
//! result is a single [`EstimationReport`]; the only failure mode is the
//! generator's, propagated without retry. The estimator holds no state
//! between calls.

use chrono::Local;

use crate::cost::estimate_cost;
use crate::generator::{GenerationError, TaskGenerator};
use crate::models::{EstimationReport, EstimationRequest, RateTable};
use crate::scheduler::TimelineScheduler;
use crate::validation;

/// Stateless, constructor-injected estimation pipeline.
///
/// # Example
///
/// ```no_run
/// use planwise::estimator::ProjectEstimator;
/// use planwise::models::{EstimationRequest, RateTable};
/// # use planwise::generator::{GenerationError, TaskGenerator};
/// # use planwise::models::TaskGenerationResult;
/// # struct Llm;
/// # #[async_trait::async_trait]
/// # impl TaskGenerator for Llm {
/// #     async fn generate_tasks(&self, _: &str, _: &str)
/// #         -> Result<TaskGenerationResult, GenerationError> { unimplemented!() }
/// # }
///
/// # async fn run() -> Result<(), GenerationError> {
/// let estimator = ProjectEstimator::new(Llm).with_rates(RateTable::default());
/// let request = EstimationRequest::new("CRM", "Build a small CRM with auth");
/// let report = estimator.estimate(&request).await?;
/// println!("total: {}", report.cost_estimate.total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProjectEstimator<G> {
    generator: G,
    rates: RateTable,
    scheduler: TimelineScheduler,
}

impl<G: TaskGenerator> ProjectEstimator<G> {
    /// Creates an estimator with the stock rate table and scheduler.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            rates: RateTable::default(),
            scheduler: TimelineScheduler::new(),
        }
    }

    /// Sets the rate table.
    pub fn with_rates(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// Sets the scheduler.
    pub fn with_scheduler(mut self, scheduler: TimelineScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Runs the full pipeline for one request.
    ///
    /// Title and spec text are forwarded to the generator with whitespace
    /// runs collapsed and ends trimmed, otherwise unmodified. Past a
    /// successful generation the run always completes: cost rollup and
    /// scheduling never fail on malformed task data. Partial reports are
    /// never produced.
    pub async fn estimate(
        &self,
        request: &EstimationRequest,
    ) -> Result<EstimationReport, GenerationError> {
        let title = normalize_whitespace(&request.title);
        let spec_text = normalize_whitespace(&request.spec_text);

        tracing::debug!(%title, "requesting task generation");
        let generated = self.generator.generate_tasks(&title, &spec_text).await?;
        tracing::debug!(tasks = generated.tasks.len(), "task generation succeeded");

        for finding in validation::inspect(&generated.tasks, &self.rates) {
            tracing::warn!(task = %finding.task_id, kind = ?finding.kind, "{}", finding.message);
        }

        let cost_estimate = estimate_cost(&generated.tasks, &self.rates);

        let today = Local::now().date_naive();
        let timeline_estimate = self.scheduler.schedule(&generated.tasks, today);

        let mut project = generated.project;
        if project.title.is_empty() {
            project.title = title;
        }

        Ok(EstimationReport {
            project,
            tasks: generated.tasks,
            critical_paths: generated.critical_paths,
            cost_estimate,
            timeline_estimate,
            generated_at: today,
        })
    }
}

/// Collapses whitespace runs to single spaces and trims both ends.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
