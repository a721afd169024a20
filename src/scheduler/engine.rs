//! Date placement and timeline aggregation.
//!
//! # Algorithm
//!
//! 1. Order tasks into ready batches ([`super::order`]).
//! 2. Convert effort to days: `ceil(hours / daily_capacity)`, minimum 1.
//! 3. Place each task at `max(project_start, latest dependency end + 1,
//!    role_next_free[role])` — each role owns a single serial track, the
//!    simplest capacity model that still yields non-overlapping schedules
//!    and a critical-path-like project end.
//! 4. Pad with a schedule buffer (`round(duration × buffer_factor)` days)
//!    and advance the role track past the buffered end.
//! 5. Aggregate project end, total work days, and per-role day counts.
//!
//! # Reference
//! Goldratt (1997), "Critical Chain" — schedule buffers against estimation risk

use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap};

use super::order::{ready_batches, StallPolicy};
use crate::models::{ScheduledTask, Task, Timeline};

/// Dependency-aware timeline scheduler.
///
/// Stateless between runs: each call to [`schedule`](Self::schedule) works
/// on its own inputs and produces a fresh [`Timeline`], so one instance may
/// serve concurrent callers without coordination.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use planwise::models::Task;
/// use planwise::scheduler::TimelineScheduler;
///
/// let tasks = vec![
///     Task::new("T1").with_hours(8).with_role("backend"),
///     Task::new("T2").with_hours(4).with_role("backend").with_dependency("T1"),
/// ];
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let timeline = TimelineScheduler::new().schedule(&tasks, start);
/// assert_eq!(timeline.task_count(), 2);
/// assert!(timeline.entry("T2").unwrap().start_date > timeline.entry("T1").unwrap().end_date);
/// ```
#[derive(Debug, Clone)]
pub struct TimelineScheduler {
    daily_capacity_hours: u32,
    buffer_factor: f64,
    stall_policy: StallPolicy,
}

/// Hours one role-track absorbs per day.
pub const DEFAULT_DAILY_CAPACITY_HOURS: u32 = 6;

/// Fraction of a task's raw duration added as schedule buffer.
pub const DEFAULT_BUFFER_FACTOR: f64 = 0.2;

// Upper bound on a single task's raw duration and on its buffer, in days.
// Keeps date arithmetic inside chrono's representable range for
// pathological effort values (u32::MAX hours is type-valid input).
const MAX_TASK_DURATION_DAYS: i64 = 3650;

impl TimelineScheduler {
    /// Creates a scheduler with the stock capacity model.
    pub fn new() -> Self {
        Self {
            daily_capacity_hours: DEFAULT_DAILY_CAPACITY_HOURS,
            buffer_factor: DEFAULT_BUFFER_FACTOR,
            stall_policy: StallPolicy::default(),
        }
    }

    /// Sets the daily capacity (clamped to at least 1 hour/day).
    pub fn with_daily_capacity(mut self, hours: u32) -> Self {
        self.daily_capacity_hours = hours.max(1);
        self
    }

    /// Sets the buffer factor.
    pub fn with_buffer_factor(mut self, factor: f64) -> Self {
        self.buffer_factor = factor;
        self
    }

    /// Sets the stall policy for cyclic dependency graphs.
    pub fn with_stall_policy(mut self, policy: StallPolicy) -> Self {
        self.stall_policy = policy;
        self
    }

    /// Schedules a task list from the given project start date.
    ///
    /// Infallible by contract: dangling references, cycles, and zero-hour
    /// tasks all degrade per the engine's fallback rules. One entry is
    /// produced per unique task ID, in the order tasks were readied.
    pub fn schedule(&self, tasks: &[Task], project_start: NaiveDate) -> Timeline {
        let mut task_schedule: Vec<ScheduledTask> = Vec::with_capacity(tasks.len());
        let mut scheduled_end: HashMap<&str, NaiveDate> = HashMap::with_capacity(tasks.len());
        let mut role_next_free: HashMap<&str, NaiveDate> = HashMap::new();

        for batch in ready_batches(tasks, self.stall_policy) {
            // Dependency ends are read from the state at the batch
            // boundary. A genuine ready batch has no internal edges, so
            // this is equivalent to a live lookup; in a stall batch the
            // cyclic edges go unrespected and every member anchors at its
            // own track's earliest date instead of chaining arbitrarily.
            let ends_at_batch: HashMap<&str, NaiveDate> = scheduled_end.clone();

            for index in batch {
                let task = &tasks[index];
                let duration_days = self.hours_to_days(task.hours);

                // Earliest start: the day after the latest buffered end
                // among dependencies from earlier batches.
                let mut earliest = project_start;
                let latest_dep_end = task
                    .depends_on
                    .iter()
                    .filter_map(|d| ends_at_batch.get(d.as_str()))
                    .max();
                if let Some(&dep_end) = latest_dep_end {
                    earliest = earliest.max(dep_end + Duration::days(1));
                }

                let role_free = role_next_free
                    .get(task.role.as_str())
                    .copied()
                    .unwrap_or(project_start);
                let start = earliest.max(role_free);
                let end = start + Duration::days(duration_days - 1);

                let buffer_days = self.buffer_days(duration_days);
                let end_with_buffer = end + Duration::days(buffer_days);

                scheduled_end.insert(task.id.as_str(), end_with_buffer);
                role_next_free.insert(task.role.as_str(), end_with_buffer + Duration::days(1));

                task_schedule.push(ScheduledTask {
                    id: task.id.clone(),
                    title: task.title.clone(),
                    role: task.role.clone(),
                    hours: task.hours,
                    start_date: start,
                    end_date: end_with_buffer,
                    duration_days: (duration_days + buffer_days) as u32,
                    depends_on: task.depends_on.clone(),
                });
            }
        }

        let project_end = task_schedule
            .iter()
            .map(|t| t.end_date)
            .max()
            .unwrap_or(project_start);

        let mut role_days: BTreeMap<String, u32> = BTreeMap::new();
        for entry in &task_schedule {
            *role_days.entry(entry.role.clone()).or_insert(0) += entry.duration_days;
        }

        // project_end >= project_start by construction.
        let total_work_days =
            u32::try_from((project_end - project_start).num_days() + 1).unwrap_or(u32::MAX);

        Timeline {
            project_start,
            project_end,
            total_work_days,
            role_days,
            task_schedule,
        }
    }

    /// `ceil(hours / daily_capacity)`, minimum one day even for zero hours,
    /// capped so date arithmetic cannot leave chrono's range.
    fn hours_to_days(&self, hours: u32) -> i64 {
        let capacity = i64::from(self.daily_capacity_hours);
        ((i64::from(hours) + capacity - 1) / capacity).clamp(1, MAX_TASK_DURATION_DAYS)
    }

    /// Rounded buffer, floored at zero and capped like the raw duration.
    fn buffer_days(&self, duration_days: i64) -> i64 {
        let rounded = (duration_days as f64 * self.buffer_factor).round();
        (rounded as i64).clamp(0, MAX_TASK_DURATION_DAYS)
    }
}

impl Default for TimelineScheduler {
    fn default() -> Self {
        Self::new()
    }
}
