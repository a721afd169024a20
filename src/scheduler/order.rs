//! Dependency-aware task ordering.
//!
//! Produces the batches ("ready sets") the date-placement pass consumes:
//! tasks whose every existing dependency has already been emitted. Ordering
//! is deterministic — within a batch, tasks keep their input order — and
//! total: a stalled graph (dependency cycle) is resolved by [`StallPolicy`]
//! instead of an error, so every task is emitted exactly once per unique ID.
//!
//! # Algorithm
//!
//! Kahn-style repeated selection over the remaining set, O(n²) in the worst
//! case. Fine for the tens-to-low-hundreds of tasks a project plan holds.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

use std::collections::{HashMap, HashSet};

use crate::models::Task;

/// What to do when no remaining task has an empty dependency set.
///
/// A stall means the remaining tasks form at least one cycle. The engine
/// favors a best-effort estimate over a hard failure, so the only policy is
/// an explicit, tested fallback rather than an accident of loop structure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StallPolicy {
    /// Treat every remaining task as ready, in input order. The cyclic
    /// dependencies are scheduled without being respected.
    #[default]
    ScheduleAllRemaining,
}

/// Splits tasks into dependency-ordered ready batches.
///
/// Returns indices into `tasks`. Dependencies naming IDs absent from the
/// input are dropped silently; duplicate IDs collapse to one entry (first
/// position, last definition), mirroring a keyed map of the input.
pub fn ready_batches(tasks: &[Task], policy: StallPolicy) -> Vec<Vec<usize>> {
    // Collapse duplicate IDs: first occurrence fixes the position,
    // the last occurrence wins as the definition.
    let mut order: Vec<&str> = Vec::with_capacity(tasks.len());
    let mut index_of: HashMap<&str, usize> = HashMap::with_capacity(tasks.len());
    for (i, task) in tasks.iter().enumerate() {
        if index_of.insert(task.id.as_str(), i).is_none() {
            order.push(task.id.as_str());
        }
    }

    // Dependency closure restricted to IDs present in the input.
    // Self-references survive the restriction; they stall and fall through
    // the policy like any other cycle.
    let mut deps: HashMap<&str, HashSet<&str>> = HashMap::with_capacity(order.len());
    for &id in &order {
        let task = &tasks[index_of[id]];
        let existing = task
            .depends_on
            .iter()
            .map(String::as_str)
            .filter(|d| index_of.contains_key(d))
            .collect();
        deps.insert(id, existing);
    }

    let mut remaining: Vec<&str> = order.clone();
    let mut batches = Vec::new();

    while !remaining.is_empty() {
        let mut ready: Vec<&str> = remaining
            .iter()
            .copied()
            .filter(|id| deps[id].is_empty())
            .collect();

        if ready.is_empty() {
            match policy {
                StallPolicy::ScheduleAllRemaining => {
                    tracing::warn!(
                        remaining = remaining.len(),
                        "dependency cycle among remaining tasks; scheduling all of them"
                    );
                    ready = remaining.clone();
                }
            }
        }

        remaining.retain(|id| !ready.contains(id));
        for set in deps.values_mut() {
            for id in &ready {
                set.remove(id);
            }
        }
        batches.push(ready.iter().map(|id| index_of[id]).collect());
    }

    batches
}
