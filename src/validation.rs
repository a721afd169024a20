//! Advisory data-quality inspection for generated task lists.
//!
//! The engine deliberately never rejects degraded input — every anomaly has
//! a fallback rule — but silent fallbacks mask upstream data-quality
//! problems. This module makes them observable: [`inspect`] reports every
//! condition a fallback will later absorb. Findings are advisory values;
//! the orchestrator logs them and the request proceeds regardless.
//!
//! Detected:
//! - Duplicate task IDs (later definition shadows the earlier)
//! - Dependencies on IDs absent from the list (dropped by the scheduler)
//! - Self-referential dependencies (resolved by the stall policy)
//! - Dependency cycles (resolved by the stall policy)
//! - Zero-hour tasks (scheduled at the one-day minimum, billed at zero)
//! - Roles missing from the rate table (billed at the default rate)
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4

use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::models::{RateTable, Task};

/// A single data-quality finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataFinding {
    /// Finding category.
    pub kind: FindingKind,
    /// ID of the task the finding is about.
    pub task_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of data-quality findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FindingKind {
    /// Two tasks share an ID.
    DuplicateId,
    /// A dependency names an ID not present in the task list.
    DanglingDependency,
    /// A task depends on itself.
    SelfDependency,
    /// The dependency graph contains a cycle.
    CyclicDependency,
    /// A task carries no effort estimate.
    ZeroHours,
    /// The rate table has no entry for the task's role.
    UnknownRole,
}

impl DataFinding {
    fn new(kind: FindingKind, task_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            task_id: task_id.to_string(),
            message: message.into(),
        }
    }
}

/// Inspects a task list for every condition the engine will paper over.
///
/// Never fails and never mutates; an empty result means the estimate needs
/// no fallbacks at all.
pub fn inspect(tasks: &[Task], rates: &RateTable) -> Vec<DataFinding> {
    let mut findings = Vec::new();

    let mut seen: HashSet<&str> = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.id.as_str()) {
            findings.push(DataFinding::new(
                FindingKind::DuplicateId,
                &task.id,
                format!("duplicate task ID '{}'", task.id),
            ));
        }
    }

    for task in tasks {
        for dep in &task.depends_on {
            if dep == &task.id {
                findings.push(DataFinding::new(
                    FindingKind::SelfDependency,
                    &task.id,
                    format!("task '{}' depends on itself", task.id),
                ));
            } else if !seen.contains(dep.as_str()) {
                findings.push(DataFinding::new(
                    FindingKind::DanglingDependency,
                    &task.id,
                    format!("task '{}' depends on unknown task '{dep}'", task.id),
                ));
            }
        }

        if task.hours == 0 {
            findings.push(DataFinding::new(
                FindingKind::ZeroHours,
                &task.id,
                format!("task '{}' has no effort estimate", task.id),
            ));
        }

        if !rates.knows(&task.role) {
            findings.push(DataFinding::new(
                FindingKind::UnknownRole,
                &task.id,
                format!(
                    "task '{}' has role '{}' with no rate table entry",
                    task.id, task.role
                ),
            ));
        }
    }

    if let Some(task_id) = find_cycle(tasks) {
        findings.push(DataFinding::new(
            FindingKind::CyclicDependency,
            &task_id,
            format!("dependency cycle involving task '{task_id}'"),
        ));
    }

    findings
}

/// DFS back-edge search over the dependency graph.
///
/// Returns a task on some cycle, or `None` for a DAG. Edges restricted to
/// IDs present in the list; self-edges are reported separately and skipped
/// here.
fn find_cycle(tasks: &[Task]) -> Option<String> {
    let ids: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::with_capacity(tasks.len());
    for task in tasks {
        let edges = task
            .depends_on
            .iter()
            .map(String::as_str)
            .filter(|d| ids.contains(d) && *d != task.id)
            .collect();
        adj.insert(task.id.as_str(), edges);
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for task in tasks {
        let node = task.id.as_str();
        if !visited.contains(node) && dfs_has_cycle(node, &adj, &mut visited, &mut in_stack) {
            return Some(node.to_string());
        }
    }
    None
}

fn dfs_has_cycle<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge
            }
            if !visited.contains(next) && dfs_has_cycle(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> RateTable {
        RateTable::new(500.0).with_role("backend", 500.0)
    }

    fn task(id: &str, hours: u32, deps: &[&str]) -> Task {
        let mut t = Task::new(id).with_hours(hours).with_role("backend");
        for d in deps {
            t = t.with_dependency(*d);
        }
        t
    }

    fn kinds(findings: &[DataFinding]) -> Vec<FindingKind> {
        findings.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_clean_input_has_no_findings() {
        let tasks = vec![task("A", 8, &[]), task("B", 4, &["A"])];
        assert!(inspect(&tasks, &rates()).is_empty());
    }

    #[test]
    fn test_duplicate_id() {
        let tasks = vec![task("A", 8, &[]), task("A", 4, &[])];
        assert!(kinds(&inspect(&tasks, &rates())).contains(&FindingKind::DuplicateId));
    }

    #[test]
    fn test_dangling_dependency() {
        let tasks = vec![task("A", 8, &["GHOST"])];
        let findings = inspect(&tasks, &rates());
        assert!(kinds(&findings).contains(&FindingKind::DanglingDependency));
        assert!(findings.iter().any(|f| f.message.contains("GHOST")));
    }

    #[test]
    fn test_self_dependency() {
        let tasks = vec![task("A", 8, &["A"])];
        let findings = inspect(&tasks, &rates());
        assert!(kinds(&findings).contains(&FindingKind::SelfDependency));
        // Not double-reported as dangling or cyclic.
        assert!(!kinds(&findings).contains(&FindingKind::DanglingDependency));
        assert!(!kinds(&findings).contains(&FindingKind::CyclicDependency));
    }

    #[test]
    fn test_cycle_detected() {
        let tasks = vec![task("A", 8, &["B"]), task("B", 8, &["C"]), task("C", 8, &["A"])];
        assert!(kinds(&inspect(&tasks, &rates())).contains(&FindingKind::CyclicDependency));
    }

    #[test]
    fn test_chain_is_not_a_cycle() {
        let tasks = vec![task("A", 8, &[]), task("B", 8, &["A"]), task("C", 8, &["B"])];
        assert!(!kinds(&inspect(&tasks, &rates())).contains(&FindingKind::CyclicDependency));
    }

    #[test]
    fn test_zero_hours_and_unknown_role() {
        let tasks = vec![Task::new("A").with_role("design")];
        let findings = inspect(&tasks, &rates());
        assert!(kinds(&findings).contains(&FindingKind::ZeroHours));
        assert!(kinds(&findings).contains(&FindingKind::UnknownRole));
    }

    #[test]
    fn test_multiple_findings_accumulate() {
        let tasks = vec![
            task("A", 0, &["GHOST"]),
            task("B", 8, &["C"]),
            task("C", 8, &["B"]),
        ];
        let findings = inspect(&tasks, &rates());
        assert!(findings.len() >= 3);
    }
}
