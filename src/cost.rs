//! Role-based cost rollup.
//!
//! Maps each task to a monetary cost via the rate table and sums the
//! project total. Pure and infallible: an unknown role bills at the
//! `"default"` rate, missing hours were already defaulted to zero at
//! deserialization, and the breakdown preserves input order.

use crate::models::{CostEstimate, CostLine, RateTable, Task};

/// Computes the cost breakdown and total for a task list.
///
/// `cost = hours × rate`, with `rate = rates[task.role]` falling back to
/// `rates["default"]`. Hours are taken as given, never re-derived.
///
/// # Example
///
/// ```
/// use planwise::cost::estimate_cost;
/// use planwise::models::{RateTable, Task};
///
/// let rates = RateTable::new(100.0).with_role("qa", 300.0);
/// let tasks = vec![
///     Task::new("T1").with_hours(10).with_role("qa"),
///     Task::new("T2").with_hours(2).with_role("mystery"),
/// ];
///
/// let estimate = estimate_cost(&tasks, &rates);
/// assert_eq!(estimate.total, 3200.0);
/// ```
pub fn estimate_cost(tasks: &[Task], rates: &RateTable) -> CostEstimate {
    let mut breakdown = Vec::with_capacity(tasks.len());
    let mut total = 0.0;

    for task in tasks {
        let rate = rates.resolve(&task.role);
        let cost = f64::from(task.hours) * rate;

        breakdown.push(CostLine {
            id: task.id.clone(),
            title: task.title.clone(),
            hours: task.hours,
            role: task.role.clone(),
            rate,
            cost,
        });
        total += cost;
    }

    CostEstimate { breakdown, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> RateTable {
        RateTable::new(500.0)
            .with_role("backend", 500.0)
            .with_role("qa", 300.0)
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let tasks = vec![
            Task::new("T1").with_hours(8).with_role("backend"),
            Task::new("T2").with_hours(4).with_role("qa"),
            Task::new("T3").with_hours(2).with_role("backend"),
        ];

        let estimate = estimate_cost(&tasks, &rates());
        assert_eq!(estimate.breakdown.len(), 3);
        assert_eq!(estimate.total, 8.0 * 500.0 + 4.0 * 300.0 + 2.0 * 500.0);

        let line_sum: f64 = estimate.breakdown.iter().map(|l| l.cost).sum();
        assert_eq!(estimate.total, line_sum);
    }

    #[test]
    fn test_unknown_role_uses_default_rate() {
        let tasks = vec![Task::new("T1").with_hours(10).with_role("design")];
        let estimate = estimate_cost(&tasks, &rates());

        assert_eq!(estimate.breakdown[0].rate, 500.0);
        assert_eq!(estimate.breakdown[0].cost, 5000.0);
        assert_eq!(estimate.breakdown[0].role, "design");
    }

    #[test]
    fn test_zero_hours_costs_nothing() {
        let tasks = vec![Task::new("T1").with_role("qa")];
        let estimate = estimate_cost(&tasks, &rates());
        assert_eq!(estimate.breakdown[0].cost, 0.0);
        assert_eq!(estimate.total, 0.0);
    }

    #[test]
    fn test_breakdown_preserves_input_order() {
        let tasks = vec![
            Task::new("T3").with_hours(1),
            Task::new("T1").with_hours(1),
            Task::new("T2").with_hours(1),
        ];
        let estimate = estimate_cost(&tasks, &rates());
        let ids: Vec<&str> = estimate.breakdown.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["T3", "T1", "T2"]);
    }

    #[test]
    fn test_empty_task_list() {
        let estimate = estimate_cost(&[], &rates());
        assert!(estimate.breakdown.is_empty());
        assert_eq!(estimate.total, 0.0);
    }
}
