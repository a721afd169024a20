//! Rate table and cost models.
//!
//! A [`RateTable`] maps a role key to its billable hourly rate. The table is
//! a deployment-level configuration artifact, not per-request data; its
//! `"default"` entry backs every role the table does not know, which is the
//! engine's deliberate permissiveness policy for unrecognized roles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role key that backs every unrecognized role.
pub const DEFAULT_ROLE: &str = "default";

/// Mapping from role to hourly rate.
///
/// Resolution never fails: a role absent from the table resolves to the
/// `"default"` entry, and a table somehow missing that entry resolves to
/// zero rather than erroring (the estimate degrades, the request does not).
///
/// # Example
///
/// ```
/// use planwise::models::RateTable;
///
/// let rates = RateTable::new(500.0).with_role("backend", 650.0);
/// assert_eq!(rates.resolve("backend"), 650.0);
/// assert_eq!(rates.resolve("astrologer"), 500.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// Creates a table containing only the mandatory `"default"` entry.
    pub fn new(default_rate: f64) -> Self {
        let mut rates = HashMap::new();
        rates.insert(DEFAULT_ROLE.to_string(), default_rate);
        Self { rates }
    }

    /// Sets the hourly rate for a role.
    pub fn with_role(mut self, role: impl Into<String>, rate: f64) -> Self {
        self.rates.insert(role.into(), rate);
        self
    }

    /// Hourly rate for a role, falling back to the `"default"` entry.
    pub fn resolve(&self, role: &str) -> f64 {
        self.rates
            .get(role)
            .or_else(|| self.rates.get(DEFAULT_ROLE))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether the table has an explicit entry for a role.
    pub fn knows(&self, role: &str) -> bool {
        self.rates.contains_key(role)
    }
}

impl Default for RateTable {
    /// The stock deployment table (hourly rates per role).
    fn default() -> Self {
        Self::new(500.0)
            .with_role("backend", 500.0)
            .with_role("frontend", 350.0)
            .with_role("devops", 600.0)
            .with_role("qa", 300.0)
            .with_role("ux", 600.0)
            .with_role("pm", 800.0)
    }
}

/// Cost of a single task: `cost = hours × rate`.
///
/// Immutable once computed; one line per input task, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostLine {
    /// Task ID.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Estimated hours (taken as given from the task).
    pub hours: u32,
    /// Role the task was billed as.
    pub role: String,
    /// Resolved hourly rate.
    pub rate: f64,
    /// Line total.
    pub cost: f64,
}

/// Per-task breakdown and grand total for one project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostEstimate {
    /// One line per task, in input order.
    pub breakdown: Vec<CostLine>,
    /// Sum of all line costs.
    pub total: f64,
}
