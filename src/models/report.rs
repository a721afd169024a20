//! Estimation request and report models.
//!
//! [`EstimationReport`] is the terminal artifact of one estimation run: it
//! is assembled once, returned, and discarded by the caller. It merges the
//! generator's output (tasks and opaque `critical_paths`, passed through as
//! received) with the cost and timeline estimates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::timeline::date_dmy;
use super::{CostEstimate, ProjectInfo, Task, Timeline};

/// A caller's request to estimate a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationRequest {
    /// Project title.
    pub title: String,
    /// Free-text project specification.
    pub spec_text: String,
}

impl EstimationRequest {
    /// Creates a request.
    pub fn new(title: impl Into<String>, spec_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            spec_text: spec_text.into(),
        }
    }
}

/// The complete estimate for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationReport {
    /// Project metadata from the generator.
    pub project: ProjectInfo,
    /// Task list exactly as received from the generator.
    pub tasks: Vec<Task>,
    /// Opaque critical-path annotations, passed through unvalidated.
    pub critical_paths: Vec<Value>,
    /// Per-task cost breakdown and total.
    pub cost_estimate: CostEstimate,
    /// Dated schedule and whole-project aggregates.
    pub timeline_estimate: Timeline,
    /// Day the report was produced.
    #[serde(with = "date_dmy")]
    pub generated_at: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_report_serialization_shape() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let report = EstimationReport {
            project: ProjectInfo::new("Shop", "Online shop MVP"),
            tasks: vec![Task::new("T1").with_hours(8)],
            critical_paths: vec![serde_json::json!(["T1"])],
            cost_estimate: CostEstimate::default(),
            timeline_estimate: Timeline {
                project_start: start,
                project_end: start,
                total_work_days: 1,
                role_days: BTreeMap::new(),
                task_schedule: vec![],
            },
            generated_at: start,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["project"]["title"], "Shop");
        assert_eq!(json["tasks"][0]["id"], "T1");
        assert_eq!(json["critical_paths"][0][0], "T1");
        assert_eq!(json["generated_at"], "01.01.2024");
        assert_eq!(json["timeline_estimate"]["project_start"], "01.01.2024");
        assert_eq!(json["cost_estimate"]["total"], 0.0);
    }

    #[test]
    fn test_request_round_trip() {
        let request = EstimationRequest::new("CRM", "Build a CRM");
        let json = serde_json::to_string(&request).unwrap();
        let back: EstimationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "CRM");
        assert_eq!(back.spec_text, "Build a CRM");
    }
}
