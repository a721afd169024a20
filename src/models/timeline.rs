//! Schedule (solution) models.
//!
//! A [`Timeline`] is the dated solution the dependency scheduler produces
//! for one project: one [`ScheduledTask`] per input task plus whole-project
//! aggregates. Every value here is day-granular — no time-of-day component
//! participates in any calculation — and dates cross the wire as
//! `DD.MM.YYYY` strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serde adapter for `DD.MM.YYYY` date strings.
pub(crate) mod date_dmy {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d.%m.%Y";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A task with its placed dates.
///
/// Created once per scheduling run and never mutated afterward.
/// `duration_days` includes the schedule buffer, and `end_date` is the
/// buffered end. `depends_on` is copied verbatim from the input task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Task ID.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Role whose track this task occupies.
    pub role: String,
    /// Estimated effort in hours (from the input task).
    pub hours: u32,
    /// First working day.
    #[serde(with = "date_dmy")]
    pub start_date: NaiveDate,
    /// Last occupied day, buffer included.
    #[serde(with = "date_dmy")]
    pub end_date: NaiveDate,
    /// Occupied days including buffer.
    pub duration_days: u32,
    /// Dependencies as declared on the input task.
    pub depends_on: Vec<String>,
}

/// The dated schedule for a whole project.
///
/// `role_days` is a `BTreeMap` so serialization is deterministic: the same
/// input and start date always produce byte-identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    /// First day of the project.
    #[serde(with = "date_dmy")]
    pub project_start: NaiveDate,
    /// Latest buffered end across all tasks (= start for an empty plan).
    #[serde(with = "date_dmy")]
    pub project_end: NaiveDate,
    /// Elapsed days from start to end, inclusive. Never negative:
    /// `project_end >= project_start` by construction.
    pub total_work_days: u32,
    /// Buffered duration-days consumed per role.
    pub role_days: BTreeMap<String, u32>,
    /// All scheduled tasks, in the order they were readied.
    pub task_schedule: Vec<ScheduledTask>,
}

impl Timeline {
    /// Looks up the schedule entry for a task.
    pub fn entry(&self, task_id: &str) -> Option<&ScheduledTask> {
        self.task_schedule.iter().find(|t| t.id == task_id)
    }

    /// All schedule entries on one role-track, in scheduled order.
    pub fn entries_for_role(&self, role: &str) -> Vec<&ScheduledTask> {
        self.task_schedule.iter().filter(|t| t.role == role).collect()
    }

    /// Number of scheduled tasks.
    pub fn task_count(&self) -> usize {
        self.task_schedule.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_entry(id: &str, role: &str) -> ScheduledTask {
        ScheduledTask {
            id: id.to_string(),
            title: format!("Task {id}"),
            role: role.to_string(),
            hours: 8,
            start_date: date(1, 1, 2024),
            end_date: date(3, 1, 2024),
            duration_days: 3,
            depends_on: vec![],
        }
    }

    #[test]
    fn test_date_format_round_trip() {
        let task = sample_entry("T1", "backend");
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"start_date\":\"01.01.2024\""));
        assert!(json.contains("\"end_date\":\"03.01.2024\""));

        let back: ScheduledTask = serde_json::from_str(&json).unwrap();
        assert_eq!(back.start_date, task.start_date);
        assert_eq!(back.end_date, task.end_date);
    }

    #[test]
    fn test_date_format_rejects_iso() {
        let json = r#"{"id":"T1","title":"","role":"qa","hours":1,
            "start_date":"2024-01-01","end_date":"01.01.2024",
            "duration_days":1,"depends_on":[]}"#;
        assert!(serde_json::from_str::<ScheduledTask>(json).is_err());
    }

    #[test]
    fn test_timeline_lookups() {
        let timeline = Timeline {
            project_start: date(1, 1, 2024),
            project_end: date(5, 1, 2024),
            total_work_days: 5,
            role_days: BTreeMap::from([("backend".to_string(), 3), ("qa".to_string(), 3)]),
            task_schedule: vec![
                sample_entry("T1", "backend"),
                sample_entry("T2", "qa"),
                sample_entry("T3", "backend"),
            ],
        };

        assert_eq!(timeline.task_count(), 3);
        assert_eq!(timeline.entry("T2").unwrap().role, "qa");
        assert!(timeline.entry("T9").is_none());
        let backend = timeline.entries_for_role("backend");
        assert_eq!(backend.len(), 2);
        assert_eq!(backend[0].id, "T1");
    }

    #[test]
    fn test_role_days_serializes_sorted() {
        let timeline = Timeline {
            project_start: date(1, 1, 2024),
            project_end: date(1, 1, 2024),
            total_work_days: 1,
            role_days: BTreeMap::from([
                ("qa".to_string(), 1),
                ("backend".to_string(), 2),
                ("devops".to_string(), 3),
            ]),
            task_schedule: vec![],
        };
        let json = serde_json::to_string(&timeline).unwrap();
        let backend = json.find("backend").unwrap();
        let devops = json.find("devops").unwrap();
        let qa = json.find("\"qa\"").unwrap();
        assert!(backend < devops && devops < qa);
    }
}
