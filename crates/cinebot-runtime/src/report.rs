//! Run report: the record of what a programming run did.
//!
//! Every outcome recorded here is also emitted as a tracing event, so the
//! report and the log tell the same story.

use cinebot_core::{Selection, WeekPlan};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    Succeeded,
    Failed { reason: String },
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub step: String,
    #[serde(flatten)]
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, StepStatus::Failed { .. })
    }
}

/// Outcome of one run that got past its mandatory steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub room: String,
    pub selection: Option<Selection>,
    pub title: Option<String>,
    pub block_name: Option<String>,
    pub plan: Option<WeekPlan>,
    pub steps: Vec<StepOutcome>,
}

impl RunReport {
    pub fn new(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            ..Default::default()
        }
    }

    pub fn record_success(&mut self, step: impl Into<String>) {
        let step = step.into();
        info!(room = %self.room, step = %step, "Step completed");
        self.steps.push(StepOutcome {
            step,
            status: StepStatus::Succeeded,
        });
    }

    pub fn record_failure(&mut self, step: impl Into<String>, reason: impl ToString) {
        let step = step.into();
        let reason = reason.to_string();
        warn!(room = %self.room, step = %step, reason = %reason, "Step failed, continuing");
        self.steps.push(StepOutcome {
            step,
            status: StepStatus::Failed { reason },
        });
    }

    pub fn record_skip(&mut self, step: impl Into<String>, reason: impl Into<String>) {
        let step = step.into();
        let reason = reason.into();
        info!(room = %self.room, step = %step, reason = %reason, "Step skipped");
        self.steps.push(StepOutcome {
            step,
            status: StepStatus::Skipped { reason },
        });
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|s| s.is_failure())
    }

    /// True when every recorded step succeeded.
    pub fn is_clean(&self) -> bool {
        self.steps
            .iter()
            .all(|s| s.status == StepStatus::Succeeded)
    }

    pub fn step(&self, name: &str) -> Option<&StepOutcome> {
        self.steps.iter().find(|s| s.step == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_clean() {
        let report = RunReport::new("Brunet");
        assert_eq!(report.room, "Brunet");
        assert!(report.is_clean());
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_record_outcomes() {
        let mut report = RunReport::new("Selectotel");
        report.record_success("ingest");
        report.record_failure("set volume", "slider not found");
        report.record_skip("matinee 2025-10-18", "feature not placed");

        assert_eq!(report.steps.len(), 3);
        assert!(!report.is_clean());
        assert_eq!(report.failures().count(), 1);
        assert_eq!(
            report.step("set volume").unwrap().status,
            StepStatus::Failed {
                reason: "slider not found".to_string()
            }
        );
        assert!(report.step("unknown").is_none());
    }

    #[test]
    fn test_skip_is_not_clean_but_not_failure() {
        let mut report = RunReport::new("Brunet");
        report.record_skip("bulk copy", "no target days");
        assert!(!report.is_clean());
        assert_eq!(report.failures().count(), 0);
    }

    #[test]
    fn test_serialize_step_outcome() {
        let outcome = StepOutcome {
            step: "bulk copy".to_string(),
            status: StepStatus::Failed {
                reason: "timeout".to_string(),
            },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["step"], "bulk copy");
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "timeout");
    }
}
