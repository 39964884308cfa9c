//! Learning assignment entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Kind of learning material assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentType {
    Course,
    Workshop,
    Reading,
}

/// Progress state of an assignment.
///
/// The data model permits any transition; views only expose a binary
/// Completed <-> In Progress toggle on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// A piece of learning work assigned to one user.
///
/// `assigned_by` is a free-text name snapshot, while `assigned_to` is a weak
/// user reference that may go stale when the user is removed. `grade` and
/// `feedback` are set together by the grading operation or not at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AssignmentType,
    pub assigned_by: String,
    pub assigned_to: String,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    pub source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}

impl Assignment {
    /// Whether the assignment has been graded.
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}

/// Assignment creation payload.
///
/// Callers conventionally pass `status: AssignmentStatus::NotStarted`; the
/// store stores whatever it is given.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AssignmentType,
    pub assigned_by: String,
    #[validate(length(min = 1, message = "an assignee is required"))]
    pub assigned_to: String,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    pub source_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<String>,
}

impl NewAssignment {
    pub(crate) fn into_assignment(self, id: String) -> Assignment {
        Assignment {
            id,
            title: self.title,
            kind: self.kind,
            assigned_by: self.assigned_by,
            assigned_to: self.assigned_to,
            due_date: self.due_date,
            status: self.status,
            source_name: self.source_name,
            grade: None,
            feedback: None,
            description: self.description,
            estimated_time: self.estimated_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_upstream_wire_names() {
        let not_started = serde_json::to_string(&AssignmentStatus::NotStarted).unwrap();
        let in_progress = serde_json::to_string(&AssignmentStatus::InProgress).unwrap();
        let completed = serde_json::to_string(&AssignmentStatus::Completed).unwrap();

        assert_eq!(not_started, "\"Not Started\"");
        assert_eq!(in_progress, "\"In Progress\"");
        assert_eq!(completed, "\"Completed\"");
    }
}
