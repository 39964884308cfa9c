//! Workshop (scheduled training event) entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Delivery format of a workshop.
///
/// `location` is relevant for In-Person sessions and `meeting_url` for
/// Virtual ones, but the model tolerates both being present; views pick the
/// field that matches the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkshopKind {
    #[serde(rename = "In-Person")]
    InPerson,
    Virtual,
}

/// A scheduled training session.
///
/// "Upcoming" vs. "past" is never stored; readers derive it by comparing
/// `date` against today at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub instructor: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: WorkshopKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials_url: Option<String>,
    /// User ids of registered attendees (weak references).
    pub attendees: Vec<String>,
}

/// Workshop creation payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkshop {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub date: NaiveDate,
    #[validate(length(min = 1, message = "an instructor is required"))]
    pub instructor: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: WorkshopKind,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub meeting_url: Option<String>,
    #[serde(default)]
    pub recording_url: Option<String>,
    #[serde(default)]
    pub materials_url: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl NewWorkshop {
    pub(crate) fn into_workshop(self, id: String) -> Workshop {
        Workshop {
            id,
            title: self.title,
            date: self.date,
            instructor: self.instructor,
            description: self.description,
            kind: self.kind,
            location: self.location,
            meeting_url: self.meeting_url,
            recording_url: self.recording_url,
            materials_url: self.materials_url,
            attendees: self.attendees,
        }
    }
}
