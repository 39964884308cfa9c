//! Book club entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Shelf a book sits on.
///
/// Readers assume at most one book is `Current` at a time; the store does
/// not enforce that (soft invariant, kept unenforced on purpose so admins
/// can stage a handover).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    Upcoming,
    Current,
    Archived,
}

/// A book club pick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cover_url: String,
    pub discussion_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_thread_url: Option<String>,
    pub description: String,
    pub status: BookStatus,
}

/// Book creation payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "an author is required"))]
    pub author: String,
    pub cover_url: String,
    pub discussion_date: NaiveDate,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub meeting_url: Option<String>,
    #[serde(default)]
    pub slack_thread_url: Option<String>,
    pub description: String,
    pub status: BookStatus,
}

impl NewBook {
    pub(crate) fn into_book(self, id: String) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            cover_url: self.cover_url,
            discussion_date: self.discussion_date,
            location: self.location,
            meeting_url: self.meeting_url,
            slack_thread_url: self.slack_thread_url,
            description: self.description,
            status: self.status,
        }
    }
}
