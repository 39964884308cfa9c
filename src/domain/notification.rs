//! Notification entity.
//!
//! Present in the model and seeded at startup; the store currently exposes
//! no operation to create one or mark one read.

use serde::{Deserialize, Serialize};

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    Info,
    Success,
}

/// An in-app notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Display string ("1 hour ago"), not a sortable instant.
    pub date: String,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}
