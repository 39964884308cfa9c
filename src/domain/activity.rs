//! Activity feed entries - the audit trail and Slack-style feed.

use serde::{Deserialize, Serialize};

/// What kind of event an activity entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Post,
    Completion,
    Assignment,
    Create,
    Grade,
    ToolAllocation,
}

/// Entry payload.
///
/// Feed posts carry channel/content; store-generated audit lines carry an
/// action verb and a target string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActivityBody {
    #[serde(rename_all = "camelCase")]
    Post {
        /// Channel label, e.g. "#ai-learnings".
        channel: String,
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        link_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        link_title: Option<String>,
    },
    System { action: String, target: String },
}

/// One activity feed entry.
///
/// `user_name` and `user_avatar` are denormalized snapshots of the acting
/// user taken at write time. They are deliberately not kept in sync with the
/// Users collection: the feed is a historical record, and a line written by a
/// since-removed user must keep rendering as that user wrote it.
///
/// Entries are append-only and prepended, so the collection reads
/// newest-first without sorting. `timestamp` is a display string ("Just
/// now", "2 hours ago"), not a sortable instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(flatten)]
    pub body: ActivityBody,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_uses_snake_case_wire_names() {
        let kind = serde_json::to_string(&ActivityKind::ToolAllocation).unwrap();
        assert_eq!(kind, "\"tool_allocation\"");
    }

    #[test]
    fn system_body_flattens_into_entry() {
        let entry = ActivityEntry {
            id: "log1".to_string(),
            user_id: "u1".to_string(),
            user_name: "Sarah Jenkins".to_string(),
            user_avatar: "https://example.com/a.png".to_string(),
            timestamp: "Just now".to_string(),
            kind: ActivityKind::Assignment,
            body: ActivityBody::System {
                action: "assigned".to_string(),
                target: "Course X to David Chen".to_string(),
            },
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["action"], "assigned");
        assert_eq!(json["target"], "Course X to David Chen");
        assert_eq!(json["type"], "assignment");
        assert_eq!(json["userName"], "Sarah Jenkins");
    }

    #[test]
    fn post_body_roundtrips_without_link_fields() {
        let json = serde_json::json!({
            "id": "feed3",
            "userId": "u1",
            "userName": "Sarah Jenkins",
            "userAvatar": "https://example.com/a.png",
            "timestamp": "4 hours ago",
            "type": "post",
            "channel": "#book-club",
            "content": "Reminder! Chapter 4 this Friday."
        });

        let entry: ActivityEntry = serde_json::from_value(json).unwrap();
        match entry.body {
            ActivityBody::Post { channel, link_url, .. } => {
                assert_eq!(channel, "#book-club");
                assert!(link_url.is_none());
            }
            ActivityBody::System { .. } => panic!("expected a feed post"),
        }
    }
}
