//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Fallback display labels
// =============================================================================

/// Shown when a weak user reference no longer resolves
pub const UNKNOWN_USER_LABEL: &str = "Unknown";

/// Shown when an allocation's resource has been deleted
pub const UNKNOWN_TOOL_LABEL: &str = "Unknown Tool";

// =============================================================================
// Activity feed
// =============================================================================

/// Display timestamp stamped on freshly written feed entries
pub const FEED_TIMESTAMP_JUST_NOW: &str = "Just now";

/// Action verb logged when an assignment is created
pub const ACTION_ASSIGNED: &str = "assigned";

/// Action verb logged when an assignment is graded
pub const ACTION_GRADED: &str = "graded";

/// Action verb logged when a tool is allocated
pub const ACTION_ASSIGNED_TOOL: &str = "assigned tool";

/// Action verb logged when a workshop is scheduled
pub const ACTION_SCHEDULED_EVENT: &str = "scheduled event";

/// Action verb logged when a book club pick is added
pub const ACTION_ADDED_BOOK: &str = "added book";
