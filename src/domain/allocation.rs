//! Tool allocation entity - who holds which shared tool, and since when.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Allocation lifecycle state.
///
/// Allocations are append-only history: they transition Active -> Returned
/// exactly once and are never deleted or reactivated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStatus {
    Active,
    Returned,
}

/// A grant of one [`Resource`](crate::domain::Resource) to one user.
///
/// `assigned_by` is a point-in-time name snapshot of the acting user, not a
/// live reference; it stays accurate even if that user is later renamed or
/// removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolAllocation {
    pub id: String,
    pub resource_id: String,
    pub user_id: String,
    pub assigned_by: String,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub status: AllocationStatus,
}

impl ToolAllocation {
    /// Whether the holder still has the tool.
    pub fn is_active(&self) -> bool {
        self.status == AllocationStatus::Active
    }
}
