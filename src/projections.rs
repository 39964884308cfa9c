//! Read-time derivations over the store's collections.
//!
//! The store exposes collections in full; filtering, sorting, and weak
//! reference resolution are the reader's job. These helpers are the
//! canonical versions of those derivations, shared between views (and the
//! store's own log lines, which need the same fallback labels).

use chrono::NaiveDate;

use crate::config::{UNKNOWN_TOOL_LABEL, UNKNOWN_USER_LABEL};
use crate::domain::{Assignment, Book, BookStatus, Resource, ToolAllocation, User, Workshop};

/// Look up a user by id.
pub fn user_by_id<'a>(users: &'a [User], id: &str) -> Option<&'a User> {
    users.iter().find(|u| u.id == id)
}

/// Resolve a user id to a display name, falling back to "Unknown" when the
/// reference is stale.
pub fn user_name(users: &[User], id: &str) -> String {
    user_by_id(users, id)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| UNKNOWN_USER_LABEL.to_string())
}

/// Resolve a resource id to its name, falling back to "Unknown Tool".
pub fn resource_name(resources: &[Resource], id: &str) -> String {
    resources
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| UNKNOWN_TOOL_LABEL.to_string())
}

/// Follow a user's weak manager reference.
///
/// Management chains are assumed acyclic by construction; nothing here
/// guards against a cycle.
pub fn manager_of<'a>(users: &'a [User], user: &User) -> Option<&'a User> {
    user.manager_id
        .as_deref()
        .and_then(|id| user_by_id(users, id))
}

/// Assignments addressed to one user, in storage (newest-first) order.
pub fn assignments_for<'a>(assignments: &'a [Assignment], user_id: &str) -> Vec<&'a Assignment> {
    assignments
        .iter()
        .filter(|a| a.assigned_to == user_id)
        .collect()
}

/// Tool allocations held by one user, in storage (newest-first) order.
pub fn allocations_for<'a>(
    allocations: &'a [ToolAllocation],
    user_id: &str,
) -> Vec<&'a ToolAllocation> {
    allocations
        .iter()
        .filter(|a| a.user_id == user_id)
        .collect()
}

/// Workshops on or after `today`, soonest first.
pub fn upcoming_workshops<'a>(workshops: &'a [Workshop], today: NaiveDate) -> Vec<&'a Workshop> {
    let mut upcoming: Vec<&Workshop> = workshops.iter().filter(|w| w.date >= today).collect();
    upcoming.sort_by_key(|w| w.date);
    upcoming
}

/// Workshops before `today`, most recent first.
pub fn past_workshops<'a>(workshops: &'a [Workshop], today: NaiveDate) -> Vec<&'a Workshop> {
    let mut past: Vec<&Workshop> = workshops.iter().filter(|w| w.date < today).collect();
    past.sort_by_key(|w| std::cmp::Reverse(w.date));
    past
}

/// Books queued for a future discussion.
pub fn upcoming_books(books: &[Book]) -> Vec<&Book> {
    books.iter().filter(|b| b.status == BookStatus::Upcoming).collect()
}

/// Books the club has finished.
pub fn archived_books(books: &[Book]) -> Vec<&Book> {
    books.iter().filter(|b| b.status == BookStatus::Archived).collect()
}

/// The club's current pick.
///
/// At most one Current book is a soft invariant; if it is violated this
/// returns the first match, which is what readers display.
pub fn current_book(books: &[Book]) -> Option<&Book> {
    books.iter().find(|b| b.status == BookStatus::Current)
}
