//! The Domain Store - single owner of all entity collections and session
//! state.
//!
//! Every mutation goes through the closed operation set on [`DomainStore`];
//! views never edit collections directly. That keeps the cross-entity side
//! effects (id generation, activity-log appends) in one place. All
//! operations are synchronous and run to completion before control returns;
//! there is exactly one logical writer.
//!
//! Error model: none. Operations that take an id silently no-op when it does
//! not resolve, and log lines render fallback labels for stale references.
//! Required-field validation happens at the caller via
//! [`ensure_valid`](crate::errors::ensure_valid).

mod clock;
pub mod seed;

use uuid::Uuid;

pub use clock::{Clock, FixedClock, SystemClock};
pub use seed::SeedData;

use crate::config::{
    ACTION_ADDED_BOOK, ACTION_ASSIGNED, ACTION_ASSIGNED_TOOL, ACTION_GRADED,
    ACTION_SCHEDULED_EVENT, FEED_TIMESTAMP_JUST_NOW,
};
use crate::domain::{
    ActivityBody, ActivityEntry, ActivityKind, AllocationStatus, Assignment, AssignmentStatus,
    Book, NewAssignment, NewBook, NewResource, NewUser, NewWorkshop, Notification, Resource,
    ToolAllocation, User, Workshop,
};
use crate::projections;

/// Generate an opaque id token for a new entity.
///
/// Collision-tolerant: the store never checks a fresh id against existing
/// ones. Consumers must treat ids as opaque and unordered.
fn fresh_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// In-memory source of truth for the dashboard.
pub struct DomainStore {
    users: Vec<User>,
    resources: Vec<Resource>,
    allocations: Vec<ToolAllocation>,
    assignments: Vec<Assignment>,
    activity: Vec<ActivityEntry>,
    notifications: Vec<Notification>,
    books: Vec<Book>,
    workshops: Vec<Workshop>,
    current_user: User,
    is_authenticated: bool,
    clock: Box<dyn Clock>,
}

impl DomainStore {
    /// Open a store over a seed dataset with an explicit clock.
    pub fn new(seed: SeedData, clock: Box<dyn Clock>) -> Self {
        Self {
            users: seed.users,
            resources: seed.resources,
            allocations: seed.allocations,
            assignments: seed.assignments,
            activity: seed.activity,
            notifications: seed.notifications,
            books: seed.books,
            workshops: seed.workshops,
            current_user: seed.current_user,
            is_authenticated: false,
            clock,
        }
    }

    /// Open a store over the default seed and the system clock.
    pub fn seeded() -> Self {
        Self::new(SeedData::default(), Box::new(SystemClock))
    }

    // =========================================================================
    // Read surface
    // =========================================================================

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn tool_allocations(&self) -> &[ToolAllocation] {
        &self.allocations
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Activity feed, newest first by construction.
    pub fn activity(&self) -> &[ActivityEntry] {
        &self.activity
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn workshops(&self) -> &[Workshop] {
        &self.workshops
    }

    /// The "logged in as" identity.
    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    // =========================================================================
    // Session operations
    // =========================================================================

    /// Mark the session authenticated.
    ///
    /// There is no credential check; real authentication is out of scope and
    /// this flag only drives which shell the views render.
    pub fn login(&mut self) {
        self.is_authenticated = true;
        tracing::info!(user = %self.current_user.name, "session opened");
    }

    /// Mark the session unauthenticated. Entity collections are retained.
    pub fn logout(&mut self) {
        self.is_authenticated = false;
        tracing::info!(user = %self.current_user.name, "session closed");
    }

    /// Advance the session identity through the demo rotation
    /// (Super-Admin -> Admin -> Staff -> Super-Admin).
    ///
    /// Picks the first user holding the next role; silently no-ops when no
    /// user with that role exists.
    pub fn switch_user(&mut self) {
        let next_role = self.current_user.role.next_in_rotation();
        if let Some(user) = self.users.iter().find(|u| u.role == next_role) {
            self.current_user = user.clone();
            tracing::debug!(user = %self.current_user.name, role = %next_role, "switched identity");
        }
    }

    // =========================================================================
    // Assignment operations
    // =========================================================================

    /// Create an assignment and log it. Returns the generated id.
    ///
    /// The write always succeeds; a stale `assigned_to` only degrades the
    /// log line's assignee name to the fallback label.
    pub fn add_assignment(&mut self, draft: NewAssignment) -> String {
        let id = fresh_id();
        let assignee = projections::user_name(&self.users, &draft.assigned_to);
        let target = format!("{} to {}", draft.title, assignee);

        self.assignments.insert(0, draft.into_assignment(id.clone()));
        self.log_system_entry(ActivityKind::Assignment, ACTION_ASSIGNED, target);
        tracing::debug!(id = %id, "assignment created");
        id
    }

    /// Replace the status of the matching assignment. No-op when the id does
    /// not resolve; not logged.
    pub fn update_assignment_status(&mut self, id: &str, status: AssignmentStatus) {
        if let Some(assignment) = self.assignments.iter_mut().find(|a| a.id == id) {
            assignment.status = status;
            tracing::debug!(id = %id, ?status, "assignment status updated");
        }
    }

    /// Set grade and feedback together and log the grading. No-op when the
    /// id does not resolve; an assignment never ends up with only one of the
    /// two fields set.
    pub fn grade_assignment(&mut self, id: &str, grade: &str, feedback: &str) {
        let Some(assignment) = self.assignments.iter_mut().find(|a| a.id == id) else {
            return;
        };
        assignment.grade = Some(grade.to_string());
        assignment.feedback = Some(feedback.to_string());
        let target = assignment.title.clone();

        self.log_system_entry(ActivityKind::Grade, ACTION_GRADED, target);
        tracing::debug!(id = %id, grade = %grade, "assignment graded");
    }

    // =========================================================================
    // User operations
    // =========================================================================

    /// Create a user. Appends (no prepend) and does not log.
    pub fn add_user(&mut self, draft: NewUser) -> String {
        let id = fresh_id();
        self.users.push(draft.into_user(id.clone()));
        tracing::debug!(id = %id, "user created");
        id
    }

    /// Remove the matching user.
    ///
    /// No cascade: assignments and allocations keep their now-dangling
    /// references, and readers resolve those to fallback labels.
    pub fn remove_user(&mut self, id: &str) {
        self.users.retain(|u| u.id != id);
    }

    // =========================================================================
    // Resource operations
    // =========================================================================

    /// Create a resource. Appends and does not log.
    pub fn add_resource(&mut self, draft: NewResource) -> String {
        let id = fresh_id();
        self.resources.push(draft.into_resource(id.clone()));
        tracing::debug!(id = %id, "resource created");
        id
    }

    /// Remove the matching resource. Allocations referencing it are kept and
    /// display as "Unknown Tool".
    pub fn remove_resource(&mut self, id: &str) {
        self.resources.retain(|r| r.id != id);
    }

    // =========================================================================
    // Tool allocation operations
    // =========================================================================

    /// Allocate a resource to a user and log it. Returns the generated id.
    ///
    /// `assigned_by` snapshots the acting user's name at write time; the
    /// start date is today. Stale resource/user ids degrade only the log
    /// line, never the write.
    pub fn assign_tool(&mut self, resource_id: &str, user_id: &str) -> String {
        let id = fresh_id();
        let allocation = ToolAllocation {
            id: id.clone(),
            resource_id: resource_id.to_string(),
            user_id: user_id.to_string(),
            assigned_by: self.current_user.name.clone(),
            start_date: self.clock.today(),
            end_date: None,
            status: AllocationStatus::Active,
        };
        self.allocations.insert(0, allocation);

        let target = format!(
            "{} to {}",
            projections::resource_name(&self.resources, resource_id),
            projections::user_name(&self.users, user_id),
        );
        self.log_system_entry(ActivityKind::ToolAllocation, ACTION_ASSIGNED_TOOL, target);
        tracing::debug!(id = %id, resource = %resource_id, user = %user_id, "tool assigned");
        id
    }

    /// Return an allocated tool: Active -> Returned with today's end date.
    ///
    /// No-op when the id does not resolve or the allocation was already
    /// returned (the allocation history never reactivates). Deliberately not
    /// logged, unlike `assign_tool`.
    pub fn revoke_tool(&mut self, allocation_id: &str) {
        let today = self.clock.today();
        if let Some(allocation) = self
            .allocations
            .iter_mut()
            .find(|a| a.id == allocation_id && a.status == AllocationStatus::Active)
        {
            allocation.status = AllocationStatus::Returned;
            allocation.end_date = Some(today);
            tracing::debug!(id = %allocation_id, "tool returned");
        }
    }

    // =========================================================================
    // Workshop operations
    // =========================================================================

    /// Schedule a workshop and log it. Returns the generated id.
    pub fn add_workshop(&mut self, draft: NewWorkshop) -> String {
        let id = fresh_id();
        let target = draft.title.clone();
        self.workshops.insert(0, draft.into_workshop(id.clone()));
        self.log_system_entry(ActivityKind::Create, ACTION_SCHEDULED_EVENT, target);
        tracing::debug!(id = %id, "workshop scheduled");
        id
    }

    /// Remove the matching workshop. Not logged.
    pub fn delete_workshop(&mut self, id: &str) {
        self.workshops.retain(|w| w.id != id);
    }

    // =========================================================================
    // Book operations
    // =========================================================================

    /// Add a book club pick and log it. Returns the generated id.
    ///
    /// Does not enforce the at-most-one-Current shelf rule; that is a soft
    /// invariant readers assume and admins may transiently violate.
    pub fn add_book(&mut self, draft: NewBook) -> String {
        let id = fresh_id();
        let target = draft.title.clone();
        self.books.insert(0, draft.into_book(id.clone()));
        self.log_system_entry(ActivityKind::Create, ACTION_ADDED_BOOK, target);
        tracing::debug!(id = %id, "book added");
        id
    }

    /// Remove the matching book. Not logged.
    pub fn delete_book(&mut self, id: &str) {
        self.books.retain(|b| b.id != id);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Prepend a system-generated activity entry stamped with a snapshot of
    /// the acting user.
    fn log_system_entry(&mut self, kind: ActivityKind, action: &str, target: String) {
        let entry = ActivityEntry {
            id: fresh_id(),
            user_id: self.current_user.id.clone(),
            user_name: self.current_user.name.clone(),
            user_avatar: self.current_user.avatar_url.clone(),
            timestamp: FEED_TIMESTAMP_JUST_NOW.to_string(),
            kind,
            body: ActivityBody::System {
                action: action.to_string(),
                target,
            },
        };
        self.activity.insert(0, entry);
    }
}
