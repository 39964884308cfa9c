//! Integration tests for the domain store's full operation surface.
//!
//! Every test runs against the seed dataset with a pinned clock, mutates
//! through the store's operations only, and observes results through the
//! read surface - the same contract views live under.

use std::collections::HashSet;

use chrono::NaiveDate;

use learning_hub::domain::{
    ActivityBody, ActivityKind, AllocationStatus, AssignmentStatus, AssignmentType, BookStatus,
    NewAssignment, NewBook, NewResource, NewUser, NewWorkshop, WorkshopKind,
};
use learning_hub::{DomainStore, FixedClock, SeedData, UserRole};

fn nov(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 11, day).unwrap()
}

fn test_store() -> DomainStore {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    DomainStore::new(SeedData::default(), Box::new(FixedClock(nov(21))))
}

fn draft_assignment(title: &str, assigned_to: &str) -> NewAssignment {
    NewAssignment {
        title: title.to_string(),
        kind: AssignmentType::Course,
        assigned_by: "Sarah Jenkins".to_string(),
        assigned_to: assigned_to.to_string(),
        due_date: nov(30),
        status: AssignmentStatus::NotStarted,
        source_name: "Talstack".to_string(),
        description: None,
        estimated_time: None,
    }
}

// =============================================================================
// Id generation
// =============================================================================

#[test]
fn creation_operations_return_fresh_unique_ids() {
    let mut store = test_store();
    let seeded: HashSet<String> = store.users().iter().map(|u| u.id.clone()).collect();

    let mut ids = HashSet::new();
    ids.insert(store.add_assignment(draft_assignment("X", "u2")));
    ids.insert(store.add_user(NewUser {
        name: "Priya Patel".to_string(),
        email: "priya.p@company.com".to_string(),
        role: UserRole::Staff,
        department: "Design".to_string(),
        avatar_url: String::new(),
        manager_id: Some("u4".to_string()),
    }));
    ids.insert(store.add_resource(NewResource {
        name: "Frontend Masters".to_string(),
        logo_url: String::new(),
        url: "https://frontendmasters.com".to_string(),
        description: String::new(),
        is_official: false,
    }));
    ids.insert(store.assign_tool("r1", "u2"));

    assert_eq!(ids.len(), 4, "every creation yields a distinct id");
    assert!(ids.iter().all(|id| !id.is_empty()));
    assert!(ids.is_disjoint(&seeded), "fresh ids never collide with seeded ones");
}

// =============================================================================
// Assignments
// =============================================================================

#[test]
fn add_assignment_prepends_and_logs_exactly_once() {
    let mut store = test_store();
    let assignments_before = store.assignments().len();
    let activity_before = store.activity().len();

    store.add_assignment(draft_assignment("X", "u2"));

    assert_eq!(store.assignments().len(), assignments_before + 1);
    assert_eq!(store.assignments()[0].title, "X");
    assert_eq!(store.activity().len(), activity_before + 1);

    let entry = &store.activity()[0];
    assert_eq!(entry.kind, ActivityKind::Assignment);
    match &entry.body {
        ActivityBody::System { action, target } => {
            assert_eq!(action, "assigned");
            assert!(target.contains("X"));
            assert!(target.contains("David Chen"));
        }
        ActivityBody::Post { .. } => panic!("expected a system entry"),
    }
}

#[test]
fn add_assignment_to_stale_user_still_writes() {
    let mut store = test_store();
    let id = store.add_assignment(draft_assignment("Orientation", "nobody"));

    assert_eq!(store.assignments()[0].id, id);
    match &store.activity()[0].body {
        ActivityBody::System { target, .. } => assert!(target.contains("Unknown")),
        ActivityBody::Post { .. } => panic!("expected a system entry"),
    }
}

#[test]
fn status_update_is_silent_and_tolerates_misses() {
    let mut store = test_store();
    let activity_before = store.activity().len();

    store.update_assignment_status("a2", AssignmentStatus::Completed);
    let a2 = store.assignments().iter().find(|a| a.id == "a2").unwrap();
    assert_eq!(a2.status, AssignmentStatus::Completed);
    assert_eq!(store.activity().len(), activity_before, "status toggles are not logged");

    store.update_assignment_status("missing", AssignmentStatus::InProgress);
    assert_eq!(store.assignments().len(), 4);
}

#[test]
fn grading_sets_grade_and_feedback_together() {
    let mut store = test_store();

    store.grade_assignment("a1", "A", "Great work");

    let graded = store.assignments().iter().find(|a| a.id == "a1").unwrap();
    assert_eq!(graded.grade.as_deref(), Some("A"));
    assert_eq!(graded.feedback.as_deref(), Some("Great work"));

    let entry = &store.activity()[0];
    assert_eq!(entry.kind, ActivityKind::Grade);
    match &entry.body {
        ActivityBody::System { action, target } => {
            assert_eq!(action, "graded");
            assert_eq!(target, "Advanced TypeScript: Generics & Utility Types");
        }
        ActivityBody::Post { .. } => panic!("expected a system entry"),
    }
}

#[test]
fn grading_a_missing_assignment_is_a_noop() {
    let mut store = test_store();
    let activity_before = store.activity().len();

    store.grade_assignment("missing", "A", "Great work");

    assert!(store.assignments().iter().all(|a| a.id != "missing"));
    assert_eq!(store.activity().len(), activity_before);
    // No assignment ever carries only one of grade/feedback.
    assert!(store
        .assignments()
        .iter()
        .all(|a| a.grade.is_some() == a.feedback.is_some()));
}

// =============================================================================
// Users
// =============================================================================

#[test]
fn add_user_appends_at_the_tail() {
    let mut store = test_store();
    let id = store.add_user(NewUser {
        name: "Priya Patel".to_string(),
        email: "priya.p@company.com".to_string(),
        role: UserRole::Staff,
        department: "Design".to_string(),
        avatar_url: String::new(),
        manager_id: None,
    });

    let last = store.users().last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.name, "Priya Patel");
}

#[test]
fn removing_a_referenced_user_does_not_cascade() {
    let mut store = test_store();
    let assignments_before = store.assignments().len();
    let allocations_before = store.tool_allocations().len();

    store.remove_user("u2");

    assert_eq!(store.assignments().len(), assignments_before);
    assert_eq!(store.tool_allocations().len(), allocations_before);
    assert!(store.assignments().iter().any(|a| a.assigned_to == "u2"));
    assert_eq!(
        learning_hub::projections::user_name(store.users(), "u2"),
        "Unknown"
    );
}

#[test]
fn activity_snapshots_outlive_their_author() {
    let mut store = test_store();
    store.switch_user(); // act as Mike Ross (ADMIN)
    store.add_assignment(draft_assignment("X", "u2"));

    store.remove_user("u4");

    let entry = &store.activity()[0];
    assert_eq!(entry.user_name, "Mike Ross");
    assert_eq!(entry.user_avatar, "https://picsum.photos/id/1005/200/200");
}

// =============================================================================
// Resources and tool allocations
// =============================================================================

#[test]
fn assign_then_revoke_closes_the_allocation() {
    let mut store = test_store();
    let id = store.assign_tool("r1", "u2");

    let open = store.tool_allocations().iter().find(|a| a.id == id).unwrap();
    assert_eq!(open.status, AllocationStatus::Active);
    assert!(open.end_date.is_none());

    store.revoke_tool(&id);

    let closed = store.tool_allocations().iter().find(|a| a.id == id).unwrap();
    assert_eq!(closed.status, AllocationStatus::Returned);
    assert_eq!(closed.end_date, Some(nov(21)));
}

#[test]
fn revoke_is_a_noop_on_missing_or_returned_allocations() {
    let mut store = test_store();
    let before: Vec<_> = store.tool_allocations().to_vec();

    store.revoke_tool("missing");
    store.revoke_tool("ta2"); // seeded as already Returned

    let after = store.tool_allocations();
    assert_eq!(after.len(), before.len());
    let ta2 = after.iter().find(|a| a.id == "ta2").unwrap();
    assert_eq!(ta2.end_date, Some(NaiveDate::from_ymd_opt(2023, 8, 1).unwrap()));
}

#[test]
fn revoke_does_not_log_unlike_assign() {
    let mut store = test_store();
    let id = store.assign_tool("r1", "u2");
    let after_assign = store.activity().len();

    store.revoke_tool(&id);
    assert_eq!(store.activity().len(), after_assign);
}

#[test]
fn assign_tool_logs_resource_and_holder_names() {
    let mut store = test_store();
    store.assign_tool("r2", "u3");

    let entry = &store.activity()[0];
    assert_eq!(entry.kind, ActivityKind::ToolAllocation);
    match &entry.body {
        ActivityBody::System { action, target } => {
            assert_eq!(action, "assigned tool");
            assert_eq!(target, "Coursera to Elena Rodriguez");
        }
        ActivityBody::Post { .. } => panic!("expected a system entry"),
    }
}

#[test]
fn deleted_resource_leaves_orphaned_allocations_readable() {
    let mut store = test_store();
    store.remove_resource("r3");

    let orphan = store.tool_allocations().iter().find(|a| a.id == "ta1").unwrap();
    assert_eq!(orphan.resource_id, "r3");
    assert_eq!(
        learning_hub::projections::resource_name(store.resources(), "r3"),
        "Unknown Tool"
    );
}

#[test]
fn assign_tool_with_stale_ids_degrades_only_the_log_line() {
    let mut store = test_store();
    let allocations_before = store.tool_allocations().len();

    store.assign_tool("gone-resource", "gone-user");

    assert_eq!(store.tool_allocations().len(), allocations_before + 1);
    match &store.activity()[0].body {
        ActivityBody::System { target, .. } => {
            assert_eq!(target, "Unknown Tool to Unknown");
        }
        ActivityBody::Post { .. } => panic!("expected a system entry"),
    }
}

// =============================================================================
// Workshops and books
// =============================================================================

#[test]
fn add_workshop_prepends_and_logs_a_create_entry() {
    let mut store = test_store();
    let id = store.add_workshop(NewWorkshop {
        title: "Incident Response Drill".to_string(),
        date: nov(28),
        instructor: "Sarah Jenkins".to_string(),
        description: String::new(),
        kind: WorkshopKind::Virtual,
        location: None,
        meeting_url: Some("https://meet.google.com/xyz".to_string()),
        recording_url: None,
        materials_url: None,
        attendees: vec!["u2".to_string()],
    });

    assert_eq!(store.workshops()[0].id, id);
    let entry = &store.activity()[0];
    assert_eq!(entry.kind, ActivityKind::Create);
    match &entry.body {
        ActivityBody::System { action, target } => {
            assert_eq!(action, "scheduled event");
            assert_eq!(target, "Incident Response Drill");
        }
        ActivityBody::Post { .. } => panic!("expected a system entry"),
    }

    store.delete_workshop(&id);
    assert!(store.workshops().iter().all(|w| w.id != id));
}

#[test]
fn multiple_current_books_are_tolerated() {
    let mut store = test_store();
    store.add_book(NewBook {
        title: "The Staff Engineer's Path".to_string(),
        author: "Tanya Reilly".to_string(),
        cover_url: String::new(),
        discussion_date: NaiveDate::from_ymd_opt(2023, 12, 16).unwrap(),
        location: None,
        meeting_url: None,
        slack_thread_url: None,
        description: String::new(),
        status: BookStatus::Current,
    });

    let current: Vec<_> = store
        .books()
        .iter()
        .filter(|b| b.status == BookStatus::Current)
        .collect();
    assert_eq!(current.len(), 2, "the store does not enforce the single-Current shelf rule");

    let entry = &store.activity()[0];
    assert_eq!(entry.kind, ActivityKind::Create);
    match &entry.body {
        ActivityBody::System { action, .. } => assert_eq!(action, "added book"),
        ActivityBody::Post { .. } => panic!("expected a system entry"),
    }
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn login_flips_the_flag_without_credentials() {
    let mut store = test_store();
    assert!(!store.is_authenticated());

    store.login();
    assert!(store.is_authenticated());

    store.logout();
    assert!(!store.is_authenticated());
    assert_eq!(store.users().len(), 4, "logout retains entity collections");
}

#[test]
fn switch_user_three_times_returns_to_the_super_admin() {
    let mut store = test_store();
    let start = store.current_user().id.clone();

    store.switch_user();
    store.switch_user();
    store.switch_user();

    assert_eq!(store.current_user().id, start);
    assert_eq!(store.current_user().role, UserRole::SuperAdmin);
}

#[test]
fn log_entries_snapshot_the_acting_identity() {
    let mut store = test_store();
    store.switch_user(); // Mike Ross
    store.assign_tool("r1", "u3");
    store.switch_user(); // David Chen

    let entry = &store.activity()[0];
    assert_eq!(entry.user_name, "Mike Ross");
    assert_eq!(entry.user_id, "u4");
    assert_eq!(entry.timestamp, "Just now");
}
