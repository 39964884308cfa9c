//! Advisory authorization policy.
//!
//! A pure function of (role, capability) that views evaluate before offering
//! an action. The store performs no check of its own - gating here controls
//! which affordances are rendered, nothing more.

use crate::domain::{Assignment, User, UserRole};
use crate::projections;

/// Actions views gate behind a role check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Open the Team Management view, add/remove users.
    ManageTeam,
    /// Add/remove resources and allocate tools.
    EditCatalog,
    /// Schedule or delete workshops and book club picks.
    ScheduleEvents,
    /// Create assignments and grade submitted work.
    Grade,
}

/// Whether `role` may exercise `capability`.
///
/// Every capability currently resolves to the management tier; SUPER_ADMIN
/// and ADMIN are distinguished only in display, not in permissions.
pub fn allows(role: UserRole, capability: Capability) -> bool {
    match capability {
        Capability::ManageTeam
        | Capability::EditCatalog
        | Capability::ScheduleEvents
        | Capability::Grade => role.is_management(),
    }
}

/// Assignments `viewer` is entitled to see.
///
/// Management sees the whole collection; staff see only work addressed to
/// them.
pub fn visible_assignments<'a>(assignments: &'a [Assignment], viewer: &User) -> Vec<&'a Assignment> {
    if viewer.is_management() {
        assignments.iter().collect()
    } else {
        projections::assignments_for(assignments, &viewer.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SeedData;

    #[test]
    fn staff_sees_only_their_own_assignments() {
        let seed = SeedData::default();
        let staff = seed.users.iter().find(|u| u.id == "u3").unwrap();
        let admin = seed.users.iter().find(|u| u.id == "u4").unwrap();

        let own = visible_assignments(&seed.assignments, staff);
        assert!(own.iter().all(|a| a.assigned_to == "u3"));

        let all = visible_assignments(&seed.assignments, admin);
        assert_eq!(all.len(), seed.assignments.len());
    }

    #[test]
    fn staff_has_no_management_capabilities() {
        for capability in [
            Capability::ManageTeam,
            Capability::EditCatalog,
            Capability::ScheduleEvents,
            Capability::Grade,
        ] {
            assert!(allows(UserRole::SuperAdmin, capability));
            assert!(allows(UserRole::Admin, capability));
            assert!(!allows(UserRole::Staff, capability));
        }
    }
}
