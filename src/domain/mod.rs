//! Domain layer - entity types and their creation payloads.
//!
//! Entities are plain data with weak string references between collections;
//! lifecycle rules (id generation, log-on-write, status transitions) live in
//! the store, not here. Serde attributes preserve the upstream camelCase
//! wire shapes.

pub mod activity;
pub mod allocation;
pub mod assignment;
pub mod book;
pub mod notification;
pub mod resource;
pub mod user;
pub mod workshop;

pub use activity::{ActivityBody, ActivityEntry, ActivityKind};
pub use allocation::{AllocationStatus, ToolAllocation};
pub use assignment::{Assignment, AssignmentStatus, AssignmentType, NewAssignment};
pub use book::{Book, BookStatus, NewBook};
pub use notification::{Notification, NotificationKind};
pub use resource::{NewResource, Resource};
pub use user::{NewUser, User, UserRole};
pub use workshop::{NewWorkshop, Workshop, WorkshopKind};
