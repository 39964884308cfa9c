//! Learning Hub - in-memory domain core for a role-based internal
//! learning dashboard.
//!
//! The crate owns one component, the [`DomainStore`]: the single source of
//! truth for users, resources, tool allocations, assignments, workshops,
//! book club picks, the activity feed, notifications, and session state.
//! Views read whole collections and derive what they display; every write
//! goes through the store's closed operation set so cross-entity side
//! effects (id generation, log-on-write) stay in one place.
//!
//! # Module layers
//!
//! - **config**: constants (fallback labels, feed action verbs)
//! - **domain**: entity types and creation payloads
//! - **store**: the domain store, its clock seam, and the seed dataset
//! - **policy**: advisory role -> capability rules consumed by views
//! - **projections**: read-time derivations (filters, partitions, weak
//!   reference resolution with fallback labels)
//! - **errors**: caller-side validation errors; the store itself never
//!   fails, it no-ops on unresolved ids
//!
//! # Example
//!
//! ```
//! use learning_hub::{DomainStore, policy, projections};
//! use learning_hub::policy::Capability;
//!
//! let mut store = DomainStore::seeded();
//! store.login();
//!
//! if policy::allows(store.current_user().role, Capability::EditCatalog) {
//!     store.assign_tool("r1", "u2");
//! }
//!
//! let holder = projections::user_name(store.users(), "u2");
//! assert_eq!(holder, "David Chen");
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod policy;
pub mod projections;
pub mod store;

// Re-export commonly used types at crate root
pub use domain::{User, UserRole};
pub use errors::{ensure_valid, AppError, AppResult};
pub use store::{Clock, DomainStore, FixedClock, SeedData, SystemClock};
