//! Document store subsystem.
//!
//! # Data Flow
//! ```text
//! startup:
//!     DatabaseConfig
//!         → client.rs (parse options, Stable API v1, connect, ping)
//!         → Store (long-lived handle over the four collections)
//!         → injected into the HTTP router at construction
//!
//! per request:
//!     handler builds a filter document
//!         → one driver call (find / find_one / insert_one / update_one / delete_one)
//!         → results.rs (serializable mutation-result descriptor)
//! ```
//!
//! # Design Decisions
//! - One handle for the whole process; the driver owns pooling
//! - No explicit shutdown path while serving (dropped at process exit)
//! - Each single-document write relies on the store's own atomicity

pub mod client;
pub mod results;

pub use client::{Store, StoreError};
pub use results::{DeleteOutcome, InsertOutcome, UpdateOutcome};
