//! Catalog entity types.
//!
//! # Design Decisions
//! - Documents are modeled as explicit structs with `Option` fields for
//!   every nested path the API reads, not open-ended maps
//! - A flattened document tail captures whatever else a caller sends, so
//!   create routes persist payloads verbatim
//! - Update payload types carry only their allow-listed fields and build
//!   their own `$set` projections; anything outside the list is dropped
//!   before it reaches the store
//! - Wire names match the deployed JSON (`displayName`, `isAdmin`,
//!   `photoURL`), store ids ride under `_id`

pub mod cart;
pub mod category;
pub mod product;
pub mod user;

pub use cart::Cart;
pub use category::Category;
pub use product::{Product, ProductUpdate, Specifications};
pub use user::{Address, RoleUpdate, User, UserUpdate};
