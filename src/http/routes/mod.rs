//! Resource routers, one module per collection.

pub mod carts;
pub mod categories;
pub mod products;
pub mod users;
