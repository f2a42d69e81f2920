//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → server.rs (Axum setup, middleware: trace, timeout, CORS)
//!     → routes/* (parse path/body, build filter document)
//!     → one store call (find / insert / update / delete)
//!     → error.rs (typed failures → status + JSON body)
//!     → raw store result serialized back to the client
//! ```

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
