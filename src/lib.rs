//! TechTonic Catalog API Library
//!
//! A REST API exposing CRUD operations over a document database for an
//! e-commerce catalog: users, products, categories, and shopping carts.

pub mod catalog;
pub mod config;
pub mod http;
pub mod store;

pub use config::ApiConfig;
pub use http::HttpServer;
pub use store::Store;
