//! Cart documents.
//!
//! A cart is associated with its owner through the `email` field; the line
//! data itself is arbitrary and passes through untouched.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// A cart document as stored and returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Owning user's email; the user-scoped listing filters on it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Arbitrary cart line data, persisted verbatim.
    #[serde(flatten)]
    pub extra: Document,
}
