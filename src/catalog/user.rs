//! User documents and their update projections.
//!
//! A user's `email` is the stable external key for user-scoped operations;
//! the store-generated id is only used for deletion.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, to_bson, Bson, Document};
use serde::{Deserialize, Serialize};

/// Postal address nested under a user document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A user document as stored and returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// External identity provider id, caller-supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_blocked: Option<bool>,

    /// Whatever else the caller sent; persisted verbatim on insert.
    #[serde(flatten)]
    pub extra: Document,
}

/// Allow-listed fields for `PATCH /users/{email}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub uid: Option<String>,
    pub is_admin: Option<bool>,
    pub is_blocked: Option<bool>,
}

impl UserUpdate {
    /// `$set` projection over the fixed allow-list.
    ///
    /// Every allow-listed key is always written; fields the caller omitted
    /// become null, including an absent nested address. Keys outside the
    /// list never reach the store.
    pub fn set_document(&self) -> Document {
        doc! {
            "$set": {
                "displayName": self.display_name.clone(),
                "photoUrl": self.photo_url.clone(),
                "phone": self.phone.clone(),
                "address": to_bson(&self.address).unwrap_or(Bson::Null),
                "uid": self.uid.clone(),
                "isAdmin": self.is_admin,
                "isBlocked": self.is_blocked,
            }
        }
    }
}

/// Body of `PATCH /users/{email}/role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    pub is_admin: Option<bool>,
}

impl RoleUpdate {
    /// `$set` merge of the `isAdmin` flag only.
    pub fn set_document(&self) -> Document {
        doc! { "$set": { "isAdmin": self.is_admin } }
    }
}
