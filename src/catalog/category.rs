//! Category documents.
//!
//! Categories are read/insert only; they exist as a listing and as the
//! filter key for the category-scoped product query.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// A category document as stored and returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whatever else the document carries (icons, banners, ...).
    #[serde(flatten)]
    pub extra: Document,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_fields_round_trip() {
        let category: Category = serde_json::from_value(json!({
            "name": "smartphone",
            "icon": "https://cdn.example/phone.svg",
        }))
        .unwrap();

        assert_eq!(category.name.as_deref(), Some("smartphone"));
        let back = serde_json::to_value(&category).unwrap();
        assert_eq!(back["icon"], json!("https://cdn.example/phone.svg"));
    }
}
