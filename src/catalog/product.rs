//! Product documents and their update projection.
//!
//! The nested specifications tree is a read model only: the update
//! projection is the flat name/price/description/stock/photoURL set, applied
//! consistently (the two historical projection policies were mutually
//! exclusive, and the flat one is the one in force).

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Bson, Document};
use serde::{Deserialize, Serialize};

/// A product document as stored and returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,

    #[serde(rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    /// Category name this product is filed under; the category-scoped
    /// listing filters on it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Document>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<Specifications>,

    /// Whatever else the caller sent; persisted verbatim on insert.
    #[serde(flatten)]
    pub extra: Document,
}

/// Hardware specifications subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specifications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplaySpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery: Option<BatterySpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectivity: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensors: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<DimensionsSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySpec {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rear: Option<Bson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front: Option<FrontCameraSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontCameraSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Bson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatterySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charging: Option<Bson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionsSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

/// Allow-listed fields for `PATCH /products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub stock: Option<i64>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl ProductUpdate {
    /// `$set` projection over the flat allow-list; omitted fields become
    /// null, keys outside the list never reach the store.
    pub fn set_document(&self) -> Document {
        doc! {
            "$set": {
                "name": self.name.clone(),
                "price": self.price,
                "description": self.description.clone(),
                "stock": self.stock,
                "photoURL": self.photo_url.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn specifications_tree_deserializes() {
        let product: Product = serde_json::from_value(json!({
            "name": "Pixelon X2",
            "brand": "Pixelon",
            "price": 699.0,
            "category": "smartphone",
            "specifications": {
                "display": {"type": "OLED", "size": "6.1\"", "resolution": "2400x1080"},
                "processor": "Octa-core",
                "camera": {"rear": "50MP", "front": {"resolution": "12MP", "features": ["HDR"]}},
                "battery": {"capacity": "4500mAh", "type": "Li-Ion", "charging": "33W"},
                "dimensions": {"height": "151mm", "width": "71mm", "depth": "8mm", "weight": "180g"},
            },
        }))
        .unwrap();

        let specs = product.specifications.unwrap();
        assert_eq!(specs.display.unwrap().kind.as_deref(), Some("OLED"));
        assert_eq!(
            specs.camera.unwrap().front.unwrap().resolution.as_deref(),
            Some("12MP")
        );
        assert_eq!(specs.battery.unwrap().kind.as_deref(), Some("Li-Ion"));
    }

    #[test]
    fn photo_url_keeps_its_original_casing() {
        let product: Product =
            serde_json::from_value(json!({"photoURL": "https://cdn.example/p.png"})).unwrap();
        assert_eq!(product.photo_url.as_deref(), Some("https://cdn.example/p.png"));

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back, json!({"photoURL": "https://cdn.example/p.png"}));
    }

    #[test]
    fn update_projection_is_the_flat_allow_list() {
        let update: ProductUpdate = serde_json::from_value(json!({
            "name": "Pixelon X2",
            "price": 649.0,
            "stock": 10,
            "rating": 4.9,
            "specifications": {"processor": "Octa-core"},
        }))
        .unwrap();

        let expected = doc! {
            "$set": {
                "name": "Pixelon X2",
                "price": 649.0,
                "description": Bson::Null,
                "stock": 10_i64,
                "photoURL": Bson::Null,
            }
        };
        assert_eq!(update.set_document(), expected);
    }

    #[test]
    fn update_is_idempotent_on_the_projection() {
        let update: ProductUpdate =
            serde_json::from_value(json!({"name": "Pixelon X2", "price": 649.0})).unwrap();
        assert_eq!(update.set_document(), update.set_document());
    }
}
