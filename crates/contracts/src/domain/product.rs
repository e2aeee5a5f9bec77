use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stock item. The fixed numeric attributes are columns on the entity
/// itself; `fields` carries the category's dynamic attributes, keyed by the
/// non-fixed names of the category schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub product_category_id: String,
    pub diameter: Option<i64>,
    pub length: Option<f64>,
    pub weight: Option<f64>,
    pub purchase_price: Option<f64>,
    pub kg_price: Option<f64>,
    pub stock: Option<i64>,
    #[serde(default)]
    pub fields: BTreeMap<String, serde_json::Value>,
    pub is_active: Option<bool>,
    pub created_at: Option<String>,
    pub purchase_length: Option<f64>,
    pub purchase_weight: Option<f64>,
    pub purchase_stock: Option<i64>,
}

/// Create/update payload for a product. Exactly one of `purchasePrice` and
/// `kgPrice` is sent; the backend derives the other from weight and stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub product_category_id: String,
    pub diameter: i64,
    pub length: f64,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kg_price: Option<f64>,
    pub stock: i64,
    pub fields: BTreeMap<String, serde_json::Value>,
}
