use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Date range body shared by the statistics endpoints. Dates are ISO
/// `yyyy-MM-dd` strings; the backend owns parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

/// `purchased-products-between-dates` answers grouped by category name and
/// then by diameter.
pub type PurchasedProductsReport =
    BTreeMap<String, BTreeMap<String, Vec<PurchasedProductStatistics>>>;

/// `sold-products-between-dates` adds a delivery-branch grouping level.
pub type SoldProductsReport =
    BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<SoldProductStatistics>>>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedProductStatistics {
    pub diameter: Option<f64>,
    pub purchase_length: Option<f64>,
    pub purchase_weight: Option<f64>,
    pub purchase_price: Option<f64>,
    pub purchase_kg_price: Option<f64>,
    pub purchase_total_price: Option<f64>,
    #[serde(default)]
    pub fields: BTreeMap<String, serde_json::Value>,
    pub total_quantity: Option<i64>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldProductStatistics {
    pub product: Product,
    pub wastage_weight: Option<f64>,
    pub wastage_length: Option<f64>,
    pub cut_length: Option<f64>,
    pub cut_quantity: Option<i64>,
    pub total_sold_weight: Option<f64>,
    pub total_price: Option<f64>,
    pub kg_price: Option<f64>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseTotals {
    pub total_purchase_price: Option<f64>,
    pub total_purchase_weight: Option<f64>,
    pub total_purchase_quantity: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoldTotals {
    pub total_sold_weight: Option<f64>,
    pub total_price: Option<f64>,
    pub total_wastage_weight: Option<f64>,
}
