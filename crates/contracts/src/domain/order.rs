use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lifecycle of an inter-branch order. The wire strings are the Turkish
/// vocabulary the backend stores; rendering only branches on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Oluşturuldu")]
    Created,
    #[serde(rename = "Onaylandı")]
    Approved,
    #[serde(rename = "Hazır")]
    Ready,
    #[serde(rename = "Çıktı")]
    Shipped,
    #[serde(rename = "İptal_Edildi")]
    Cancelled,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Created => "Oluşturuldu",
            Self::Approved => "Onaylandı",
            Self::Ready => "Hazır",
            Self::Shipped => "Çıktı",
            Self::Cancelled => "İptal Edildi",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: Option<String>,
    pub order_given_branch_id: String,
    pub order_delivery_branch_id: String,
    pub order_given_date: Option<String>,
    pub order_delivery_date: Option<String>,
    pub order_status: OrderStatus,
    #[serde(default)]
    pub order_items: Vec<BTreeMap<String, serde_json::Value>>,
    pub total_price: Option<f64>,
    pub total_wastage_weight: Option<f64>,
    pub total_wastage_length: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub customer_name: String,
    pub order_given_branch_id: String,
    pub order_delivery_branch_id: String,
    pub order_delivery_date: Option<String>,
    pub order_items: Vec<BTreeMap<String, serde_json::Value>>,
}

/// Body of `PUT /api/orders/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuttingInfo {
    pub product_id: String,
    pub quantity: i64,
    pub cut_length: i64,
    pub total_cut_weight: f64,
}

/// Body of `POST /api/orders/{id}/cutting`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCutting {
    pub order_id: String,
    pub cutting_info: Vec<CuttingInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_turkish_wire_strings() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Created).unwrap(),
            r#""Oluşturuldu""#
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>(r#""İptal_Edildi""#).unwrap(),
            OrderStatus::Cancelled
        );
        // Display variant drops the stored underscore.
        assert_eq!(OrderStatus::Cancelled.display_name(), "İptal Edildi");
    }
}
