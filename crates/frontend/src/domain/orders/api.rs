use contracts::domain::order::{CreateOrder, Order, OrderCutting, OrderStatus, OrderStatusUpdate};

use crate::shared::api_utils;

pub async fn fetch_orders(token: &str) -> Result<Vec<Order>, String> {
    api_utils::get_json("/api/orders", token).await
}

pub async fn fetch_order(token: &str, id: &str) -> Result<Order, String> {
    api_utils::get_json(&format!("/api/orders/{}", id), token).await
}

pub async fn create_order(token: &str, order: &CreateOrder) -> Result<Order, String> {
    api_utils::post_json("/api/orders", token, order).await
}

pub async fn update_order_status(
    token: &str,
    id: &str,
    status: OrderStatus,
) -> Result<Order, String> {
    api_utils::put_json(
        &format!("/api/orders/{}/status", id),
        token,
        &OrderStatusUpdate { status },
    )
    .await
}

pub async fn update_order_cutting(
    token: &str,
    id: &str,
    cutting: &OrderCutting,
) -> Result<Order, String> {
    api_utils::post_json(&format!("/api/orders/{}/cutting", id), token, cutting).await
}
