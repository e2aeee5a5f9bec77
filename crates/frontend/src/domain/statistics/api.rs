use contracts::domain::statistics::{
    DateRange, PurchaseTotals, PurchasedProductsReport, SoldProductsReport, SoldTotals,
};

use crate::shared::api_utils;

pub async fn fetch_purchased(
    token: &str,
    range: &DateRange,
) -> Result<PurchasedProductsReport, String> {
    api_utils::post_json("/api/statistics/purchased-products-between-dates", token, range).await
}

pub async fn fetch_purchased_totals(
    token: &str,
    range: &DateRange,
) -> Result<PurchaseTotals, String> {
    api_utils::post_json(
        "/api/statistics/purchased-products-between-dates/total",
        token,
        range,
    )
    .await
}

pub async fn fetch_sold(token: &str, range: &DateRange) -> Result<SoldProductsReport, String> {
    api_utils::post_json("/api/statistics/sold-products-between-dates", token, range).await
}

pub async fn fetch_sold_totals(token: &str, range: &DateRange) -> Result<SoldTotals, String> {
    api_utils::post_json(
        "/api/statistics/sold-products-between-dates/total",
        token,
        range,
    )
    .await
}
