use contracts::domain::category::{CreateProductCategory, ProductCategory, ProductType};
use contracts::domain::product::{Product, ProductDto};

use crate::shared::api_utils;

pub async fn fetch_products(token: &str) -> Result<Vec<Product>, String> {
    api_utils::get_json("/api/stock", token).await
}

pub async fn create_product(token: &str, product: &ProductDto) -> Result<Product, String> {
    api_utils::post_json("/api/stock", token, product).await
}

pub async fn update_product(
    token: &str,
    id: &str,
    product: &ProductDto,
) -> Result<Product, String> {
    api_utils::put_json(&format!("/api/stock/{}", id), token, product).await
}

pub async fn delete_product(token: &str, id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/stock/{}", id), token).await
}

pub async fn fetch_categories(
    token: &str,
    branch_id: &str,
) -> Result<Vec<ProductCategory>, String> {
    api_utils::get_json(
        &format!("/api/stock/product-categories/{}/branch", branch_id),
        token,
    )
    .await
}

pub async fn create_category(
    token: &str,
    category: &CreateProductCategory,
) -> Result<ProductCategory, String> {
    api_utils::post_json("/api/stock/product-categories", token, category).await
}

pub async fn fetch_product_types(token: &str) -> Result<Vec<ProductType>, String> {
    api_utils::get_json("/api/stock/product-types", token).await
}
