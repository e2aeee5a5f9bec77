use contracts::domain::order::OrderStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::api as orders_api;
use crate::domain::stock::api as stock_api;
use crate::system::auth::context::use_session;

/// Landing page counters, computed client-side from the stock and order
/// lists.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    let total_products = RwSignal::new(0usize);
    let total_stock = RwSignal::new(0i64);
    let total_orders = RwSignal::new(0usize);
    let waiting_orders = RwSignal::new(0usize);
    let error = RwSignal::new(Option::<String>::None);

    if let Some(token) = session.token() {
        spawn_local(async move {
            match stock_api::fetch_products(&token).await {
                Ok(products) => {
                    total_products.set(products.len());
                    total_stock.set(products.iter().filter_map(|p| p.stock).sum());
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }
    if let Some(token) = session.token() {
        spawn_local(async move {
            match orders_api::fetch_orders(&token).await {
                Ok(orders) => {
                    total_orders.set(orders.len());
                    waiting_orders.set(
                        orders
                            .iter()
                            .filter(|order| order.order_status == OrderStatus::Created)
                            .count(),
                    );
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }

    let greeting = move || {
        session
            .get()
            .map(|s| format!("Hoş geldiniz, {}", s.username))
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Ana Sayfa"</h2>
                <p class="field-hint">{greeting}</p>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-label">"Ürün Çeşidi"</span>
                    <span class="stat-value">{move || total_products.get()}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Toplam Stok (Adet)"</span>
                    <span class="stat-value">{move || total_stock.get()}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Toplam Sipariş"</span>
                    <span class="stat-value">{move || total_orders.get()}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Bekleyen Sipariş"</span>
                    <span class="stat-value">{move || waiting_orders.get()}</span>
                </div>
            </div>
        </div>
    }
}
