use std::collections::BTreeMap;

use contracts::domain::order::{CuttingInfo, Order, OrderCutting, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::api;
use crate::system::auth::context::use_session;

/// One cutting input row per order item.
#[derive(Clone)]
struct CuttingRow {
    product_id: String,
    /// Weight of one piece, derived from the item's total weight.
    unit_weight: f64,
    quantity: RwSignal<String>,
    cut_length: RwSignal<String>,
}

fn item_str(item: &BTreeMap<String, serde_json::Value>, key: &str) -> String {
    item.get(key)
        .and_then(|value| value.as_str())
        .unwrap_or("-")
        .to_string()
}

fn item_f64(item: &BTreeMap<String, serde_json::Value>, key: &str) -> Option<f64> {
    item.get(key).and_then(|value| value.as_f64())
}

/// Detail modal for one order: item list, and for the delivering branch a
/// cutting form while the order is approved but not yet ready. The latest
/// order state is fetched by id on open.
#[component]
pub fn OrderDetailModal(
    order_id: String,
    on_close: Callback<()>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    let order = RwSignal::new(Option::<Order>::None);
    let cutting_rows = RwSignal::new(Vec::<CuttingRow>::new());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let fetch_id = order_id.clone();
    if let Some(token) = session.token() {
        spawn_local(async move {
            match api::fetch_order(&token, &fetch_id).await {
                Ok(fetched) => {
                    let rows = fetched
                        .order_items
                        .iter()
                        .map(|item| {
                            let quantity = item_f64(item, "quantity").unwrap_or(0.0);
                            let total_weight = item_f64(item, "totalWeight").unwrap_or(0.0);
                            let unit_weight = if quantity > 0.0 {
                                total_weight / quantity
                            } else {
                                0.0
                            };
                            CuttingRow {
                                product_id: item_str(item, "productId"),
                                unit_weight,
                                quantity: RwSignal::new(String::new()),
                                cut_length: RwSignal::new(String::new()),
                            }
                        })
                        .collect();
                    cutting_rows.set(rows);
                    order.set(Some(fetched));
                }
                Err(e) => error.set(Some(e)),
            }
        });
    }

    let can_cut = Signal::derive(move || {
        order.get().is_some_and(|order| {
            order.order_status == OrderStatus::Approved
                && session.can_manage_stock(&order.order_delivery_branch_id)
        })
    });

    let submit_id = order_id.clone();
    let submit_cutting = move |_| {
        let mut cutting_info = Vec::new();
        for row in cutting_rows.get_untracked() {
            let quantity = row.quantity.get_untracked().trim().parse::<i64>().unwrap_or(0);
            let cut_length = row
                .cut_length
                .get_untracked()
                .trim()
                .parse::<i64>()
                .unwrap_or(0);
            if quantity <= 0 || cut_length <= 0 {
                continue;
            }
            cutting_info.push(CuttingInfo {
                product_id: row.product_id.clone(),
                quantity,
                cut_length,
                total_cut_weight: row.unit_weight * quantity as f64,
            });
        }
        if cutting_info.is_empty() {
            error.set(Some("Lütfen en az bir kesim satırı giriniz".to_string()));
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        let cutting = OrderCutting {
            order_id: submit_id.clone(),
            cutting_info,
        };
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match api::update_order_cutting(&token, &cutting.order_id, &cutting).await {
                Ok(updated) => {
                    order.set(Some(updated));
                    on_changed.run(());
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal modal-wide">
                <div class="modal-header">
                    <h3>"Sipariş Detayı"</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"✕"</button>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>

                {move || {
                    order.get().map(|order| {
                        view! {
                            <div class="order-summary">
                                <p>
                                    "Müşteri: "
                                    {order.customer_name.clone().unwrap_or_else(|| "-".to_string())}
                                </p>
                                <p>"Durum: " {order.order_status.display_name()}</p>
                                <p>
                                    "Toplam Fire: "
                                    {order
                                        .total_wastage_weight
                                        .map(|w| format!("{:.2} kg", w))
                                        .unwrap_or_else(|| "-".to_string())}
                                </p>
                            </div>

                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Başlık"</th>
                                        <th>"Çap (mm)"</th>
                                        <th>"Adet"</th>
                                        <th>"Toplam Ağırlık (kg)"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {order
                                        .order_items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <tr>
                                                    <td>{item_str(item, "categoryName")}</td>
                                                    <td>
                                                        {item_f64(item, "diameter")
                                                            .map(|d| format!("{:.0}", d))
                                                            .unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td>
                                                        {item_f64(item, "quantity")
                                                            .map(|q| format!("{:.0}", q))
                                                            .unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td>
                                                        {item_f64(item, "totalWeight")
                                                            .map(|w| format!("{:.2}", w))
                                                            .unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                    })
                }}

                <Show when=move || can_cut.get()>
                    <div class="panel-section">
                        <h4>"Kesim Bilgileri"</h4>
                        {move || {
                            cutting_rows
                                .get()
                                .into_iter()
                                .map(|row| {
                                    let quantity = row.quantity;
                                    let cut_length = row.cut_length;
                                    view! {
                                        <div class="field-row">
                                            <span>{row.product_id.clone()}</span>
                                            <input
                                                type="number"
                                                step="1"
                                                class="input-field input-narrow"
                                                placeholder="Adet"
                                                prop:value=move || quantity.get()
                                                on:input=move |ev| {
                                                    quantity.set(event_target_value(&ev))
                                                }
                                            />
                                            <input
                                                type="number"
                                                step="1"
                                                class="input-field input-narrow"
                                                placeholder="Kesim (mm)"
                                                prop:value=move || cut_length.get()
                                                on:input=move |ev| {
                                                    cut_length.set(event_target_value(&ev))
                                                }
                                            />
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <button
                            class="btn-primary"
                            disabled=move || saving.get()
                            on:click=submit_cutting.clone()
                        >
                            {move || if saving.get() { "Kaydediliyor..." } else { "Kesimleri Kaydet" }}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
