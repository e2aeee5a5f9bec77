use contracts::domain::order::{Order, OrderStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::detail::OrderDetailModal;
use crate::domain::orders::api;
use crate::system::auth::context::use_session;

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Created => "status-created",
        OrderStatus::Approved => "status-approved",
        OrderStatus::Ready => "status-ready",
        OrderStatus::Shipped => "status-shipped",
        OrderStatus::Cancelled => "status-cancelled",
    }
}

// Approval flow: Oluşturuldu → Onaylandı → Hazır → Çıktı.
fn next_status(status: OrderStatus) -> Option<OrderStatus> {
    match status {
        OrderStatus::Created => Some(OrderStatus::Approved),
        OrderStatus::Approved => Some(OrderStatus::Ready),
        OrderStatus::Ready => Some(OrderStatus::Shipped),
        OrderStatus::Shipped | OrderStatus::Cancelled => None,
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let session = use_session();

    let orders = RwSignal::new(Vec::<Order>::new());
    let error = RwSignal::new(Option::<String>::None);
    let detail_order_id = RwSignal::new(Option::<String>::None);

    let reload = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_orders(&token).await {
                Ok(list) => orders.set(list),
                Err(e) => error.set(Some(e)),
            }
        });
    };
    reload();

    let set_status = move |id: String, status: OrderStatus| {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::update_order_status(&token, &id, status).await {
                Ok(_) => reload(),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    // Only the delivering branch (or an admin) advances an order.
    let can_act = move |order: &Order| session.can_manage_stock(&order.order_delivery_branch_id);

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Siparişler"</h2>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !orders.get().is_empty()
                fallback=|| view! { <p class="field-hint">"Görüntülenecek sipariş yok."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Müşteri"</th>
                            <th>"Sipariş Tarihi"</th>
                            <th>"Teslim Tarihi"</th>
                            <th>"Kalem"</th>
                            <th>"Toplam (₺)"</th>
                            <th>"Durum"</th>
                            <th>"İşlemler"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            orders
                                .get()
                                .into_iter()
                                .map(|order| {
                                    let status = order.order_status;
                                    let actionable = can_act(&order);
                                    let cancellable = !matches!(
                                        status,
                                        OrderStatus::Shipped | OrderStatus::Cancelled
                                    );
                                    let advance_button = actionable
                                        .then(|| next_status(status))
                                        .flatten()
                                        .map(|next| {
                                            let advance_id = order.id.clone();
                                            view! {
                                                <button
                                                    class="btn-primary"
                                                    on:click=move |_| {
                                                        set_status(advance_id.clone(), next)
                                                    }
                                                >
                                                    {next.display_name()}
                                                </button>
                                            }
                                        });
                                    let detail_id = order.id.clone();
                                    let detail_button = view! {
                                        <button
                                            class="btn-secondary"
                                            on:click=move |_| {
                                                detail_order_id.set(Some(detail_id.clone()))
                                            }
                                        >
                                            "Detay"
                                        </button>
                                    };
                                    let cancel_button = (actionable && cancellable).then(|| {
                                        let cancel_id = order.id.clone();
                                        view! {
                                            <button
                                                class="btn-danger"
                                                on:click=move |_| {
                                                    set_status(cancel_id.clone(), OrderStatus::Cancelled)
                                                }
                                            >
                                                "İptal Et"
                                            </button>
                                        }
                                    });
                                    view! {
                                        <tr>
                                            <td>{order.customer_name.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{order.order_given_date.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{order.order_delivery_date.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{order.order_items.len()}</td>
                                            <td>
                                                {order
                                                    .total_price
                                                    .map(|p| format!("{:.2}", p))
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td>
                                                <span class=format!("status-badge {}", status_class(status))>
                                                    {status.display_name()}
                                                </span>
                                            </td>
                                            <td>{detail_button}{advance_button}{cancel_button}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>

            {move || {
                detail_order_id.get().map(|order_id| {
                    view! {
                        <OrderDetailModal
                            order_id=order_id
                            on_close=Callback::new(move |_| detail_order_id.set(None))
                            on_changed=Callback::new(move |_| reload())
                        />
                    }
                })
            }}
        </div>
    }
}
