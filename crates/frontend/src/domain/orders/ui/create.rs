use contracts::domain::branch::Branch;
use contracts::domain::category::ProductCategory;
use contracts::domain::order::CreateOrder;
use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::branches;
use crate::domain::orders::api;
use crate::domain::orders::cart::{self, Cart, CartLine};
use crate::domain::stock::api as stock_api;
use crate::system::auth::context::use_session;

/// Order cart workflow: pick a delivery branch, browse its categories,
/// collect products into the persisted cart, submit the order.
#[component]
pub fn CreateOrderPage() -> impl IntoView {
    let session = use_session();

    let branches = RwSignal::new(Vec::<Branch>::new());
    let selected_branch = RwSignal::new(String::new());
    let categories = RwSignal::new(Vec::<ProductCategory>::new());
    let selected_category = RwSignal::new(Option::<ProductCategory>::None);
    let products = RwSignal::new(Vec::<Product>::new());

    let cart_state = RwSignal::new(cart::load_cart());
    let customer_name = RwSignal::new(String::new());
    let delivery_date = RwSignal::new(String::new());

    let error = RwSignal::new(Option::<String>::None);
    let success = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    if let Some(token) = session.token() {
        spawn_local(async move {
            match branches::api::fetch_branches(&token).await {
                Ok(list) => branches.set(list),
                Err(e) => error.set(Some(e)),
            }
        });
    }
    if let Some(token) = session.token() {
        spawn_local(async move {
            if let Ok(all) = stock_api::fetch_products(&token).await {
                products.set(all);
            }
        });
    }

    let load_categories = move |branch_id: String| {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match stock_api::fetch_categories(&token, &branch_id).await {
                Ok(list) => {
                    selected_category.set(list.first().cloned());
                    categories.set(list);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let category_products = Signal::derive(move || {
        let Some(category) = selected_category.get() else {
            return Vec::new();
        };
        products
            .get()
            .into_iter()
            .filter(|product| {
                product.product_category_id == category.id
                    && product.stock.unwrap_or(0) > 0
            })
            .collect::<Vec<_>>()
    });

    let persist = move |updated: Cart| {
        cart::save_cart(&updated);
        cart_state.set(updated);
    };

    let add_to_cart = move |product: Product| {
        let branch_id = selected_branch.get_untracked();
        let Some(category) = selected_category.get_untracked() else {
            return;
        };
        let mut updated = cart_state.get_untracked();
        if !updated.accepts_branch(&branch_id) {
            error.set(Some(
                "Sepette başka bir şubenin ürünleri var. Önce sepeti boşaltınız.".to_string(),
            ));
            return;
        }
        error.set(None);
        updated.upsert_line(CartLine {
            product_id: product.id.clone(),
            branch_id,
            category_id: category.id.clone(),
            category_name: category.name.clone(),
            diameter: product.diameter,
            length: product.length,
            unit_weight: product.weight.unwrap_or(0.0),
            quantity: 1,
            cut_length: None,
            fields: product.fields.clone(),
        });
        persist(updated);
    };

    let change_quantity = move |product_id: String, delta: i64| {
        let mut updated = cart_state.get_untracked();
        if let Some(line) = updated
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = (line.quantity + delta).max(1);
        }
        persist(updated);
    };

    let set_cut_length = move |product_id: String, raw: String| {
        let mut updated = cart_state.get_untracked();
        if let Some(line) = updated
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.cut_length = raw.trim().parse::<i64>().ok().filter(|n| *n > 0);
        }
        persist(updated);
    };

    let remove_line = move |product_id: String| {
        let mut updated = cart_state.get_untracked();
        updated.remove_line(&product_id);
        persist(updated);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);

        let cart_snapshot = cart_state.get_untracked();
        if cart_snapshot.is_empty() {
            error.set(Some("Sepet boş. Lütfen önce ürün ekleyiniz.".to_string()));
            return;
        }
        if customer_name.get_untracked().trim().is_empty() {
            error.set(Some("Lütfen müşteri adını giriniz.".to_string()));
            return;
        }
        let Some(own_branch) = session.get().map(|s| s.branch_id) else {
            return;
        };
        let Some(delivery_branch) = cart_snapshot
            .lines
            .first()
            .map(|line| line.branch_id.clone())
        else {
            return;
        };

        let order = CreateOrder {
            customer_name: customer_name.get_untracked().trim().to_string(),
            order_given_branch_id: own_branch,
            order_delivery_branch_id: delivery_branch,
            order_delivery_date: {
                let date = delivery_date.get_untracked();
                (!date.trim().is_empty()).then(|| date.trim().to_string())
            },
            order_items: cart_snapshot.to_order_items(),
        };

        let Some(token) = session.token() else {
            return;
        };
        submitting.set(true);
        spawn_local(async move {
            match api::create_order(&token, &order).await {
                Ok(_) => {
                    cart::clear_cart();
                    cart_state.set(Cart::default());
                    customer_name.set(String::new());
                    delivery_date.set(String::new());
                    success.set(Some("Sipariş başarıyla oluşturuldu".to_string()));
                }
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Sipariş Oluştur"</h2>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || success.get().is_some()>
                <div class="success-message">{move || success.get().unwrap_or_default()}</div>
            </Show>

            <div class="form-group">
                <label>"Şube"</label>
                <select
                    class="input-field"
                    on:change=move |ev| {
                        let branch_id = event_target_value(&ev);
                        selected_branch.set(branch_id.clone());
                        load_categories(branch_id);
                    }
                >
                    <option value="">"Şube seçiniz"</option>
                    <For
                        each=move || branches.get()
                        key=|branch| branch.id.clone()
                        children=|branch| {
                            view! {
                                <option value=branch.id.clone()>{branch.name.clone()}</option>
                            }
                        }
                    />
                </select>
            </div>

            <div class="category-tabs">
                <For
                    each=move || categories.get()
                    key=|category| category.id.clone()
                    children=move |category| {
                        let select_category = category.clone();
                        let id = category.id.clone();
                        view! {
                            <button
                                class="category-tab"
                                class:active=move || {
                                    selected_category
                                        .get()
                                        .is_some_and(|selected| selected.id == id)
                                }
                                on:click=move |_| selected_category.set(Some(select_category.clone()))
                            >
                                {category.name.clone()}
                            </button>
                        }
                    }
                />
            </div>

            <Show when=move || !category_products.get().is_empty()>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Çap (mm)"</th>
                            <th>"Uzunluk (mm)"</th>
                            <th>"Ağırlık (kg)"</th>
                            <th>"Stok"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            category_products
                                .get()
                                .into_iter()
                                .map(|product| {
                                    let add_product = product.clone();
                                    view! {
                                        <tr>
                                            <td>{product.diameter.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{product.length.map(|l| format!("{:.2}", l)).unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{product.weight.map(|w| format!("{:.2}", w)).unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{product.stock.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                            <td>
                                                <button
                                                    class="btn-primary"
                                                    on:click=move |_| add_to_cart(add_product.clone())
                                                >
                                                    "Sepete Ekle"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>

            <div class="cart">
                <h3>{move || format!("Sepet ({} kalem)", cart_state.get().len())}</h3>

                <Show
                    when=move || !cart_state.get().is_empty()
                    fallback=|| view! { <p class="field-hint">"Sepet boş."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Başlık"</th>
                                <th>"Çap (mm)"</th>
                                <th>"Adet"</th>
                                <th>"Kesim (mm)"</th>
                                <th>"Toplam Ağırlık (kg)"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                cart_state
                                    .get()
                                    .lines
                                    .into_iter()
                                    .map(|line| {
                                        let minus_id = line.product_id.clone();
                                        let plus_id = line.product_id.clone();
                                        let cut_id = line.product_id.clone();
                                        let remove_id = line.product_id.clone();
                                        view! {
                                            <tr>
                                                <td>{line.category_name.clone()}</td>
                                                <td>{line.diameter.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                                <td>
                                                    <button
                                                        class="btn-secondary"
                                                        on:click=move |_| change_quantity(minus_id.clone(), -1)
                                                    >
                                                        "−"
                                                    </button>
                                                    <span class="quantity">{line.quantity}</span>
                                                    <button
                                                        class="btn-secondary"
                                                        on:click=move |_| change_quantity(plus_id.clone(), 1)
                                                    >
                                                        "+"
                                                    </button>
                                                </td>
                                                <td>
                                                    <input
                                                        type="number"
                                                        step="1"
                                                        class="input-field input-narrow"
                                                        prop:value=line
                                                            .cut_length
                                                            .map(|c| c.to_string())
                                                            .unwrap_or_default()
                                                        on:change=move |ev| {
                                                            set_cut_length(cut_id.clone(), event_target_value(&ev))
                                                        }
                                                    />
                                                </td>
                                                <td>{format!("{:.2}", line.total_weight())}</td>
                                                <td>
                                                    <button
                                                        class="btn-danger"
                                                        on:click=move |_| remove_line(remove_id.clone())
                                                    >
                                                        "Kaldır"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>

                    <p class="cart-total">
                        {move || format!("Toplam ağırlık: {:.2} kg", cart_state.get().total_weight())}
                    </p>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Müşteri Adı "<span class="required-mark">"*"</span></label>
                        <input
                            type="text"
                            class="input-field"
                            prop:value=move || customer_name.get()
                            on:input=move |ev| customer_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label>"Teslim Tarihi"</label>
                        <input
                            type="date"
                            class="input-field"
                            prop:value=move || delivery_date.get()
                            on:input=move |ev| delivery_date.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Gönderiliyor..." } else { "Siparişi Gönder" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
