use contracts::domain::branch::Branch;
use contracts::domain::category::ProductCategory;
use contracts::domain::product::Product;
use contracts::shared::fields::{
    filter_fixed, format_field_value, translate_label, FieldKind, FieldSchema,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::category_form::CategoryFormModal;
use super::product_form::ProductFormModal;
use crate::domain::branches;
use crate::domain::stock::api;
use crate::system::auth::context::use_session;

/// Stock management: category list per branch, product table with the
/// category's dynamic columns, create/edit modals.
#[component]
pub fn StockPage() -> impl IntoView {
    let session = use_session();

    let branches = RwSignal::new(Vec::<Branch>::new());
    let selected_branch = RwSignal::new(
        session
            .get()
            .map(|s| s.branch_id)
            .unwrap_or_default(),
    );
    let categories = RwSignal::new(Vec::<ProductCategory>::new());
    let selected_category = RwSignal::new(Option::<ProductCategory>::None);
    let products = RwSignal::new(Vec::<Product>::new());
    let error = RwSignal::new(Option::<String>::None);

    let show_category_modal = RwSignal::new(false);
    let show_product_modal = RwSignal::new(false);
    let editing_product = RwSignal::new(Option::<Product>::None);

    let reload_products = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_products(&token).await {
                Ok(all) => products.set(all),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let reload_categories = move || {
        let Some(token) = session.token() else {
            return;
        };
        let branch_id = selected_branch.get_untracked();
        if branch_id.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::fetch_categories(&token, &branch_id).await {
                Ok(list) => {
                    selected_category.set(list.first().cloned());
                    categories.set(list);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    // Admins pick the branch; branch accounts are pinned to their own.
    if session.is_admin() {
        if let Some(token) = session.token() {
            spawn_local(async move {
                if let Ok(list) = branches::api::fetch_branches(&token).await {
                    branches.set(list);
                }
            });
        }
    }

    reload_categories();
    reload_products();

    let can_manage = Signal::derive(move || {
        selected_category
            .get()
            .map(|category| session.can_manage_stock(&category.branch_id))
            .unwrap_or(false)
    });

    // Dynamic columns of the selected category, in schema order.
    let dynamic_columns = Signal::derive(move || {
        selected_category
            .get()
            .map(|category| {
                let schema =
                    FieldSchema::from_merged(&filter_fixed(&category.final_fields), false);
                schema
                    .iter()
                    .map(|(name, entry)| (name.to_string(), entry.spec.kind))
                    .collect::<Vec<(String, FieldKind)>>()
            })
            .unwrap_or_default()
    });

    let category_products = Signal::derive(move || {
        let Some(category) = selected_category.get() else {
            return Vec::new();
        };
        products
            .get()
            .into_iter()
            .filter(|product| product.product_category_id == category.id)
            .collect::<Vec<_>>()
    });

    let delete_product = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Bu ürünü silmek istediğinize emin misiniz?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_product(&token, &id).await {
                Ok(()) => reload_products(),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let on_category_saved = Callback::new(move |_| {
        show_category_modal.set(false);
        reload_categories();
    });
    let on_product_saved = Callback::new(move |_| {
        show_product_modal.set(false);
        editing_product.set(None);
        reload_products();
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Stok Yönetimi"</h2>
                <div class="page-actions">
                    <Show when=move || session.is_admin()>
                        <select
                            class="input-field"
                            on:change=move |ev| {
                                selected_branch.set(event_target_value(&ev));
                                reload_categories();
                            }
                        >
                            <For
                                each=move || branches.get()
                                key=|branch| branch.id.clone()
                                children=move |branch| {
                                    let selected = selected_branch.get_untracked() == branch.id;
                                    view! {
                                        <option value=branch.id.clone() selected=selected>
                                            {branch.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        <button
                            class="btn-secondary"
                            on:click=move |_| show_category_modal.set(true)
                        >
                            "+ Yeni Ürün Başlığı"
                        </button>
                    </Show>
                    <Show when=move || selected_category.get().is_some() && can_manage.get()>
                        <button
                            class="btn-primary"
                            on:click=move |_| {
                                editing_product.set(None);
                                show_product_modal.set(true);
                            }
                        >
                            "+ Yeni Ürün"
                        </button>
                    </Show>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

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

            <Show
                when=move || selected_category.get().is_some()
                fallback=|| view! { <p class="field-hint">"Görüntülenecek ürün başlığı yok."</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Çap (mm)"</th>
                            <th>"Uzunluk (mm)"</th>
                            <th>"Ağırlık (kg)"</th>
                            <th>"Stok"</th>
                            <For
                                each=move || dynamic_columns.get()
                                key=|(name, _)| name.clone()
                                children=|(name, _)| view! { <th>{translate_label(&name)}</th> }
                            />
                            <Show when=move || can_manage.get()>
                                <th>"Toplam Fiyat (₺)"</th>
                                <th>"Kg Fiyatı (₺/kg)"</th>
                                <th>"İşlemler"</th>
                            </Show>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let columns = dynamic_columns.get();
                            let manage = can_manage.get();
                            category_products
                                .get()
                                .into_iter()
                                .map(|product| {
                                    let edit_product = product.clone();
                                    let delete_id = product.id.clone();
                                    let dynamic_cells = columns
                                        .iter()
                                        .map(|(name, kind)| {
                                            let value = product
                                                .fields
                                                .get(name)
                                                .cloned()
                                                .unwrap_or(serde_json::Value::Null);
                                            view! { <td>{format_field_value(*kind, &value)}</td> }
                                        })
                                        .collect_view();
                                    let price_cells = manage.then(|| {
                                        view! {
                                            <td>{product_total_price(&product)}</td>
                                            <td>{product_kg_price(&product)}</td>
                                            <td>
                                                <button
                                                    class="btn-secondary"
                                                    on:click=move |_| {
                                                        editing_product.set(Some(edit_product.clone()));
                                                        show_product_modal.set(true);
                                                    }
                                                >
                                                    "Düzenle"
                                                </button>
                                                <button
                                                    class="btn-danger"
                                                    on:click=move |_| delete_product(delete_id.clone())
                                                >
                                                    "Sil"
                                                </button>
                                            </td>
                                        }
                                    });
                                    view! {
                                        <tr>
                                            <td>{cell_i64(product.diameter)}</td>
                                            <td>{cell_f64(product.length)}</td>
                                            <td>{cell_f64(product.weight)}</td>
                                            <td>{cell_i64(product.stock)}</td>
                                            {dynamic_cells}
                                            {price_cells}
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || show_category_modal.get()>
                <CategoryFormModal
                    branch_id=selected_branch.get_untracked()
                    on_close=Callback::new(move |_| show_category_modal.set(false))
                    on_saved=on_category_saved
                />
            </Show>

            <Show when=move || show_product_modal.get()>
                {move || {
                    selected_category.get().map(|category| {
                        view! {
                            <ProductFormModal
                                category=category
                                product=editing_product.get()
                                on_close=Callback::new(move |_| {
                                    show_product_modal.set(false);
                                    editing_product.set(None);
                                })
                                on_saved=on_product_saved
                            />
                        }
                    })
                }}
            </Show>
        </div>
    }
}

// Total price column: stored purchase price, or derived from kg price.
fn product_total_price(product: &Product) -> String {
    match (product.purchase_price, product.kg_price) {
        (Some(price), _) if price > 0.0 => format!("{:.2}", price),
        (_, Some(kg)) => match (product.weight, product.stock) {
            (Some(weight), Some(stock)) => format!("{:.2}", kg * weight * stock as f64),
            _ => "-".to_string(),
        },
        _ => "-".to_string(),
    }
}

// Kg price column: stored kg price, or derived from the total.
fn product_kg_price(product: &Product) -> String {
    match (product.kg_price, product.purchase_price) {
        (Some(kg), _) if kg > 0.0 => format!("{:.2}", kg),
        (_, Some(price)) => match (product.weight, product.stock) {
            (Some(weight), Some(stock)) if weight > 0.0 && stock > 0 => {
                format!("{:.2}", price / stock as f64 / weight)
            }
            _ => "-".to_string(),
        },
        _ => "-".to_string(),
    }
}

fn cell_i64(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}

fn cell_f64(value: Option<f64>) -> String {
    value
        .map(|n| format!("{:.2}", n))
        .unwrap_or_else(|| "-".to_string())
}
