use chrono::Datelike;
use contracts::domain::statistics::{
    DateRange, PurchaseTotals, PurchasedProductStatistics, SoldProductStatistics, SoldTotals,
};
use contracts::shared::fields::translate_label;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::statistics::api;
use crate::system::auth::context::use_session;

/// Statistics over a date range: purchased and sold products with their
/// totals. Dynamic product fields are rendered generically, one
/// "label: value" pair per field.
#[component]
pub fn StatisticsPage() -> impl IntoView {
    let session = use_session();

    let today = chrono::Utc::now().date_naive();
    let month_start = today.with_day(1).unwrap_or(today);

    let start_date = RwSignal::new(month_start.format("%Y-%m-%d").to_string());
    let end_date = RwSignal::new(today.format("%Y-%m-%d").to_string());

    // Flattened report rows: (category, diameter group, entry).
    let purchased = RwSignal::new(Vec::<(String, String, PurchasedProductStatistics)>::new());
    let purchased_totals = RwSignal::new(PurchaseTotals::default());
    // (category, diameter group, delivery branch, entry).
    let sold = RwSignal::new(Vec::<(String, String, String, SoldProductStatistics)>::new());
    let sold_totals = RwSignal::new(SoldTotals::default());

    let loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let load = move || {
        let Some(token) = session.token() else {
            return;
        };
        let range = DateRange {
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
        };
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let purchased_result = api::fetch_purchased(&token, &range).await;
            let purchased_totals_result = api::fetch_purchased_totals(&token, &range).await;
            let sold_result = api::fetch_sold(&token, &range).await;
            let sold_totals_result = api::fetch_sold_totals(&token, &range).await;

            match purchased_result {
                Ok(report) => {
                    let rows = report
                        .into_iter()
                        .flat_map(|(category, by_diameter)| {
                            by_diameter.into_iter().flat_map(move |(diameter, entries)| {
                                let category = category.clone();
                                entries
                                    .into_iter()
                                    .map(move |entry| (category.clone(), diameter.clone(), entry))
                            })
                        })
                        .collect();
                    purchased.set(rows);
                }
                Err(e) => error.set(Some(e)),
            }
            if let Ok(totals) = purchased_totals_result {
                purchased_totals.set(totals);
            }
            match sold_result {
                Ok(report) => {
                    let rows = report
                        .into_iter()
                        .flat_map(|(category, by_diameter)| {
                            by_diameter.into_iter().flat_map(move |(diameter, by_branch)| {
                                let category = category.clone();
                                by_branch.into_iter().flat_map(move |(branch, entries)| {
                                    let category = category.clone();
                                    let diameter = diameter.clone();
                                    entries.into_iter().map(move |entry| {
                                        (
                                            category.clone(),
                                            diameter.clone(),
                                            branch.clone(),
                                            entry,
                                        )
                                    })
                                })
                            })
                        })
                        .collect();
                    sold.set(rows);
                }
                Err(e) => error.set(Some(e)),
            }
            if let Ok(totals) = sold_totals_result {
                sold_totals.set(totals);
            }
            loading.set(false);
        });
    };
    load();

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"İstatistikler"</h2>
                <div class="page-actions">
                    <input
                        type="date"
                        class="input-field"
                        prop:value=move || start_date.get()
                        on:input=move |ev| start_date.set(event_target_value(&ev))
                    />
                    <input
                        type="date"
                        class="input-field"
                        prop:value=move || end_date.get()
                        on:input=move |ev| end_date.set(event_target_value(&ev))
                    />
                    <button
                        class="btn-primary"
                        disabled=move || loading.get()
                        on:click=move |_| load()
                    >
                        {move || if loading.get() { "Yükleniyor..." } else { "Getir" }}
                    </button>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <section class="panel-section">
                <h3>"Satın Alınan Ürünler"</h3>
                <div class="stat-cards">
                    <div class="stat-card">
                        <span class="stat-label">"Toplam Tutar (₺)"</span>
                        <span class="stat-value">
                            {move || money(purchased_totals.get().total_purchase_price)}
                        </span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">"Toplam Ağırlık (kg)"</span>
                        <span class="stat-value">
                            {move || money(purchased_totals.get().total_purchase_weight)}
                        </span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">"Toplam Adet"</span>
                        <span class="stat-value">
                            {move || count(purchased_totals.get().total_purchase_quantity)}
                        </span>
                    </div>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Başlık"</th>
                            <th>"Çap (mm)"</th>
                            <th>"Adet"</th>
                            <th>"Ağırlık (kg)"</th>
                            <th>"Tutar (₺)"</th>
                            <th>"Kg Fiyatı (₺/kg)"</th>
                            <th>"Alanlar"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            purchased
                                .get()
                                .into_iter()
                                .map(|(category, diameter, entry)| {
                                    view! {
                                        <tr>
                                            <td>{category}</td>
                                            <td>{diameter}</td>
                                            <td>{entry.total_quantity.map(|q| q.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{money(entry.purchase_weight)}</td>
                                            <td>{money(entry.purchase_total_price.or(entry.purchase_price))}</td>
                                            <td>{money(entry.purchase_kg_price)}</td>
                                            <td>{fields_summary(&entry.fields)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>

            <section class="panel-section">
                <h3>"Satılan Ürünler"</h3>
                <div class="stat-cards">
                    <div class="stat-card">
                        <span class="stat-label">"Toplam Tutar (₺)"</span>
                        <span class="stat-value">{move || money(sold_totals.get().total_price)}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">"Satılan Ağırlık (kg)"</span>
                        <span class="stat-value">
                            {move || money(sold_totals.get().total_sold_weight)}
                        </span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-label">"Fire Ağırlık (kg)"</span>
                        <span class="stat-value">
                            {move || money(sold_totals.get().total_wastage_weight)}
                        </span>
                    </div>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Başlık"</th>
                            <th>"Çap (mm)"</th>
                            <th>"Şube"</th>
                            <th>"Kesim (mm)"</th>
                            <th>"Adet"</th>
                            <th>"Satılan Ağırlık (kg)"</th>
                            <th>"Fire (kg)"</th>
                            <th>"Tutar (₺)"</th>
                            <th>"Alanlar"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            sold.get()
                                .into_iter()
                                .map(|(category, diameter, branch, entry)| {
                                    view! {
                                        <tr>
                                            <td>{category}</td>
                                            <td>{diameter}</td>
                                            <td>{branch}</td>
                                            <td>{money(entry.cut_length)}</td>
                                            <td>{entry.cut_quantity.map(|q| q.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                            <td>{money(entry.total_sold_weight)}</td>
                                            <td>{money(entry.wastage_weight)}</td>
                                            <td>{money(entry.total_price)}</td>
                                            <td>{fields_summary(&entry.product.fields)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>
        </div>
    }
}

fn money(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}

fn count(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.0}", v))
        .unwrap_or_else(|| "-".to_string())
}

// One "label: value" pair per dynamic field; fractional numbers get two
// decimals, whole numbers none.
fn fields_summary(
    fields: &std::collections::BTreeMap<String, serde_json::Value>,
) -> String {
    if fields.is_empty() {
        return "-".to_string();
    }
    fields
        .iter()
        .map(|(name, value)| format!("{}: {}", translate_label(name), stat_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn stat_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Number(number) => match number.as_f64() {
            Some(v) if v.fract() != 0.0 => format!("{:.2}", v),
            Some(v) => format!("{:.0}", v),
            None => number.to_string(),
        },
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
