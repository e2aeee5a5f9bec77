use contracts::domain::category::ProductCategory;
use contracts::domain::product::Product;
use contracts::shared::fields::translate_label;
use leptos::prelude::*;

use super::ProductFormVm;
use crate::system::auth::context::use_session;

/// Product create/edit modal. Fixed attributes are hardcoded inputs; the
/// category's dynamic fields are rendered generically from the schema with
/// kind-appropriate input widgets.
#[component]
pub fn ProductFormModal(
    category: ProductCategory,
    #[prop(optional_no_strip)] product: Option<Product>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let can_manage = session.can_manage_stock(&category.branch_id);
    let vm = ProductFormVm::new(&category, product.as_ref());

    // Snapshot for the render loop; the schema itself is immutable here.
    let dynamic_entries: Vec<_> = vm
        .schema
        .iter()
        .map(|(name, entry)| (name.to_string(), entry.spec))
        .collect();

    let title = if vm.is_edit_mode() {
        "Ürün Düzenle"
    } else {
        "Yeni Ürün Ekle"
    };

    let save_vm = vm.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.token() else {
            return;
        };
        save_vm.save(token, can_manage, on_saved);
    };

    let error = vm.error;
    let saving = vm.saving;
    let diameter = vm.diameter;
    let length = vm.length;
    let weight = vm.weight;
    let stock = vm.stock;
    let purchase_price = vm.purchase_price;
    let purchase_kg_price = vm.purchase_kg_price;
    let dynamic_vm = vm.clone();

    view! {
        <div class="modal-backdrop">
            <div class="modal modal-wide">
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"✕"</button>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="error-message">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Çap (mm) "<span class="required-mark">"*"</span></label>
                        <input
                            type="number"
                            step="1"
                            class="input-field"
                            prop:value=move || diameter.get()
                            on:input=move |ev| diameter.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label>"Uzunluk (mm) "<span class="required-mark">"*"</span></label>
                        <input
                            type="number"
                            step="0.01"
                            class="input-field"
                            prop:value=move || length.get()
                            on:input=move |ev| length.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label>"Ağırlık (kg) "<span class="required-mark">"*"</span></label>
                        <input
                            type="number"
                            step="0.01"
                            class="input-field"
                            prop:value=move || weight.get()
                            on:input=move |ev| weight.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label>"Stok (Adet) "<span class="required-mark">"*"</span></label>
                        <input
                            type="number"
                            step="1"
                            class="input-field"
                            prop:value=move || stock.get()
                            on:input=move |ev| stock.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <Show when=move || can_manage>
                        <div class="form-group">
                            <label>"Satın Alma Fiyatı (₺)"</label>
                            <input
                                type="number"
                                step="0.01"
                                class="input-field"
                                prop:value=move || purchase_price.get()
                                on:input=move |ev| purchase_price.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label>"Satın Alma Kg Fiyatı (₺/kg)"</label>
                            <input
                                type="number"
                                step="0.01"
                                class="input-field"
                                prop:value=move || purchase_kg_price.get()
                                on:input=move |ev| purchase_kg_price.set(event_target_value(&ev))
                            />
                            <p class="field-hint">
                                "Fiyatlardan yalnızca birini giriniz; diğeri ağırlık ve stok üzerinden hesaplanır."
                            </p>
                        </div>
                    </Show>

                    {dynamic_entries
                        .into_iter()
                        .map(|(name, spec)| {
                            let input_kind = spec.kind.input_kind();
                            let label = translate_label(&name);
                            let field_vm = dynamic_vm.clone();
                            let value_name = name.clone();
                            let value = move || {
                                field_vm
                                    .dynamic
                                    .with(|dynamic| dynamic.get(&value_name).cloned().unwrap_or_default())
                            };
                            let input_vm = dynamic_vm.clone();
                            let input_name = name.clone();
                            view! {
                                <div class="form-group">
                                    <label>
                                        {label}
                                        {spec.required.then(|| view! {
                                            <span class="required-mark">" *"</span>
                                        })}
                                    </label>
                                    <input
                                        type=input_kind.html_input_type()
                                        step=input_kind.step()
                                        class="input-field"
                                        prop:value=value
                                        on:input=move |ev| {
                                            input_vm.set_dynamic(&input_name, event_target_value(&ev));
                                        }
                                    />
                                </div>
                            }
                        })
                        .collect_view()}

                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=move || saving.get()
                            on:click=move |_| on_close.run(())
                        >
                            "İptal"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Kaydediliyor..." } else { "Kaydet" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
