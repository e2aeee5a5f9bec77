use contracts::shared::fields::translate_label;
use leptos::prelude::*;

use super::CategoryFormVm;
use crate::domain::stock::ui::extra_field_modal::ExtraFieldModal;
use crate::system::auth::context::use_session;

/// Category ("ürün başlığı") creation modal. Template fields from the
/// selected product type are previewed read-only; extra fields are
/// collected through [`ExtraFieldModal`].
#[component]
pub fn CategoryFormModal(
    branch_id: String,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let vm = CategoryFormVm::new();

    if let Some(token) = session.token() {
        vm.load_product_types(token);
    }

    let template_preview = vm.template_preview();
    let selected_type = vm.selected_type();

    let on_add_extra = Callback::new(move |(name, spec)| vm.try_add_extra(name, spec));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = session.token() else {
            return;
        };
        vm.save(token, branch_id.clone(), on_saved);
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal modal-wide">
                <div class="modal-header">
                    <h3>"Yeni Ürün Başlığı Ekle"</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"✕"</button>
                </div>

                <Show when=move || vm.error.get().is_some()>
                    <div class="error-message">{move || vm.error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label>"Başlık Adı "<span class="required-mark">"*"</span></label>
                        <input
                            type="text"
                            class="input-field"
                            placeholder="Örn: İmalat, Islah, ST52, ST44"
                            prop:value=move || vm.name.get()
                            on:input=move |ev| vm.name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label>"Ürün Tipi "<span class="required-mark">"*"</span></label>
                        <select
                            class="input-field"
                            disabled=move || vm.loading_types.get()
                            on:change=move |ev| vm.product_type_id.set(event_target_value(&ev))
                        >
                            <option value="">
                                {move || {
                                    if vm.loading_types.get() { "Yükleniyor..." } else { "Ürün tipi seçiniz" }
                                }}
                            </option>
                            <For
                                each=move || vm.product_types.get()
                                key=|product_type| product_type.id.clone()
                                children=|product_type| {
                                    view! {
                                        <option value=product_type.id.clone()>
                                            {product_type.name.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        <p class="field-hint">
                            "Seçilen ürün tipine göre zorunlu alanlar otomatik eklenecektir"
                        </p>
                    </div>

                    <Show when=move || selected_type.get().is_some() && !template_preview.get().is_empty()>
                        <div class="template-fields">
                            <h4>"Zorunlu Alanlar"</h4>
                            <p class="field-hint">
                                "Bu alanlar ürün tipine göre otomatik olarak eklenir ve her üründe zorunludur."
                            </p>
                            <For
                                each=move || template_preview.get()
                                key=|(name, _, _)| name.clone()
                                children=|(name, spec, fixed)| {
                                    view! {
                                        <div class="field-row" class:field-fixed=fixed>
                                            <span>{translate_label(&name)}</span>
                                            <span class="badge-required">"Zorunlu"</span>
                                            <span class="badge-type">{spec.kind.display_name()}</span>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>

                    <Show when=move || selected_type.get().is_some() && template_preview.get().is_empty()>
                        <p class="field-hint">"Bu ürün tipi için zorunlu alan tanımlanmamış."</p>
                    </Show>

                    <div class="extra-fields">
                        <div class="extra-fields-header">
                            <h4>"Ekstra Alanlar"</h4>
                            <button
                                type="button"
                                class="btn-secondary"
                                on:click=move |_| vm.show_extra_modal.set(true)
                            >
                                "+ Alan Ekle"
                            </button>
                        </div>

                        <Show
                            when=move || !vm.extras.get().is_empty()
                            fallback=|| view! {
                                <p class="field-hint">"Henüz ekstra alan eklenmedi."</p>
                            }
                        >
                            <For
                                each=move || vm.extras.get()
                                key=|(name, _)| name.clone()
                                children=move |(name, spec)| {
                                    let remove_name = name.clone();
                                    view! {
                                        <div class="field-row">
                                            <span>
                                                {name.clone()}
                                                {spec.required.then(|| view! {
                                                    <span class="required-mark">" *"</span>
                                                })}
                                            </span>
                                            <span class="badge-type">{spec.kind.display_name()}</span>
                                            <button
                                                type="button"
                                                class="btn-danger"
                                                title="Alanı Kaldır"
                                                on:click=move |_| vm.remove_extra(&remove_name)
                                            >
                                                "Sil"
                                            </button>
                                        </div>
                                    }
                                }
                            />
                        </Show>
                    </div>

                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            disabled=move || vm.saving.get()
                            on:click=move |_| on_close.run(())
                        >
                            "İptal"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || vm.saving.get()>
                            {move || if vm.saving.get() { "Oluşturuluyor..." } else { "Oluştur" }}
                        </button>
                    </div>
                </form>

                <ExtraFieldModal show=vm.show_extra_modal on_add=on_add_extra />
            </div>
        </div>
    }
}
