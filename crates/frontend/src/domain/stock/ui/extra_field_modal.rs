use contracts::shared::fields::{FieldKind, FieldSpec};
use leptos::prelude::*;

/// Modal for defining one administrator field: name, datatype, optional
/// required flag. `on_add` performs the duplicate/blank checks against the
/// full merged schema and answers with the inline error to show.
#[component]
pub fn ExtraFieldModal(
    show: RwSignal<bool>,
    on_add: Callback<(String, FieldSpec), Result<(), String>>,
) -> impl IntoView {
    let field_name = RwSignal::new(String::new());
    let field_kind = RwSignal::new(FieldKind::Text);
    let field_required = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let reset = move || {
        field_name.set(String::new());
        field_kind.set(FieldKind::Text);
        field_required.set(false);
        error.set(None);
    };

    let close = move |_| {
        reset();
        show.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let spec = FieldSpec::new(field_kind.get(), field_required.get());
        match on_add.run((field_name.get(), spec)) {
            Ok(()) => {
                reset();
                show.set(false);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let kind_hint = move || match field_kind.get() {
        FieldKind::Text => "Metin verileri için kullanılır (örn: açıklama, not)",
        FieldKind::Integer => "Tam sayı değerler için kullanılır (örn: adet, miktar)",
        FieldKind::Decimal => "Ondalıklı sayılar için kullanılır (örn: fiyat, ölçü)",
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h3>"Yeni Ekstra Alan Ekle"</h3>
                        <button class="modal-close" on:click=close>"✕"</button>
                    </div>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label>"Alan Adı "<span class="required-mark">"*"</span></label>
                            <input
                                type="text"
                                class="input-field"
                                placeholder="Örn: Açıklama, Not, Detay"
                                prop:value=move || field_name.get()
                                on:input=move |ev| field_name.set(event_target_value(&ev))
                            />
                            <Show when=move || error.get().is_some()>
                                <p class="field-error">{move || error.get().unwrap_or_default()}</p>
                            </Show>
                        </div>

                        <div class="form-group">
                            <label>"Alan Tipi "<span class="required-mark">"*"</span></label>
                            <select
                                class="input-field"
                                on:change=move |ev| {
                                    field_kind.set(
                                        FieldKind::from_wire(&event_target_value(&ev))
                                            .unwrap_or_default(),
                                    );
                                }
                            >
                                <option value="string">"Metin (String)"</option>
                                <option value="integer">"Tam Sayı (Integer)"</option>
                                <option value="double">"Ondalıklı Sayı (Double)"</option>
                            </select>
                            <p class="field-hint">{kind_hint}</p>
                        </div>

                        <div class="form-group">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || field_required.get()
                                    on:change=move |ev| field_required.set(event_target_checked(&ev))
                                />
                                " Zorunlu alan"
                            </label>
                        </div>

                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" on:click=close>
                                "İptal"
                            </button>
                            <button type="submit" class="btn-primary">"Ekle"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
