//! ViewModel for the category creation form
//!
//! Holds form fields as individual RwSignals, the extra-field working set,
//! and the save command. The merged schema is produced by the field engine
//! right before submit; template fields always come from the selected
//! product type.

use std::collections::BTreeMap;

use contracts::domain::category::{CreateProductCategory, ProductType};
use contracts::shared::fields::{
    filter_fixed, is_fixed_attribute, FieldSchema, FieldSpec, WireFieldValue,
};
use leptos::prelude::*;

use crate::domain::stock::api;

#[derive(Clone, Copy)]
pub struct CategoryFormVm {
    pub name: RwSignal<String>,
    pub product_type_id: RwSignal<String>,
    pub product_types: RwSignal<Vec<ProductType>>,
    pub loading_types: RwSignal<bool>,
    /// Administrator-added fields in insertion order.
    pub extras: RwSignal<Vec<(String, FieldSpec)>>,
    pub show_extra_modal: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl CategoryFormVm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            product_type_id: RwSignal::new(String::new()),
            product_types: RwSignal::new(Vec::new()),
            loading_types: RwSignal::new(true),
            extras: RwSignal::new(Vec::new()),
            show_extra_modal: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Load product types (called on mount).
    pub fn load_product_types(&self, token: String) {
        let this = *self;
        this.loading_types.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_product_types(&token).await {
                Ok(types) => this.product_types.set(types),
                Err(e) => this.error.set(Some(e)),
            }
            this.loading_types.set(false);
        });
    }

    pub fn selected_type(&self) -> Signal<Option<ProductType>> {
        let product_types = self.product_types;
        let product_type_id = self.product_type_id;
        Signal::derive(move || {
            let id = product_type_id.get();
            product_types
                .get()
                .into_iter()
                .find(|product_type| product_type.id == id)
        })
    }

    /// Preview rows for the template partition: label key, normalized spec,
    /// and whether the key is a fixed product attribute (shown, but never
    /// part of the dynamic schema).
    pub fn template_preview(&self) -> Signal<Vec<(String, FieldSpec, bool)>> {
        let selected = self.selected_type();
        Signal::derive(move || {
            selected
                .get()
                .map(|product_type| {
                    product_type
                        .required_fields
                        .iter()
                        .map(|(name, value)| {
                            (name.clone(), value.normalize(true), is_fixed_attribute(name))
                        })
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    /// Add an extra field, checking the name against the full merged set
    /// (template partition included), not just the other extras.
    pub fn try_add_extra(&self, name: String, spec: FieldSpec) -> Result<(), String> {
        let template = self.required_partition();
        let extras = self.extras_wire();
        let mut schema = FieldSchema::merge(&template, &extras).map_err(|e| e.to_string())?;
        schema.add_extra_field(&name, spec).map_err(|e| e.to_string())?;

        self.extras
            .update(|extras| extras.push((name.trim().to_string(), spec)));
        Ok(())
    }

    pub fn remove_extra(&self, name: &str) {
        let name = name.to_string();
        self.extras
            .update(|extras| extras.retain(|(existing, _)| *existing != name));
    }

    /// Save the form.
    pub fn save(&self, token: String, branch_id: String, on_saved: Callback<()>) {
        if self.name.get().trim().is_empty() || self.product_type_id.get().is_empty() {
            self.error
                .set(Some("Lütfen zorunlu alanları doldurunuz".to_string()));
            return;
        }

        // Fixed attributes never enter the schema; the merge also catches a
        // collision introduced by switching product type after adding extras.
        let template = filter_fixed(&self.required_partition());
        let schema = match FieldSchema::merge(&template, &self.extras_wire()) {
            Ok(schema) => schema,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let category = CreateProductCategory {
            name: self.name.get().trim().to_string(),
            product_type_id: self.product_type_id.get(),
            branch_id,
            final_fields: schema.to_wire(),
        };

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        leptos::task::spawn_local(async move {
            match api::create_category(&token, &category).await {
                Ok(_) => {
                    this.saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    this.saving.set(false);
                    this.error.set(Some(e));
                }
            }
        });
    }

    fn required_partition(&self) -> BTreeMap<String, WireFieldValue> {
        self.selected_type()
            .get_untracked()
            .map(|product_type| product_type.required_fields)
            .unwrap_or_default()
    }

    fn extras_wire(&self) -> BTreeMap<String, WireFieldValue> {
        self.extras.with_untracked(|extras| {
            extras
                .iter()
                .map(|(name, spec)| (name.clone(), WireFieldValue::from(*spec)))
                .collect()
        })
    }
}

impl Default for CategoryFormVm {
    fn default() -> Self {
        Self::new()
    }
}
