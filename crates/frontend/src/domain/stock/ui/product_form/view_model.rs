//! ViewModel for the product create/edit form
//!
//! The category's dynamic schema is derived once when the modal opens;
//! every input (fixed and dynamic) is kept as a raw string and coerced by
//! the field engine on submit.

use std::collections::BTreeMap;

use contracts::domain::category::ProductCategory;
use contracts::domain::product::{Product, ProductDto};
use contracts::shared::fields::{
    filter_fixed, parse_field_value, translate_label, FieldSchema,
};
use leptos::prelude::*;

use crate::domain::stock::api;

#[derive(Clone)]
pub struct ProductFormVm {
    /// Set in edit mode.
    pub id: Option<String>,
    pub category_id: String,
    pub schema: FieldSchema,

    pub diameter: RwSignal<String>,
    pub length: RwSignal<String>,
    pub weight: RwSignal<String>,
    pub purchase_price: RwSignal<String>,
    pub purchase_kg_price: RwSignal<String>,
    pub stock: RwSignal<String>,
    /// Raw dynamic inputs keyed by field name.
    pub dynamic: RwSignal<BTreeMap<String, String>>,

    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ProductFormVm {
    pub fn new(category: &ProductCategory, product: Option<&Product>) -> Self {
        let schema = FieldSchema::from_merged(&filter_fixed(&category.final_fields), false);

        let mut dynamic = BTreeMap::new();
        for (name, _) in schema.iter() {
            let existing = product
                .and_then(|p| p.fields.get(name))
                .map(value_to_input)
                .unwrap_or_default();
            dynamic.insert(name.to_string(), existing);
        }

        let (purchase_price, purchase_kg_price) = match product {
            Some(p) => display_prices(p.purchase_price, p.kg_price, p.weight, p.stock),
            None => (String::new(), String::new()),
        };

        Self {
            id: product.map(|p| p.id.clone()),
            category_id: category.id.clone(),
            schema,
            diameter: RwSignal::new(number_input(product.and_then(|p| p.diameter))),
            length: RwSignal::new(float_input(product.and_then(|p| p.length))),
            weight: RwSignal::new(float_input(product.and_then(|p| p.weight))),
            purchase_price: RwSignal::new(purchase_price),
            purchase_kg_price: RwSignal::new(purchase_kg_price),
            stock: RwSignal::new(number_input(product.and_then(|p| p.stock))),
            dynamic: RwSignal::new(dynamic),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_dynamic(&self, name: &str, raw: String) {
        let name = name.to_string();
        self.dynamic.update(|dynamic| {
            dynamic.insert(name, raw);
        });
    }

    /// Validate and build the wire payload. `can_manage` gates the purchase
    /// price rule: exactly one of price / kg-price must be given.
    pub fn to_dto(&self, can_manage: bool) -> Result<ProductDto, String> {
        let diameter = self
            .diameter
            .get_untracked()
            .trim()
            .parse::<i64>()
            .map_err(|_| "Lütfen zorunlu alanları doldurunuz".to_string())?;
        let length = parse_float(&self.length.get_untracked())?;
        let weight = parse_float(&self.weight.get_untracked())?;
        let stock = self
            .stock
            .get_untracked()
            .trim()
            .parse::<i64>()
            .map_err(|_| "Lütfen zorunlu alanları doldurunuz".to_string())?;

        let purchase_price = optional_float(&self.purchase_price.get_untracked())?;
        let kg_price = optional_float(&self.purchase_kg_price.get_untracked())?;
        if can_manage {
            match (purchase_price, kg_price) {
                (None, None) => {
                    return Err(
                        "Satın alma fiyatı veya satın alma kg fiyatından birini girmeniz zorunludur"
                            .to_string(),
                    )
                }
                (Some(_), Some(_)) => {
                    return Err(
                        "Satın alma fiyatı ve satın alma kg fiyatından sadece birini girebilirsiniz"
                            .to_string(),
                    )
                }
                _ => {}
            }
        }

        let mut fields = BTreeMap::new();
        let dynamic = self.dynamic.get_untracked();
        for (name, entry) in self.schema.iter() {
            let raw = dynamic.get(name).map(String::as_str).unwrap_or("");
            let label = translate_label(name);
            match parse_field_value(entry.spec.kind, raw) {
                Ok(Some(value)) => {
                    fields.insert(name.to_string(), value);
                }
                Ok(None) => {
                    if entry.spec.required {
                        return Err(format!("'{}' alanı zorunludur", label));
                    }
                }
                Err(message) => return Err(format!("'{}' {}", label, message)),
            }
        }

        Ok(ProductDto {
            id: self.id.clone(),
            product_category_id: self.category_id.clone(),
            diameter,
            length,
            weight,
            purchase_price,
            kg_price,
            stock,
            fields,
        })
    }

    pub fn save(&self, token: String, can_manage: bool, on_saved: Callback<()>) {
        let dto = match self.to_dto(can_manage) {
            Ok(dto) => dto,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };

        let this = self.clone();
        this.saving.set(true);
        this.error.set(None);
        leptos::task::spawn_local(async move {
            let result = match &this.id {
                Some(id) => api::update_product(&token, id, &dto).await,
                None => api::create_product(&token, &dto).await,
            };
            match result {
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
}

/// Edit-mode price display: whichever of the two prices is missing is
/// derived from the other through weight and stock, so both inputs start
/// filled when the data allows it.
fn display_prices(
    purchase_price: Option<f64>,
    kg_price: Option<f64>,
    weight: Option<f64>,
    stock: Option<i64>,
) -> (String, String) {
    let weight = weight.filter(|w| *w > 0.0);
    let stock = stock.filter(|s| *s > 0);

    let mut price_text = purchase_price.map(|p| format!("{:.2}", p)).unwrap_or_default();
    let mut kg_text = kg_price.map(|p| format!("{:.2}", p)).unwrap_or_default();

    if let (Some(price), None, Some(weight), Some(stock)) =
        (purchase_price, kg_price, weight, stock)
    {
        kg_text = format!("{:.2}", price / stock as f64 / weight);
    }
    if let (None, Some(kg), Some(weight), Some(stock)) = (purchase_price, kg_price, weight, stock) {
        price_text = format!("{:.2}", kg * weight * stock as f64);
    }

    (price_text, kg_text)
}

fn value_to_input(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn number_input(value: Option<i64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn float_input(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

fn parse_float(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| "Lütfen zorunlu alanları doldurunuz".to_string())
}

fn optional_float(raw: &str) -> Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Some)
        .ok_or_else(|| "Geçersiz fiyat değeri".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_kg_price_is_derived_from_purchase_price() {
        let (price, kg) = display_prices(Some(1000.0), None, Some(25.0), Some(4));
        assert_eq!(price, "1000.00");
        assert_eq!(kg, "10.00"); // 1000 / 4 / 25
    }

    #[test]
    fn missing_purchase_price_is_derived_from_kg_price() {
        let (price, kg) = display_prices(None, Some(10.0), Some(25.0), Some(4));
        assert_eq!(price, "1000.00");
        assert_eq!(kg, "10.00");
    }

    #[test]
    fn derivation_needs_weight_and_stock() {
        let (price, kg) = display_prices(Some(1000.0), None, None, Some(4));
        assert_eq!(price, "1000.00");
        assert_eq!(kg, "");
    }
}
