//! Order cart persisted in localStorage
//!
//! The cart survives navigation and reloads; it is cleared when the order
//! is submitted. Lines are keyed by product, so re-adding a product
//! replaces its quantity instead of duplicating the line.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use web_sys::window;

const STORAGE_KEY: &str = "cart";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    /// Branch the product is ordered from; one cart holds one branch.
    pub branch_id: String,
    pub category_id: String,
    pub category_name: String,
    pub diameter: Option<i64>,
    pub length: Option<f64>,
    /// Weight of a single piece in kg.
    pub unit_weight: f64,
    pub quantity: i64,
    /// Requested cut length in mm, when the piece is to be cut.
    pub cut_length: Option<i64>,
    /// Snapshot of the product's dynamic fields for display on the order.
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl CartLine {
    pub fn total_weight(&self) -> f64 {
        self.unit_weight * self.quantity as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// A cart only accepts products from a single delivery branch.
    pub fn accepts_branch(&self, branch_id: &str) -> bool {
        self.lines
            .first()
            .map(|line| line.branch_id == branch_id)
            .unwrap_or(true)
    }

    /// Add a line, replacing any existing line for the same product.
    pub fn upsert_line(&mut self, line: CartLine) {
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == line.product_id)
        {
            *existing = line;
        } else {
            self.lines.push(line);
        }
    }

    pub fn remove_line(&mut self, product_id: &str) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn total_weight(&self) -> f64 {
        self.lines.iter().map(CartLine::total_weight).sum()
    }

    /// Wire form of the cart: one open map per line, as the backend stores
    /// order items.
    pub fn to_order_items(&self) -> Vec<BTreeMap<String, serde_json::Value>> {
        self.lines
            .iter()
            .map(|line| {
                let mut item = BTreeMap::new();
                item.insert("productId".to_string(), line.product_id.clone().into());
                item.insert("categoryId".to_string(), line.category_id.clone().into());
                item.insert(
                    "categoryName".to_string(),
                    line.category_name.clone().into(),
                );
                if let Some(diameter) = line.diameter {
                    item.insert("diameter".to_string(), diameter.into());
                }
                if let Some(length) = line.length {
                    item.insert("length".to_string(), length.into());
                }
                item.insert("quantity".to_string(), line.quantity.into());
                if let Some(cut_length) = line.cut_length {
                    item.insert("cutLength".to_string(), cut_length.into());
                }
                item.insert("totalWeight".to_string(), line.total_weight().into());
                if !line.fields.is_empty() {
                    item.insert(
                        "fields".to_string(),
                        serde_json::to_value(&line.fields).unwrap_or_default(),
                    );
                }
                item
            })
            .collect()
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn load_cart() -> Cart {
    let Some(storage) = local_storage() else {
        return Cart::default();
    };
    storage
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// An empty cart clears the entry instead of storing `[]`.
pub fn save_cart(cart: &Cart) {
    let Some(storage) = local_storage() else {
        return;
    };
    if cart.is_empty() {
        let _ = storage.remove_item(STORAGE_KEY);
        return;
    }
    if let Ok(json) = serde_json::to_string(cart) {
        let _ = storage.set_item(STORAGE_KEY, &json);
    }
}

pub fn clear_cart() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: &str, quantity: i64) -> CartLine {
        CartLine {
            product_id: product_id.to_string(),
            branch_id: "b1".to_string(),
            category_id: "c1".to_string(),
            category_name: "ST52".to_string(),
            diameter: Some(120),
            length: Some(6000.0),
            unit_weight: 25.5,
            quantity,
            cut_length: None,
            fields: BTreeMap::new(),
        }
    }

    #[test]
    fn upsert_replaces_by_product() {
        let mut cart = Cart::default();
        cart.upsert_line(line("p1", 2));
        cart.upsert_line(line("p2", 1));
        cart.upsert_line(line("p1", 5));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines[0].quantity, 5);
    }

    #[test]
    fn totals_scale_with_quantity() {
        let mut cart = Cart::default();
        cart.upsert_line(line("p1", 2)); // 51.0
        cart.upsert_line(line("p2", 1)); // 25.5
        assert!((cart.total_weight() - 76.5).abs() < 1e-9);
    }

    #[test]
    fn cart_is_pinned_to_one_branch() {
        let mut cart = Cart::default();
        assert!(cart.accepts_branch("b1"));
        cart.upsert_line(line("p1", 1));
        assert!(cart.accepts_branch("b1"));
        assert!(!cart.accepts_branch("b2"));
    }

    #[test]
    fn remove_last_line_empties_cart() {
        let mut cart = Cart::default();
        cart.upsert_line(line("p1", 2));
        cart.remove_line("p1");
        assert!(cart.is_empty());
    }

    #[test]
    fn order_items_carry_line_data() {
        let mut cart = Cart::default();
        let mut with_cut = line("p1", 4);
        with_cut.cut_length = Some(1500);
        cart.upsert_line(with_cut);

        let items = cart.to_order_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["productId"], serde_json::json!("p1"));
        assert_eq!(items[0]["cutLength"], serde_json::json!(1500));
        assert_eq!(items[0]["totalWeight"], serde_json::json!(102.0));
        assert!(!items[0].contains_key("fields"));
    }
}
