use std::collections::BTreeMap;

/// Built-in product attributes. These live as columns on the product entity
/// itself and must never enter the dynamic schema, even though raw category
/// maps coming from the backend may still carry them.
pub const FIXED_ATTRIBUTES: [&str; 6] = [
    "weight",
    "purchasePrice",
    "purchaseKgPrice",
    "diameter",
    "length",
    "stock",
];

pub fn is_fixed_attribute(name: &str) -> bool {
    FIXED_ATTRIBUTES.contains(&name)
}

/// Copy of `fields` with every fixed attribute key removed. Applied before a
/// schema is derived from a raw map so fixed columns are never rendered or
/// validated twice.
pub fn filter_fixed<V: Clone>(fields: &BTreeMap<String, V>) -> BTreeMap<String, V> {
    fields
        .iter()
        .filter(|(name, _)| !is_fixed_attribute(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fixed_attribute_is_recognized_and_filtered() {
        let mut fields = BTreeMap::new();
        for name in FIXED_ATTRIBUTES {
            assert!(is_fixed_attribute(name));
            fields.insert(name.to_string(), "double".to_string());
        }
        fields.insert("innerDiameter".to_string(), "integer".to_string());

        let filtered = filter_fixed(&fields);
        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains_key("innerDiameter"));
    }

    #[test]
    fn non_fixed_names_pass_through() {
        assert!(!is_fixed_attribute("innerDiameter"));
        assert!(!is_fixed_attribute("Weight")); // case-sensitive
        assert!(!is_fixed_attribute(""));
    }
}
