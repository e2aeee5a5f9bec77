use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::fields::WireFieldValue;

/// Template prescribing which fields a category must require. The
/// `requiredFields` map may carry either wire shape per entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub required_fields: BTreeMap<String, WireFieldValue>,
}

/// A named grouping of products sharing one dynamic field schema.
/// `finalFields` is the merged template + extra map as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    pub id: String,
    pub name: String,
    pub product_type_id: String,
    pub branch_id: String,
    #[serde(default)]
    pub final_fields: BTreeMap<String, WireFieldValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductCategory {
    pub name: String,
    pub product_type_id: String,
    pub branch_id: String,
    pub final_fields: BTreeMap<String, WireFieldValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fields::{FieldKind, FieldSchema, filter_fixed};

    #[test]
    fn stored_category_with_mixed_shapes_yields_a_schema() {
        // A category persisted before the `{datatype, required}` migration
        // mixes both shapes and may still carry fixed attribute keys.
        let category: ProductCategory = serde_json::from_str(
            r#"{
                "id": "c1",
                "name": "ST52",
                "productTypeId": "t1",
                "branchId": "5",
                "finalFields": {
                    "weight": "double",
                    "innerDiameter": {"datatype": "integer", "required": true},
                    "not": "string"
                }
            }"#,
        )
        .unwrap();

        let dynamic = filter_fixed(&category.final_fields);
        let schema = FieldSchema::from_merged(&dynamic, false);

        assert_eq!(schema.len(), 2);
        assert!(!schema.contains("weight"));
        assert!(schema.get("innerDiameter").unwrap().spec.required);
        assert_eq!(schema.get("not").unwrap().spec.kind, FieldKind::Text);
        assert!(!schema.get("not").unwrap().spec.required);
    }
}
