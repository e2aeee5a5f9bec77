use std::collections::BTreeMap;

use thiserror::Error;

use super::{FieldSpec, WireFieldValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldSchemaError {
    #[error("Alan adı boş olamaz")]
    BlankName,
    #[error("'{0}' alanı zaten mevcut")]
    DuplicateField(String),
}

/// Which partition a schema entry came from. Template fields are prescribed
/// by the category's product type and can never be removed or made optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrigin {
    Template,
    Extra,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldEntry {
    pub spec: FieldSpec,
    pub origin: FieldOrigin,
}

/// The merged dynamic schema of one product category.
///
/// Keys are attribute names, unique across both partitions. `BTreeMap`
/// keeps iteration order stable so generated forms and tables do not
/// reshuffle between renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSchema {
    entries: BTreeMap<String, FieldEntry>,
}

impl FieldSchema {
    /// Merge the product-type template partition with the extra partition.
    ///
    /// Template specs are forced to `required = true` regardless of what the
    /// wire said. A name present in both partitions is rejected; matching is
    /// case-sensitive and exact.
    pub fn merge(
        template: &BTreeMap<String, WireFieldValue>,
        extra: &BTreeMap<String, WireFieldValue>,
    ) -> Result<Self, FieldSchemaError> {
        let mut entries = BTreeMap::new();
        for (name, value) in template {
            let mut spec = value.normalize(true);
            spec.required = true;
            entries.insert(
                name.clone(),
                FieldEntry {
                    spec,
                    origin: FieldOrigin::Template,
                },
            );
        }
        for (name, value) in extra {
            if entries.contains_key(name) {
                return Err(FieldSchemaError::DuplicateField(name.clone()));
            }
            entries.insert(
                name.clone(),
                FieldEntry {
                    spec: value.normalize(false),
                    origin: FieldOrigin::Extra,
                },
            );
        }
        Ok(Self { entries })
    }

    /// Derive a schema from an already-merged map, e.g. a category's stored
    /// `finalFields`. Origin cannot be recovered from data alone, so every
    /// entry is treated as extra and the legacy-shape `required` default is
    /// the caller's choice. Callers filter fixed attributes first
    /// (see [`super::filter_fixed`]).
    pub fn from_merged(
        fields: &BTreeMap<String, WireFieldValue>,
        default_required: bool,
    ) -> Self {
        let entries = fields
            .iter()
            .map(|(name, value)| {
                (
                    name.clone(),
                    FieldEntry {
                        spec: value.normalize(default_required),
                        origin: FieldOrigin::Extra,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Add an administrator-defined field. The name is checked against the
    /// full merged set, not just the extra partition.
    pub fn add_extra_field(&mut self, name: &str, spec: FieldSpec) -> Result<(), FieldSchemaError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FieldSchemaError::BlankName);
        }
        if self.entries.contains_key(name) {
            return Err(FieldSchemaError::DuplicateField(name.to_string()));
        }
        self.entries.insert(
            name.to_string(),
            FieldEntry {
                spec,
                origin: FieldOrigin::Extra,
            },
        );
        Ok(())
    }

    /// Remove an extra field. Absent names and template fields are left
    /// untouched.
    pub fn remove_extra_field(&mut self, name: &str) {
        if let Some(entry) = self.entries.get(name) {
            if entry.origin == FieldOrigin::Extra {
                self.entries.remove(name);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Wire form of the merged schema. Always emits the new
    /// `{datatype, required}` shape, never the legacy bare string.
    pub fn to_wire(&self) -> BTreeMap<String, WireFieldValue> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.clone(), WireFieldValue::from(entry.spec)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::FieldKind;
    use super::*;

    fn wire(json: &str) -> BTreeMap<String, WireFieldValue> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn merge_unions_partitions_with_defaults() {
        let template = wire(r#"{"a":{"datatype":"double","required":true}}"#);
        let extra = wire(r#"{"b":"string"}"#);

        let schema = FieldSchema::merge(&template, &extra).unwrap();
        assert_eq!(schema.len(), 2);

        let a = schema.get("a").unwrap();
        assert_eq!(a.spec, FieldSpec::new(FieldKind::Decimal, true));
        assert_eq!(a.origin, FieldOrigin::Template);

        // Legacy shape in the extra partition defaults to optional.
        let b = schema.get("b").unwrap();
        assert_eq!(b.spec, FieldSpec::new(FieldKind::Text, false));
        assert_eq!(b.origin, FieldOrigin::Extra);
    }

    #[test]
    fn merge_forces_template_fields_required() {
        let template = wire(r#"{"a":{"datatype":"integer","required":false}}"#);
        let schema = FieldSchema::merge(&template, &BTreeMap::new()).unwrap();
        assert!(schema.get("a").unwrap().spec.required);
    }

    #[test]
    fn merge_rejects_cross_partition_duplicates() {
        let template = wire(r#"{"a":{"datatype":"double","required":true}}"#);
        let extra = wire(r#"{"a":{"datatype":"string","required":false}}"#);
        assert_eq!(
            FieldSchema::merge(&template, &extra),
            Err(FieldSchemaError::DuplicateField("a".to_string()))
        );
    }

    #[test]
    fn duplicate_match_is_case_sensitive() {
        let template = wire(r#"{"a":"double"}"#);
        let extra = wire(r#"{"A":"string"}"#);
        assert!(FieldSchema::merge(&template, &extra).is_ok());
    }

    #[test]
    fn add_extra_field_checks_the_full_merged_set() {
        // filter_fixed was skipped upstream, so the merged schema still
        // carries a fixed-attribute name. Adding an extra field under that
        // name must still collide.
        let template = wire(r#"{"weight":"double"}"#);
        let mut schema = FieldSchema::merge(&template, &BTreeMap::new()).unwrap();

        assert_eq!(
            schema.add_extra_field("weight", FieldSpec::new(FieldKind::Text, false)),
            Err(FieldSchemaError::DuplicateField("weight".to_string()))
        );
        assert!(schema
            .add_extra_field("note", FieldSpec::new(FieldKind::Text, false))
            .is_ok());
        assert_eq!(
            schema.add_extra_field("note", FieldSpec::new(FieldKind::Integer, true)),
            Err(FieldSchemaError::DuplicateField("note".to_string()))
        );
    }

    #[test]
    fn add_extra_field_rejects_blank_names() {
        let mut schema = FieldSchema::default();
        assert_eq!(
            schema.add_extra_field("", FieldSpec::new(FieldKind::Text, false)),
            Err(FieldSchemaError::BlankName)
        );
        assert_eq!(
            schema.add_extra_field("   ", FieldSpec::new(FieldKind::Text, false)),
            Err(FieldSchemaError::BlankName)
        );
    }

    #[test]
    fn remove_extra_field_spares_template_fields() {
        let template = wire(r#"{"a":"double"}"#);
        let extra = wire(r#"{"b":"string"}"#);
        let mut schema = FieldSchema::merge(&template, &extra).unwrap();

        schema.remove_extra_field("b");
        assert!(!schema.contains("b"));

        schema.remove_extra_field("a");
        assert!(schema.contains("a"));

        // Absent name is a no-op.
        schema.remove_extra_field("missing");
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn to_wire_always_emits_the_new_shape() {
        let template = wire(r#"{"a":"double"}"#);
        let schema = FieldSchema::merge(&template, &BTreeMap::new()).unwrap();
        let json = serde_json::to_string(&schema.to_wire()).unwrap();
        assert_eq!(json, r#"{"a":{"datatype":"double","required":true}}"#);
    }
}
