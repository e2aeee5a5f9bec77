use serde::{Deserialize, Serialize};

use super::FieldKind;

/// One attribute of a category's dynamic schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(rename = "datatype")]
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(kind: FieldKind, required: bool) -> Self {
        Self { kind, required }
    }
}

/// Raw wire shape of one entry in a `finalFields`/`requiredFields` map.
///
/// Older documents store a bare datatype string; newer ones store the full
/// `{datatype, required}` object. Anything else (a shape no backend version
/// ever wrote) is kept verbatim and treated as free-form text rather than
/// failing the whole map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireFieldValue {
    Spec(FieldSpec),
    Legacy(FieldKind),
    Unrecognized(serde_json::Value),
}

impl WireFieldValue {
    /// Fold either wire shape into a [`FieldSpec`].
    ///
    /// The legacy shape carries no `required` flag, so the caller must say
    /// which partition the value came from: template partitions default to
    /// required, extra partitions to optional. There is no correct global
    /// default.
    pub fn normalize(&self, default_required: bool) -> FieldSpec {
        match self {
            Self::Spec(spec) => *spec,
            Self::Legacy(kind) => FieldSpec::new(*kind, default_required),
            Self::Unrecognized(_) => FieldSpec::new(FieldKind::Text, default_required),
        }
    }
}

impl From<FieldSpec> for WireFieldValue {
    fn from(spec: FieldSpec) -> Self {
        Self::Spec(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_shape_deserializes_with_flag() {
        let value: WireFieldValue =
            serde_json::from_str(r#"{"datatype":"double","required":true}"#).unwrap();
        assert_eq!(
            value.normalize(false),
            FieldSpec::new(FieldKind::Decimal, true)
        );
    }

    #[test]
    fn legacy_shape_takes_caller_default() {
        let value: WireFieldValue = serde_json::from_str(r#""integer""#).unwrap();
        assert_eq!(value.normalize(true), FieldSpec::new(FieldKind::Integer, true));
        assert_eq!(
            value.normalize(false),
            FieldSpec::new(FieldKind::Integer, false)
        );
    }

    #[test]
    fn unrecognized_shape_degrades_to_text() {
        let value: WireFieldValue = serde_json::from_str("42").unwrap();
        assert_eq!(value.normalize(false), FieldSpec::new(FieldKind::Text, false));

        let value: WireFieldValue = serde_json::from_str(r#""timestamp""#).unwrap();
        assert_eq!(value.normalize(true), FieldSpec::new(FieldKind::Text, true));
    }

    #[test]
    fn spec_serializes_to_new_shape() {
        let wire = WireFieldValue::from(FieldSpec::new(FieldKind::Integer, false));
        assert_eq!(
            serde_json::to_string(&wire).unwrap(),
            r#"{"datatype":"integer","required":false}"#
        );
    }
}
