use serde::{Deserialize, Serialize};

/// Datatype of a dynamic category field.
///
/// Wire vocabulary is `"string" | "integer" | "double"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FieldKind {
    #[default]
    #[serde(rename = "string")]
    Text,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "double")]
    Decimal,
}

impl FieldKind {
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Integer => "integer",
            Self::Decimal => "double",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "string" => Some(Self::Text),
            "integer" => Some(Self::Integer),
            "double" => Some(Self::Decimal),
            _ => None,
        }
    }

    /// Turkish display name used in type selects and badges.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Text => "Metin",
            Self::Integer => "Tam Sayı",
            Self::Decimal => "Ondalıklı",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_vocabulary_round_trips() {
        for kind in [FieldKind::Text, FieldKind::Integer, FieldKind::Decimal] {
            assert_eq!(FieldKind::from_wire(kind.as_wire()), Some(kind));
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_wire()));
        }
        assert_eq!(FieldKind::from_wire("timestamp"), None);
    }
}
