use super::FieldKind;

/// How an input widget and a table cell should treat a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Numeric { step: &'static str },
}

impl InputKind {
    pub fn html_input_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Numeric { .. } => "number",
        }
    }

    pub fn step(&self) -> Option<&'static str> {
        match self {
            Self::Text => None,
            Self::Numeric { step } => Some(step),
        }
    }
}

impl FieldKind {
    pub fn input_kind(&self) -> InputKind {
        match self {
            Self::Text => InputKind::Text,
            Self::Integer => InputKind::Numeric { step: "1" },
            Self::Decimal => InputKind::Numeric { step: "0.01" },
        }
    }
}

/// Format one dynamic field value for a table cell: integers without
/// decimals, decimals with exactly two, text verbatim. Missing values
/// render as a dash.
pub fn format_field_value(kind: FieldKind, value: &serde_json::Value) -> String {
    if value.is_null() {
        return "-".to_string();
    }
    match kind {
        FieldKind::Text => match value {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        },
        FieldKind::Integer => match as_number(value) {
            Some(number) => format!("{:.0}", number),
            None => "-".to_string(),
        },
        FieldKind::Decimal => match as_number(value) {
            Some(number) => format!("{:.2}", number),
            None => "-".to_string(),
        },
    }
}

/// Parse raw form input into the JSON value stored under a dynamic field.
/// Whitespace-only input is `Ok(None)`; requiredness is the caller's check.
/// Numeric kinds reject anything their datatype cannot hold, with a
/// Turkish message suffix for inline form errors.
pub fn parse_field_value(
    kind: FieldKind,
    raw: &str,
) -> Result<Option<serde_json::Value>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match kind {
        FieldKind::Text => Ok(Some(serde_json::Value::String(raw.to_string()))),
        FieldKind::Integer => raw
            .parse::<i64>()
            .map(|number| Some(serde_json::Value::from(number)))
            .map_err(|_| "tam sayı olmalıdır".to_string()),
        FieldKind::Decimal => raw
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
            .and_then(serde_json::Number::from_f64)
            .map(|number| Some(serde_json::Value::Number(number)))
            .ok_or_else(|| "sayısal olmalıdır".to_string()),
    }
}

// Inputs hand values back as strings, so numeric cells accept both.
fn as_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_kinds_per_datatype() {
        assert_eq!(
            FieldKind::Integer.input_kind(),
            InputKind::Numeric { step: "1" }
        );
        assert_eq!(
            FieldKind::Decimal.input_kind(),
            InputKind::Numeric { step: "0.01" }
        );
        assert_eq!(FieldKind::Text.input_kind(), InputKind::Text);
        assert_eq!(FieldKind::Text.input_kind().step(), None);
        assert_eq!(FieldKind::Decimal.input_kind().html_input_type(), "number");
    }

    #[test]
    fn integer_formatting_round_trips() {
        let formatted = format_field_value(FieldKind::Integer, &json!(42));
        assert_eq!(formatted, "42");
        assert_eq!(formatted.parse::<i64>().unwrap(), 42);
    }

    #[test]
    fn decimal_formatting_uses_two_places() {
        assert_eq!(format_field_value(FieldKind::Decimal, &json!(12.5)), "12.50");
        assert_eq!(format_field_value(FieldKind::Decimal, &json!("12.5")), "12.50");
    }

    #[test]
    fn text_renders_verbatim() {
        assert_eq!(
            format_field_value(FieldKind::Text, &json!("ST52 ısıl işlem")),
            "ST52 ısıl işlem"
        );
    }

    #[test]
    fn missing_and_unparseable_values_render_as_dash() {
        assert_eq!(format_field_value(FieldKind::Integer, &json!(null)), "-");
        assert_eq!(format_field_value(FieldKind::Decimal, &json!("abc")), "-");
    }

    #[test]
    fn parse_coerces_per_kind() {
        assert_eq!(
            parse_field_value(FieldKind::Integer, "42").unwrap(),
            Some(json!(42))
        );
        assert_eq!(
            parse_field_value(FieldKind::Decimal, "12.5").unwrap(),
            Some(json!(12.5))
        );
        assert_eq!(
            parse_field_value(FieldKind::Text, " not ").unwrap(),
            Some(json!("not"))
        );
        assert_eq!(parse_field_value(FieldKind::Integer, "  ").unwrap(), None);
    }

    #[test]
    fn parse_rejects_values_the_datatype_cannot_hold() {
        assert!(parse_field_value(FieldKind::Integer, "12.5").is_err());
        assert!(parse_field_value(FieldKind::Integer, "abc").is_err());
        assert!(parse_field_value(FieldKind::Decimal, "abc").is_err());
        assert!(parse_field_value(FieldKind::Decimal, "NaN").is_err());
    }
}
