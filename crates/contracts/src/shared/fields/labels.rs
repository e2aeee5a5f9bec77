/// Turkish labels for the built-in attribute names the backend uses.
const LABELS: &[(&str, &str)] = &[
    ("weight", "Ağırlık"),
    ("purchasePrice", "Satın Alma Fiyatı"),
    ("purchaseKgPrice", "Satın Alma Kg Fiyatı"),
    ("diameter", "Çap"),
    ("length", "Uzunluk"),
    ("stock", "Stok"),
    ("innerDiameter", "İç Çap"),
];

/// Display label for an attribute name. Known names get their static
/// Turkish label; everything else falls back to title case so
/// administrator-defined names still read as headings. Total and pure.
pub fn translate_label(name: &str) -> String {
    if let Some((_, label)) = LABELS.iter().find(|(key, _)| *key == name) {
        return (*label).to_string();
    }
    title_case(name)
}

// First letter of each whitespace-separated token upper, rest lower.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_use_the_static_table() {
        assert_eq!(translate_label("innerDiameter"), "İç Çap");
        assert_eq!(translate_label("purchaseKgPrice"), "Satın Alma Kg Fiyatı");
        assert_eq!(translate_label("weight"), "Ağırlık");
    }

    #[test]
    fn unknown_names_fall_back_to_title_case() {
        assert_eq!(translate_label("customNote"), "Customnote");
        assert_eq!(translate_label("kalite sınıfı"), "Kalite Sınıfı");
        // Underscores are not whitespace, so they stay inside one token.
        assert_eq!(translate_label("custom_note"), "Custom_note");
    }

    #[test]
    fn never_fails_on_odd_input() {
        assert_eq!(translate_label(""), "");
        assert_eq!(translate_label("   "), "");
    }
}
