use serde::{Serialize, Serializer};

/// One cell of a normalized table.
///
/// Source fields arrive as text (CSV) or as whatever the workbook stored
/// (spreadsheets); normalization maps both onto this union. Numeric-looking
/// strings become numbers, everything else stays a trimmed string or null.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
}

impl CellValue {
    /// Normalize one raw text field: trim, map empty to null, coerce
    /// numeric literals. Total: never fails, never panics.
    pub fn from_raw(raw: &str) -> CellValue {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }
        if is_numeric_literal(trimmed) {
            if trimmed.contains('.') {
                if let Ok(f) = trimmed.parse::<f64>() {
                    return CellValue::Float(f);
                }
            } else if let Ok(i) = trimmed.parse::<i64>() {
                return CellValue::Int(i);
            } else if let Ok(f) = trimmed.parse::<f64>() {
                // integer literal wider than i64
                return CellValue::Float(f);
            }
        }
        CellValue::Text(trimmed.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

/// Strict decimal-numeral check: `sign? digits ('.' digits)?`.
/// No exponents, no thousands separators; `inf`/`nan` spellings stay text.
fn is_numeric_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        Some(f) => !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CellValue::Null => serializer.serialize_unit(),
            CellValue::Text(t) => serializer.serialize_str(t),
            CellValue::Int(i) => serializer.serialize_i64(*i),
            CellValue::Float(f) => serializer.serialize_f64(*f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_integers_and_floats() {
        assert_eq!(CellValue::from_raw("42"), CellValue::Int(42));
        assert_eq!(CellValue::from_raw("3.14"), CellValue::Float(3.14));
        assert_eq!(CellValue::from_raw("  7  "), CellValue::Int(7));
        assert_eq!(CellValue::from_raw("+7"), CellValue::Int(7));
        assert_eq!(CellValue::from_raw("-0.5"), CellValue::Float(-0.5));
    }

    #[test]
    fn preserves_text_and_maps_empty_to_null() {
        assert_eq!(CellValue::from_raw("abc"), CellValue::Text("abc".into()));
        assert_eq!(CellValue::from_raw(""), CellValue::Null);
        assert_eq!(CellValue::from_raw("   "), CellValue::Null);
        assert_eq!(
            CellValue::from_raw("  spaced out  "),
            CellValue::Text("spaced out".into())
        );
    }

    #[test]
    fn rejects_partial_numerals() {
        assert_eq!(CellValue::from_raw(".5"), CellValue::Text(".5".into()));
        assert_eq!(CellValue::from_raw("5."), CellValue::Text("5.".into()));
        assert_eq!(CellValue::from_raw("1e5"), CellValue::Text("1e5".into()));
        assert_eq!(CellValue::from_raw("1,000"), CellValue::Text("1,000".into()));
        assert_eq!(CellValue::from_raw("nan"), CellValue::Text("nan".into()));
        assert_eq!(CellValue::from_raw("-"), CellValue::Text("-".into()));
    }

    #[test]
    fn wide_integer_literal_falls_back_to_float() {
        match CellValue::from_raw("99999999999999999999") {
            CellValue::Float(f) => assert!(f > 9.9e18),
            other => panic!("expected float, got {:?}", other),
        }
    }

    #[test]
    fn serializes_as_plain_json_values() {
        let json = serde_json::to_value(vec![
            CellValue::Null,
            CellValue::Text("x".into()),
            CellValue::Int(5),
            CellValue::Float(2.5),
        ])
        .unwrap();
        assert_eq!(json, serde_json::json!([null, "x", 5, 2.5]));
    }
}
