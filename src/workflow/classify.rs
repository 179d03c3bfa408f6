// nct: Content classifier
//
// Decides whether a name's value is JSON and produces the form shown to the
// operator (pretty, three-space indent, keys in source order) and the form
// sent back to the daemon (compact).

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// A value prepared for display or editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub normalized: String,
    pub is_structured: bool,
}

/// Pure and infallible: anything that does not parse as JSON is returned
/// untouched as plain text.
pub fn classify(raw: &str) -> Classified {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Classified {
            normalized: to_pretty(&value),
            is_structured: true,
        },
        Err(_) => Classified {
            normalized: raw.to_string(),
            is_structured: false,
        },
    }
}

/// Compact re-serialization used right before submission.
pub fn canonicalize(text: &str) -> serde_json::Result<String> {
    let value: Value = serde_json::from_str(text)?;
    serde_json::to_string(&value)
}

/// Content sniffing: does the first non-whitespace character open an object
/// or array?
///
/// This is a cheap pre-filter, not a parse. `[draft] notes` is sniffed as
/// JSON (the operator is then asked), while JSON scalars such as `"text"` or
/// `42` are never sniffed.
pub fn looks_structured(text: &str) -> bool {
    text.trim_start().starts_with(['{', '['])
}

fn to_pretty(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"   "));
    if value.serialize(&mut ser).is_err() {
        // Serializing an in-memory Value into a Vec cannot fail.
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object_is_structured_and_pretty() {
        let classified = classify(r#"{"a":1}"#);
        assert!(classified.is_structured);
        assert_eq!(classified.normalized, "{\n   \"a\": 1\n}");
    }

    #[test]
    fn test_key_order_is_preserved() {
        let classified = classify(r#"{"zeta":1,"alpha":{"y":2,"b":3}}"#);
        let zeta = classified.normalized.find("zeta").unwrap();
        let alpha = classified.normalized.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let raw = "  not json {";
        let classified = classify(raw);
        assert!(!classified.is_structured);
        assert_eq!(classified.normalized, raw);
    }

    #[test]
    fn test_empty_value_is_plain() {
        assert!(!classify("").is_structured);
    }

    #[test]
    fn test_normalized_form_round_trips() {
        let samples = [
            json!({"ip": "1.2.3.4", "map": {"www": {"ip": ["5.6.7.8"]}}}),
            json!([1, "two", null, true, {"nested": []}]),
            json!({"unicode": "\u{e9}\u{4e2d}", "escaped": "a\"b\\c\n"}),
            json!("scalar string"),
            json!(-12.5),
        ];
        for value in samples {
            let classified = classify(&value.to_string());
            assert!(classified.is_structured);
            let reparsed: Value = serde_json::from_str(&classified.normalized).unwrap();
            assert_eq!(reparsed, value);
        }
    }

    #[test]
    fn test_canonicalize_compacts() {
        let pretty = "{\n   \"a\": 1,\n   \"b\": [1, 2]\n}\n";
        assert_eq!(canonicalize(pretty).unwrap(), r#"{"a":1,"b":[1,2]}"#);
    }

    #[test]
    fn test_canonicalize_rejects_invalid() {
        assert!(canonicalize("{\"a\": }").is_err());
    }

    #[test]
    fn test_looks_structured_heuristic() {
        assert!(looks_structured("{\"a\":1}"));
        assert!(looks_structured("\n  [1,2]"));
        assert!(looks_structured("[draft] notes"));
        assert!(!looks_structured("hello"));
        assert!(!looks_structured("\"quoted\""));
        assert!(!looks_structured("42"));
        assert!(!looks_structured(""));
    }
}
