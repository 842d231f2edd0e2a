//! JSON text output.
//!
//! Two layouts are produced from the same writer:
//!
//! - compact, with object keys sorted by UTF-16 code units (the RFC 8785
//!   ordering, which is also the order the stringify driver visits keys in)
//! - indented, matching the layout of `JSON.stringify(value, null, n)`
//!
//! Non-finite floats have no JSON representation and are written as `null`.

use std::cmp::Ordering;

use super::types::JsonValue;

/// Compare two strings using UTF-16 code unit ordering.
///
/// This matches ECMAScript string comparison, which compares strings by
/// their UTF-16 code unit values, not Unicode codepoints.
pub fn compare_keys_utf16(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Return the keys of an object in serialization order.
pub fn ordered_keys<V>(map: &std::collections::BTreeMap<String, V>) -> Vec<&String> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort_by(|a, b| compare_keys_utf16(a, b));
    keys
}

/// Serialize a float the way ECMAScript prints numbers; non-finite values
/// become `null`.
pub fn serialize_float(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    // -0 prints as 0
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }
    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => exponential,
    }
}

/// Serialize a JsonValue to compact JSON with sorted keys.
pub fn canonicalize(value: &JsonValue) -> String {
    let mut output = String::new();
    Writer::compact().value(value, &mut output);
    output
}

/// Serialize a JsonValue with `indent` spaces per nesting level.
///
/// An indent of zero produces the compact form.
pub fn write_pretty(value: &JsonValue, indent: usize) -> String {
    let mut output = String::new();
    Writer::indented(indent).value(value, &mut output);
    output
}

/// Layout state for one serialization.
#[derive(Debug, Clone)]
struct Writer {
    indent: String,
    depth: usize,
}

impl Writer {
    fn compact() -> Self {
        Self::indented(0)
    }

    fn indented(width: usize) -> Self {
        Self {
            indent: " ".repeat(width),
            depth: 0,
        }
    }

    fn value(&mut self, value: &JsonValue, output: &mut String) {
        match value {
            JsonValue::Null => output.push_str("null"),
            JsonValue::Bool(true) => output.push_str("true"),
            JsonValue::Bool(false) => output.push_str("false"),
            JsonValue::Number(n) => output.push_str(&n.to_string()),
            JsonValue::Float(f) => output.push_str(&serialize_float(*f)),
            JsonValue::String(s) => serialize_string(s, output),
            JsonValue::Array(arr) => self.array(arr, output),
            JsonValue::Object(map) => self.object(map, output),
        }
    }

    fn newline(&self, output: &mut String) {
        if self.indent.is_empty() {
            return;
        }
        output.push('\n');
        for _ in 0..self.depth {
            output.push_str(&self.indent);
        }
    }

    fn array(&mut self, arr: &[JsonValue], output: &mut String) {
        if arr.is_empty() {
            output.push_str("[]");
            return;
        }
        output.push('[');
        self.depth += 1;
        for (i, value) in arr.iter().enumerate() {
            if i > 0 {
                output.push(',');
            }
            self.newline(output);
            self.value(value, output);
        }
        self.depth -= 1;
        self.newline(output);
        output.push(']');
    }

    fn object(&mut self, map: &std::collections::BTreeMap<String, JsonValue>, output: &mut String) {
        if map.is_empty() {
            output.push_str("{}");
            return;
        }
        output.push('{');
        self.depth += 1;
        for (i, key) in ordered_keys(map).into_iter().enumerate() {
            if i > 0 {
                output.push(',');
            }
            self.newline(output);
            serialize_string(key, output);
            output.push(':');
            if !self.indent.is_empty() {
                output.push(' ');
            }
            if let Some(v) = map.get(key) {
                self.value(v, output);
            }
        }
        self.depth -= 1;
        self.newline(output);
        output.push('}');
    }
}

/// Serialize a string with proper JSON escaping.
pub fn serialize_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn object(entries: &[(&str, JsonValue)]) -> JsonValue {
        JsonValue::Object(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_utf16_key_ordering() {
        assert_eq!(compare_keys_utf16("a", "b"), Ordering::Less);
        assert_eq!(compare_keys_utf16("b", "a"), Ordering::Greater);
        assert_eq!(compare_keys_utf16("abc", "abc"), Ordering::Equal);
        assert_eq!(compare_keys_utf16("a", "aa"), Ordering::Less);
    }

    #[test]
    fn test_utf16_orders_astral_before_high_bmp() {
        // U+1F600 encodes as D83D DE00, which sorts before U+FF01
        assert_eq!(compare_keys_utf16("\u{1F600}", "\u{FF01}"), Ordering::Less);
        // Code point order disagrees
        assert!("\u{1F600}" > "\u{FF01}");
    }

    #[test]
    fn test_serialize_float() {
        assert_eq!(serialize_float(1.5), "1.5");
        assert_eq!(serialize_float(2.0), "2");
        assert_eq!(serialize_float(-0.0), "0");
        assert_eq!(serialize_float(-3.0), "-3");
        assert_eq!(serialize_float(1e21), "1e+21");
        assert_eq!(serialize_float(1.5e-7), "1.5e-7");
        assert_eq!(serialize_float(f64::NAN), "null");
        assert_eq!(serialize_float(f64::INFINITY), "null");
    }

    #[test]
    fn test_canonicalize_primitives() {
        assert_eq!(canonicalize(&JsonValue::Null), "null");
        assert_eq!(canonicalize(&JsonValue::Bool(true)), "true");
        assert_eq!(canonicalize(&JsonValue::Bool(false)), "false");
        assert_eq!(canonicalize(&JsonValue::Number(42)), "42");
        assert_eq!(canonicalize(&JsonValue::Float(0.25)), "0.25");
    }

    #[test]
    fn test_canonicalize_string_escapes() {
        assert_eq!(
            canonicalize(&JsonValue::String("a\nb".to_string())),
            "\"a\\nb\""
        );
        assert_eq!(
            canonicalize(&JsonValue::String("a\"b".to_string())),
            "\"a\\\"b\""
        );
        assert_eq!(
            canonicalize(&JsonValue::String("\u{1}".to_string())),
            "\"\\u0001\""
        );
    }

    #[test]
    fn test_canonicalize_nested() {
        let value = object(&[
            ("obj", object(&[("x", JsonValue::Number(1))])),
            ("arr", JsonValue::Array(vec![JsonValue::Number(1)])),
        ]);
        assert_eq!(canonicalize(&value), "{\"arr\":[1],\"obj\":{\"x\":1}}");
    }

    #[test]
    fn test_canonicalize_empty_containers() {
        assert_eq!(canonicalize(&JsonValue::Array(vec![])), "[]");
        assert_eq!(canonicalize(&JsonValue::Object(BTreeMap::new())), "{}");
    }

    #[test]
    fn test_write_pretty_layout() {
        let value = object(&[
            ("a", JsonValue::Number(1)),
            (
                "b",
                JsonValue::Array(vec![JsonValue::Bool(true), JsonValue::Array(vec![])]),
            ),
        ]);
        let expected = "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    []\n  ]\n}";
        assert_eq!(write_pretty(&value, 2), expected);
    }

    #[test]
    fn test_write_pretty_zero_indent_is_compact() {
        let value = object(&[("a", JsonValue::Number(1))]);
        assert_eq!(write_pretty(&value, 0), canonicalize(&value));
    }
}
