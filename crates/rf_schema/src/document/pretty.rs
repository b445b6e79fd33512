use alloc::string::{String, ToString};

use crate::document::Document;

const INDENT: &str = "  ";

/// Render a document as indented text.
///
/// - Two spaces of indentation per nesting level.
/// - Object braces on their own lines, one member per line, keys quoted.
/// - Arrays stay on one line, elements separated by `,` with no trailing
///   separator; object elements start on a fresh line.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use rf_schema::document::to_text;
///
/// let doc = json!({ "id": 1, "tags": [1, -1], "info": { "on": true } });
/// let expected = "\
/// {
///   \"id\":1,
///   \"tags\":[1,-1],
///   \"info\":
///   {
///     \"on\":true
///   }
/// }";
/// assert_eq!(to_text(&doc), expected);
/// ```
pub fn to_text(node: &Document) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn pad(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn write_node(out: &mut String, node: &Document, depth: usize) {
    match node {
        Document::Object(members) => {
            if depth != 0 {
                out.push('\n');
            }
            pad(out, depth);
            out.push_str("{\n");
            let last = members.len().saturating_sub(1);
            for (index, (key, value)) in members.iter().enumerate() {
                pad(out, depth + 1);
                write_string(out, key);
                out.push(':');
                write_node(out, value, depth + 1);
                if index != last {
                    out.push(',');
                }
                out.push('\n');
            }
            pad(out, depth);
            out.push('}');
        }
        Document::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index != 0 {
                    out.push(',');
                }
                write_node(out, item, depth + 1);
            }
            out.push(']');
        }
        Document::String(text) => write_string(out, text),
        Document::Number(number) => out.push_str(&number.to_string()),
        Document::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
        Document::Null => out.push_str("null"),
    }
}

fn write_string(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => push_escaped_control(out, c as u8),
            c => out.push(c),
        }
    }
    out.push('"');
}

const HEX: &[u8; 16] = b"0123456789abcdef";

fn push_escaped_control(out: &mut String, byte: u8) {
    out.push_str("\\u00");
    out.push(char::from(HEX[usize::from(byte >> 4)]));
    out.push(char::from(HEX[usize::from(byte & 0x0F)]));
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::to_text;
    use crate::document::parse;

    #[test]
    fn scalars_and_empty_containers() {
        assert_eq!(to_text(&json!(null)), "null");
        assert_eq!(to_text(&json!(-12)), "-12");
        assert_eq!(to_text(&json!([])), "[]");
        assert_eq!(to_text(&json!({})), "{\n}");
    }

    #[test]
    fn array_of_objects() {
        let doc = json!({ "subs": [{ "a": 1 }, { "a": 2 }] });
        let expected = "{\n  \"subs\":[\n    {\n      \"a\":1\n    },\n    {\n      \"a\":2\n    }]\n}";
        assert_eq!(to_text(&doc), expected);
    }

    #[test]
    fn keeps_member_order() {
        let doc = parse(r#"{ "zeta": 1, "alpha": 2 }"#).unwrap();
        assert_eq!(to_text(&doc), "{\n  \"zeta\":1,\n  \"alpha\":2\n}");
    }

    #[test]
    fn escapes_and_reparses() {
        let doc = json!({ "text": "say \"hi\"\n\\ \u{1}" });
        let text = to_text(&doc);
        assert!(text.contains(r#""say \"hi\"\n\\ \u0001""#));
        assert_eq!(parse(&text).unwrap(), doc);
    }

    #[test]
    fn control_characters_and_numbers() {
        assert_eq!(to_text(&json!("\u{1f}\u{0}")), r#""\u001f\u0000""#);
        assert_eq!(to_text(&json!([2147483647, -2147483648])), "[2147483647,-2147483648]");
    }
}
