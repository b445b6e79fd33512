//! Mapping document keys to Rust identifiers.

use alloc::format;
use alloc::string::String;

use rf_utils::hash::HashSet;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NOT_RAW: &[&str] = &["crate", "self", "Self", "super"];

/// Names generated code already refers to.
pub(crate) const RESERVED_TYPE_NAMES: &[&str] = &[
    "Box", "Clone", "Debug", "Default", "Option", "PartialEq", "Result", "Schema",
    "SchemaBuilder", "String", "Vec",
];

/// Returns `true` for a plain ASCII identifier usable as a struct name.
pub(crate) fn is_valid_type_name(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name != "_"
        && !KEYWORDS.contains(&name)
        && !RESERVED_TYPE_NAMES.contains(&name)
}

/// `"jump_url"` becomes `"JumpUrl"`, `"startTime"` becomes `"StartTime"`.
pub(crate) fn pascal_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut boundary = true;
    for c in key.chars() {
        if !c.is_ascii_alphanumeric() {
            boundary = true;
        } else if boundary {
            out.push(c.to_ascii_uppercase());
            boundary = false;
        } else {
            out.push(c);
        }
    }

    if out.is_empty() {
        out.push_str("Nested");
    } else if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, 'T');
    }
    if KEYWORDS.contains(&out.as_str()) {
        out.push('_');
    }
    out
}

/// `"startTime"` becomes `"start_time"`, `"jump-url"` becomes `"jump_url"`.
pub(crate) fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            if prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
        prev = Some(c);
    }

    while out.ends_with('_') {
        out.pop();
    }
    if out.is_empty() {
        out.push_str("field");
    } else if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Turn a snake_case name into a field identifier, escaping keywords.
pub(crate) fn field_ident(name: String) -> String {
    if NOT_RAW.contains(&name.as_str()) {
        format!("{name}_")
    } else if KEYWORDS.contains(&name.as_str()) {
        format!("r#{name}")
    } else {
        name
    }
}

/// Returns `base`, or `base` plus the first free numeric suffix.
pub(crate) fn unique(base: String, taken: &mut HashSet<String>, separator: &str) -> String {
    if !taken.contains(&base) {
        taken.insert(base.clone());
        return base;
    }
    let mut n = 2_usize;
    loop {
        let candidate = format!("{base}{separator}{n}");
        if !taken.contains(&candidate) {
            taken.insert(candidate.clone());
            return candidate;
        }
        n += 1;
    }
}
