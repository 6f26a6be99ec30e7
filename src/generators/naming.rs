use regex::Regex;
use std::sync::OnceLock;

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

fn identifier_regex() -> &'static Regex {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER.get_or_init(|| {
        Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_]*$").expect("identifier pattern is valid")
    })
}

/// Separators and other-category characters, which Go does not print verbatim
fn non_printable_regex() -> &'static Regex {
    static NON_PRINTABLE: OnceLock<Regex> = OnceLock::new();
    NON_PRINTABLE.get_or_init(|| {
        Regex::new(r"^[\p{Z}\p{C}]$").expect("category pattern is valid")
    })
}

/// Whether Go's `strconv.Quote` would escape `c`. ASCII space is the one
/// separator left as is.
fn is_non_printable(c: char) -> bool {
    let mut buf = [0u8; 4];
    c != ' ' && non_printable_regex().is_match(c.encode_utf8(&mut buf))
}

/// Derive the constant name for a template base name.
///
/// Only the first character is lower-cased so the constant stays unexported;
/// the rest of the name is kept as written.
pub fn constant_name(base_name: &str) -> String {
    let mut chars = base_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `name` would compile as a Go identifier
pub fn is_valid_go_identifier(name: &str) -> bool {
    identifier_regex().is_match(name) && !GO_KEYWORDS.contains(&name)
}

/// Quote a string as a Go interpreted string literal, like `strconv.Quote`
pub fn quote_go_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{07}' => quoted.push_str("\\a"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0C}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{0B}' => quoted.push_str("\\v"),
            c if is_non_printable(c) => {
                let code = c as u32;
                if code < 0x80 {
                    quoted.push_str(&format!("\\x{:02x}", code));
                } else if code <= 0xFFFF {
                    quoted.push_str(&format!("\\u{:04x}", code));
                } else {
                    quoted.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
