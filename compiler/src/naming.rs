use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum NameError {
    #[error("malformed URI {uri:?}: {source}")]
    MalformedUri {
        uri:    String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid schema name in {0:?}")]
    InvalidSchemaName(String),
}

/// Extracts a type name from a schema URI (`$id` or `$ref`).
///
/// The last path segment is percent-decoded, cut at its first `.` and
/// converted to PascalCase, so `https://example.com/a/user-profile.json?v=2`
/// names `UserProfile`. Queries and fragments never take part. The result is
/// always a valid Rust type identifier.
pub fn name_from_uri(uri: &str) -> Result<String, NameError> {
    let url = parse_uri(uri)?;

    let path = url.path();
    if path.is_empty() {
        return Err(NameError::InvalidSchemaName(uri.to_string()));
    }

    let segment = &path[path.rfind('/').map_or(0, |i| i + 1)..];
    let segment = percent_decode_str(segment).decode_utf8_lossy();
    let stem = match segment.find('.') {
        Some(i) => &segment[..i],
        None => &segment[..],
    };

    let name = to_pascal_case(stem);
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) || is_rust_keyword(&name) {
        return Err(NameError::InvalidSchemaName(uri.to_string()));
    }

    Ok(name)
}

/// Relative references are resolved against an empty `file:///` base so
/// that `inner.json` and `defs/inner.json` still carry a path.
fn parse_uri(uri: &str) -> Result<Url, NameError> {
    let malformed = |source| NameError::MalformedUri {
        uri: uri.to_string(),
        source,
    };

    match Url::parse(uri) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("file:///").map_err(malformed)?;
            base.join(uri).map_err(malformed)
        }
        Err(e) => Err(malformed(e)),
    }
}

/// Converts a string to PascalCase.
/// - Every character outside `[A-Za-z0-9]` splits words and is dropped.
/// - The first letter of every word, and any letter that follows a digit,
///   is uppercased.
/// - Everything else keeps its original casing, so `userID` becomes `UserID`.
pub fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = true;
    let mut prev_digit = false;

    for c in s.chars() {
        if !c.is_ascii_alphanumeric() {
            upper_next = true;
            prev_digit = false;
            continue;
        }
        if upper_next || (prev_digit && c.is_alphabetic()) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        upper_next = false;
        prev_digit = c.is_ascii_digit();
    }

    out
}

/// Converts a string to snake_case.
/// This implementation avoids inserting underscores between consecutive uppercase letters,
/// so that acronyms remain intact (e.g. "sessionID" becomes "session_id").
/// Separators and any other character that cannot appear in an identifier
/// become a single `_`; a name with nothing left becomes `field`.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if (!prev.is_uppercase() || next_lower) && !snake.ends_with('_') {
                    snake.push('_');
                }
            }
            snake.extend(c.to_lowercase());
        } else if c.is_alphanumeric() || c == '_' {
            snake.push(c);
        } else if !snake.ends_with('_') {
            snake.push('_');
        }
    }

    let trimmed = snake.trim_matches('_');
    if trimmed.is_empty() {
        return "field".to_string();
    }
    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{}", trimmed);
    }
    trimmed.to_string()
}

const RUST_KEYWORDS: [&str; 51] = [
    "as", "async", "await", "break", "const", "continue", "crate", "dyn",
    "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "try", "typeof", "unsized",
    "virtual", "yield",
];

pub fn is_rust_keyword(s: &str) -> bool {
    RUST_KEYWORDS.contains(&s)
}

/// Escapes Rust reserved keywords by suffixing with an underscore.
pub fn escape_rust_keyword(s: &str) -> String {
    if is_rust_keyword(s) {
        format!("{}_", s)
    } else {
        s.to_string()
    }
}

/// The Rust field identifier generated for a property name.
pub fn field_ident(property: &str) -> String {
    escape_rust_keyword(&to_snake_case(property))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_uri() {
        let cases = [
            ("https://example.com/name.json", "Name"),
            ("https://example.com/a/b/c/test.json", "Test"),
            ("https://example.com/a/b/c/query.json?a=1", "Query"),
            ("https://example.com/a/b/c/anchor.json#anchor1", "Anchor"),
            ("https://example.com/a/b/user-profile.schema.json", "UserProfile"),
            ("https://example.com/line_item", "LineItem"),
        ];
        for (uri, expected) in cases {
            assert_eq!(name_from_uri(uri).unwrap(), expected, "uri {uri}");
        }
    }

    #[test]
    fn test_name_ignores_query_and_fragment() {
        let plain = name_from_uri("https://example.com/a/b/name.json").unwrap();
        let query = name_from_uri("https://example.com/a/b/name.json?x=1").unwrap();
        let frag = name_from_uri("https://example.com/a/b/name.json#frag").unwrap();
        assert_eq!(plain, "Name");
        assert_eq!(plain, query);
        assert_eq!(plain, frag);
    }

    #[test]
    fn test_relative_references() {
        assert_eq!(name_from_uri("inner.json").unwrap(), "Inner");
        assert_eq!(name_from_uri("defs/order-line.json").unwrap(), "OrderLine");
        assert_eq!(name_from_uri("../shared/address.json#/x").unwrap(), "Address");
    }

    #[test]
    fn test_empty_path_is_invalid() {
        for uri in [
            "https://example.com",
            "https://example.com/",
            "https://example.com/a/",
            "https://example.com/.json",
            "#/definitions/inner",
        ] {
            let err = name_from_uri(uri).unwrap_err();
            assert!(
                matches!(err, NameError::InvalidSchemaName(_)),
                "expected InvalidSchemaName for {uri} but got {:?}",
                err
            );
        }
    }

    #[test]
    fn test_names_are_identifier_safe() {
        let cases = [
            ("https://example.com/user+profile.json", "UserProfile"),
            ("https://example.com/my%20model.json", "MyModel"),
            ("https://example.com/stra%C3%9Fe.json", "StraE"),
            ("https://example.com/straße.json", "StraE"),
            ("urn:example:widget", "ExampleWidget"),
            ("https://example.com/a(b)c.json", "ABC"),
        ];
        for (uri, expected) in cases {
            assert_eq!(name_from_uri(uri).unwrap(), expected, "uri {uri}");
        }
    }

    #[test]
    fn test_names_that_cannot_be_types() {
        for uri in [
            "https://example.com/404.json",
            "https://example.com/%2B%2B.json",
            "https://example.com/self.json",
        ] {
            let err = name_from_uri(uri).unwrap_err();
            assert!(
                matches!(err, NameError::InvalidSchemaName(_)),
                "expected InvalidSchemaName for {uri} but got {:?}",
                err
            );
        }
    }

    #[test]
    fn test_malformed_uri() {
        let err = name_from_uri("http://[::1/name.json").unwrap_err();
        assert!(matches!(err, NameError::MalformedUri { .. }), "got {:?}", err);
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("model"), "Model");
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("user-profile"), "UserProfile");
        assert_eq!(to_pascal_case("user profile"), "UserProfile");
        assert_eq!(to_pascal_case("userID"), "UserID");
        assert_eq!(to_pascal_case("v2beta"), "V2Beta");
        assert_eq!(to_pascal_case("__"), "");
        assert_eq!(to_pascal_case("user+profile"), "UserProfile");
        assert_eq!(to_pascal_case("a.b:c"), "ABC");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Age"), "age");
        assert_eq!(to_snake_case("firstName"), "first_name");
        assert_eq!(to_snake_case("sessionID"), "session_id");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("first-name"), "first_name");
        assert_eq!(to_snake_case("Last_Name"), "last_name");
        assert_eq!(to_snake_case("2fa"), "_2fa");
        assert_eq!(to_snake_case("$"), "field");
    }

    #[test]
    fn test_field_ident_escapes_keywords() {
        assert_eq!(field_ident("type"), "type_");
        assert_eq!(field_ident("Self"), "self_");
        assert_eq!(field_ident("async"), "async_");
        assert_eq!(field_ident("kind"), "kind");
    }
}
