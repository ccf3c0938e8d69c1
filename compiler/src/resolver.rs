use schemagen_schema::{PrimitiveType, SchemaType, StringFormat};
use thiserror::Error;
use tracing::trace;

use crate::naming::{name_from_uri, NameError};

pub const CHRONO_DATE_TIME: &str = "chrono::{DateTime, Utc}";
pub const CHRONO_DURATION:  &str = "chrono::Duration";
pub const STD_NET:          &str = "std::net::IpAddr";
pub const REGEX:            &str = "regex::Regex";
pub const UUID:             &str = "uuid::Uuid";

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unsupported schema type {0}")]
    UnsupportedSchemaType(SchemaType),

    #[error("malformed $ref: {0}")]
    Reference(#[from] NameError),
}

/// A Rust type for one schema property, plus the `use` path it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub name:   String,
    pub import: Option<&'static str>,
}

impl ResolvedType {
    fn plain(name: &str) -> Self {
        ResolvedType { name: name.to_string(), import: None }
    }

    fn imported(name: &str, import: &'static str) -> Self {
        ResolvedType { name: name.to_string(), import: Some(import) }
    }
}

/// Maps a property's `type`, `format` and `$ref` to a Rust type.
///
/// Any set that includes `string` resolves through `format`. Other types
/// must stand alone. A `$ref` is consulted only when neither applies and
/// always yields an optional boxed reference to the named type. Objects
/// without a `$ref` are rejected.
pub fn resolve_type(
    type_: SchemaType,
    format: Option<StringFormat>,
    reference: Option<&str>,
) -> Result<ResolvedType, ResolveError> {
    if type_.contains(PrimitiveType::String) {
        return Ok(string_type(format));
    }

    let primitive = match type_.single() {
        Some(PrimitiveType::Integer) => Some("i64"),
        Some(PrimitiveType::Number)  => Some("f64"),
        Some(PrimitiveType::Boolean) => Some("bool"),
        Some(PrimitiveType::Array)   => Some("Vec<serde_json::Value>"),
        Some(PrimitiveType::Null)    => Some("serde_json::Value"),
        _ => None,
    };
    if let Some(name) = primitive {
        return Ok(ResolvedType::plain(name));
    }

    if let Some(uri) = reference.filter(|r| !r.is_empty()) {
        let name = name_from_uri(uri)?;
        trace!(%uri, %name, "resolved $ref");
        return Ok(ResolvedType::plain(&format!("Option<Box<{}>>", name)));
    }

    Err(ResolveError::UnsupportedSchemaType(type_))
}

fn string_type(format: Option<StringFormat>) -> ResolvedType {
    match format {
        Some(StringFormat::DateTime | StringFormat::Date | StringFormat::Time) => {
            ResolvedType::imported("DateTime<Utc>", CHRONO_DATE_TIME)
        }
        Some(StringFormat::Duration) => ResolvedType::imported("Duration", CHRONO_DURATION),
        Some(StringFormat::Ipv4 | StringFormat::Ipv6) => ResolvedType::imported("IpAddr", STD_NET),
        Some(StringFormat::Regex) => ResolvedType::imported("Regex", REGEX),
        Some(StringFormat::Uuid) => ResolvedType::imported("Uuid", UUID),
        _ => ResolvedType::plain("String"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemagen_schema::STRING_FORMATS;

    fn st(t: PrimitiveType) -> SchemaType {
        SchemaType::from(t)
    }

    #[test]
    fn test_primitive_table() {
        let cases = [
            (PrimitiveType::Integer, "i64"),
            (PrimitiveType::Number,  "f64"),
            (PrimitiveType::Boolean, "bool"),
            (PrimitiveType::Array,   "Vec<serde_json::Value>"),
            (PrimitiveType::Null,    "serde_json::Value"),
            (PrimitiveType::String,  "String"),
        ];
        for (t, expected) in cases {
            let got = resolve_type(st(t), None, None).unwrap();
            assert_eq!(got, ResolvedType::plain(expected), "type {t}");
        }
    }

    #[test]
    fn test_string_formats() {
        let cases = [
            (StringFormat::DateTime, "DateTime<Utc>", Some(CHRONO_DATE_TIME)),
            (StringFormat::Date,     "DateTime<Utc>", Some(CHRONO_DATE_TIME)),
            (StringFormat::Time,     "DateTime<Utc>", Some(CHRONO_DATE_TIME)),
            (StringFormat::Duration, "Duration",      Some(CHRONO_DURATION)),
            (StringFormat::Ipv4,     "IpAddr",        Some(STD_NET)),
            (StringFormat::Ipv6,     "IpAddr",        Some(STD_NET)),
            (StringFormat::Regex,    "Regex",         Some(REGEX)),
            (StringFormat::Uuid,     "Uuid",          Some(UUID)),
            (StringFormat::Email,    "String",        None),
            (StringFormat::Uri,      "String",        None),
        ];
        for (format, name, import) in cases {
            let got = resolve_type(st(PrimitiveType::String), Some(format), None).unwrap();
            assert_eq!(got.name, name, "format {format}");
            assert_eq!(got.import, import, "format {format}");
        }
    }

    #[test]
    fn test_every_format_resolves_for_strings() {
        for format in STRING_FORMATS {
            assert!(resolve_type(st(PrimitiveType::String), Some(format), None).is_ok());
        }
    }

    #[test]
    fn test_string_union_resolves_through_format() {
        let nullable = PrimitiveType::String | PrimitiveType::Null;
        let got = resolve_type(nullable, Some(StringFormat::Uuid), None).unwrap();
        assert_eq!(got, ResolvedType::imported("Uuid", UUID));
    }

    #[test]
    fn test_reference() {
        let got = resolve_type(SchemaType::empty(), None, Some("https://example.com/inner.json")).unwrap();
        assert_eq!(got, ResolvedType::plain("Option<Box<Inner>>"));

        let object = st(PrimitiveType::Object);
        let got = resolve_type(object, None, Some("https://example.com/inner.json")).unwrap();
        assert_eq!(got.name, "Option<Box<Inner>>");
    }

    #[test]
    fn test_primitive_wins_over_reference() {
        let got = resolve_type(st(PrimitiveType::Integer), None, Some("https://example.com/inner.json")).unwrap();
        assert_eq!(got.name, "i64");
    }

    #[test]
    fn test_unsupported() {
        let err = resolve_type(st(PrimitiveType::Object), None, None).unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedSchemaType(t) if t == st(PrimitiveType::Object)));

        let err = resolve_type(SchemaType::empty(), None, Some("")).unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedSchemaType(_)));

        let union = PrimitiveType::Integer | PrimitiveType::Null;
        let err = resolve_type(union, None, None).unwrap_err();
        assert_eq!(err.to_string(), "unsupported schema type [integer, null]");
    }

    #[test]
    fn test_bad_reference() {
        let err = resolve_type(SchemaType::empty(), None, Some("https://example.com")).unwrap_err();
        assert!(matches!(err, ResolveError::Reference(NameError::InvalidSchemaName(_))));
    }
}
