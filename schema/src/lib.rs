//! schemagen-schema
//!
//! The syntax tree for JSON Schema documents consumed by `schemagen`:
//!  1) `SchemaType`, the set of primitive types named by the `type` keyword,
//!  2) `StringFormat`, the closed vocabulary of the `format` keyword,
//!  3) `Schema`, one document or subschema with its nested properties,
//!  4) `parse_schema`, which decodes bytes into a `Schema` tree.
//!
//! ```
//! use schemagen_schema::*;
//!
//! let schema = parse_schema_str(r#"{"type": ["string", "null"], "format": "uuid"}"#).unwrap();
//! assert!(schema.type_.contains(PrimitiveType::String));
//! assert!(schema.type_.contains(PrimitiveType::Null));
//! assert_eq!(schema.format, Some(StringFormat::Uuid));
//! ```

pub mod ast;
pub mod error;
pub mod format;
pub mod parser;
pub mod schema_type;

pub use ast::Schema;
pub use error::DecodeError;
pub use format::{StringFormat, STRING_FORMATS};
pub use parser::{parse_schema, parse_schema_str, schema_from_value};
pub use schema_type::{PrimitiveType, SchemaType, PRIMITIVE_TYPES};
