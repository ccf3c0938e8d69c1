use schemagen_schema::{SchemaType, StringFormat};
use thiserror::Error;

use crate::{naming::NameError, resolver::ResolveError};

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("schema {0:?} has no properties")]
    NoProperties(String),

    #[error("failed to find schema name: {0}")]
    SchemaName(#[source] NameError),

    #[error("invalid module name {0:?}")]
    InvalidModuleName(String),

    #[error(
        "failed to find Rust type for property {property:?} with type {type_} and format {}",
        .format.map_or("<none>", StringFormat::token)
    )]
    Resolve {
        property: String,
        type_:    SchemaType,
        format:   Option<StringFormat>,
        #[source]
        source:   ResolveError,
    },

    #[error("property {property:?} has type `{rust_type}`, which cannot derive Serialize/Deserialize")]
    NotSerializable {
        property:  String,
        rust_type: String,
    },

    #[error("properties {first:?} and {second:?} both map to field `{field}`")]
    FieldCollision {
        field:  String,
        first:  String,
        second: String,
    },

    #[error("generated code is not valid Rust: {0}")]
    Format(#[source] syn::Error),
}
