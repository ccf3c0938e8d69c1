//! schemagen
//!
//! Build-time generation of Rust structs from JSON Schema documents.
//!
//! - `generate`: schema bytes → formatted Rust source
//! - `generate_file`: the same, file to file, for use from `build.rs`
//! - re-exports of the schema model and compiler
//!
//! ```
//! let schema = br#"{
//!     "$id": "https://example.com/model.json",
//!     "type": "object",
//!     "properties": { "Name": { "type": "string" }, "Age": { "type": "integer" } }
//! }"#;
//! let code = schemagen::generate(schema, &schemagen::GenOptions::default()).unwrap();
//! assert!(code.contains("pub struct Model"));
//! ```

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

pub use schemagen_compiler::{
    compile_schema_to_rust, emit_struct, name_from_uri, resolve_type, EmitError, GenOptions,
    NameError, ResolveError, ResolvedType,
};
pub use schemagen_schema::{
    parse_schema, parse_schema_str, DecodeError, PrimitiveType, Schema, SchemaType, StringFormat,
};

#[derive(Debug, Error)]
pub enum SchemagenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse schema: {0}")]
    Decode(#[from] DecodeError),

    #[error("failed to generate code: {0}")]
    Emit(#[from] EmitError),
}

/// Parses one schema document and emits its Rust module.
pub fn generate(bytes: &[u8], options: &GenOptions) -> Result<String, SchemagenError> {
    let schema = parse_schema(bytes)?;
    Ok(emit_struct(&schema, options)?)
}

/// Reads the schema at `input` and writes the generated module to `output`,
/// creating missing parent directories. Nothing is written on failure.
pub fn generate_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &GenOptions,
) -> Result<(), SchemagenError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let bytes = fs::read(input)?;
    let code = generate(&bytes, options)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, code)?;

    info!(input = %input.display(), output = %output.display(), "generated Rust source");
    Ok(())
}
