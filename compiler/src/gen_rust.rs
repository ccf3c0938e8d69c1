use std::collections::{BTreeMap, BTreeSet};

use lazy_static::lazy_static;
use regex::Regex;
use schemagen_schema::Schema;
use tracing::{debug, trace};

use crate::{
    error::EmitError,
    naming::{field_ident, is_rust_keyword, name_from_uri},
    options::GenOptions,
    resolver::{resolve_type, REGEX},
    utils::quote,
};

pub const GENERATED_HEADER: &str = "// @generated by schemagen. Do not edit.\n\n";

const SERDE_IMPORT: &str = "serde::{Deserialize, Serialize}";

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// One resolved struct field, ready to print.
struct FieldLine {
    property: String,
    ident:    String,
    type_:    String,
}

/// Emits the Rust struct for `schema` with default [`GenOptions`].
pub fn compile_schema_to_rust(schema: &Schema) -> Result<String, EmitError> {
    emit_struct(schema, &GenOptions::default())
}

/// Emits the Rust module for one schema document.
///
/// A schema without `$id` yields the header and an empty module. Otherwise
/// the schema must have properties; they are emitted in byte order of their
/// names, with the imports they need sorted above the struct. Nothing is
/// returned unless the whole struct resolves and parses as Rust.
pub fn emit_struct(schema: &Schema, options: &GenOptions) -> Result<String, EmitError> {
    if !IDENTIFIER.is_match(&options.module) || is_rust_keyword(&options.module) {
        return Err(EmitError::InvalidModuleName(options.module.clone()));
    }

    let Some(id) = schema.id() else {
        debug!("schema has no $id, emitting empty module");
        return Ok(format!("{}pub mod {} {{}}\n", GENERATED_HEADER, options.module));
    };

    if schema.properties.is_empty() {
        return Err(EmitError::NoProperties(id.to_string()));
    }

    let struct_name = name_from_uri(id).map_err(EmitError::SchemaName)?;

    let mut names: Vec<&String> = schema.properties.keys().collect();
    names.sort();

    let mut imports: BTreeSet<&'static str> = BTreeSet::new();
    let mut idents: BTreeMap<String, &str> = BTreeMap::new();
    let mut fields: Vec<FieldLine> = Vec::with_capacity(names.len());

    for name in names {
        let property = &schema.properties[name];

        let resolved = resolve_type(property.type_, property.format, property.reference())
            .map_err(|source| EmitError::Resolve {
                property: name.clone(),
                type_:    property.type_,
                format:   property.format,
                source,
            })?;
        trace!(property = %name, rust_type = %resolved.name, "resolved property");

        if options.serde && resolved.import == Some(REGEX) {
            return Err(EmitError::NotSerializable {
                property:  name.clone(),
                rust_type: resolved.name,
            });
        }

        if let Some(import) = resolved.import {
            imports.insert(import);
        }

        let ident = field_ident(name);
        if let Some(first) = idents.insert(ident.clone(), name.as_str()) {
            return Err(EmitError::FieldCollision {
                field:  ident,
                first:  first.to_string(),
                second: name.clone(),
            });
        }

        fields.push(FieldLine {
            property: name.clone(),
            ident,
            type_: resolved.name,
        });
    }

    if options.serde {
        imports.insert(SERDE_IMPORT);
    }

    debug!(
        name = %struct_name,
        fields = fields.len(),
        imports = imports.len(),
        "emitting struct"
    );

    let mut rust_code: Vec<String> = Vec::new();
    rust_code.push(format!("pub mod {} {{", options.module));

    if !imports.is_empty() {
        for import in &imports {
            rust_code.push(format!("use {};", import));
        }
        rust_code.push("".to_string());
    }

    rust_code.push(generate_struct(&struct_name, &fields, options));
    rust_code.push("}".to_string());

    format_source(&rust_code.join("\n"))
}

/// Generates the struct declaration itself.
fn generate_struct(struct_name: &str, fields: &[FieldLine], options: &GenOptions) -> String {
    let mut lines = Vec::new();

    let derives = options.derive_list();
    if !derives.is_empty() {
        lines.push(format!("#[derive({})]", derives.join(", ")));
    }
    lines.push(format!("pub struct {} {{", struct_name));

    for field in fields {
        if options.serde && field.ident != field.property {
            lines.push(format!("    #[serde(rename = {})]", quote(&field.property)));
        }
        lines.push(format!("    pub {}: {},", field.ident, field.type_));
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Parses the assembled text and prints it back in canonical layout.
fn format_source(source: &str) -> Result<String, EmitError> {
    let file = syn::parse_file(source).map_err(EmitError::Format)?;
    Ok(format!("{}{}", GENERATED_HEADER, prettyplease::unparse(&file)))
}
