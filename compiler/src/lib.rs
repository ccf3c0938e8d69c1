//! schemagen-compiler
//!
//! This crate implements:
//!  1) Type-name extraction from schema URIs (`name_from_uri`),
//!  2) The property type resolver (`resolve_type`),
//!  3) Struct emission (`emit_struct` → `String`), formatted through
//!     `syn` + `prettyplease`,
//!  4) Error types (`NameError`, `ResolveError`, `EmitError`) and `GenOptions`.

pub mod error;
pub mod gen_rust;
pub mod naming;
pub mod options;
pub mod resolver;
pub mod utils;

pub use error::EmitError;
pub use gen_rust::{compile_schema_to_rust, emit_struct, GENERATED_HEADER};
pub use naming::{name_from_uri, NameError};
pub use options::GenOptions;
pub use resolver::{resolve_type, ResolveError, ResolvedType};
