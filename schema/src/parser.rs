use serde_json::{Map, Value};

use crate::{
    ast::Schema,
    error::DecodeError,
    format::StringFormat,
    schema_type::{PrimitiveType, SchemaType},
};

/// Parses a JSON Schema document into a [`Schema`] tree.
///
/// Unknown keywords are skipped. Any malformed value of a known keyword
/// fails the whole parse.
pub fn parse_schema(bytes: &[u8]) -> Result<Schema, DecodeError> {
    let document: Value = serde_json::from_slice(bytes)?;
    schema_from_value(&document, "")
}

pub fn parse_schema_str(text: &str) -> Result<Schema, DecodeError> {
    parse_schema(text.as_bytes())
}

/// Builds a [`Schema`] from an already decoded JSON value. `path` is the
/// JSON pointer of `value` within its document and is only used in errors.
pub fn schema_from_value(value: &Value, path: &str) -> Result<Schema, DecodeError> {
    let object = value.as_object().ok_or_else(|| DecodeError::ExpectedObject {
        path: path.to_string(),
    })?;

    let mut schema = Schema::default();

    for (keyword, value) in object {
        match keyword.as_str() {
            "$id"              => schema.id = Some(string(value, path, "$id")?),
            "$ref"             => schema.reference = Some(string(value, path, "$ref")?),
            "type"             => schema.type_ = decode_type(value, path)?,
            "format"           => schema.format = Some(decode_format(value, path)?),
            "multipleOf"       => schema.multiple_of = Some(number(value, path, "multipleOf")?),
            "maximum"          => schema.maximum = Some(number(value, path, "maximum")?),
            "exclusiveMaximum" => schema.exclusive_maximum = Some(number(value, path, "exclusiveMaximum")?),
            "minimum"          => schema.minimum = Some(number(value, path, "minimum")?),
            "exclusiveMinimum" => schema.exclusive_minimum = Some(number(value, path, "exclusiveMinimum")?),
            "maxLength"        => schema.max_length = Some(length(value, path, "maxLength")?),
            "minLength"        => schema.min_length = Some(length(value, path, "minLength")?),
            "pattern"          => schema.pattern = Some(string(value, path, "pattern")?),
            "properties"       => decode_properties(value, path, &mut schema)?,
            _ => {}
        }
    }

    Ok(schema)
}

/// Decodes the `type` keyword: one token, or a non-empty array of tokens
/// whose members are merged into one set.
pub fn decode_type(value: &Value, path: &str) -> Result<SchemaType, DecodeError> {
    match value {
        Value::String(token) => Ok(SchemaType::from(type_token(token, path)?)),
        Value::Array(items) if !items.is_empty() => {
            let mut st = SchemaType::empty();
            for item in items {
                let token = item.as_str().ok_or_else(|| invalid_type(value, path))?;
                st.insert(type_token(token, path)?);
            }
            Ok(st)
        }
        _ => Err(invalid_type(value, path)),
    }
}

pub fn decode_format(value: &Value, path: &str) -> Result<StringFormat, DecodeError> {
    let token = value.as_str().ok_or_else(|| DecodeError::InvalidKeyword {
        path:     path.to_string(),
        keyword:  "format",
        expected: "a string",
    })?;

    StringFormat::from_token(token).ok_or_else(|| DecodeError::UnsupportedFormat {
        path:  path.to_string(),
        token: token.to_string(),
    })
}

fn type_token(token: &str, path: &str) -> Result<PrimitiveType, DecodeError> {
    PrimitiveType::from_token(token).ok_or_else(|| DecodeError::UnsupportedType {
        path:  path.to_string(),
        token: token.to_string(),
    })
}

fn invalid_type(value: &Value, path: &str) -> DecodeError {
    DecodeError::InvalidTypeValue {
        path:  path.to_string(),
        value: value.to_string(),
    }
}

fn decode_properties(value: &Value, path: &str, schema: &mut Schema) -> Result<(), DecodeError> {
    let properties: &Map<String, Value> = value.as_object().ok_or_else(|| DecodeError::InvalidKeyword {
        path:     path.to_string(),
        keyword:  "properties",
        expected: "an object",
    })?;

    for (name, child) in properties {
        let child_path = format!("{}/properties/{}", path, escape_pointer(name));
        let child = schema_from_value(child, &child_path)?;
        schema.properties.insert(name.clone(), child);
    }

    Ok(())
}

fn string(value: &Value, path: &str, keyword: &'static str) -> Result<String, DecodeError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DecodeError::InvalidKeyword {
            path: path.to_string(),
            keyword,
            expected: "a string",
        })
}

fn number(value: &Value, path: &str, keyword: &'static str) -> Result<f64, DecodeError> {
    value.as_f64().ok_or_else(|| DecodeError::InvalidKeyword {
        path: path.to_string(),
        keyword,
        expected: "a number",
    })
}

fn length(value: &Value, path: &str, keyword: &'static str) -> Result<u32, DecodeError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| DecodeError::InvalidKeyword {
            path: path.to_string(),
            keyword,
            expected: "a non-negative integer",
        })
}

/// RFC 6901 escaping of one reference token.
fn escape_pointer(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
