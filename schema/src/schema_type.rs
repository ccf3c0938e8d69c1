use std::collections::HashMap;
use std::fmt;
use std::ops::BitOr;

use lazy_static::lazy_static;
use serde::{Serialize, Serializer};

/// One of the seven primitive types of the `type` keyword.
///
/// https://json-schema.org/draft/2020-12/json-schema-validation.html#rfc.section.6.1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    String,
    Number,
    Integer,
    Object,
    Array,
    Boolean,
    Null,
}

pub const PRIMITIVE_TYPES: [PrimitiveType; 7] = [
    PrimitiveType::String,
    PrimitiveType::Number,
    PrimitiveType::Integer,
    PrimitiveType::Object,
    PrimitiveType::Array,
    PrimitiveType::Boolean,
    PrimitiveType::Null,
];

lazy_static! {
    static ref TYPE_TOKENS: HashMap<&'static str, PrimitiveType> =
        PRIMITIVE_TYPES.iter().map(|t| (t.token(), *t)).collect();
}

impl PrimitiveType {
    /// Looks up a `type` keyword token. Returns `None` for anything outside
    /// the seven-entry vocabulary.
    pub fn from_token(token: &str) -> Option<Self> {
        TYPE_TOKENS.get(token).copied()
    }

    pub fn token(self) -> &'static str {
        match self {
            PrimitiveType::String  => "string",
            PrimitiveType::Number  => "number",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Object  => "object",
            PrimitiveType::Array   => "array",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Null    => "null",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The set of primitive types a schema admits. A schema declared with
/// `"type": ["string", "null"]` holds both members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SchemaType(u8);

impl SchemaType {
    pub const fn empty() -> Self {
        SchemaType(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, t: PrimitiveType) {
        self.0 |= t.bit();
    }

    pub fn contains(self, t: PrimitiveType) -> bool {
        self.0 & t.bit() != 0
    }

    /// Returns the sole member when the set holds exactly one type.
    pub fn single(self) -> Option<PrimitiveType> {
        let mut members = self.iter();
        match (members.next(), members.next()) {
            (Some(t), None) => Some(t),
            _ => None,
        }
    }

    /// Members in declaration order of [`PRIMITIVE_TYPES`].
    pub fn iter(self) -> impl Iterator<Item = PrimitiveType> {
        PRIMITIVE_TYPES.into_iter().filter(move |t| self.contains(*t))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl From<PrimitiveType> for SchemaType {
    fn from(t: PrimitiveType) -> Self {
        SchemaType(t.bit())
    }
}

impl FromIterator<PrimitiveType> for SchemaType {
    fn from_iter<I: IntoIterator<Item = PrimitiveType>>(iter: I) -> Self {
        iter.into_iter().fold(SchemaType::empty(), |acc, t| acc | t)
    }
}

impl BitOr for SchemaType {
    type Output = SchemaType;

    fn bitor(self, rhs: SchemaType) -> SchemaType {
        SchemaType(self.0 | rhs.0)
    }
}

impl BitOr<PrimitiveType> for SchemaType {
    type Output = SchemaType;

    fn bitor(self, rhs: PrimitiveType) -> SchemaType {
        SchemaType(self.0 | rhs.bit())
    }
}

impl BitOr for PrimitiveType {
    type Output = SchemaType;

    fn bitor(self, rhs: PrimitiveType) -> SchemaType {
        SchemaType::from(self) | rhs
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("<none>");
        }
        let tokens: Vec<&str> = self.iter().map(PrimitiveType::token).collect();
        if tokens.len() == 1 {
            f.write_str(tokens[0])
        } else {
            write!(f, "[{}]", tokens.join(", "))
        }
    }
}

/// Serializes back to keyword form: a bare token for one member, an array
/// for a union, `null` when no type was declared.
impl Serialize for SchemaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match (self.len(), self.single()) {
            (0, _) => serializer.serialize_none(),
            (_, Some(t)) => serializer.serialize_str(t.token()),
            _ => serializer.collect_seq(self.iter().map(PrimitiveType::token)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_token_maps_to_one_member() {
        for t in PRIMITIVE_TYPES {
            let got = PrimitiveType::from_token(t.token());
            assert_eq!(got, Some(t));
            assert_eq!(SchemaType::from(t).single(), Some(t));
        }
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert_eq!(PrimitiveType::from_token("String"), None);
        assert_eq!(PrimitiveType::from_token("int"), None);
        assert_eq!(PrimitiveType::from_token(""), None);
    }

    #[test]
    fn test_union_membership() {
        let st = PrimitiveType::String | PrimitiveType::Null;
        assert!(st.contains(PrimitiveType::String));
        assert!(st.contains(PrimitiveType::Null));
        assert!(!st.contains(PrimitiveType::Object));
        assert_eq!(st.len(), 2);
        assert_eq!(st.single(), None);
        assert_eq!(st.to_string(), "[string, null]");
    }

    #[test]
    fn test_union_is_order_independent() {
        let a: SchemaType = [PrimitiveType::String, PrimitiveType::Number].into_iter().collect();
        let b: SchemaType = [PrimitiveType::Number, PrimitiveType::String].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_set() {
        let st = SchemaType::empty();
        assert!(st.is_empty());
        assert_eq!(st.single(), None);
        assert_eq!(st.iter().count(), 0);
        assert_eq!(st.to_string(), "<none>");
    }

    #[test]
    fn test_serialize_keyword_form() {
        let single = serde_json::to_value(SchemaType::from(PrimitiveType::Integer)).unwrap();
        assert_eq!(single, serde_json::json!("integer"));

        let union = serde_json::to_value(PrimitiveType::Null | PrimitiveType::String).unwrap();
        assert_eq!(union, serde_json::json!(["string", "null"]));

        let none = serde_json::to_value(SchemaType::empty()).unwrap();
        assert_eq!(none, serde_json::Value::Null);
    }
}
