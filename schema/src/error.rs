use thiserror::Error;

/// Failure to turn a document into a [`Schema`](crate::Schema) tree.
///
/// `path` is the JSON pointer of the schema node that carried the bad
/// keyword, `""` for the document root.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema at \"{path}\" must be a JSON object")]
    ExpectedObject { path: String },

    #[error("unsupported type {token:?} at \"{path}\"")]
    UnsupportedType { path: String, token: String },

    #[error("invalid type value {value} at \"{path}\", expected string or non-empty array of strings")]
    InvalidTypeValue { path: String, value: String },

    #[error("unsupported format {token:?} at \"{path}\"")]
    UnsupportedFormat { path: String, token: String },

    #[error("keyword \"{keyword}\" at \"{path}\" must be {expected}")]
    InvalidKeyword {
        path:     String,
        keyword:  &'static str,
        expected: &'static str,
    },
}
