use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Serialize, Serializer};

/// Values of the `format` keyword for strings.
///
/// https://json-schema.org/understanding-json-schema/reference/string.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFormat {
    DateTime,
    Time,
    Date,
    Duration,
    Email,
    IdnEmail,
    Hostname,
    IdnHostname,
    Ipv4,
    Ipv6,
    Uuid,
    Uri,
    UriReference,
    Iri,
    IriReference,
    UriTemplate,
    JsonPointer,
    RelativeJsonPointer,
    Regex,
}

pub const STRING_FORMATS: [StringFormat; 19] = [
    StringFormat::DateTime,
    StringFormat::Time,
    StringFormat::Date,
    StringFormat::Duration,
    StringFormat::Email,
    StringFormat::IdnEmail,
    StringFormat::Hostname,
    StringFormat::IdnHostname,
    StringFormat::Ipv4,
    StringFormat::Ipv6,
    StringFormat::Uuid,
    StringFormat::Uri,
    StringFormat::UriReference,
    StringFormat::Iri,
    StringFormat::IriReference,
    StringFormat::UriTemplate,
    StringFormat::JsonPointer,
    StringFormat::RelativeJsonPointer,
    StringFormat::Regex,
];

lazy_static! {
    static ref FORMAT_TOKENS: HashMap<&'static str, StringFormat> =
        STRING_FORMATS.iter().map(|f| (f.token(), *f)).collect();
}

impl StringFormat {
    pub fn from_token(token: &str) -> Option<Self> {
        FORMAT_TOKENS.get(token).copied()
    }

    pub fn token(self) -> &'static str {
        match self {
            StringFormat::DateTime            => "date-time",
            StringFormat::Time                => "time",
            StringFormat::Date                => "date",
            StringFormat::Duration            => "duration",
            StringFormat::Email               => "email",
            StringFormat::IdnEmail            => "idn-email",
            StringFormat::Hostname            => "hostname",
            StringFormat::IdnHostname         => "idn-hostname",
            StringFormat::Ipv4                => "ipv4",
            StringFormat::Ipv6                => "ipv6",
            StringFormat::Uuid                => "uuid",
            StringFormat::Uri                 => "uri",
            StringFormat::UriReference        => "uri-reference",
            StringFormat::Iri                 => "iri",
            StringFormat::IriReference        => "iri-reference",
            StringFormat::UriTemplate         => "uri-template",
            StringFormat::JsonPointer         => "json-pointer",
            StringFormat::RelativeJsonPointer => "relative-json-pointer",
            StringFormat::Regex               => "regex",
        }
    }
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for StringFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}
