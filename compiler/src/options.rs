use serde::Deserialize;

/// Knobs for struct emission.
///
/// Deserializable so a build script can keep them next to its schemas:
///
/// ```
/// use schemagen_compiler::GenOptions;
///
/// let options = GenOptions::from_json(r#"{ "module": "models", "serde": true }"#).unwrap();
/// assert_eq!(options.module, "models");
/// assert_eq!(options.derives, ["Debug", "Clone"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenOptions {
    /// Name of the `pub mod` wrapping the generated code.
    pub module:  String,
    /// Traits listed in the struct's `#[derive(...)]`.
    pub derives: Vec<String>,
    /// Also derive `Serialize`/`Deserialize` and keep the original property
    /// names through `#[serde(rename)]`. Properties with `format: "regex"`
    /// are rejected in this mode since `regex::Regex` has no serde support.
    pub serde:   bool,
}

impl Default for GenOptions {
    fn default() -> Self {
        GenOptions {
            module:  "schema".to_string(),
            derives: vec!["Debug".to_string(), "Clone".to_string()],
            serde:   false,
        }
    }
}

impl GenOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    pub fn with_serde(mut self, serde: bool) -> Self {
        self.serde = serde;
        self
    }

    /// The full derive list, including serde traits when enabled.
    pub fn derive_list(&self) -> Vec<&str> {
        let mut derives: Vec<&str> = self.derives.iter().map(String::as_str).collect();
        if self.serde {
            for extra in ["Serialize", "Deserialize"] {
                if !derives.contains(&extra) {
                    derives.push(extra);
                }
            }
        }
        derives
    }
}
