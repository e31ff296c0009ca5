use std::collections::BTreeMap;

use crate::Error;

#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub emit: EmitConfig,
    /// GraphQL type name to fully qualified Go type, e.g. `Role = "github.com/acme/app/model.Role"`.
    /// Types without an entry fall back to the built-in scalar mapping, then to the GraphQL name.
    pub models: BTreeMap<String, String>,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        Ok(toml::from_str(source)?)
    }
}

/// The fixed Go types threaded through every emitted directive fragment.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitConfig {
    pub context_type: String,
    pub object_type: String,
    pub resolver_type: String,
    pub error_type: String,
    /// Expression holding the user's directive implementations inside a generated resolver.
    pub directive_root: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            context_type: String::from("context.Context"),
            object_type: String::from("interface{}"),
            resolver_type: String::from("graphql.Resolver"),
            error_type: String::from("error"),
            directive_root: String::from("ec.directives"),
        }
    }
}
