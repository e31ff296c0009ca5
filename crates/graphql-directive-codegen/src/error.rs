use std::fmt;

/// Everything that can abort a registry build, an instance binding or a generation run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("directive with name {name} already exists")]
    DuplicateDirectiveName { name: String },
    #[error(
        "{ty} cannot be used as argument of directive {directive}({argument}) only input and scalar types are allowed"
    )]
    InvalidArgumentType {
        directive: String,
        argument: String,
        ty: String,
    },
    #[error("type {ty} of directive argument {directive}({argument}) is not defined in the schema")]
    UnknownArgumentType {
        directive: String,
        argument: String,
        ty: String,
    },
    #[error("default value for directive argument {directive}({argument}) is not valid: {source}")]
    InvalidDefaultValue {
        directive: String,
        argument: String,
        source: EvaluationError,
    },
    #[error("directive {name} not found")]
    UnknownDirective { name: String },
    #[error("value of argument {argument} on directive @{directive} could not be evaluated: {source}")]
    ArgumentValueEvaluationError {
        directive: String,
        argument: String,
        source: EvaluationError,
    },
    #[error("argument {directive}({argument}) is non-nullable but has neither a value nor a default")]
    MissingArgumentValue { directive: String, argument: String },
    #[error("schema could not be parsed: {0}")]
    Parse(#[from] async_graphql_parser::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Render(#[from] fmt::Error),
}

/// Failure reported by an [`Evaluable`](crate::Evaluable) value expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationError {
    message: String,
}

impl EvaluationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvaluationError {}
