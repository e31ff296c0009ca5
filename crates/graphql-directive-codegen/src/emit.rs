//! Text fragments the surrounding generator splices into its resolver templates.

use std::fmt;

use async_graphql_value::ConstValue;
use itertools::Itertools;

use crate::{
    ArgumentOccurrence, DirectiveDefinition, DirectiveInstance, EmitConfig, naming,
    value::{quote, render_literal, render_typed_literal},
};

/// How one argument is handed to the next step of a directive chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveToken<'a> {
    /// Address of the generated binding, the callee may treat it as unset.
    Reference(&'a str),
    Literal(String),
    Nil,
}

impl fmt::Display for ResolveToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveToken::Reference(binding) => write!(f, "&{binding}"),
            ResolveToken::Literal(literal) => f.write_str(literal),
            ResolveToken::Nil => f.write_str("nil"),
        }
    }
}

impl DirectiveDefinition {
    pub fn helper_reference(&self) -> String {
        if self.arguments().is_empty() {
            return String::new();
        }

        format!("dir_{}_args", self.name())
    }

    /// The function signature a user-supplied implementation of this directive must satisfy.
    pub fn declaration(&self, config: &EmitConfig) -> String {
        let mut declaration = format!(
            "{} func(ctx {}, obj {}, next {}",
            naming::uc_first(self.name()),
            config.context_type,
            config.object_type,
            config.resolver_type
        );

        for argument in self.arguments() {
            declaration.push_str(", ");
            declaration.push_str(argument.binding());
            declaration.push(' ');
            declaration.push_str(&argument.ty().display());
        }

        declaration.push_str(&format!(") (res {}, err {})", config.object_type, config.error_type));
        declaration
    }
}

impl DirectiveInstance<'_> {
    /// Name of the per-use argument helper, empty when the directive takes no arguments.
    pub fn helper_reference(&self) -> String {
        self.definition().helper_reference()
    }

    pub fn declaration(&self, config: &EmitConfig) -> String {
        self.definition().declaration(config)
    }

    /// Positional arguments pulling every value out of the untyped `args` bag. Each cast
    /// asserts the bound Go type of its argument.
    pub fn call_args(&self) -> String {
        let casts = self
            .arguments()
            .iter()
            .map(|argument| format!("args[{}].({})", quote(argument.name()), argument.definition().ty().display()));

        ["ctx".to_owned(), "obj".to_owned(), "n".to_owned()]
            .into_iter()
            .chain(casts)
            .join(", ")
    }

    /// Positional arguments invoking this directive with `next` as the wrapped resolver.
    pub fn resolve_args(&self, object: &str, next: &str) -> String {
        let tokens = self.arguments().iter().map(|argument| argument.resolve_token().to_string());

        ["ctx", object, next]
            .into_iter()
            .map(str::to_owned)
            .chain(tokens)
            .join(", ")
    }
}

impl<'a> ArgumentOccurrence<'a> {
    /// The value threaded into the chain: the use-site value unless it is missing or `null`,
    /// then the definition default under the same rule.
    pub fn effective_value(&self) -> Option<&ConstValue> {
        let non_null = |value: &&ConstValue| !matches!(value, ConstValue::Null);

        self.value()
            .as_value()
            .filter(non_null)
            .or_else(|| self.definition().default_value().filter(non_null))
    }

    pub fn resolve_token(&self) -> ResolveToken<'a> {
        let definition = self.definition();

        match self.effective_value() {
            None => ResolveToken::Nil,
            Some(_) if definition.ty().is_nullable() => ResolveToken::Reference(definition.binding()),
            Some(value) => ResolveToken::Literal(render_literal(value)),
        }
    }

    /// The typed local a by-reference argument points at, e.g. `var role model.Role = "ADMIN"`.
    /// `None` when the argument is passed as a literal or `nil`.
    pub fn local_declaration(&self) -> Option<String> {
        let ResolveToken::Reference(binding) = self.resolve_token() else {
            return None;
        };

        let display = self.definition().ty().display();
        let ty = display.strip_prefix('*').unwrap_or(display.as_str());

        self.effective_value()
            .map(|value| format!("var {binding} {ty} = {}", render_typed_literal(value, ty)))
    }
}
