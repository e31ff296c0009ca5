//! Input shapes consumed by the registry and the binder, and their adapters from parsed SDL.

use async_graphql_parser::{
    Positioned,
    types::{ConstDirective, DirectiveDefinition, InputValueDefinition, ServiceDocument, Type, TypeSystemDefinition},
};
use async_graphql_value::ConstValue;

use crate::Error;

pub fn parse(sdl: &str) -> Result<ServiceDocument, Error> {
    Ok(async_graphql_parser::parse_schema(sdl)?)
}

/// A `directive @name(...) on ...` declaration.
#[derive(Debug, Clone)]
pub struct DirectiveDeclaration<'a, E> {
    pub name: &'a str,
    pub arguments: Vec<ArgumentDeclaration<'a, E>>,
}

#[derive(Debug, Clone)]
pub struct ArgumentDeclaration<'a, E> {
    pub name: &'a str,
    pub ty: &'a Type,
    pub default_value: Option<&'a E>,
}

/// A directive as written on a type or field, arguments in source order.
#[derive(Debug, Clone)]
pub struct DirectiveUse<'a, E> {
    pub name: &'a str,
    pub arguments: Vec<(&'a str, &'a E)>,
}

impl<'a> From<&'a DirectiveDefinition> for DirectiveDeclaration<'a, ConstValue> {
    fn from(definition: &'a DirectiveDefinition) -> Self {
        DirectiveDeclaration {
            name: definition.name.node.as_str(),
            arguments: definition
                .arguments
                .iter()
                .map(|argument| ArgumentDeclaration::from(&argument.node))
                .collect(),
        }
    }
}

impl<'a> From<&'a InputValueDefinition> for ArgumentDeclaration<'a, ConstValue> {
    fn from(argument: &'a InputValueDefinition) -> Self {
        ArgumentDeclaration {
            name: argument.name.node.as_str(),
            ty: &argument.ty.node,
            default_value: argument.default_value.as_ref().map(|value| &value.node),
        }
    }
}

impl<'a> From<&'a ConstDirective> for DirectiveUse<'a, ConstValue> {
    fn from(directive: &'a ConstDirective) -> Self {
        DirectiveUse {
            name: directive.name.node.as_str(),
            arguments: directive
                .arguments
                .iter()
                .map(|(name, value)| (name.node.as_str(), &value.node))
                .collect(),
        }
    }
}

/// Every directive declared in the document, in declaration order.
pub fn directive_declarations(document: &ServiceDocument) -> Vec<DirectiveDeclaration<'_, ConstValue>> {
    document
        .definitions
        .iter()
        .filter_map(|definition| match definition {
            TypeSystemDefinition::Directive(directive) => Some(DirectiveDeclaration::from(&directive.node)),
            _ => None,
        })
        .collect()
}

pub fn directive_uses(directives: &[Positioned<ConstDirective>]) -> Vec<DirectiveUse<'_, ConstValue>> {
    directives
        .iter()
        .map(|directive| DirectiveUse::from(&directive.node))
        .collect()
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn declarations_keep_source_order() {
        let document = parse(indoc! {r#"
            directive @hasRole(role: Role = USER, scope: String) on FIELD_DEFINITION
            directive @upper on FIELD_DEFINITION

            enum Role { ADMIN USER }
        "#})
        .unwrap();

        let declarations = directive_declarations(&document);

        let names = declarations.iter().map(|d| d.name).collect::<Vec<_>>();
        assert_eq!(names, ["hasRole", "upper"]);

        let arguments = &declarations[0].arguments;
        assert_eq!(arguments[0].name, "role");
        assert_eq!(arguments[0].ty.to_string(), "Role");
        assert_eq!(arguments[0].default_value, Some(&ConstValue::Enum(async_graphql_value::Name::new("USER"))));
        assert_eq!(arguments[1].default_value, None);
    }

    #[test]
    fn syntax_errors_are_reported() {
        let error = parse("directive @broken(").unwrap_err();

        assert!(matches!(error, Error::Parse(_)));
    }
}
