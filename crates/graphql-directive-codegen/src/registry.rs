use async_graphql_value::ConstValue;
use indexmap::IndexMap;

use crate::{BoundType, DirectiveDeclaration, Error, Evaluable, TypeBinder, naming};

/// Directives the host framework implements natively. They never get a definition.
pub const RESERVED_DIRECTIVES: &[&str] = &["skip", "include", "deprecated"];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_DIRECTIVES.contains(&name)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDefinition {
    name: String,
    ty: BoundType,
    default_value: Option<ConstValue>,
    binding: String,
}

impl ArgumentDefinition {
    /// The argument name as written in the schema.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &BoundType {
        &self.ty
    }

    pub fn default_value(&self) -> Option<&ConstValue> {
        self.default_value.as_ref()
    }

    /// Identifier naming the argument in generated code.
    pub fn binding(&self) -> &str {
        &self.binding
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDefinition {
    name: String,
    arguments: Vec<ArgumentDefinition>,
}

impl DirectiveDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments in declaration order.
    pub fn arguments(&self) -> &[ArgumentDefinition] {
        &self.arguments
    }
}

/// The validated directive definitions of one schema. Immutable once built; iterates in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    definitions: IndexMap<String, DirectiveDefinition>,
}

impl Registry {
    pub fn build<'a, E, T>(
        declarations: impl IntoIterator<Item = DirectiveDeclaration<'a, E>>,
        types: &T,
    ) -> Result<Self, Error>
    where
        E: Evaluable + 'a,
        T: TypeBinder + ?Sized,
    {
        let mut definitions = IndexMap::new();

        for declaration in declarations {
            if is_reserved(declaration.name) {
                tracing::debug!("Skipping built-in directive @{}", declaration.name);
                continue;
            }

            if definitions.contains_key(declaration.name) {
                return Err(Error::DuplicateDirectiveName {
                    name: declaration.name.to_owned(),
                });
            }

            let mut arguments = Vec::with_capacity(declaration.arguments.len());

            for argument in declaration.arguments {
                let ty = types.bind(argument.ty).ok_or_else(|| Error::UnknownArgumentType {
                    directive: declaration.name.to_owned(),
                    argument: argument.name.to_owned(),
                    ty: argument.ty.to_string(),
                })?;

                if !ty.kind().is_input() {
                    return Err(Error::InvalidArgumentType {
                        directive: declaration.name.to_owned(),
                        argument: argument.name.to_owned(),
                        ty: ty.graphql().to_owned(),
                    });
                }

                let default_value = argument
                    .default_value
                    .map(|value| value.evaluate())
                    .transpose()
                    .map_err(|source| Error::InvalidDefaultValue {
                        directive: declaration.name.to_owned(),
                        argument: argument.name.to_owned(),
                        source,
                    })?;

                arguments.push(ArgumentDefinition {
                    name: argument.name.to_owned(),
                    binding: naming::binding_identifier(argument.name),
                    ty,
                    default_value,
                });
            }

            definitions.insert(
                declaration.name.to_owned(),
                DirectiveDefinition {
                    name: declaration.name.to_owned(),
                    arguments,
                },
            );
        }

        tracing::debug!("Built directive registry with {} definitions", definitions.len());

        Ok(Registry { definitions })
    }

    pub fn get(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.definitions.get(name)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &DirectiveDefinition> + '_ {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
