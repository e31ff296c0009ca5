use std::collections::HashMap;

use async_graphql_value::ConstValue;

use crate::{ArgumentDefinition, DirectiveDefinition, DirectiveUse, Error, Evaluable, Registry};

/// Where the value of an argument occurrence came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    /// Supplied at the use site, possibly an explicit `null`.
    Explicit(ConstValue),
    /// Taken from the directive definition.
    DefaultFallback(ConstValue),
    /// Neither supplied nor defaulted.
    Unresolved,
}

impl ArgumentValue {
    pub fn as_value(&self) -> Option<&ConstValue> {
        match self {
            ArgumentValue::Explicit(value) | ArgumentValue::DefaultFallback(value) => Some(value),
            ArgumentValue::Unresolved => None,
        }
    }
}

/// One definition argument as seen by a concrete directive use.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentOccurrence<'a> {
    definition: &'a ArgumentDefinition,
    value: ArgumentValue,
}

impl<'a> ArgumentOccurrence<'a> {
    pub fn definition(&self) -> &'a ArgumentDefinition {
        self.definition
    }

    pub fn name(&self) -> &'a str {
        self.definition.name()
    }

    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }
}

/// A directive attached to a schema element, its arguments in definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveInstance<'a> {
    definition: &'a DirectiveDefinition,
    arguments: Vec<ArgumentOccurrence<'a>>,
}

impl<'a> DirectiveInstance<'a> {
    pub fn definition(&self) -> &'a DirectiveDefinition {
        self.definition
    }

    pub fn name(&self) -> &'a str {
        self.definition.name()
    }

    pub fn arguments(&self) -> &[ArgumentOccurrence<'a>] {
        &self.arguments
    }
}

impl Registry {
    /// Binds the directives of one attachment site, preserving the order they were written in.
    /// The first failure aborts the whole list.
    pub fn bind<'a, 'u, E>(
        &'a self,
        uses: impl IntoIterator<Item = DirectiveUse<'u, E>>,
    ) -> Result<Vec<DirectiveInstance<'a>>, Error>
    where
        E: Evaluable + 'u,
    {
        uses.into_iter().map(|directive| self.bind_one(directive)).collect()
    }

    fn bind_one<'a, E: Evaluable>(&'a self, directive: DirectiveUse<'_, E>) -> Result<DirectiveInstance<'a>, Error> {
        let mut explicit = HashMap::with_capacity(directive.arguments.len());

        for (name, expression) in &directive.arguments {
            let value = expression
                .evaluate()
                .map_err(|source| Error::ArgumentValueEvaluationError {
                    directive: directive.name.to_owned(),
                    argument: (*name).to_owned(),
                    source,
                })?;

            explicit.insert(*name, value);
        }

        let definition = self.get(directive.name).ok_or_else(|| Error::UnknownDirective {
            name: directive.name.to_owned(),
        })?;

        let arguments = definition
            .arguments()
            .iter()
            .map(|argument| {
                let value = match explicit.remove(argument.name()) {
                    Some(value) => ArgumentValue::Explicit(value),
                    None => match argument.default_value() {
                        Some(default) => ArgumentValue::DefaultFallback(default.clone()),
                        None => ArgumentValue::Unresolved,
                    },
                };

                let occurrence = ArgumentOccurrence {
                    definition: argument,
                    value,
                };

                // An explicit `null` with no default leaves nothing to pass either.
                if !argument.ty().is_nullable() && occurrence.effective_value().is_none() {
                    return Err(Error::MissingArgumentValue {
                        directive: definition.name().to_owned(),
                        argument: argument.name().to_owned(),
                    });
                }

                Ok(occurrence)
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!("Bound @{} with {} arguments", definition.name(), arguments.len());

        Ok(DirectiveInstance { definition, arguments })
    }
}
