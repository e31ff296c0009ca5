//! Compiles GraphQL schema directives into resolver-wrapping chains for generated Go servers.
//!
//! A [`Registry`] is built once per schema from its directive declarations. Every type or field
//! carrying directives is then bound against it, producing [`DirectiveInstance`]s whose
//! arguments are resolved against the declared defaults. Instances render the text fragments a
//! resolver template needs, and [`render_chain`] nests them so that the first directive written
//! wraps the second, which wraps the field resolver.

mod binder;
mod chain;
mod config;
mod emit;
mod error;
mod generate;
mod naming;
mod registry;
pub mod schema;
mod types;
mod value;

pub use binder::{ArgumentOccurrence, ArgumentValue, DirectiveInstance};
pub use chain::{render_chain, write_chain, write_directive_root};
pub use config::{Config, EmitConfig};
pub use emit::ResolveToken;
pub use error::{Error, EvaluationError};
pub use generate::{GeneratedDirectives, GeneratedSite, generate};
pub use registry::{ArgumentDefinition, DirectiveDefinition, RESERVED_DIRECTIVES, Registry, is_reserved};
pub use schema::{ArgumentDeclaration, DirectiveDeclaration, DirectiveUse};
pub use types::{BoundType, SchemaTypes, TypeBinder, TypeKind};
pub use value::Evaluable;
