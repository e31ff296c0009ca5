use std::collections::{BTreeMap, HashMap};

use async_graphql_parser::types::{self as ast, BaseType, ServiceDocument, Type, TypeSystemDefinition};

use crate::Config;

const BUILTIN_SCALARS: &[(&str, &str)] = &[
    ("Int", "int"),
    ("Float", "float64"),
    ("String", "string"),
    ("Boolean", "bool"),
    ("ID", "string"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Enum,
    InputObject,
    Object,
    Interface,
    Union,
}

impl TypeKind {
    /// Scalars, enums and input objects are the only types accepted as argument values.
    pub fn is_input(self) -> bool {
        matches!(self, TypeKind::Scalar | TypeKind::Enum | TypeKind::InputObject)
    }
}

impl From<&ast::TypeKind> for TypeKind {
    fn from(kind: &ast::TypeKind) -> Self {
        match kind {
            ast::TypeKind::Scalar => TypeKind::Scalar,
            ast::TypeKind::Object(_) => TypeKind::Object,
            ast::TypeKind::Interface(_) => TypeKind::Interface,
            ast::TypeKind::Union(_) => TypeKind::Union,
            ast::TypeKind::Enum(_) => TypeKind::Enum,
            ast::TypeKind::InputObject(_) => TypeKind::InputObject,
        }
    }
}

/// A GraphQL type reference resolved against the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundType {
    graphql: String,
    kind: TypeKind,
    nullable: bool,
    go_type: String,
}

impl BoundType {
    pub fn new(graphql: impl Into<String>, kind: TypeKind, nullable: bool, go_type: impl Into<String>) -> Self {
        Self {
            graphql: graphql.into(),
            kind,
            nullable,
            go_type: go_type.into(),
        }
    }

    /// The reference as written in SDL, e.g. `[Role!]`.
    pub fn graphql(&self) -> &str {
        &self.graphql
    }

    /// Kind of the innermost named type.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Nullable values are threaded by reference through a directive chain, everything else as a literal.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Fully qualified Go type, e.g. `*github.com/acme/app/model.Role`.
    pub fn go_type(&self) -> &str {
        &self.go_type
    }

    /// The Go type as it reads inside generated code once its package is imported, e.g. `*model.Role`.
    pub fn display(&self) -> String {
        lookup_type(&self.go_type)
    }
}

/// Resolves type references to descriptors. Returns `None` for names the schema does not define.
pub trait TypeBinder {
    fn bind(&self, ty: &Type) -> Option<BoundType>;
}

/// Type binder backed by the named types of a parsed schema.
#[derive(Debug, Clone)]
pub struct SchemaTypes {
    kinds: HashMap<String, TypeKind>,
    models: BTreeMap<String, String>,
}

impl SchemaTypes {
    pub fn new(models: BTreeMap<String, String>) -> Self {
        let kinds = BUILTIN_SCALARS
            .iter()
            .map(|(name, _)| ((*name).to_owned(), TypeKind::Scalar))
            .collect();

        Self { kinds, models }
    }

    pub fn from_document(document: &ServiceDocument, config: &Config) -> Self {
        let mut types = Self::new(config.models.clone());

        for definition in &document.definitions {
            if let TypeSystemDefinition::Type(ty) = definition {
                types.insert(ty.node.name.node.as_str(), TypeKind::from(&ty.node.kind));
            }
        }

        types
    }

    pub fn insert(&mut self, name: impl Into<String>, kind: TypeKind) {
        self.kinds.insert(name.into(), kind);
    }

    fn go_type(&self, ty: &Type) -> String {
        let inner = match &ty.base {
            BaseType::Named(name) => self.named_go_type(name.as_str()),
            BaseType::List(item) => format!("[]{}", self.go_type(item)),
        };

        if ty.nullable { format!("*{inner}") } else { inner }
    }

    fn named_go_type(&self, name: &str) -> String {
        if let Some(model) = self.models.get(name) {
            return model.clone();
        }

        BUILTIN_SCALARS
            .iter()
            .find(|(scalar, _)| *scalar == name)
            .map(|(_, go_type)| (*go_type).to_owned())
            .unwrap_or_else(|| name.to_owned())
    }
}

impl TypeBinder for SchemaTypes {
    fn bind(&self, ty: &Type) -> Option<BoundType> {
        let kind = *self.kinds.get(named_type(ty))?;

        Some(BoundType::new(ty.to_string(), kind, ty.nullable, self.go_type(ty)))
    }
}

fn named_type(ty: &Type) -> &str {
    match &ty.base {
        BaseType::Named(name) => name.as_str(),
        BaseType::List(item) => named_type(item),
    }
}

/// Strips the import path from a qualified Go type while keeping pointer and slice modifiers.
pub(crate) fn lookup_type(go_type: &str) -> String {
    let path = go_type.trim_start_matches(['*', '[', ']']);
    let modifiers = &go_type[..go_type.len() - path.len()];
    let name = path.rsplit_once('/').map_or(path, |(_, name)| name);

    format!("{modifiers}{name}")
}
