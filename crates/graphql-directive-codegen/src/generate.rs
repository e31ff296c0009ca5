use async_graphql_parser::{
    Positioned,
    types::{ConstDirective, TypeKind, TypeSystemDefinition},
};

use crate::{
    Config, Error, Registry, SchemaTypes,
    chain::{render_chain, write_directive_root},
    registry::is_reserved,
    schema,
};

/// Generated directive code for a whole schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDirectives {
    /// The `DirectiveRoot` struct declaration.
    pub directive_root: String,
    /// Every type or field carrying at least one user directive, in schema order.
    pub sites: Vec<GeneratedSite>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    /// `Type` for type-level directives, `Type.field` for field-level ones.
    pub coordinate: String,
    /// Directive names, outermost first.
    pub directives: Vec<String>,
    /// Argument helpers the site needs, one per directive taking arguments.
    pub helpers: Vec<String>,
    pub chain: String,
}

/// Parses `sdl`, builds its directive registry and renders a directive chain for every site.
pub fn generate(sdl: &str, config: &Config) -> Result<GeneratedDirectives, Error> {
    let document = schema::parse(sdl)?;
    let types = SchemaTypes::from_document(&document, config);
    let registry = Registry::build(schema::directive_declarations(&document), &types)?;

    let mut directive_root = String::new();
    write_directive_root(&mut directive_root, &registry, &config.emit)?;

    let mut sites = Vec::new();

    for definition in &document.definitions {
        let TypeSystemDefinition::Type(ty) = definition else {
            continue;
        };

        let type_name = ty.node.name.node.as_str();
        sites.extend(generate_site(&registry, type_name.to_owned(), &ty.node.directives, config)?);

        let fields = match &ty.node.kind {
            TypeKind::Object(object) => &object.fields,
            TypeKind::Interface(interface) => &interface.fields,
            _ => continue,
        };

        for field in fields {
            let coordinate = format!("{type_name}.{}", field.node.name.node);
            sites.extend(generate_site(&registry, coordinate, &field.node.directives, config)?);
        }
    }

    Ok(GeneratedDirectives { directive_root, sites })
}

fn generate_site(
    registry: &Registry,
    coordinate: String,
    directives: &[Positioned<ConstDirective>],
    config: &Config,
) -> Result<Option<GeneratedSite>, Error> {
    // Built-in directives are executed by the host framework, not through the chain.
    let uses = schema::directive_uses(directives)
        .into_iter()
        .filter(|directive| !is_reserved(directive.name))
        .collect::<Vec<_>>();

    if uses.is_empty() {
        return Ok(None);
    }

    let instances = registry.bind(uses)?;
    let chain = render_chain(&instances, "obj", "next", &config.emit)?;

    tracing::trace!("Generated directive chain for {coordinate}");

    Ok(Some(GeneratedSite {
        coordinate,
        directives: instances.iter().map(|instance| instance.name().to_owned()).collect(),
        helpers: instances
            .iter()
            .map(|instance| instance.helper_reference())
            .filter(|helper| !helper.is_empty())
            .collect(),
        chain,
    }))
}
