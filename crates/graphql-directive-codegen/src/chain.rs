//! Nests the fragments of every directive on a site into one resolver-wrapping chain.

use std::fmt;

use crate::{DirectiveInstance, EmitConfig, Registry, naming};

/// Writes the body of a resolver whose directives wrap `resolver`. The first directive of the
/// list is the outermost step, the last one calls `resolver` directly.
pub fn write_chain<O>(
    out: &mut O,
    instances: &[DirectiveInstance<'_>],
    object: &str,
    resolver: &str,
    config: &EmitConfig,
) -> fmt::Result
where
    O: fmt::Write,
{
    let mut next = resolver.to_owned();

    for (i, instance) in instances.iter().rev().enumerate() {
        let step = format!("directive{}", i + 1);

        writeln!(
            out,
            "{step} := func(ctx {}) ({}, {}) {{",
            config.context_type, config.object_type, config.error_type
        )?;

        for local in instance.arguments().iter().filter_map(|argument| argument.local_declaration()) {
            writeln!(out, "\t{local}")?;
        }

        writeln!(
            out,
            "\treturn {}.{}({})",
            config.directive_root,
            naming::uc_first(instance.name()),
            instance.resolve_args(object, &next)
        )?;
        writeln!(out, "}}")?;

        next = step;
    }

    writeln!(out, "return {next}(ctx)")
}

pub fn render_chain(
    instances: &[DirectiveInstance<'_>],
    object: &str,
    resolver: &str,
    config: &EmitConfig,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_chain(&mut out, instances, object, resolver, config)?;
    Ok(out)
}

/// The struct users fill with their directive implementations.
pub fn write_directive_root<O>(out: &mut O, registry: &Registry, config: &EmitConfig) -> fmt::Result
where
    O: fmt::Write,
{
    writeln!(out, "type DirectiveRoot struct {{")?;

    for definition in registry.iter() {
        writeln!(out, "\t{}", definition.declaration(config))?;
    }

    writeln!(out, "}}")
}
