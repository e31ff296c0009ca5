use heck::ToLowerCamelCase;

const GO_KEYWORDS: &[&str] = &[
    "break",
    "default",
    "func",
    "interface",
    "select",
    "case",
    "defer",
    "go",
    "map",
    "struct",
    "chan",
    "else",
    "goto",
    "package",
    "switch",
    "const",
    "fallthrough",
    "if",
    "range",
    "type",
    "continue",
    "for",
    "import",
    "return",
    "var",
    "_",
];

/// Names the emitted fragments already bind: declaration parameters, `call_args` locals,
/// the chain's object and resolver, and the default directive root receiver.
const FRAGMENT_NAMES: &[&str] = &["ctx", "obj", "next", "n", "args", "res", "err", "ec"];

/// Identifier bound to a directive argument in generated code: lower camel case, suffixed
/// when it is a Go keyword or would shadow a name the fragments use.
pub(crate) fn binding_identifier(graphql_name: &str) -> String {
    let identifier = graphql_name.to_lower_camel_case();

    if identifier.is_empty() || is_taken(&identifier) {
        format!("{identifier}Arg")
    } else {
        identifier
    }
}

fn is_taken(identifier: &str) -> bool {
    GO_KEYWORDS.contains(&identifier) || FRAGMENT_NAMES.contains(&identifier) || is_chain_step(identifier)
}

/// `directive1`, `directive2`, ... name the closures of a rendered chain.
fn is_chain_step(identifier: &str) -> bool {
    identifier
        .strip_prefix("directive")
        .is_some_and(|index| !index.is_empty() && index.bytes().all(|byte| byte.is_ascii_digit()))
}

pub(crate) fn uc_first(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case("role", "role")]
    #[case("max_age", "maxAge")]
    #[case("RequiredScopes", "requiredScopes")]
    #[case("type", "typeArg")]
    #[case("func", "funcArg")]
    #[case("obj", "objArg")]
    #[case("next", "nextArg")]
    #[case("ctx", "ctxArg")]
    #[case("n", "nArg")]
    #[case("args", "argsArg")]
    #[case("res", "resArg")]
    #[case("err", "errArg")]
    #[case("directive2", "directive2Arg")]
    #[case("directive", "directive")]
    #[case("directiveName", "directiveName")]
    #[case("nodes", "nodes")]
    fn binding_identifiers(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(binding_identifier(name), expected);
    }

    #[test]
    fn uc_first_keeps_the_rest_untouched() {
        assert_eq!(uc_first("hasRole"), "HasRole");
        assert_eq!(uc_first("rate_limit"), "Rate_limit");
        assert_eq!(uc_first(""), "");
    }
}
