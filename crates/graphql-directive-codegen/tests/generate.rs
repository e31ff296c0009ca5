#![allow(unused_crate_dependencies)]

use graphql_directive_codegen::{Config, Error, generate};
use indoc::indoc;
use pretty_assertions::assert_eq;

const SCHEMA: &str = indoc! {r#"
    directive @hasRole(role: Role! = USER) on FIELD_DEFINITION | OBJECT
    directive @length(max: Int, truncate: Boolean! = false) on FIELD_DEFINITION
    directive @upper on FIELD_DEFINITION

    enum Role {
      ADMIN
      USER
    }

    type Query {
      me: User
      users(first: Int): [User!]! @hasRole(role: ADMIN) @length(max: 20)
    }

    type User @hasRole {
      id: ID!
      name: String! @upper @length(truncate: true)
      nickname: String @deprecated(reason: "use name")
    }

    interface Node {
      id: ID! @upper
    }
"#};

fn config() -> Config {
    Config::from_toml_str(indoc! {r#"
        [models]
        Role = "github.com/acme/app/model.Role"
    "#})
    .unwrap()
}

#[test]
fn generates_a_chain_per_site() {
    let generated = generate(SCHEMA, &config()).unwrap();

    let coordinates = generated
        .sites
        .iter()
        .map(|site| site.coordinate.as_str())
        .collect::<Vec<_>>();
    assert_eq!(coordinates, ["Query.users", "User", "User.name", "Node.id"]);

    let users = &generated.sites[0];
    assert_eq!(users.directives, ["hasRole", "length"]);
    assert_eq!(users.helpers, ["dir_hasRole_args", "dir_length_args"]);
    assert_eq!(
        users.chain,
        indoc! {"
            directive1 := func(ctx context.Context) (interface{}, error) {
            \tvar max int = 20
            \treturn ec.directives.Length(ctx, obj, next, &max, false)
            }
            directive2 := func(ctx context.Context) (interface{}, error) {
            \treturn ec.directives.HasRole(ctx, obj, directive1, \"ADMIN\")
            }
            return directive2(ctx)
        "}
    );

    let user = &generated.sites[1];
    assert!(user.chain.contains("return ec.directives.HasRole(ctx, obj, next, \"USER\")"));

    let name = &generated.sites[2];
    assert_eq!(name.helpers, ["dir_length_args"]);
    assert!(name.chain.contains("return ec.directives.Length(ctx, obj, next, nil, true)"));
    assert!(name.chain.contains("return ec.directives.Upper(ctx, obj, directive1)"));
}

#[test]
fn directive_root() {
    let generated = generate(SCHEMA, &config()).unwrap();

    insta::assert_snapshot!(generated.directive_root, @r"
    type DirectiveRoot struct {
    	HasRole func(ctx context.Context, obj interface{}, next graphql.Resolver, role model.Role) (res interface{}, err error)
    	Length func(ctx context.Context, obj interface{}, next graphql.Resolver, max *int, truncate bool) (res interface{}, err error)
    	Upper func(ctx context.Context, obj interface{}, next graphql.Resolver) (res interface{}, err error)
    }
    ");
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(generate(SCHEMA, &config()).unwrap(), generate(SCHEMA, &config()).unwrap());
}

#[test]
fn built_in_directive_declarations_are_ignored() {
    let sdl = indoc! {r#"
        directive @skip(if: Boolean!) on FIELD
        directive @include(if: Boolean!) on FIELD
        directive @deprecated(reason: String = "No longer supported") on FIELD_DEFINITION

        type Query {
          old: String @deprecated
        }
    "#};

    let generated = generate(sdl, &Config::default()).unwrap();

    assert_eq!(generated.directive_root, "type DirectiveRoot struct {\n}\n");
    assert!(generated.sites.is_empty());
}

#[test]
fn unknown_directive_uses_fail_generation() {
    let sdl = indoc! {r#"
        type Query {
          secret: String @notDeclared
        }
    "#};

    let error = generate(sdl, &Config::default()).unwrap_err();

    assert!(matches!(error, Error::UnknownDirective { ref name } if name == "notDeclared"));
}

#[test]
fn duplicate_declarations_fail_generation() {
    let sdl = indoc! {r#"
        directive @upper on FIELD_DEFINITION
        directive @upper on FIELD_DEFINITION
    "#};

    let error = generate(sdl, &Config::default()).unwrap_err();

    insta::assert_snapshot!(error, @"directive with name upper already exists");
}

#[test]
fn output_typed_arguments_fail_generation() {
    let sdl = indoc! {r#"
        directive @owner(user: User) on FIELD_DEFINITION

        type User {
          id: ID!
        }
    "#};

    let error = generate(sdl, &Config::default()).unwrap_err();

    assert!(matches!(error, Error::InvalidArgumentType { .. }));
}

#[test]
fn required_arguments_without_value_fail_generation() {
    let sdl = indoc! {r#"
        directive @limit(max: Int!) on FIELD_DEFINITION

        type Query {
          items: [String!] @limit
        }
    "#};

    let error = generate(sdl, &Config::default()).unwrap_err();

    insta::assert_snapshot!(error, @"argument limit(max) is non-nullable but has neither a value nor a default");
}

#[test]
fn explicit_null_for_required_arguments_fails_generation() {
    let sdl = indoc! {r#"
        directive @limit(max: Int!) on FIELD_DEFINITION

        type Query {
          items: [String!] @limit(max: null)
        }
    "#};

    let error = generate(sdl, &Config::default()).unwrap_err();

    assert!(matches!(error, Error::MissingArgumentValue { ref argument, .. } if argument == "max"));
}
