//! Catalog-level tests: facet composition, body queries and tree
//! serialization.

mod common;

use common::*;
use javasrc::ast::{
    ClassDeclaration, CompilationUnit, Declared, Documented, EnumDeclaration, Labeled, Member,
    MemberReference, PrimaryExpr, ReturnStatement, TypeDeclaration, TypeScope,
};

mod body_queries {
    use super::*;

    fn mixed_body_class() -> ClassDeclaration {
        let mut declaration = class("Mixed");
        declaration.body = vec![
            Member::Field(field(basic("int"), "first")),
            Member::Method(method("alpha")),
            Member::Field(field(basic("int"), "second")),
            Member::Constructor(constructor("Mixed")),
            Member::Method(method("beta")),
            Member::Type(TypeDeclaration::Class(class("Nested"))),
        ];
        declaration
    }

    #[test]
    fn fields_preserve_body_order() {
        let declaration = mixed_body_class();
        let names: Vec<_> = declaration
            .fields()
            .iter()
            .map(|field| field.declarators[0].name.as_str())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn methods_preserve_body_order() {
        let declaration = mixed_body_class();
        let names: Vec<_> = declaration
            .methods()
            .iter()
            .map(|method| method.name.as_str())
            .collect();
        assert_eq!(names, ["alpha", "beta"]);
    }

    #[test]
    fn constructors_are_filtered_out_of_methods() {
        let declaration = mixed_body_class();
        assert_eq!(declaration.constructors().len(), 1);
        assert_eq!(declaration.constructors()[0].name, "Mixed");
    }

    #[test]
    fn nested_types_match_no_query() {
        let declaration = mixed_body_class();
        let matched =
            declaration.fields().len() + declaration.methods().len() + declaration.constructors().len();
        // The nested class is in the body but belongs to no query.
        assert_eq!(matched, declaration.body().len() - 1);
    }

    #[test]
    fn queries_on_empty_body_are_empty() {
        let declaration = class("Empty");
        assert!(declaration.fields().is_empty());
        assert!(declaration.methods().is_empty());
        assert!(declaration.constructors().is_empty());
    }

    #[test]
    fn queries_dispatch_through_the_type_declaration_enum() {
        let declaration = TypeDeclaration::Class(mixed_body_class());
        assert_eq!(declaration.methods().len(), 2);
    }

    #[test]
    fn enum_queries_run_over_its_declaration_part() {
        let mut declaration = EnumDeclaration {
            name: "Color".to_string(),
            ..Default::default()
        };
        declaration
            .body
            .declarations
            .push(Member::Method(method("ordinalName")));
        assert_eq!(declaration.methods().len(), 1);
        assert!(declaration.fields().is_empty());
    }
}

mod facets {
    use super::*;

    #[test]
    fn declared_facet_exposes_modifiers_in_order() {
        let mut declaration = class("Foo");
        declaration.modifiers = vec!["public".to_string(), "final".to_string()];
        assert_eq!(Declared::modifiers(&declaration), ["public", "final"]);
        assert!(Declared::annotations(&declaration).is_empty());
    }

    #[test]
    fn documented_facet_is_optional() {
        let mut declaration = class("Foo");
        assert_eq!(declaration.documentation(), None);
        declaration.documentation = Some("/** a class */".to_string());
        assert_eq!(declaration.documentation(), Some("/** a class */"));
    }

    #[test]
    fn labeled_facet_on_statements() {
        let statement = ReturnStatement {
            label: Some("outer".to_string()),
            expression: None,
        };
        assert_eq!(statement.label(), Some("outer"));
    }

    #[test]
    fn primary_facet_defaults_to_empty_adjuncts() {
        let reference = MemberReference::plain("x");
        assert!(reference.prefix_operators().is_empty());
        assert!(reference.postfix_operators().is_empty());
        assert!(reference.qualifier().is_none());
        assert!(reference.selectors().is_empty());
    }

    #[test]
    fn primary_facet_preserves_operator_order() {
        let reference = MemberReference {
            prefix_operators: vec!["!".to_string(), "-".to_string()],
            member: "x".to_string(),
            ..Default::default()
        };
        assert_eq!(reference.prefix_operators(), ["!", "-"]);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn compilation_unit_round_trips_through_json() {
        let mut declaration = class("Foo");
        declaration.body = vec![
            Member::Field(field(basic("int"), "x")),
            Member::Method(method("run")),
        ];
        let unit = CompilationUnit {
            package: Some(package("com.example")),
            imports: vec![import("java.util.List")],
            types: vec![TypeDeclaration::Class(declaration)],
        };

        let encoded = serde_json::to_string(&unit).unwrap();
        let decoded: CompilationUnit = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, unit);
    }
}
