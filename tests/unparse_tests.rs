//! Rendering-rule tests for the implemented regeneration subset.
//!
//! Expected strings are spelled out against `SEPARATOR` so a change to any
//! rule's separator placement shows up as a failing exact-text comparison.

mod common;

use common::*;
use javasrc::ast::{
    Annotation, ArrayCreator, ArrayInitializer, Assignment, BinaryOperation, ClassCreator,
    CompilationUnit, Expression, Literal, Member, MemberReference, Primary, ReferenceType,
    ReturnStatement, Statement, SuperConstructorInvocation, This, TypeDeclaration,
    VariableDeclarator, VariableInitializer,
};
use javasrc::{ToSource, SEPARATOR};

mod imports_and_packages {
    use super::*;

    #[test]
    fn plain_import() {
        let node = import("java.util.List");
        assert_eq!(node.to_source().unwrap(), "import java.util.List;");
    }

    #[test]
    fn static_wildcard_import() {
        let node = javasrc::ast::Import {
            path: "java.util".to_string(),
            is_static: true,
            wildcard: true,
        };
        assert_eq!(node.to_source().unwrap(), "import static java.util.*;");
    }

    #[test]
    fn package_without_modifiers() {
        let node = package("com.example");
        assert_eq!(node.to_source().unwrap(), "package com.example;");
    }

    #[test]
    fn package_with_modifiers() {
        let mut node = package("com.example");
        node.modifiers.push("open".to_string());
        assert_eq!(node.to_source().unwrap(), "open package com.example;");
    }
}

mod type_declarations {
    use super::*;

    #[test]
    fn empty_public_class() {
        let node = class("Foo");
        let expected = format!("public class Foo{0}{{{0}{0}}}", SEPARATOR);
        assert_eq!(node.to_source().unwrap(), expected);
    }

    #[test]
    fn class_with_extends_and_implements() {
        let mut node = class("Foo");
        node.extends = Some(ReferenceType::new("Base"));
        node.implements = vec![ReferenceType::new("A"), ReferenceType::new("B")];
        let expected = format!(
            "public class Foo extends Base implements A, B{0}{{{0}{0}}}",
            SEPARATOR
        );
        assert_eq!(node.to_source().unwrap(), expected);
    }

    #[test]
    fn class_annotations_render_one_per_line() {
        let mut node = class("Foo");
        node.annotations = vec![
            Annotation::marker("Deprecated"),
            Annotation::marker("SuppressWarnings"),
        ];
        let expected = format!(
            "@Deprecated{0}@SuppressWarnings{0}public class Foo{0}{{{0}{0}}}",
            SEPARATOR
        );
        assert_eq!(node.to_source().unwrap(), expected);
    }

    #[test]
    fn nested_class_renders_through_member_dispatch() {
        let mut outer = class("Outer");
        outer.body.push(class_member("Inner"));
        let inner = format!("public class Inner{0}{{{0}{0}}}", SEPARATOR);
        let expected = format!("public class Outer{0}{{{0}{1}{0}}}", SEPARATOR, inner);
        assert_eq!(outer.to_source().unwrap(), expected);
    }
}

mod members {
    use super::*;

    #[test]
    fn empty_void_method() {
        let node = method("run");
        let expected = format!("public void run(){{{0}{0}}}", SEPARATOR);
        assert_eq!(node.to_source().unwrap(), expected);
    }

    #[test]
    fn method_with_parameters_and_return() {
        let mut node = method("add");
        node.return_type = Some(basic("int"));
        node.parameters = vec![parameter(basic("int"), "a"), parameter(basic("int"), "b")];
        node.body = Some(vec![Statement::Return(ReturnStatement {
            label: None,
            expression: Some(Expression::Binary(BinaryOperation {
                operator: "+".to_string(),
                left: Box::new(member_ref("a")),
                right: Box::new(member_ref("b")),
            })),
        })]);
        let expected = format!(
            "public int add(int a, int b){{{0}return a + b;{0}}}",
            SEPARATOR
        );
        assert_eq!(node.to_source().unwrap(), expected);
    }

    #[test]
    fn constructor_brace_has_leading_space() {
        let node = constructor("Foo");
        let expected = format!("public Foo() {{{0}{0}}}", SEPARATOR);
        assert_eq!(node.to_source().unwrap(), expected);
    }

    #[test]
    fn constructor_with_super_invocation() {
        let mut node = constructor("Foo");
        node.body = vec![expression_statement(Expression::Primary(
            Primary::SuperConstructorInvocation(SuperConstructorInvocation {
                arguments: vec![member_ref("a"), member_ref("b")],
                ..Default::default()
            }),
        ))];
        // Super-invocation arguments are joined by the line separator, not
        // by commas.
        let expected = format!(
            "public Foo() {{{0}super(a{0}b);{0}}}",
            SEPARATOR
        );
        assert_eq!(node.to_source().unwrap(), expected);
    }

    #[test]
    fn field_with_modifiers_and_initializer() {
        let mut node = field(basic("int"), "x");
        node.modifiers = vec!["private".to_string(), "static".to_string()];
        node.declarators[0].initializer =
            Some(VariableInitializer::Expression(literal("0")));
        assert_eq!(node.to_source().unwrap(), "private static int x = 0;");
    }

    #[test]
    fn field_with_multiple_declarators() {
        let mut node = field(basic("int"), "x");
        node.declarators.push(VariableDeclarator {
            name: "y".to_string(),
            ..Default::default()
        });
        assert_eq!(node.to_source().unwrap(), "int x, y;");
    }

    #[test]
    fn declarator_dimensions_render_sized_and_empty_brackets() {
        let node = VariableDeclarator {
            name: "grid".to_string(),
            dimensions: vec![Some(literal("10")), None],
            initializer: None,
        };
        assert_eq!(node.to_source().unwrap(), "grid[10][]");
    }
}

mod expressions {
    use super::*;

    #[test]
    fn literal_value_is_verbatim() {
        // Escapes in the stored spelling must survive untouched.
        let node = Literal::new("\"a\\nb\"");
        assert_eq!(node.to_source().unwrap(), "\"a\\nb\"");
    }

    #[test]
    fn this_token() {
        let node = This::default();
        assert_eq!(node.to_source().unwrap(), "this");
    }

    #[test]
    fn member_reference_with_and_without_qualifier() {
        assert_eq!(MemberReference::plain("x").to_source().unwrap(), "x");
        assert_eq!(
            MemberReference::qualified("obj", "x").to_source().unwrap(),
            "obj.x"
        );
    }

    #[test]
    fn assignment_has_no_trailing_semicolon() {
        let node = Assignment {
            target: Box::new(member_ref("x")),
            operator: "+=".to_string(),
            value: Box::new(literal("1")),
        };
        assert_eq!(node.to_source().unwrap(), "x += 1");
    }

    #[test]
    fn assignment_in_statement_position_gains_semicolon() {
        let statement = expression_statement(Expression::Assignment(Assignment {
            target: Box::new(member_ref("x")),
            operator: "=".to_string(),
            value: Box::new(literal("1")),
        }));
        assert_eq!(statement.to_source().unwrap(), "x = 1;");
    }

    #[test]
    fn nested_binary_operations() {
        let node = BinaryOperation {
            operator: "*".to_string(),
            left: Box::new(Expression::Binary(BinaryOperation {
                operator: "+".to_string(),
                left: Box::new(member_ref("a")),
                right: Box::new(member_ref("b")),
            })),
            right: Box::new(literal("2")),
        };
        assert_eq!(node.to_source().unwrap(), "a + b * 2");
    }
}

mod creators {
    use super::*;

    #[test]
    fn array_creator_with_sized_dimension() {
        let node = ArrayCreator {
            prefix_operators: Vec::new(),
            postfix_operators: Vec::new(),
            qualifier: None,
            selectors: Vec::new(),
            ty: basic("int"),
            dimensions: vec![Some(literal("10"))],
            initializer: None,
        };
        assert_eq!(node.to_source().unwrap(), "new int[10]");
    }

    #[test]
    fn array_creator_with_initializer() {
        let node = ArrayCreator {
            prefix_operators: Vec::new(),
            postfix_operators: Vec::new(),
            qualifier: None,
            selectors: Vec::new(),
            ty: basic("int"),
            dimensions: vec![None],
            initializer: Some(ArrayInitializer {
                initializers: vec![
                    VariableInitializer::Expression(literal("1")),
                    VariableInitializer::Expression(literal("2")),
                ],
            }),
        };
        assert_eq!(node.to_source().unwrap(), "new int[]{1, 2}");
    }

    #[test]
    fn nested_array_initializer() {
        let node = ArrayInitializer {
            initializers: vec![
                VariableInitializer::Array(ArrayInitializer {
                    initializers: vec![VariableInitializer::Expression(literal("1"))],
                }),
                VariableInitializer::Array(ArrayInitializer {
                    initializers: vec![VariableInitializer::Expression(literal("2"))],
                }),
            ],
        };
        assert_eq!(node.to_source().unwrap(), "{{1}, {2}}");
    }

    #[test]
    fn class_creator_without_body() {
        let node = class_creator(vec![member_ref("a"), literal("1")], None);
        assert_eq!(node.to_source().unwrap(), "new Foo(a, 1)");
    }

    #[test]
    fn class_creator_with_empty_body_keeps_braces() {
        let node = class_creator(Vec::new(), Some(Vec::new()));
        assert_eq!(node.to_source().unwrap(), "new Foo(){}");
    }

    #[test]
    fn class_creator_with_anonymous_body() {
        let node = class_creator(Vec::new(), Some(vec![Member::Method(method("run"))]));
        let body = format!("public void run(){{{0}{0}}}", SEPARATOR);
        assert_eq!(node.to_source().unwrap(), format!("new Foo(){{{body}}}"));
    }

    fn class_creator(
        arguments: Vec<Expression>,
        body: Option<Vec<Member>>,
    ) -> ClassCreator {
        ClassCreator {
            prefix_operators: Vec::new(),
            postfix_operators: Vec::new(),
            qualifier: None,
            selectors: Vec::new(),
            ty: reference("Foo"),
            constructor_type_arguments: Vec::new(),
            arguments,
            body,
        }
    }
}

mod compilation_units {
    use super::*;

    #[test]
    fn unit_joins_sections_with_double_separator() {
        let unit = CompilationUnit {
            package: Some(package("com.example")),
            imports: vec![import("java.util.List"), import("java.util.Map")],
            types: vec![TypeDeclaration::Class(class("Foo"))],
        };
        let class_text = format!("public class Foo{0}{{{0}{0}}}", SEPARATOR);
        let expected = format!(
            "package com.example;{0}{0}import java.util.List;{0}import java.util.Map;{0}{0}{1}",
            SEPARATOR, class_text
        );
        assert_eq!(unit.to_source().unwrap(), expected);
    }

    #[test]
    fn regeneration_is_deterministic() {
        let unit = CompilationUnit {
            package: Some(package("com.example")),
            imports: vec![import("java.util.List")],
            types: vec![TypeDeclaration::Class(class("Foo"))],
        };
        assert_eq!(unit.to_source().unwrap(), unit.to_source().unwrap());
    }
}
