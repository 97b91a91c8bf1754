//! Shared node builders for the integration tests.
//!
//! Trees are built by hand here (the parser is an external collaborator),
//! so these helpers keep individual tests focused on the attribute under
//! test.

#![allow(dead_code)]

use javasrc::ast::{
    BasicType, ClassDeclaration, ConstructorDeclaration, Expression, FieldDeclaration,
    FormalParameter, Import, Literal, Member, MemberReference, MethodDeclaration,
    PackageDeclaration, Primary, ReferenceType, Statement, StatementExpression, Type,
    TypeDeclaration, VariableDeclarator,
};

pub fn basic(name: &str) -> Type {
    Type::Basic(BasicType::new(name))
}

pub fn reference(name: &str) -> Type {
    Type::Reference(ReferenceType::new(name))
}

pub fn literal(value: &str) -> Expression {
    Expression::Primary(Primary::Literal(Literal::new(value)))
}

pub fn member_ref(name: &str) -> Expression {
    Expression::Primary(Primary::MemberReference(MemberReference::plain(name)))
}

pub fn package(name: &str) -> PackageDeclaration {
    PackageDeclaration {
        name: name.to_string(),
        ..Default::default()
    }
}

pub fn import(path: &str) -> Import {
    Import {
        path: path.to_string(),
        ..Default::default()
    }
}

/// Empty public class.
pub fn class(name: &str) -> ClassDeclaration {
    ClassDeclaration {
        modifiers: vec!["public".to_string()],
        name: name.to_string(),
        ..Default::default()
    }
}

/// `public void <name>(){}` with an empty (but present) body.
pub fn method(name: &str) -> MethodDeclaration {
    MethodDeclaration {
        modifiers: vec!["public".to_string()],
        return_type: Some(basic("void")),
        name: name.to_string(),
        body: Some(Vec::new()),
        ..Default::default()
    }
}

pub fn constructor(name: &str) -> ConstructorDeclaration {
    ConstructorDeclaration {
        modifiers: vec!["public".to_string()],
        name: name.to_string(),
        ..Default::default()
    }
}

/// Single-declarator field without modifiers or initializer.
pub fn field(ty: Type, name: &str) -> FieldDeclaration {
    FieldDeclaration {
        modifiers: Vec::new(),
        annotations: Vec::new(),
        documentation: None,
        ty,
        declarators: vec![VariableDeclarator {
            name: name.to_string(),
            ..Default::default()
        }],
    }
}

pub fn parameter(ty: Type, name: &str) -> FormalParameter {
    FormalParameter {
        modifiers: Vec::new(),
        annotations: Vec::new(),
        ty,
        name: name.to_string(),
        varargs: false,
    }
}

pub fn expression_statement(expression: Expression) -> Statement {
    Statement::Expression(StatementExpression {
        label: None,
        expression,
    })
}

pub fn class_member(name: &str) -> Member {
    Member::Type(TypeDeclaration::Class(class(name)))
}
