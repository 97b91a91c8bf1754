//! Expressions, primaries and creators.
//!
//! Primary kinds all implement the {PrimaryExpr} facet: prefix/postfix
//! operator lists, an optional qualifier and the selector chain. Selector
//! chains are carried by the model but not rendered; regeneration rejects
//! a populated chain instead of dropping it.

use serde::{Deserialize, Serialize};

use super::{FormalParameter, InferredFormalParameter, Member, Statement, Type, TypeArgument};

/// Any expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Assignment(Assignment),
    Ternary(TernaryExpression),
    Binary(BinaryOperation),
    Cast(Cast),
    MethodReference(MethodReference),
    Lambda(LambdaExpression),
    Primary(Primary),
}

/// `target op value` where `op` is one of the assignment operator tokens
/// (`=`, `+=`, …). Renders without a trailing semicolon; statement position
/// adds it via [`super::StatementExpression`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub target: Box<Expression>,
    /// Assignment operator token, verbatim.
    pub operator: String,
    pub value: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TernaryExpression {
    pub condition: Box<Expression>,
    pub if_true: Box<Expression>,
    pub if_false: Box<Expression>,
}

/// `left op right` with the operator token stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperation {
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cast {
    pub ty: Type,
    pub expression: Box<Expression>,
}

/// `expr::method` reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodReference {
    pub expression: Box<Expression>,
    pub method: String,
    pub type_arguments: Vec<TypeArgument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambdaExpression {
    pub parameters: Vec<LambdaParameter>,
    pub body: LambdaBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LambdaParameter {
    Formal(FormalParameter),
    Inferred(InferredFormalParameter),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LambdaBody {
    Expression(Box<Expression>),
    Block(Vec<Statement>),
}

// ============================================================================
// PRIMARIES
// ============================================================================

/// A primary expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primary {
    Literal(Literal),
    This(This),
    MemberReference(MemberReference),
    ExplicitConstructorInvocation(ExplicitConstructorInvocation),
    SuperConstructorInvocation(SuperConstructorInvocation),
    MethodInvocation(MethodInvocation),
    SuperMethodInvocation(SuperMethodInvocation),
    SuperMemberReference(SuperMemberReference),
    ArraySelector(ArraySelector),
    ClassReference(ClassReference),
    VoidClassReference(VoidClassReference),
    Creator(Creator),
    ArrayCreator(ArrayCreator),
    ClassCreator(ClassCreator),
    InnerClassCreator(InnerClassCreator),
}

/// Implements facet set {PrimaryExpr}; own fields {value}.
///
/// The value is the literal's exact source spelling (quotes and escapes
/// included) and is reproduced verbatim, never re-escaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Literal {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub value: String,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

/// Implements facet set {PrimaryExpr}; no own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct This {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
}

/// Implements facet set {PrimaryExpr}; own fields {member}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MemberReference {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub member: String,
}

impl MemberReference {
    pub fn plain(member: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            ..Self::default()
        }
    }

    pub fn qualified(qualifier: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            member: member.into(),
            ..Self::default()
        }
    }
}

/// Implements facet set {PrimaryExpr}; own fields {type_arguments, arguments}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExplicitConstructorInvocation {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub type_arguments: Vec<TypeArgument>,
    pub arguments: Vec<Expression>,
}

/// Implements facet set {PrimaryExpr}; own fields {type_arguments, arguments}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SuperConstructorInvocation {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub type_arguments: Vec<TypeArgument>,
    pub arguments: Vec<Expression>,
}

/// Implements facet set {PrimaryExpr}; own fields {type_arguments,
/// arguments, member}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MethodInvocation {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub type_arguments: Vec<TypeArgument>,
    pub arguments: Vec<Expression>,
    pub member: String,
}

/// Implements facet set {PrimaryExpr}; own fields {type_arguments,
/// arguments, member}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SuperMethodInvocation {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub type_arguments: Vec<TypeArgument>,
    pub arguments: Vec<Expression>,
    pub member: String,
}

/// Implements facet set {PrimaryExpr}; own fields {member}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SuperMemberReference {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub member: String,
}

/// Implements facet set {PrimaryExpr}; own fields {index}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArraySelector {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub index: Box<Expression>,
}

/// Implements facet set {PrimaryExpr}; own fields {type}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassReference {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub ty: Type,
}

/// `void.class`. Implements facet set {PrimaryExpr}; no own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VoidClassReference {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
}

// ============================================================================
// CREATORS
// ============================================================================

/// Bare `new T` creator. Implements facet set {PrimaryExpr}; own fields
/// {type}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub ty: Type,
}

/// `new T[…]…{…}`. Implements facet set {PrimaryExpr}; own fields {type,
/// dimensions, initializer}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayCreator {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub ty: Type,
    /// One entry per bracket pair; `Some` carries the sizing expression.
    pub dimensions: Vec<Option<Expression>>,
    pub initializer: Option<ArrayInitializer>,
}

/// `new T(args) {…}`. Implements facet set {PrimaryExpr}; own fields
/// {type, constructor_type_arguments, arguments, body}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassCreator {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub ty: Type,
    pub constructor_type_arguments: Vec<TypeArgument>,
    pub arguments: Vec<Expression>,
    /// Anonymous-class body. `None` means no body at all; `Some(vec![])`
    /// is an explicitly empty body and still renders its brace pair.
    pub body: Option<Vec<Member>>,
}

/// `outer.new Inner(args)`. Implements facet set {PrimaryExpr}; own fields
/// {type, constructor_type_arguments, arguments, body}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerClassCreator {
    pub prefix_operators: Vec<String>,
    pub postfix_operators: Vec<String>,
    pub qualifier: Option<String>,
    pub selectors: Vec<Expression>,
    pub ty: Type,
    pub constructor_type_arguments: Vec<TypeArgument>,
    pub arguments: Vec<Expression>,
    pub body: Option<Vec<Member>>,
}

// ============================================================================
// INITIALIZERS
// ============================================================================

/// Right-hand side of a variable declarator or array-initializer slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VariableInitializer {
    Expression(Expression),
    Array(ArrayInitializer),
}

/// `{a, b, c}` aggregate initializer; nests through
/// [`VariableInitializer::Array`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArrayInitializer {
    pub initializers: Vec<VariableInitializer>,
}

impl_primary!(
    Literal,
    This,
    MemberReference,
    ExplicitConstructorInvocation,
    SuperConstructorInvocation,
    MethodInvocation,
    SuperMethodInvocation,
    SuperMemberReference,
    ArraySelector,
    ClassReference,
    VoidClassReference,
    Creator,
    ArrayCreator,
    ClassCreator,
    InnerClassCreator,
);
