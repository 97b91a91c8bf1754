//! Statements and their control structures.
//!
//! Every statement kind implements the {Labeled} facet. Only `return` and
//! expression statements are in the implemented regeneration subset; the
//! rest of the catalog exists so parsed trees can be represented and
//! queried, and regeneration rejects them explicitly.

use serde::{Deserialize, Serialize};

use super::{Annotation, Expression, ReferenceType, VariableDeclaration};

/// A statement inside a method, constructor or block body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    If(IfStatement),
    While(WhileStatement),
    Do(DoStatement),
    For(ForStatement),
    Assert(AssertStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    Return(ReturnStatement),
    Throw(ThrowStatement),
    Synchronized(SynchronizedStatement),
    Try(TryStatement),
    Switch(SwitchStatement),
    Block(BlockStatement),
    Expression(StatementExpression),
    LocalVariable(VariableDeclaration),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    pub label: Option<String>,
    pub condition: Expression,
    pub then_statement: Box<Statement>,
    pub else_statement: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    pub label: Option<String>,
    pub condition: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoStatement {
    pub label: Option<String>,
    pub condition: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStatement {
    pub label: Option<String>,
    pub control: ForControl,
    pub body: Box<Statement>,
}

/// Loop header of a `for` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForControl {
    Basic(BasicForControl),
    Enhanced(EnhancedForControl),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BasicForControl {
    pub init: Option<ForInit>,
    pub condition: Option<Expression>,
    pub update: Vec<Expression>,
}

/// Initialiser slot of a basic `for` header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForInit {
    Declaration(VariableDeclaration),
    Expressions(Vec<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedForControl {
    pub var: VariableDeclaration,
    pub iterable: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssertStatement {
    pub label: Option<String>,
    pub condition: Expression,
    /// Detail message expression after the colon, when present.
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BreakStatement {
    pub label: Option<String>,
    /// Target label of the break, when present.
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContinueStatement {
    pub label: Option<String>,
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReturnStatement {
    pub label: Option<String>,
    /// `None` models a bare `return;`, which the current rule does not
    /// render.
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowStatement {
    pub label: Option<String>,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynchronizedStatement {
    pub label: Option<String>,
    pub lock: Expression,
    pub block: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TryStatement {
    pub label: Option<String>,
    pub resources: Vec<TryResource>,
    pub block: Vec<Statement>,
    pub catches: Vec<CatchClause>,
    pub finally_block: Option<Vec<Statement>>,
}

/// Implements facet set {Declared}; own fields {type, name, value}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryResource {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub ty: ReferenceType,
    pub name: String,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub label: Option<String>,
    pub parameter: CatchClauseParameter,
    pub block: Vec<Statement>,
}

/// Implements facet set {Declared}; own fields {types, name}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatchClauseParameter {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    /// Caught exception type names; more than one for multi-catch.
    pub types: Vec<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStatement {
    pub label: Option<String>,
    pub expression: Expression,
    pub cases: Vec<SwitchCase>,
}

/// One `case`/`default` group inside a switch body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SwitchCase {
    /// Case label expressions; empty for `default`.
    pub case: Vec<Expression>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BlockStatement {
    pub label: Option<String>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementExpression {
    pub label: Option<String>,
    pub expression: Expression,
}

impl_declared!(TryResource, CatchClauseParameter);

impl_labeled!(
    IfStatement,
    WhileStatement,
    DoStatement,
    ForStatement,
    AssertStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    ThrowStatement,
    SynchronizedStatement,
    TryStatement,
    CatchClause,
    SwitchStatement,
    BlockStatement,
    StatementExpression,
);
