//! Node catalog for a Java-like grammar.
//!
//! Every concrete node kind is a flat record composed from capability
//! facets: a kind "implements facet set {Declared, Documented}" means its
//! attribute set is exactly the union of those facets' attributes plus its
//! own fields. Facets are independent traits rather than an inheritance
//! chain; the `impl_*` macros below make a kind's facet set read as a
//! one-line declaration next to its struct.
//!
//! Nodes are populated once by the external parser and never mutated here.
//! Ordered sequence attributes (`body`, `imports`, parameter lists, operator
//! lists) carry declaration order from the source text; every query and
//! every regeneration rule preserves that order.

// ============================================================================
// FACET IMPLEMENTATION MACROS
// ============================================================================

/// Implements [`Documented`] for kinds with a `documentation` field.
macro_rules! impl_documented {
    ($($kind:ty),+ $(,)?) => {$(
        impl crate::ast::Documented for $kind {
            fn documentation(&self) -> Option<&str> {
                self.documentation.as_deref()
            }
        }
    )+};
}

/// Implements [`Declared`] for kinds with `modifiers` and `annotations`.
macro_rules! impl_declared {
    ($($kind:ty),+ $(,)?) => {$(
        impl crate::ast::Declared for $kind {
            fn modifiers(&self) -> &[String] {
                &self.modifiers
            }

            fn annotations(&self) -> &[crate::ast::Annotation] {
                &self.annotations
            }
        }
    )+};
}

/// Implements [`Labeled`] for statement kinds with a `label` field.
macro_rules! impl_labeled {
    ($($kind:ty),+ $(,)?) => {$(
        impl crate::ast::Labeled for $kind {
            fn label(&self) -> Option<&str> {
                self.label.as_deref()
            }
        }
    )+};
}

/// Implements [`PrimaryExpr`] for primary-expression kinds carrying the
/// shared prefix/postfix/qualifier/selector attributes.
macro_rules! impl_primary {
    ($($kind:ty),+ $(,)?) => {$(
        impl crate::ast::PrimaryExpr for $kind {
            fn prefix_operators(&self) -> &[String] {
                &self.prefix_operators
            }

            fn postfix_operators(&self) -> &[String] {
                &self.postfix_operators
            }

            fn qualifier(&self) -> Option<&str> {
                self.qualifier.as_deref()
            }

            fn selectors(&self) -> &[crate::ast::Expression] {
                &self.selectors
            }
        }
    )+};
}

// ============================================================================
// MODULE LAYOUT
// ============================================================================

pub mod decl;
pub mod expr;
pub mod stmt;
pub mod types;

pub use decl::*;
pub use expr::*;
pub use stmt::*;
pub use types::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// CAPABILITY FACETS
// ============================================================================

/// Optional documentation text attached to a declaration.
///
/// Documentation never participates in regeneration (round-trips ignore
/// comments); it is carried for downstream tooling.
pub trait Documented {
    fn documentation(&self) -> Option<&str>;
}

/// Modifier keywords and annotations shared by every declaration form.
pub trait Declared {
    /// Modifier keywords (`public`, `static`, `final`, …) in source order.
    fn modifiers(&self) -> &[String];

    /// Annotations in source order.
    fn annotations(&self) -> &[Annotation];
}

/// Optional label shared by every statement form.
pub trait Labeled {
    fn label(&self) -> Option<&str>;
}

/// Attributes shared by every primary expression: prefix/postfix operator
/// lists, an optional qualifier, and the chained selector sequence.
pub trait PrimaryExpr {
    /// Prefix operators (`-`, `!`, `++`, …) in source order.
    fn prefix_operators(&self) -> &[String];

    /// Postfix operators (`++`, `--`) in source order.
    fn postfix_operators(&self) -> &[String];

    fn qualifier(&self) -> Option<&str>;

    /// Chained postfix accesses/invocations (`.foo()`, `[i]`, …).
    fn selectors(&self) -> &[Expression];
}

// ============================================================================
// COMPILATION UNIT
// ============================================================================

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompilationUnit {
    /// `None` models the default package; regeneration requires `Some`.
    pub package: Option<PackageDeclaration>,
    pub imports: Vec<Import>,
    /// Top-level type declarations in source order.
    pub types: Vec<TypeDeclaration>,
}

/// A single `import` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Import {
    /// Dotted path, without the trailing `.*` for wildcard imports.
    pub path: String,
    pub is_static: bool,
    pub wildcard: bool,
}

/// Implements facet set {Declared, Documented}; own fields {name}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PackageDeclaration {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    /// Dotted package name.
    pub name: String,
}

impl_declared!(PackageDeclaration);
impl_documented!(PackageDeclaration);
