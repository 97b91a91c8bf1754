//! External parser boundary.
//!
//! Parsing raw text into an AST is the job of a grammar-driven collaborator;
//! this crate only defines the contract it is consumed through. Corpus
//! scanning concerns (resuming validation from a line offset, encoding setup,
//! recursion limits) belong entirely to that collaborator.

use crate::ast::CompilationUnit;
use crate::errors::SyntaxError;

/// Contract of the external parser.
///
/// Implementations must be pure with respect to the returned tree: nodes are
/// populated once and never mutated afterwards, so downstream queries and
/// regeneration can read a shared tree concurrently.
///
/// Over the implemented regeneration subset the pairing with
/// [`crate::unparse::ToSource`] satisfies two properties:
///
/// - round-trip: `parse(to_source(ast))` is structurally equal to `ast`
///   (ignoring whitespace and comments);
/// - idempotence: `to_source(parse(to_source(ast))) == to_source(ast)`.
pub trait JavaParser {
    /// Parses a complete compilation unit from `text`.
    ///
    /// Any timeout or retry policy around a slow parse is the caller's
    /// responsibility; the error is surfaced verbatim.
    fn parse(&self, text: &str) -> Result<CompilationUnit, SyntaxError>;
}
