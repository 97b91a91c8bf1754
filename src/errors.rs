//! Error taxonomy for the AST and source-regeneration layers.
//!
//! Two failure families exist, and they never mix:
//!
//! - [`SyntaxError`] originates in the external parser and is surfaced
//!   verbatim. This crate never constructs or recovers one.
//! - [`UnparseError`] originates in the regeneration layer. Regeneration is
//!   deterministic and pure, so an input either always renders the same text
//!   or always fails with the same error. There are no retries.

use miette::Diagnostic;
use thiserror::Error;

/// Diagnostic produced by the external grammar-driven parser when source
/// text does not parse.
///
/// The message is whatever the collaborator reported; callers surface it
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(javasrc::parse::syntax_error))]
pub struct SyntaxError {
    /// Human-readable diagnostic from the parser.
    pub message: String,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failures raised while regenerating source text from an AST.
///
/// Regeneration fails fast: no variant ever comes with partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum UnparseError {
    /// The node kind (or one of its populated attributes) has no
    /// regeneration rule. Failing loudly here is deliberate: emitting text
    /// that silently drops a populated attribute would re-parse to a
    /// different tree.
    #[error("unsupported construct: {construct}")]
    #[diagnostic(
        code(javasrc::unparse::unsupported_construct),
        help("this construct is outside the implemented regeneration subset")
    )]
    UnsupportedConstruct {
        /// Node kind name, optionally suffixed with the offending
        /// attribute (`MethodDeclaration.throws`).
        construct: String,
    },

    /// An attribute the applicable rule requires is absent where the
    /// grammar guarantees presence.
    #[error("malformed {construct} node: `{attribute}` is not populated")]
    #[diagnostic(code(javasrc::unparse::malformed_node))]
    MalformedNode {
        construct: String,
        attribute: String,
    },
}

impl UnparseError {
    pub(crate) fn unsupported(construct: impl Into<String>) -> Self {
        UnparseError::UnsupportedConstruct {
            construct: construct.into(),
        }
    }

    pub(crate) fn malformed(construct: impl Into<String>, attribute: impl Into<String>) -> Self {
        UnparseError::MalformedNode {
            construct: construct.into(),
            attribute: attribute.into(),
        }
    }
}
