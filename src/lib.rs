//! Typed AST for a Java-like grammar with source regeneration.
//!
//! The crate sits between an external grammar-driven parser and tooling
//! that inspects or transforms parsed source. It owns three things:
//!
//! - the node catalog ([`ast`]): ~55 concrete node kinds composed from
//!   capability facets, populated once by the parser and then only read;
//! - order-preserving queries over type declaration bodies
//!   ([`ast::TypeScope`]);
//! - regeneration of source text from a tree ([`unparse::ToSource`]),
//!   exact to the separator: anything the rules cannot reproduce
//!   faithfully fails loudly instead of emitting wrong text.
//!
//! Parsing itself is the collaborator's job, consumed through
//! [`parse::JavaParser`].

pub use crate::errors::{SyntaxError, UnparseError};
pub use crate::parse::JavaParser;
pub use crate::unparse::{SEPARATOR, ToSource};

pub mod ast;
pub mod errors;
pub mod parse;
pub mod unparse;
