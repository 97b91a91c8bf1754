//! Type references: primitive and reference types, generic arguments and
//! parameters.

use serde::{Deserialize, Serialize};

use super::Expression;

/// A type reference in source position (field type, return type, creator
/// type, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Type {
    Basic(BasicType),
    Reference(ReferenceType),
}

impl Type {
    pub fn name(&self) -> &str {
        match self {
            Type::Basic(basic) => &basic.name,
            Type::Reference(reference) => &reference.name,
        }
    }

    pub fn dimensions(&self) -> &[Option<Expression>] {
        match self {
            Type::Basic(basic) => &basic.dimensions,
            Type::Reference(reference) => &reference.dimensions,
        }
    }
}

/// Primitive type (`int`, `boolean`, `void`, …).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BasicType {
    pub name: String,
    /// One entry per array dimension; `Some` carries a sized-dimension
    /// expression, `None` an empty bracket pair.
    pub dimensions: Vec<Option<Expression>>,
}

impl BasicType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimensions: Vec::new(),
        }
    }
}

/// Class or interface type, possibly generic, possibly nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReferenceType {
    pub name: String,
    pub dimensions: Vec<Option<Expression>>,
    /// Generic type arguments; empty when the reference is raw. Rendering
    /// is deferred, so a populated list makes regeneration fail loudly.
    pub arguments: Vec<TypeArgument>,
    /// Nested sub-type for qualified references (`Map.Entry`); rendering
    /// deferred as well.
    pub sub_type: Option<Box<ReferenceType>>,
}

impl ReferenceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A generic type argument, possibly a bounded wildcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TypeArgument {
    /// `None` models the unbounded wildcard `?`.
    pub ty: Option<Box<Type>>,
    /// Wildcard bound kind (`extends` or `super`) when present.
    pub pattern_type: Option<String>,
}

/// A declared type parameter (`<T extends Comparable<T>>`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TypeParameter {
    pub name: String,
    pub extends: Vec<ReferenceType>,
}
