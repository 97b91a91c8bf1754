//! Declarations: type declarations and their members, annotations, formal
//! parameters and variable declarators.

use serde::{Deserialize, Serialize};

use super::{Expression, ReferenceType, Statement, Type, TypeParameter, VariableInitializer};

// ============================================================================
// ANNOTATIONS
// ============================================================================

/// A single annotation use (`@Override`, `@Test(expected = …)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Annotation {
    pub name: String,
    pub element: Option<AnnotationElement>,
}

impl Annotation {
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element: None,
        }
    }
}

/// Payload of an annotation use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationElement {
    /// Single-value shorthand: `@Name(value)`.
    Value(Expression),
    /// Explicit pairs: `@Name(a = 1, b = 2)`.
    Pairs(Vec<ElementValuePair>),
    Array(ElementArrayValue),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementValuePair {
    pub name: String,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ElementArrayValue {
    pub values: Vec<Expression>,
}

// ============================================================================
// TYPE DECLARATIONS
// ============================================================================

/// A class, enum, interface or annotation declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TypeDeclaration {
    Class(ClassDeclaration),
    Enum(EnumDeclaration),
    Interface(InterfaceDeclaration),
    Annotation(AnnotationDeclaration),
}

impl TypeDeclaration {
    pub fn name(&self) -> &str {
        match self {
            TypeDeclaration::Class(decl) => &decl.name,
            TypeDeclaration::Enum(decl) => &decl.name,
            TypeDeclaration::Interface(decl) => &decl.name,
            TypeDeclaration::Annotation(decl) => &decl.name,
        }
    }
}

impl TypeScope for TypeDeclaration {
    fn body(&self) -> &[Member] {
        match self {
            TypeDeclaration::Class(decl) => decl.body(),
            TypeDeclaration::Enum(decl) => decl.body(),
            TypeDeclaration::Interface(decl) => decl.body(),
            TypeDeclaration::Annotation(decl) => decl.body(),
        }
    }
}

/// Derived, order-preserving queries over a type declaration's body.
///
/// Each query is a plain O(body) filter: no caching, no deduplication, and
/// the relative order of the body sequence is preserved exactly. A body with
/// no matching members yields an empty vector.
pub trait TypeScope {
    /// Member sequence in declaration order.
    fn body(&self) -> &[Member];

    /// Subsequence of the body that is field declarations.
    fn fields(&self) -> Vec<&FieldDeclaration> {
        self.body().iter().filter_map(Member::as_field).collect()
    }

    /// Subsequence of the body that is method declarations.
    fn methods(&self) -> Vec<&MethodDeclaration> {
        self.body().iter().filter_map(Member::as_method).collect()
    }

    /// Subsequence of the body that is constructor declarations.
    fn constructors(&self) -> Vec<&ConstructorDeclaration> {
        self.body()
            .iter()
            .filter_map(Member::as_constructor)
            .collect()
    }
}

/// Implements facet set {Declared, Documented}; own fields {name,
/// type_parameters, extends, implements, body}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClassDeclaration {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub name: String,
    /// Declared type parameters; rendering deferred.
    pub type_parameters: Vec<TypeParameter>,
    pub extends: Option<ReferenceType>,
    pub implements: Vec<ReferenceType>,
    pub body: Vec<Member>,
}

/// Implements facet set {Declared, Documented}; own fields {name,
/// implements, body}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EnumDeclaration {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub name: String,
    pub implements: Vec<ReferenceType>,
    pub body: EnumBody,
}

/// Implements facet set {Declared, Documented}; own fields {name,
/// type_parameters, extends, body}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InterfaceDeclaration {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub name: String,
    pub type_parameters: Vec<TypeParameter>,
    /// Interfaces may extend several interfaces.
    pub extends: Vec<ReferenceType>,
    pub body: Vec<Member>,
}

/// Implements facet set {Declared, Documented}; own fields {name, body}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnnotationDeclaration {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub name: String,
    pub body: Vec<Member>,
}

impl TypeScope for ClassDeclaration {
    fn body(&self) -> &[Member] {
        &self.body
    }
}

impl TypeScope for EnumDeclaration {
    /// An enum's member sequence is the declaration part of its body; the
    /// constant list is queried separately via `body.constants`.
    fn body(&self) -> &[Member] {
        &self.body.declarations
    }
}

impl TypeScope for InterfaceDeclaration {
    fn body(&self) -> &[Member] {
        &self.body
    }
}

impl TypeScope for AnnotationDeclaration {
    fn body(&self) -> &[Member] {
        &self.body
    }
}

/// Body of an enum declaration: constants first, then ordinary members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EnumBody {
    pub constants: Vec<EnumConstantDeclaration>,
    pub declarations: Vec<Member>,
}

/// Implements facet set {Declared, Documented}; own fields {name,
/// arguments, body}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EnumConstantDeclaration {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub name: String,
    pub arguments: Vec<Expression>,
    pub body: Vec<Member>,
}

// ============================================================================
// MEMBERS
// ============================================================================

/// A member of a type declaration body, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Member {
    Field(FieldDeclaration),
    Method(MethodDeclaration),
    Constructor(ConstructorDeclaration),
    AnnotationMethod(AnnotationMethod),
    /// Nested type declaration.
    Type(TypeDeclaration),
}

impl Member {
    pub fn as_field(&self) -> Option<&FieldDeclaration> {
        match self {
            Member::Field(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodDeclaration> {
        match self {
            Member::Method(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn as_constructor(&self) -> Option<&ConstructorDeclaration> {
        match self {
            Member::Constructor(decl) => Some(decl),
            _ => None,
        }
    }
}

/// Implements facet set {Declared, Documented}; own fields {type_parameters,
/// return_type, name, parameters, throws, body}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MethodDeclaration {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub type_parameters: Vec<TypeParameter>,
    /// `void` is modelled as `BasicType("void")`, not as absence; `None`
    /// only occurs on malformed trees and makes regeneration fail.
    pub return_type: Option<Type>,
    pub name: String,
    pub parameters: Vec<FormalParameter>,
    /// Thrown exception type names; rendering deferred.
    pub throws: Vec<String>,
    /// `None` for abstract and interface methods without a body.
    pub body: Option<Vec<Statement>>,
}

/// Implements facet set {Declared, Documented}; own fields {type, declarators}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub ty: Type,
    /// One declarator per declared variable, in source order.
    pub declarators: Vec<VariableDeclarator>,
}

/// Implements facet set {Declared, Documented}; own fields {type_parameters,
/// name, parameters, throws, body}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConstructorDeclaration {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub documentation: Option<String>,
    pub type_parameters: Vec<TypeParameter>,
    pub name: String,
    pub parameters: Vec<FormalParameter>,
    pub throws: Vec<String>,
    pub body: Vec<Statement>,
}

/// Annotation-type member (`String value() default "";`).
/// Implements facet set {Declared}; own fields {name, return_type,
/// dimensions, default}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnnotationMethod {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub name: String,
    pub return_type: Option<Type>,
    pub dimensions: Vec<Option<Expression>>,
    pub default: Option<Expression>,
}

// ============================================================================
// PARAMETERS AND VARIABLES
// ============================================================================

/// Implements facet set {Declared}; own fields {type, name, varargs}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormalParameter {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub ty: Type,
    pub name: String,
    /// Trailing `...` parameter; the varargs marker is not rendered yet, so
    /// a `true` value makes regeneration fail loudly.
    pub varargs: bool,
}

/// Lambda parameter without a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InferredFormalParameter {
    pub name: String,
}

/// A single declared variable inside a field or local declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VariableDeclarator {
    pub name: String,
    /// Trailing array dimensions on the declarator itself (`int x[];`).
    pub dimensions: Vec<Option<Expression>>,
    pub initializer: Option<VariableInitializer>,
}

/// Shared shape of local variable declarations and enhanced-for variables.
/// Implements facet set {Declared}; own fields {type, declarators}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub modifiers: Vec<String>,
    pub annotations: Vec<Annotation>,
    pub ty: Type,
    pub declarators: Vec<VariableDeclarator>,
}

impl_documented!(
    ClassDeclaration,
    EnumDeclaration,
    InterfaceDeclaration,
    AnnotationDeclaration,
    EnumConstantDeclaration,
    MethodDeclaration,
    FieldDeclaration,
    ConstructorDeclaration,
);

impl_declared!(
    ClassDeclaration,
    EnumDeclaration,
    InterfaceDeclaration,
    AnnotationDeclaration,
    EnumConstantDeclaration,
    MethodDeclaration,
    FieldDeclaration,
    ConstructorDeclaration,
    AnnotationMethod,
    FormalParameter,
    VariableDeclaration,
);
