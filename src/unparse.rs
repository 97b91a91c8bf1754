//! Source regeneration ("unparsing").
//!
//! [`ToSource`] maps a populated node back to source text by recursively
//! composing child text. Every rule is a pure function of the subtree it is
//! given: no partial output, no streaming, and identical input always yields
//! identical success or identical failure.
//!
//! The implemented subset mirrors the grammar's line-oriented consumers:
//! [`SEPARATOR`] is the single separator between imports, top-level types,
//! members and statements, and substituting anything else is an observable
//! compatibility break. Constructs outside the subset never render silently
//! wrong text; they fail with
//! [`UnparseError::UnsupportedConstruct`](crate::errors::UnparseError), and
//! so does any populated attribute a rule would otherwise have to drop.

use crate::ast::{
    ArrayCreator, ArrayInitializer, Assignment, BasicType, BinaryOperation, ClassCreator,
    ClassDeclaration, CompilationUnit, ConstructorDeclaration, Creator, Declared, Expression,
    FieldDeclaration, FormalParameter, Import, Labeled, Literal, Member, MemberReference,
    MethodDeclaration, PackageDeclaration, Primary, PrimaryExpr, ReferenceType, ReturnStatement,
    Statement, StatementExpression, SuperConstructorInvocation, This, Type, TypeDeclaration,
    VariableDeclarator, VariableInitializer,
};
use crate::errors::UnparseError;

/// Two-character line terminator used by every joining rule.
pub const SEPARATOR: &str = "\r\n";

/// Regenerates source text from an AST node.
pub trait ToSource {
    /// Renders this node, recursively rendering its children.
    ///
    /// Fails with `UnsupportedConstruct` for kinds or populated attributes
    /// outside the implemented subset, and with `MalformedNode` when a
    /// required attribute is absent.
    fn to_source(&self) -> Result<String, UnparseError>;
}

// ============================================================================
// RENDERING HELPERS
// ============================================================================

fn join_sources<'a, T, I>(nodes: I, separator: &str) -> Result<String, UnparseError>
where
    T: ToSource + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let rendered = nodes
        .into_iter()
        .map(ToSource::to_source)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join(separator))
}

/// `"public static "`-style prefix; empty when there are no modifiers.
fn modifier_prefix(node: &impl Declared) -> String {
    if node.modifiers().is_empty() {
        String::new()
    } else {
        format!("{} ", node.modifiers().join(" "))
    }
}

/// Annotation block with each `@name` on its own line, trailing separator
/// included; empty annotations render as the empty string.
fn annotation_block(node: &impl Declared) -> String {
    let mut block = String::new();
    for annotation in node.annotations() {
        block.push('@');
        block.push_str(&annotation.name);
        block.push_str(SEPARATOR);
    }
    block
}

/// Appends one bracket pair per dimension: `[expr]` for sized dimensions,
/// `[]` for empty ones.
fn with_dimensions(name: &str, dimensions: &[Option<Expression>]) -> Result<String, UnparseError> {
    let mut out = name.to_string();
    for dimension in dimensions {
        match dimension {
            Some(size) => {
                out.push('[');
                out.push_str(&size.to_source()?);
                out.push(']');
            }
            None => out.push_str("[]"),
        }
    }
    Ok(out)
}

fn guard_chain(primary: &impl PrimaryExpr, kind: &str) -> Result<(), UnparseError> {
    if !primary.prefix_operators().is_empty() {
        return Err(UnparseError::unsupported(format!("{kind}.prefix_operators")));
    }
    if !primary.postfix_operators().is_empty() {
        return Err(UnparseError::unsupported(format!(
            "{kind}.postfix_operators"
        )));
    }
    if !primary.selectors().is_empty() {
        return Err(UnparseError::unsupported(format!("{kind}.selectors")));
    }
    Ok(())
}

fn guard_qualifier(primary: &impl PrimaryExpr, kind: &str) -> Result<(), UnparseError> {
    if primary.qualifier().is_some() {
        return Err(UnparseError::unsupported(format!("{kind}.qualifier")));
    }
    Ok(())
}

fn guard_label(statement: &impl Labeled, kind: &str) -> Result<(), UnparseError> {
    if statement.label().is_some() {
        return Err(UnparseError::unsupported(format!("{kind}.label")));
    }
    Ok(())
}

// ============================================================================
// COMPILATION UNIT
// ============================================================================

impl ToSource for CompilationUnit {
    fn to_source(&self) -> Result<String, UnparseError> {
        let package = self
            .package
            .as_ref()
            .ok_or_else(|| UnparseError::malformed("CompilationUnit", "package"))?;
        let imports = join_sources(&self.imports, SEPARATOR)?;
        let types = join_sources(&self.types, SEPARATOR)?;

        let mut out = package.to_source()?;
        out.push_str(SEPARATOR);
        out.push_str(SEPARATOR);
        out.push_str(&imports);
        out.push_str(SEPARATOR);
        out.push_str(SEPARATOR);
        out.push_str(&types);
        Ok(out)
    }
}

impl ToSource for Import {
    fn to_source(&self) -> Result<String, UnparseError> {
        let mut out = String::from("import ");
        if self.is_static {
            out.push_str("static ");
        }
        out.push_str(&self.path);
        if self.wildcard {
            out.push_str(".*");
        }
        out.push(';');
        Ok(out)
    }
}

impl ToSource for PackageDeclaration {
    fn to_source(&self) -> Result<String, UnparseError> {
        if !self.annotations.is_empty() {
            return Err(UnparseError::unsupported("PackageDeclaration.annotations"));
        }
        Ok(format!("{}package {};", modifier_prefix(self), self.name))
    }
}

// ============================================================================
// TYPE DECLARATIONS AND MEMBERS
// ============================================================================

impl ToSource for TypeDeclaration {
    fn to_source(&self) -> Result<String, UnparseError> {
        match self {
            TypeDeclaration::Class(decl) => decl.to_source(),
            TypeDeclaration::Enum(_) => Err(UnparseError::unsupported("EnumDeclaration")),
            TypeDeclaration::Interface(_) => {
                Err(UnparseError::unsupported("InterfaceDeclaration"))
            }
            TypeDeclaration::Annotation(_) => {
                Err(UnparseError::unsupported("AnnotationDeclaration"))
            }
        }
    }
}

impl ToSource for ClassDeclaration {
    fn to_source(&self) -> Result<String, UnparseError> {
        if !self.type_parameters.is_empty() {
            return Err(UnparseError::unsupported("ClassDeclaration.type_parameters"));
        }

        let mut out = annotation_block(self);
        out.push_str(&modifier_prefix(self));
        out.push_str("class ");
        out.push_str(&self.name);
        if let Some(extends) = &self.extends {
            out.push_str(" extends ");
            out.push_str(&extends.to_source()?);
        }
        if !self.implements.is_empty() {
            out.push_str(" implements ");
            out.push_str(&join_sources(&self.implements, ", ")?);
        }
        out.push_str(SEPARATOR);
        out.push('{');
        out.push_str(SEPARATOR);
        out.push_str(&join_sources(&self.body, SEPARATOR)?);
        out.push_str(SEPARATOR);
        out.push('}');
        Ok(out)
    }
}

impl ToSource for Member {
    fn to_source(&self) -> Result<String, UnparseError> {
        match self {
            Member::Field(decl) => decl.to_source(),
            Member::Method(decl) => decl.to_source(),
            Member::Constructor(decl) => decl.to_source(),
            Member::AnnotationMethod(_) => Err(UnparseError::unsupported("AnnotationMethod")),
            Member::Type(decl) => decl.to_source(),
        }
    }
}

impl ToSource for MethodDeclaration {
    fn to_source(&self) -> Result<String, UnparseError> {
        if !self.type_parameters.is_empty() {
            return Err(UnparseError::unsupported(
                "MethodDeclaration.type_parameters",
            ));
        }
        if !self.throws.is_empty() {
            return Err(UnparseError::unsupported("MethodDeclaration.throws"));
        }
        let return_type = self
            .return_type
            .as_ref()
            .ok_or_else(|| UnparseError::malformed("MethodDeclaration", "return_type"))?;
        let body = self
            .body
            .as_ref()
            .ok_or_else(|| UnparseError::malformed("MethodDeclaration", "body"))?;

        let mut out = annotation_block(self);
        out.push_str(&modifier_prefix(self));
        out.push_str(&return_type.to_source()?);
        out.push(' ');
        out.push_str(&self.name);
        out.push('(');
        out.push_str(&join_sources(&self.parameters, ", ")?);
        out.push(')');
        out.push('{');
        out.push_str(SEPARATOR);
        out.push_str(&join_sources(body, SEPARATOR)?);
        out.push_str(SEPARATOR);
        out.push('}');
        Ok(out)
    }
}

impl ToSource for FieldDeclaration {
    fn to_source(&self) -> Result<String, UnparseError> {
        let mut out = annotation_block(self);
        out.push_str(&modifier_prefix(self));
        out.push_str(&self.ty.to_source()?);
        out.push(' ');
        out.push_str(&join_sources(&self.declarators, ", ")?);
        out.push(';');
        Ok(out)
    }
}

impl ToSource for ConstructorDeclaration {
    fn to_source(&self) -> Result<String, UnparseError> {
        if !self.type_parameters.is_empty() {
            return Err(UnparseError::unsupported(
                "ConstructorDeclaration.type_parameters",
            ));
        }
        if !self.throws.is_empty() {
            return Err(UnparseError::unsupported("ConstructorDeclaration.throws"));
        }

        let mut out = annotation_block(self);
        out.push_str(&modifier_prefix(self));
        out.push_str(&self.name);
        out.push('(');
        out.push_str(&join_sources(&self.parameters, ", ")?);
        out.push(')');
        out.push_str(" {");
        out.push_str(SEPARATOR);
        out.push_str(&join_sources(&self.body, SEPARATOR)?);
        out.push_str(SEPARATOR);
        out.push('}');
        Ok(out)
    }
}

impl ToSource for FormalParameter {
    fn to_source(&self) -> Result<String, UnparseError> {
        if self.varargs {
            return Err(UnparseError::unsupported("FormalParameter.varargs"));
        }
        if !self.annotations.is_empty() {
            return Err(UnparseError::unsupported("FormalParameter.annotations"));
        }
        Ok(format!(
            "{}{} {}",
            modifier_prefix(self),
            self.ty.to_source()?,
            self.name
        ))
    }
}

impl ToSource for VariableDeclarator {
    fn to_source(&self) -> Result<String, UnparseError> {
        let mut out = with_dimensions(&self.name, &self.dimensions)?;
        if let Some(initializer) = &self.initializer {
            out.push_str(" = ");
            out.push_str(&initializer.to_source()?);
        }
        Ok(out)
    }
}

impl ToSource for VariableInitializer {
    fn to_source(&self) -> Result<String, UnparseError> {
        match self {
            VariableInitializer::Expression(expression) => expression.to_source(),
            VariableInitializer::Array(initializer) => initializer.to_source(),
        }
    }
}

impl ToSource for ArrayInitializer {
    fn to_source(&self) -> Result<String, UnparseError> {
        Ok(format!("{{{}}}", join_sources(&self.initializers, ", ")?))
    }
}

// ============================================================================
// TYPES
// ============================================================================

impl ToSource for Type {
    fn to_source(&self) -> Result<String, UnparseError> {
        match self {
            Type::Basic(basic) => basic.to_source(),
            Type::Reference(reference) => reference.to_source(),
        }
    }
}

impl ToSource for BasicType {
    fn to_source(&self) -> Result<String, UnparseError> {
        with_dimensions(&self.name, &self.dimensions)
    }
}

impl ToSource for ReferenceType {
    fn to_source(&self) -> Result<String, UnparseError> {
        if !self.arguments.is_empty() {
            return Err(UnparseError::unsupported("ReferenceType.arguments"));
        }
        if self.sub_type.is_some() {
            return Err(UnparseError::unsupported("ReferenceType.sub_type"));
        }
        with_dimensions(&self.name, &self.dimensions)
    }
}

// ============================================================================
// STATEMENTS
// ============================================================================

impl ToSource for Statement {
    fn to_source(&self) -> Result<String, UnparseError> {
        match self {
            Statement::Return(statement) => statement.to_source(),
            Statement::Expression(statement) => statement.to_source(),
            Statement::If(_) => Err(UnparseError::unsupported("IfStatement")),
            Statement::While(_) => Err(UnparseError::unsupported("WhileStatement")),
            Statement::Do(_) => Err(UnparseError::unsupported("DoStatement")),
            Statement::For(_) => Err(UnparseError::unsupported("ForStatement")),
            Statement::Assert(_) => Err(UnparseError::unsupported("AssertStatement")),
            Statement::Break(_) => Err(UnparseError::unsupported("BreakStatement")),
            Statement::Continue(_) => Err(UnparseError::unsupported("ContinueStatement")),
            Statement::Throw(_) => Err(UnparseError::unsupported("ThrowStatement")),
            Statement::Synchronized(_) => {
                Err(UnparseError::unsupported("SynchronizedStatement"))
            }
            Statement::Try(_) => Err(UnparseError::unsupported("TryStatement")),
            Statement::Switch(_) => Err(UnparseError::unsupported("SwitchStatement")),
            Statement::Block(_) => Err(UnparseError::unsupported("BlockStatement")),
            Statement::LocalVariable(_) => {
                Err(UnparseError::unsupported("LocalVariableDeclaration"))
            }
        }
    }
}

impl ToSource for ReturnStatement {
    fn to_source(&self) -> Result<String, UnparseError> {
        guard_label(self, "ReturnStatement")?;
        let expression = self
            .expression
            .as_ref()
            .ok_or_else(|| UnparseError::malformed("ReturnStatement", "expression"))?;
        Ok(format!("return {};", expression.to_source()?))
    }
}

impl ToSource for StatementExpression {
    fn to_source(&self) -> Result<String, UnparseError> {
        guard_label(self, "StatementExpression")?;
        Ok(format!("{};", self.expression.to_source()?))
    }
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

impl ToSource for Expression {
    fn to_source(&self) -> Result<String, UnparseError> {
        match self {
            Expression::Assignment(expression) => expression.to_source(),
            Expression::Binary(expression) => expression.to_source(),
            Expression::Primary(primary) => primary.to_source(),
            Expression::Ternary(_) => Err(UnparseError::unsupported("TernaryExpression")),
            Expression::Cast(_) => Err(UnparseError::unsupported("Cast")),
            Expression::MethodReference(_) => Err(UnparseError::unsupported("MethodReference")),
            Expression::Lambda(_) => Err(UnparseError::unsupported("LambdaExpression")),
        }
    }
}

impl ToSource for Assignment {
    fn to_source(&self) -> Result<String, UnparseError> {
        Ok(format!(
            "{} {} {}",
            self.target.to_source()?,
            self.operator,
            self.value.to_source()?
        ))
    }
}

impl ToSource for BinaryOperation {
    fn to_source(&self) -> Result<String, UnparseError> {
        Ok(format!(
            "{} {} {}",
            self.left.to_source()?,
            self.operator,
            self.right.to_source()?
        ))
    }
}

// ============================================================================
// PRIMARIES
// ============================================================================

impl ToSource for Primary {
    fn to_source(&self) -> Result<String, UnparseError> {
        match self {
            Primary::Literal(primary) => primary.to_source(),
            Primary::This(primary) => primary.to_source(),
            Primary::MemberReference(primary) => primary.to_source(),
            Primary::SuperConstructorInvocation(primary) => primary.to_source(),
            Primary::Creator(primary) => primary.to_source(),
            Primary::ArrayCreator(primary) => primary.to_source(),
            Primary::ClassCreator(primary) => primary.to_source(),
            Primary::ExplicitConstructorInvocation(_) => {
                Err(UnparseError::unsupported("ExplicitConstructorInvocation"))
            }
            Primary::MethodInvocation(_) => Err(UnparseError::unsupported("MethodInvocation")),
            Primary::SuperMethodInvocation(_) => {
                Err(UnparseError::unsupported("SuperMethodInvocation"))
            }
            Primary::SuperMemberReference(_) => {
                Err(UnparseError::unsupported("SuperMemberReference"))
            }
            Primary::ArraySelector(_) => Err(UnparseError::unsupported("ArraySelector")),
            Primary::ClassReference(_) => Err(UnparseError::unsupported("ClassReference")),
            Primary::VoidClassReference(_) => {
                Err(UnparseError::unsupported("VoidClassReference"))
            }
            Primary::InnerClassCreator(_) => {
                Err(UnparseError::unsupported("InnerClassCreator"))
            }
        }
    }
}

impl ToSource for Literal {
    fn to_source(&self) -> Result<String, UnparseError> {
        guard_chain(self, "Literal")?;
        guard_qualifier(self, "Literal")?;
        // Stored spelling is reproduced verbatim, never re-escaped.
        Ok(self.value.clone())
    }
}

impl ToSource for This {
    fn to_source(&self) -> Result<String, UnparseError> {
        guard_chain(self, "This")?;
        guard_qualifier(self, "This")?;
        Ok("this".to_string())
    }
}

impl ToSource for MemberReference {
    fn to_source(&self) -> Result<String, UnparseError> {
        guard_chain(self, "MemberReference")?;
        match self.qualifier.as_deref() {
            Some(qualifier) => Ok(format!("{qualifier}.{}", self.member)),
            None => Ok(self.member.clone()),
        }
    }
}

impl ToSource for SuperConstructorInvocation {
    fn to_source(&self) -> Result<String, UnparseError> {
        guard_chain(self, "SuperConstructorInvocation")?;
        guard_qualifier(self, "SuperConstructorInvocation")?;
        if !self.type_arguments.is_empty() {
            return Err(UnparseError::unsupported(
                "SuperConstructorInvocation.type_arguments",
            ));
        }
        Ok(format!(
            "super({})",
            join_sources(&self.arguments, SEPARATOR)?
        ))
    }
}

// ============================================================================
// CREATORS
// ============================================================================

impl ToSource for Creator {
    fn to_source(&self) -> Result<String, UnparseError> {
        guard_chain(self, "Creator")?;
        guard_qualifier(self, "Creator")?;
        Ok(format!("new {}", self.ty.to_source()?))
    }
}

impl ToSource for ArrayCreator {
    fn to_source(&self) -> Result<String, UnparseError> {
        guard_chain(self, "ArrayCreator")?;
        guard_qualifier(self, "ArrayCreator")?;
        let sized = with_dimensions(&self.ty.to_source()?, &self.dimensions)?;
        let initializer = match &self.initializer {
            Some(initializer) => initializer.to_source()?,
            None => String::new(),
        };
        Ok(format!("new {sized}{initializer}"))
    }
}

impl ToSource for ClassCreator {
    fn to_source(&self) -> Result<String, UnparseError> {
        guard_chain(self, "ClassCreator")?;
        guard_qualifier(self, "ClassCreator")?;
        if !self.constructor_type_arguments.is_empty() {
            return Err(UnparseError::unsupported(
                "ClassCreator.constructor_type_arguments",
            ));
        }
        // An absent body renders nothing; an explicitly empty body still
        // renders its brace pair.
        let body = match &self.body {
            Some(members) => format!("{{{}}}", join_sources(members, SEPARATOR)?),
            None => String::new(),
        };
        Ok(format!(
            "new {}({}){body}",
            self.ty.to_source()?,
            join_sources(&self.arguments, ", ")?
        ))
    }
}
