//! Java code model emitted by the lowering passes.
//!
//! Nodes are plain owned values built bottom-up; a construction expression is
//! only created once its argument list is complete. Every node renders itself
//! as Java source through `Display`.

use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// TYPES
// ═══════════════════════════════════════════════════════════════════════════════

/// A class or interface type, simple (`Button`) or qualified
/// (`javafx.scene.control.Button`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClassType(pub String);

impl ClassType {
    pub fn new(name: impl Into<String>) -> Self {
        ClassType(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// EXPRESSIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Expression {
    Name {
        name: String,
    },
    QualifiedName {
        qualifier: Box<Expression>,
        name: String,
    },
    FieldAccess {
        scope: Box<Expression>,
        field: String,
    },
    MethodCall {
        scope: Option<Box<Expression>>,
        name: String,
        args: Vec<Expression>,
    },
    MethodReference {
        scope: Box<Expression>,
        name: String,
    },
    StringLiteral {
        value: String,
    },
    DoubleLiteral {
        value: String,
    },
    NullLiteral,
    This,
    Cast {
        ty: ClassType,
        expr: Box<Expression>,
    },
    Enclosed {
        inner: Box<Expression>,
    },
    ObjectCreation {
        ty: ClassType,
        args: Vec<Expression>,
    },
    Class {
        ty: ClassType,
    },
    Assign {
        target: Box<Expression>,
        value: Box<Expression>,
    },
}

impl Expression {
    /// Bare name reference, kept as written.
    pub fn name(name: impl Into<String>) -> Self {
        Expression::Name { name: name.into() }
    }

    /// Parses a dotted name into a qualified name chain: `a.b.C` becomes
    /// `QualifiedName(QualifiedName(Name(a), b), C)`.
    pub fn qualified(dotted: &str) -> Self {
        let mut segments = dotted.split('.');
        let first = segments.next().unwrap_or_default();
        segments.fold(Expression::name(first), |qualifier, segment| {
            Expression::QualifiedName {
                qualifier: Box::new(qualifier),
                name: segment.to_string(),
            }
        })
    }

    pub fn field(scope: Expression, field: impl Into<String>) -> Self {
        Expression::FieldAccess {
            scope: Box::new(scope),
            field: field.into(),
        }
    }

    pub fn call(scope: Expression, name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::MethodCall {
            scope: Some(Box::new(scope)),
            name: name.into(),
            args,
        }
    }

    /// Call without an explicit receiver, e.g. `initialize(null, bundle)`.
    pub fn call_unscoped(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::MethodCall {
            scope: None,
            name: name.into(),
            args,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLiteral {
            value: value.into(),
        }
    }

    pub fn double(value: impl Into<String>) -> Self {
        Expression::DoubleLiteral {
            value: value.into(),
        }
    }

    pub fn cast(ty: ClassType, expr: Expression) -> Self {
        Expression::Cast {
            ty,
            expr: Box::new(expr),
        }
    }

    pub fn enclosed(inner: Expression) -> Self {
        Expression::Enclosed {
            inner: Box::new(inner),
        }
    }

    pub fn new_object(ty: ClassType, args: Vec<Expression>) -> Self {
        Expression::ObjectCreation { ty, args }
    }

    pub fn assign(target: Expression, value: Expression) -> Self {
        Expression::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    /// `<scope>.get<Property>()`
    pub fn getter(scope: Expression, property: &str) -> Self {
        Expression::call(scope, getter_name(property), vec![])
    }
}

pub fn getter_name(property: &str) -> String {
    format!("get{}", upper_first(property))
}

pub fn setter_name(property: &str) -> String {
    format!("set{}", upper_first(property))
}

pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expression]) -> fmt::Result {
    f.write_str("(")?;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", arg)?;
    }
    f.write_str(")")
}

fn escape_java_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Name { name } => f.write_str(name),
            Expression::QualifiedName { qualifier, name } => write!(f, "{}.{}", qualifier, name),
            Expression::FieldAccess { scope, field } => write!(f, "{}.{}", scope, field),
            Expression::MethodCall { scope, name, args } => {
                if let Some(scope) = scope {
                    write!(f, "{}.", scope)?;
                }
                f.write_str(name)?;
                write_args(f, args)
            }
            Expression::MethodReference { scope, name } => write!(f, "{}::{}", scope, name),
            Expression::StringLiteral { value } => {
                write!(f, "\"{}\"", escape_java_string(value))
            }
            Expression::DoubleLiteral { value } => f.write_str(value),
            Expression::NullLiteral => f.write_str("null"),
            Expression::This => f.write_str("this"),
            Expression::Cast { ty, expr } => write!(f, "({}) {}", ty, expr),
            Expression::Enclosed { inner } => write!(f, "({})", inner),
            Expression::ObjectCreation { ty, args } => {
                write!(f, "new {}", ty)?;
                write_args(f, args)
            }
            Expression::Class { ty } => write!(f, "{}.class", ty),
            Expression::Assign { target, value } => write!(f, "{} = {}", target, value),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// STATEMENTS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Statement {
    Expression {
        expr: Expression,
    },
    VariableDeclaration {
        ty: ClassType,
        name: String,
        init: Expression,
    },
    Return {
        expr: Expression,
    },
}

impl Statement {
    pub fn expr(expr: Expression) -> Self {
        Statement::Expression { expr }
    }

    pub fn declare(ty: ClassType, name: impl Into<String>, init: Expression) -> Self {
        Statement::VariableDeclaration {
            ty,
            name: name.into(),
            init,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Expression { expr } => write!(f, "{};", expr),
            Statement::VariableDeclaration { ty, name, init } => {
                write!(f, "{} {} = {};", ty, name, init)
            }
            Statement::Return { expr } => write!(f, "return {};", expr),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// DECLARATIONS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportDeclaration {
    pub name: String,
    pub is_static: bool,
    pub is_asterisk: bool,
}

impl fmt::Display for ImportDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("import ")?;
        if self.is_static {
            f.write_str("static ")?;
        }
        f.write_str(&self.name)?;
        if self.is_asterisk {
            f.write_str(".*")?;
        }
        f.write_str(";")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub ty: ClassType,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MethodDeclaration {
    pub modifier: Modifier,
    pub return_type: ClassType,
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub throws: Vec<ClassType>,
    pub body: Vec<Statement>,
}

impl fmt::Display for MethodDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}(", self.modifier, self.return_type, self.name)?;
        for (i, p) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", p.ty, p.name)?;
        }
        f.write_str(")")?;
        if !self.throws.is_empty() {
            let throws: Vec<&str> = self.throws.iter().map(ClassType::name).collect();
            write!(f, " throws {}", throws.join(", "))?;
        }
        f.write_str(" {\n")?;
        for stmt in &self.body {
            writeln!(f, "    {}", stmt)?;
        }
        f.write_str("}")
    }
}

/// The controller's source file. Only the parts the lowering touches are
/// modelled: package, imports and the members of the primary type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompilationUnit {
    pub package: Option<String>,
    /// `None` until the first import is added.
    pub imports: Option<Vec<ImportDeclaration>>,
    pub type_name: String,
    #[serde(default)]
    pub members: Vec<MethodDeclaration>,
}

impl CompilationUnit {
    /// Builds an empty unit for a qualified type name, splitting off the package.
    pub fn for_type(qualified: &str) -> Self {
        let (package, type_name) = match qualified.rfind('.') {
            Some(idx) => (
                Some(qualified[..idx].to_string()),
                qualified[idx + 1..].to_string(),
            ),
            None => (None, qualified.to_string()),
        };
        Self {
            package,
            imports: None,
            type_name,
            members: Vec::new(),
        }
    }

    pub fn qualified_name(&self) -> String {
        match &self.package {
            Some(package) => format!("{}.{}", package, self.type_name),
            None => self.type_name.clone(),
        }
    }

    pub fn method(&self, name: &str) -> Option<&MethodDeclaration> {
        self.members.iter().find(|m| m.name == name)
    }
}

impl fmt::Display for CompilationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(package) = &self.package {
            writeln!(f, "package {};", package)?;
            writeln!(f)?;
        }
        if let Some(imports) = self.imports.as_ref().filter(|i| !i.is_empty()) {
            for import in imports {
                writeln!(f, "{}", import)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "public class {} {{", self.type_name)?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for line in member.to_string().lines() {
                writeln!(f, "    {}", line)?;
            }
        }
        f.write_str("}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_chain() {
        let expr = Expression::qualified("javafx.scene.control.Control");
        assert_eq!(expr.to_string(), "javafx.scene.control.Control");
        match expr {
            Expression::QualifiedName { name, .. } => assert_eq!(name, "Control"),
            other => panic!("expected qualified name, got {:?}", other),
        }
        assert_eq!(Expression::qualified("bundle"), Expression::name("bundle"));
    }

    #[test]
    fn test_render_include_shape() {
        let controller = ClassType::new("com.example.Child");
        let call = Expression::call(
            Expression::call(Expression::name("modelFacade"), "factory", vec![]),
            "call",
            vec![Expression::Class {
                ty: controller.clone(),
            }],
        );
        let create = Expression::call(
            Expression::enclosed(Expression::cast(controller, call)),
            "create",
            vec![],
        );
        let stmt = Statement::declare(ClassType::new("VBox"), "child", create);
        assert_eq!(
            stmt.to_string(),
            "VBox child = ((com.example.Child) modelFacade.factory().call(com.example.Child.class)).create();"
        );
    }

    #[test]
    fn test_string_literal_escaping() {
        let expr = Expression::string("say \"hi\"\n");
        assert_eq!(expr.to_string(), "\"say \\\"hi\\\"\\n\"");
    }

    #[test]
    fn test_compilation_unit_for_type() {
        let cu = CompilationUnit::for_type("com.example.Main");
        assert_eq!(cu.package.as_deref(), Some("com.example"));
        assert_eq!(cu.type_name, "Main");
        assert_eq!(cu.qualified_name(), "com.example.Main");
        assert!(cu.imports.is_none());
    }
}
