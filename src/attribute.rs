//! Attribute lowering.
//!
//! Most attributes become a setter call on the owning element. Two names are
//! special: `styleClass` appends to the style class list, and `url` yields a
//! bare stream expression that the owning element consumes itself (an `Image`
//! passes it to its constructor).

use crate::fxml::{Attribute, AttributeType};
use crate::handler::HandlerBuilder;
use crate::java::{setter_name, Expression, Statement};
use crate::options::LowerOptions;
use crate::resolve::resolve;

pub const STYLE_CLASS: &str = "styleClass";
pub const URL: &str = "url";

/// Result of lowering one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeLowering {
    Statement(Statement),
    Expression(Expression),
}

impl AttributeLowering {
    /// Statement form. A bare expression is wrapped in an expression statement.
    pub fn into_statement(self) -> Statement {
        match self {
            AttributeLowering::Statement(stmt) => stmt,
            AttributeLowering::Expression(expr) => Statement::expr(expr),
        }
    }
}

/// Everything attribute lowering needs besides the attribute itself.
pub struct AttributeScope<'a> {
    pub parent_identifier: &'a str,
    pub controller: Option<&'a str>,
    pub options: &'a LowerOptions,
    pub handler: &'a dyn HandlerBuilder,
}

pub fn lower_attribute(attribute: &Attribute, scope: &AttributeScope) -> Option<AttributeLowering> {
    let parent = Expression::name(scope.parent_identifier);
    let name = attribute.name.as_str();
    let value = attribute.value.as_str();

    if name == STYLE_CLASS {
        let style_class = Expression::call(parent, "getStyleClass", vec![]);
        return Some(AttributeLowering::Statement(Statement::expr(
            Expression::call(style_class, "add", vec![Expression::string(value)]),
        )));
    }

    if name == URL {
        let resource = Expression::call(
            Expression::call_unscoped("getClass", vec![]),
            "getResource",
            vec![resolve(name, value, scope.controller, scope.options)],
        );
        return Some(AttributeLowering::Expression(Expression::call(
            resource,
            "openStream",
            vec![],
        )));
    }

    let call = match attribute.attribute_type {
        AttributeType::EventHandler => {
            // Drop the `#` marker.
            let mut chars = value.chars();
            chars.next();
            let handler = chars.as_str();
            Expression::call(
                parent,
                setter_name(name),
                vec![scope.handler.build(handler)],
            )
        }
        AttributeType::InstanceProperty => Expression::call(
            parent,
            setter_name(name),
            vec![resolve(name, value, scope.controller, scope.options)],
        ),
        AttributeType::StaticProperty => static_setter(
            name,
            parent,
            resolve(name, value, scope.controller, scope.options),
        ),
    };
    Some(AttributeLowering::Statement(Statement::expr(call)))
}

/// `GridPane.columnIndex` on `cell` → `GridPane.setColumnIndex(cell, value)`.
pub fn static_setter(dotted_name: &str, target: Expression, value: Expression) -> Expression {
    let (qualifier, local) = match dotted_name.rfind('.') {
        Some(idx) => (&dotted_name[..idx], &dotted_name[idx + 1..]),
        None => ("", dotted_name),
    };
    let scope = if qualifier.is_empty() {
        None
    } else {
        Some(Box::new(Expression::qualified(qualifier)))
    };
    Expression::MethodCall {
        scope,
        name: setter_name(local),
        args: vec![target, value],
    }
}
