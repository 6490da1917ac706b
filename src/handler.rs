//! Event handler expressions for `on*="#handler"` attributes.

use crate::java::Expression;

/// Turns a handler name (without the leading `#`) into an expression the
/// generated setter can accept.
pub trait HandlerBuilder {
    fn build(&self, handler: &str) -> Expression;
}

/// Binds the handler to the controller instance: `#onSave` → `this::onSave`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodReferenceHandler;

impl HandlerBuilder for MethodReferenceHandler {
    fn build(&self, handler: &str) -> Expression {
        Expression::MethodReference {
            scope: Box::new(Expression::This),
            name: handler.to_string(),
        }
    }
}

impl<F> HandlerBuilder for F
where
    F: Fn(&str) -> Expression,
{
    fn build(&self, handler: &str) -> Expression {
        self(handler)
    }
}
