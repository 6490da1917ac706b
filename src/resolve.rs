//! Value resolver: turns a raw attribute value into a typed expression.
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. Sizing hints (`max*`, `min*`, `pref*`): `-Infinity` and `-1.0` map to the
//!    `Control` size sentinels, anything else is a name reference.
//! 2. The `id` attribute is always a string literal.
//! 3. `%key` looks the key up in the resource bundle.
//! 4. `@path` is a classpath resource, normalized against the controller package.
//! 5. `text` is always a string literal.
//! 6. Enumeration constants (see `tables::ENUM_CATEGORIES`).
//! 7. `$name` references a variable.
//! 8. Anything else is emitted as a name reference.

use log::trace;

use crate::java::Expression;
use crate::options::LowerOptions;
use crate::resource::normalize_resource_path;
use crate::tables::{
    enum_type_for, is_size_hint, JAVAFX_CONTROL, USE_COMPUTED_SIZE, USE_PREF_SIZE,
};

/// Attribute carrying the node id.
pub const ID_ATTRIBUTE: &str = "id";
pub const TEXT_ATTRIBUTE: &str = "text";

pub fn resolve(
    name: &str,
    value: &str,
    controller: Option<&str>,
    options: &LowerOptions,
) -> Expression {
    let expr = if is_size_hint(name) {
        match value {
            "-Infinity" => Expression::field(Expression::qualified(JAVAFX_CONTROL), USE_PREF_SIZE),
            "-1.0" => Expression::field(Expression::qualified(JAVAFX_CONTROL), USE_COMPUTED_SIZE),
            _ => Expression::name(value),
        }
    } else if name == ID_ATTRIBUTE {
        Expression::string(value)
    } else if let Some(key) = value.strip_prefix('%') {
        Expression::call(
            Expression::name(options.bundle.as_str()),
            "getString",
            vec![Expression::string(key)],
        )
    } else if value.starts_with('@') {
        Expression::string(normalize_resource_path(controller, value))
    } else if name == TEXT_ATTRIBUTE {
        Expression::string(value)
    } else if let Some(enum_type) = enum_type_for(name, value) {
        Expression::field(Expression::qualified(enum_type), value)
    } else if let Some(variable) = value.strip_prefix('$') {
        Expression::name(variable)
    } else {
        Expression::name(value)
    };
    trace!("resolved {}=\"{}\" to {}", name, value, expr);
    expr
}
