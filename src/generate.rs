//! Generate pass: lowers scanned elements into ordered Java statements.
//!
//! Each element kind has exactly one lowering rule. Statement order is
//! significant: a declaration precedes every use of its identifier, attribute
//! side effects follow author order, and the document root ends with the
//! initialization hook and its `return`.

use log::trace;

use crate::attribute::{lower_attribute, static_setter, AttributeLowering, AttributeScope};
use crate::context::Context;
use crate::error::{LowerError, Result};
use crate::fxml::{
    Attribute, Element, ElementData, ImportType, IncludeElement, InstanceDeclarationElement,
    ProcessingInstruction, PropertyElement, PropertyType,
};
use crate::handler::HandlerBuilder;
use crate::java::{setter_name, ClassType, Expression, ImportDeclaration, Statement};
use crate::options::LowerOptions;
use crate::tables::list_element_type;

const INSETS: &str = "Insets";
const IMAGE: &str = "Image";
/// Constructor parameter order of `Insets(top, right, bottom, left)`.
const INSETS_SIDES: [&str; 4] = ["top", "right", "bottom", "left"];
const INSETS_DEFAULT: &str = "0.0";

/// What contains the element being lowered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent<'a> {
    /// The element is the document root.
    Document,
    /// The element is nested; carries the identifier of its parent element.
    Element(&'a str),
}

impl<'a> Parent<'a> {
    fn identifier(self) -> &'a str {
        match self {
            Parent::Document => "",
            Parent::Element(identifier) => identifier,
        }
    }
}

pub struct Generator<'a> {
    ctx: &'a Context,
    options: &'a LowerOptions,
    handler: &'a dyn HandlerBuilder,
}

impl<'a> Generator<'a> {
    pub fn new(ctx: &'a Context, options: &'a LowerOptions, handler: &'a dyn HandlerBuilder) -> Self {
        Self {
            ctx,
            options,
            handler,
        }
    }

    /// Lowers one element. `None` means the element contributes no code.
    pub fn lower_element(&self, element: &Element, parent: Parent) -> Result<Option<Vec<Statement>>> {
        match element {
            Element::InstanceDeclaration(e) => self.lower_instance_declaration(e, parent).map(Some),
            Element::Include(e) => self.lower_include(e).map(Some),
            Element::Property(e) => self.lower_property(e, parent).map(Some),
            Element::Reference(d)
            | Element::Copy(d)
            | Element::Define(d)
            | Element::Root(d)
            | Element::Script(d)
            | Element::UnknownType(d)
            | Element::UnknownStaticProperty(d) => {
                self.visit_pass_through(d)?;
                Ok(None)
            }
        }
    }

    fn attribute_scope<'s>(&'s self, parent_identifier: &'s str) -> AttributeScope<'s> {
        AttributeScope {
            parent_identifier,
            controller: self.ctx.current_controller(),
            options: self.options,
            handler: self.handler,
        }
    }

    fn lower_attribute(&self, attribute: &Attribute, owner: &str) -> Option<AttributeLowering> {
        lower_attribute(attribute, &self.attribute_scope(owner))
    }

    pub fn lower_instance_declaration(
        &self,
        element: &InstanceDeclarationElement,
        parent: Parent,
    ) -> Result<Vec<Statement>> {
        let data = &element.data;
        let identifier = required_identifier(data)?;
        let ty = ClassType::new(data.name.as_str());

        let mut arguments = Vec::new();
        let mut attribute_statements = Vec::new();
        if data.name == INSETS {
            arguments = insets_arguments(&data.attributes);
        } else {
            for attribute in &data.attributes {
                match self.lower_attribute(attribute, identifier) {
                    Some(AttributeLowering::Expression(expr)) if data.name == IMAGE => {
                        arguments.push(expr)
                    }
                    Some(lowered) => attribute_statements.push(lowered.into_statement()),
                    None => {}
                }
            }
        }

        let init = Expression::new_object(ty.clone(), arguments);
        let mut statements = Vec::with_capacity(attribute_statements.len() + 1);
        if data.fx_id.as_deref() == Some(identifier) {
            statements.push(Statement::expr(Expression::assign(
                Expression::name(identifier),
                init,
            )));
        } else {
            statements.push(Statement::declare(ty, identifier, init));
        }
        statements.extend(attribute_statements);

        for child in &data.elements {
            if let Some(list) = self.lower_element(child, Parent::Element(identifier))? {
                statements.extend(list);
            }
        }

        if parent == Parent::Document {
            statements.push(Statement::expr(Expression::call_unscoped(
                self.options.initialize_hook.as_str(),
                vec![
                    Expression::NullLiteral,
                    Expression::name(self.options.bundle.as_str()),
                ],
            )));
            statements.push(Statement::Return {
                expr: Expression::name(identifier),
            });
        }

        trace!("lowered <{}> {} into {} statement(s)", data.name, identifier, statements.len());
        Ok(statements)
    }

    pub fn lower_include(&self, element: &IncludeElement) -> Result<Vec<Statement>> {
        let key = element.source.as_str();
        let unresolved = || LowerError::UnresolvedInclude {
            key: key.to_string(),
        };
        let controller = ClassType::new(self.ctx.controller(key).ok_or_else(unresolved)?);
        let factory = self.ctx.factory(key).ok_or_else(unresolved)?.clone();

        let facade = Expression::call(
            Expression::name(self.options.model_facade.as_str()),
            self.options.factory_method.as_str(),
            vec![],
        );
        let instance = Expression::call(
            facade,
            self.options.factory_call.as_str(),
            vec![Expression::Class {
                ty: controller.clone(),
            }],
        );
        let create = Expression::call(
            Expression::enclosed(Expression::cast(controller, instance)),
            self.options.method_name.as_str(),
            vec![],
        );

        let identifier = required_identifier(&element.data)?;
        let mut statements = vec![Statement::declare(factory, identifier, create)];
        for attribute in &element.data.attributes {
            if let Some(lowered) = self.lower_attribute(attribute, identifier) {
                statements.push(lowered.into_statement());
            }
        }
        Ok(statements)
    }

    pub fn lower_property(&self, element: &PropertyElement, parent: Parent) -> Result<Vec<Statement>> {
        let data = &element.data;
        let owner = parent.identifier();
        let identifier = required_identifier(data)?;
        let list_element = list_element_type(&data.name);

        let mut statements = Vec::new();
        for child in &data.elements {
            let list = match self.lower_element(child, Parent::Element(identifier))? {
                Some(list) => list,
                None => continue,
            };
            statements.extend(list);

            let value = Expression::name(required_identifier(child.data())?);
            let call = if let Some(element_type) = list_element {
                trace!("{}.{} <- {} ({})", owner, data.name, child.name(), element_type);
                Expression::call(
                    Expression::getter(Expression::name(owner), &data.name),
                    "add",
                    vec![value],
                )
            } else if element.property_type == PropertyType::StaticProperty {
                static_setter(&data.name, Expression::name(owner), value)
            } else {
                Expression::call(Expression::name(owner), setter_name(&data.name), vec![value])
            };
            statements.push(Statement::expr(call));
        }
        Ok(statements)
    }

    /// Element kinds without code of their own still visit their attributes
    /// and children; only errors escape.
    fn visit_pass_through(&self, data: &ElementData) -> Result<()> {
        let identifier = data.identifier();
        let discarded = data
            .attributes
            .iter()
            .filter_map(|attribute| self.lower_attribute(attribute, identifier))
            .count();
        trace!("<{}> contributes no code, {} attribute(s) discarded", data.name, discarded);
        for child in &data.elements {
            self.lower_element(child, Parent::Element(identifier))?;
        }
        Ok(())
    }
}

/// Identifier written by the scan pass. Declarations, includes and
/// properties cannot be lowered without one.
fn required_identifier(data: &ElementData) -> Result<&str> {
    match data.identifier.as_deref() {
        Some(identifier) if !identifier.is_empty() => Ok(identifier),
        _ => Err(LowerError::MissingIdentifier {
            element: data.name.clone(),
        }),
    }
}

/// `Insets(top, right, bottom, left)`; a missing side defaults to `0.0`.
fn insets_arguments(attributes: &[Attribute]) -> Vec<Expression> {
    INSETS_SIDES
        .iter()
        .map(|side| {
            let value = attributes
                .iter()
                .find(|a| a.name == *side)
                .map(|a| a.value.as_str())
                .unwrap_or(INSETS_DEFAULT);
            Expression::double(value)
        })
        .collect()
}

pub fn lower_processing_instruction(
    instruction: &ProcessingInstruction,
    options: &LowerOptions,
) -> Option<ImportDeclaration> {
    match instruction {
        ProcessingInstruction::Import(import) if import.value != options.implicit_package => {
            Some(ImportDeclaration {
                name: import.value.clone(),
                is_static: false,
                is_asterisk: import.import_type == ImportType::ImportPackage,
            })
        }
        ProcessingInstruction::Import(_) | ProcessingInstruction::Language(_) => None,
    }
}
