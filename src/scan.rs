//! Scan pass: identifier assignment and include registration.
//!
//! Runs over every document of a batch before any code is generated, so an
//! `fx:include` may point at a document that comes later in the batch.

use log::debug;

use crate::context::Context;
use crate::fxml::{
    Element, ElementData, Fxml, IncludeElement, InstanceDeclarationElement, Project,
    PropertyElement,
};
use crate::java::{lower_first, upper_first, ClassType};
use crate::visitor::{walk_children, walk_fxml, walk_project, FxmlVisitor};

pub struct Scanner<'a> {
    ctx: &'a mut Context,
    /// Identifiers of the enclosing instance declarations, innermost last.
    declarations: Vec<String>,
}

impl<'a> Scanner<'a> {
    pub fn new(ctx: &'a mut Context) -> Self {
        Self {
            ctx,
            declarations: Vec::new(),
        }
    }

    fn declaration_identifier(&mut self, data: &mut ElementData) -> String {
        if let Some(existing) = &data.identifier {
            return existing.clone();
        }
        let identifier = match (&data.fx_id, &data.id) {
            (Some(fx_id), _) => fx_id.clone(),
            (None, Some(id)) => self.ctx.fresh_identifier(id),
            (None, None) => self.ctx.fresh_identifier(&data.name),
        };
        data.identifier = Some(identifier.clone());
        identifier
    }
}

impl FxmlVisitor for Scanner<'_> {
    fn visit_fxml(&mut self, fxml: &mut Fxml) {
        self.ctx.reset();
        self.declarations.clear();
        if let Some(root) = &fxml.root {
            reserve_fx_ids(self.ctx, root);
        }

        if let Some(Element::InstanceDeclaration(root)) = &fxml.root {
            let key = fxml.include_key();
            if let Some(controller) = &root.controller {
                self.ctx.register_controller(key.clone(), controller.clone());
            }
            self.ctx
                .register_factory(key.clone(), ClassType::new(root.data.name.clone()));
            debug!(
                "registered {} (controller {:?}, type {})",
                key, root.controller, root.data.name
            );
        }

        walk_fxml(self, fxml);
    }

    fn visit_instance_declaration(&mut self, element: &mut InstanceDeclarationElement) {
        let identifier = self.declaration_identifier(&mut element.data);
        self.declarations.push(identifier);
        walk_children(self, &mut element.data.elements);
        self.declarations.pop();
    }

    fn visit_include(&mut self, element: &mut IncludeElement) {
        self.declaration_identifier(&mut element.data);
        walk_children(self, &mut element.data.elements);
    }

    fn visit_property(&mut self, element: &mut PropertyElement) {
        if element.data.identifier.is_none() {
            let owner = self
                .declarations
                .last()
                .map(|id| lower_first(id))
                .unwrap_or_default();
            let seed = format!("{}{}", owner, upper_first(&element.data.name));
            element.data.identifier = Some(self.ctx.fresh_identifier(&seed));
        }
        walk_children(self, &mut element.data.elements);
    }
}

/// Explicit `fx:id`s are authoritative; generated names must never shadow them.
fn reserve_fx_ids(ctx: &mut Context, element: &Element) {
    let data = element.data();
    if let Some(fx_id) = &data.fx_id {
        ctx.reserve(fx_id);
    }
    for child in &data.elements {
        reserve_fx_ids(ctx, child);
    }
}

pub fn scan_project(project: &mut Project, ctx: &mut Context) {
    let mut scanner = Scanner::new(ctx);
    walk_project(&mut scanner, project);
}

pub fn scan_fxml(fxml: &mut Fxml, ctx: &mut Context) {
    Scanner::new(ctx).visit_fxml(fxml);
}
