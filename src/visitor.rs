use crate::fxml::{
    Element, ElementData, Fxml, IncludeElement, InstanceDeclarationElement, Project,
    PropertyElement,
};

/// The FxmlVisitor trait defines the single traversal mechanism for FXML trees.
///
/// Rules:
/// 1. Traversal is pre-order; children are visited in document order.
/// 2. Implementers override `visit_*` methods to add behavior.
/// 3. Implementers MUST call the matching `walk_*` function to continue the
///    traversal unless pruning is intended.
pub trait FxmlVisitor {
    fn visit_project(&mut self, project: &mut Project) {
        walk_project(self, project);
    }

    fn visit_fxml(&mut self, fxml: &mut Fxml) {
        walk_fxml(self, fxml);
    }

    fn visit_element(&mut self, element: &mut Element) {
        walk_element(self, element);
    }

    fn visit_instance_declaration(&mut self, element: &mut InstanceDeclarationElement) {
        walk_children(self, &mut element.data.elements);
    }

    fn visit_include(&mut self, element: &mut IncludeElement) {
        walk_children(self, &mut element.data.elements);
    }

    fn visit_property(&mut self, element: &mut PropertyElement) {
        walk_children(self, &mut element.data.elements);
    }

    /// Reference, copy, define, root, script and unknown elements.
    fn visit_other(&mut self, data: &mut ElementData) {
        walk_children(self, &mut data.elements);
    }
}

pub fn walk_project<V: FxmlVisitor + ?Sized>(visitor: &mut V, project: &mut Project) {
    for fxml in &mut project.fxmls {
        visitor.visit_fxml(fxml);
    }
}

pub fn walk_fxml<V: FxmlVisitor + ?Sized>(visitor: &mut V, fxml: &mut Fxml) {
    if let Some(root) = fxml.root.as_mut() {
        visitor.visit_element(root);
    }
}

pub fn walk_element<V: FxmlVisitor + ?Sized>(visitor: &mut V, element: &mut Element) {
    match element {
        Element::InstanceDeclaration(e) => visitor.visit_instance_declaration(e),
        Element::Include(e) => visitor.visit_include(e),
        Element::Property(e) => visitor.visit_property(e),
        Element::Reference(d)
        | Element::Copy(d)
        | Element::Define(d)
        | Element::Root(d)
        | Element::Script(d)
        | Element::UnknownType(d)
        | Element::UnknownStaticProperty(d) => visitor.visit_other(d),
    }
}

pub fn walk_children<V: FxmlVisitor + ?Sized>(visitor: &mut V, children: &mut [Element]) {
    for child in children {
        visitor.visit_element(child);
    }
}
