//! Compilation units the generated code is attached to.
//!
//! The lowering never creates controller sources; it asks the hierarchy for the
//! unit of the controller named by `fx:controller` and adds to it.

use log::debug;
use std::collections::HashMap;

use crate::java::{CompilationUnit, ImportDeclaration, MethodDeclaration};

/// A compilation unit that accepts generated members and imports.
pub trait UpdateTarget {
    fn add_member(&mut self, method: MethodDeclaration);

    /// Import list of the unit, created empty when the unit has none.
    fn imports_mut(&mut self) -> &mut Vec<ImportDeclaration>;

    /// Removes parameterless methods whose name is in `names`.
    fn clean_methods(&mut self, names: &[&str]);
}

/// Lookup of update targets by qualified controller type name.
pub trait ModelHierarchy {
    type Target: UpdateTarget;

    fn update_target(&mut self, controller: &str) -> Option<&mut Self::Target>;
}

impl UpdateTarget for CompilationUnit {
    fn add_member(&mut self, method: MethodDeclaration) {
        self.members.push(method);
    }

    fn imports_mut(&mut self) -> &mut Vec<ImportDeclaration> {
        self.imports.get_or_insert_with(Vec::new)
    }

    fn clean_methods(&mut self, names: &[&str]) {
        let before = self.members.len();
        self.members
            .retain(|m| !(names.contains(&m.name.as_str()) && m.parameters.is_empty()));
        let removed = before - self.members.len();
        if removed > 0 {
            debug!("removed {} stale method(s) from {}", removed, self.type_name);
        }
    }
}

/// In-memory hierarchy keyed by qualified type name.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    units: HashMap<String, CompilationUnit>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, unit: CompilationUnit) {
        self.units.insert(unit.qualified_name(), unit);
    }

    /// Registers an empty unit for `qualified` and returns it.
    pub fn declare(&mut self, qualified: &str) -> &mut CompilationUnit {
        self.units
            .entry(qualified.to_string())
            .or_insert_with(|| CompilationUnit::for_type(qualified))
    }

    pub fn get(&self, qualified: &str) -> Option<&CompilationUnit> {
        self.units.get(qualified)
    }

    pub fn units(&self) -> impl Iterator<Item = &CompilationUnit> {
        self.units.values()
    }
}

impl ModelHierarchy for Hierarchy {
    type Target = CompilationUnit;

    fn update_target(&mut self, controller: &str) -> Option<&mut CompilationUnit> {
        self.units.get_mut(controller)
    }
}
