//! Naming context shared by the scan and generate passes.
//!
//! Holds the per-document identifier set and the batch-wide include registries.
//! `reset` only clears identifiers; registries survive so that includes can be
//! resolved against documents scanned earlier in the batch.

use std::collections::{HashMap, HashSet};

use crate::java::{lower_first, ClassType};

#[derive(Debug, Clone, Default)]
pub struct Context {
    names: HashSet<String>,
    controllers: HashMap<String, String>,
    factories: HashMap<String, ClassType>,
    current_controller: Option<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an identifier derived from `seed` that has not been handed out
    /// since the last `reset`. The seed is read as a possibly-qualified name:
    /// only its last segment is kept, with the first letter lower-cased.
    /// Collisions get the smallest free numeric suffix starting at 1.
    pub fn fresh_identifier(&mut self, seed: &str) -> String {
        let local = seed.rsplit('.').next().unwrap_or(seed);
        let base = lower_first(local);
        let mut candidate = base.clone();
        let mut i = 1;
        while self.names.contains(&candidate) {
            candidate = format!("{}{}", base, i);
            i += 1;
        }
        self.names.insert(candidate.clone());
        candidate
    }

    /// Marks a name as taken without generating it.
    pub fn reserve(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn reset(&mut self) {
        self.names.clear();
    }

    pub fn register_controller(&mut self, key: impl Into<String>, controller: impl Into<String>) {
        self.controllers.insert(key.into(), controller.into());
    }

    pub fn controller(&self, key: &str) -> Option<&str> {
        self.controllers.get(key).map(String::as_str)
    }

    pub fn register_factory(&mut self, key: impl Into<String>, factory: ClassType) {
        self.factories.insert(key.into(), factory);
    }

    pub fn factory(&self, key: &str) -> Option<&ClassType> {
        self.factories.get(key)
    }

    pub fn current_controller(&self) -> Option<&str> {
        self.current_controller.as_deref()
    }

    pub fn set_current_controller(&mut self, controller: Option<String>) {
        self.current_controller = controller;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_identifier_suffixes_in_call_order() {
        let mut ctx = Context::new();
        let ids: Vec<String> = (0..4).map(|_| ctx.fresh_identifier("Button")).collect();
        assert_eq!(ids, vec!["button", "button1", "button2", "button3"]);
    }

    #[test]
    fn test_fresh_identifier_uses_last_segment() {
        let mut ctx = Context::new();
        assert_eq!(
            ctx.fresh_identifier("javafx.scene.control.Label"),
            "label"
        );
        assert_eq!(ctx.fresh_identifier("Label"), "label1");
    }

    #[test]
    fn test_suffix_skips_taken_names() {
        let mut ctx = Context::new();
        assert_eq!(ctx.fresh_identifier("box1"), "box1");
        assert_eq!(ctx.fresh_identifier("box"), "box");
        // "box1" is already handed out, so the next collision lands on "box2".
        assert_eq!(ctx.fresh_identifier("box"), "box2");
    }

    #[test]
    fn test_reset_keeps_registries() {
        let mut ctx = Context::new();
        ctx.fresh_identifier("pane");
        ctx.register_controller("Child.fxml", "com.example.ChildController");
        ctx.register_factory("Child.fxml", ClassType::new("VBox"));
        ctx.reset();

        assert_eq!(ctx.fresh_identifier("pane"), "pane");
        assert_eq!(
            ctx.controller("Child.fxml"),
            Some("com.example.ChildController")
        );
        assert_eq!(ctx.factory("Child.fxml"), Some(&ClassType::new("VBox")));
        assert_eq!(ctx.controller("Other.fxml"), None);
    }
}
