//! Lowering configuration.
//!
//! Every field has a default matching the conventions of the generated
//! controllers, so hosts only spell out what they change:
//!
//! ```json
//! { "methodName": "build", "replaceExisting": false }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LowerOptions {
    /// Name of the generated factory method on the controller.
    pub method_name: String,
    /// Hook called on the controller before the root is returned.
    pub initialize_hook: String,
    /// Variable holding the resource bundle inside the generated method.
    pub bundle: String,
    /// Variable exposing the factory used by `fx:include`.
    pub model_facade: String,
    /// Method of the facade returning the controller factory.
    pub factory_method: String,
    /// Method of the controller factory instantiating a controller class.
    pub factory_call: String,
    /// Exception type declared by the generated method.
    pub throws: String,
    /// Package imported implicitly; imports of it are dropped.
    pub implicit_package: String,
    /// Remove a previously generated parameterless method of the same name
    /// before attaching the new one.
    pub replace_existing: bool,
}

impl Default for LowerOptions {
    fn default() -> Self {
        Self {
            method_name: "create".to_string(),
            initialize_hook: "initialize".to_string(),
            bundle: "bundle".to_string(),
            model_facade: "modelFacade".to_string(),
            factory_method: "factory".to_string(),
            factory_call: "call".to_string(),
            throws: "java.lang.Exception".to_string(),
            implicit_package: "java.lang".to_string(),
            replace_existing: true,
        }
    }
}

impl LowerOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = LowerOptions::from_json(r#"{ "methodName": "build" }"#).unwrap();
        assert_eq!(options.method_name, "build");
        assert_eq!(options.bundle, "bundle");
        assert!(options.replace_existing);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(LowerOptions::from_json("{}").unwrap(), LowerOptions::default());
    }
}
