//! Input tree for the lowering passes.
//!
//! The tree is produced by the markup reader in `parse` or deserialized from
//! JSON by a host. Elements own their children; there are no parent links.
//! Passes that need ancestor information carry it down the traversal instead.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// DOCUMENTS
// ═══════════════════════════════════════════════════════════════════════════════

/// A batch of documents lowered together. Includes may reference any
/// document of the batch, regardless of order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub fxmls: Vec<Fxml>,
}

impl Project {
    pub fn new(fxmls: Vec<Fxml>) -> Self {
        Self { fxmls }
    }
}

/// One markup document. `name` is the file stem, without the `.fxml` suffix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fxml {
    pub name: String,
    pub root: Option<Element>,
    #[serde(default)]
    pub processing_instructions: Vec<ProcessingInstruction>,
}

impl Fxml {
    pub fn new(name: impl Into<String>, root: Element) -> Self {
        Self {
            name: name.into(),
            root: Some(root),
            processing_instructions: Vec::new(),
        }
    }

    /// Key under which other documents include this one.
    pub fn include_key(&self) -> String {
        format!("{}.fxml", self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ProcessingInstruction {
    Import(ImportProcessing),
    Language(LanguageProcessing),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportProcessing {
    /// Qualified class name, or package name for on-demand imports.
    pub value: String,
    pub import_type: ImportType,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ImportType {
    ImportClass,
    ImportPackage,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageProcessing {
    pub value: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// ELEMENTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Data shared by every element kind.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementData {
    pub name: String,
    #[serde(default)]
    pub fx_id: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    /// Written once by the scan pass.
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl ElementData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// First attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn identifier(&self) -> &str {
        self.identifier.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Element {
    InstanceDeclaration(InstanceDeclarationElement),
    Property(PropertyElement),
    Include(IncludeElement),
    Reference(ElementData),
    Copy(ElementData),
    Define(ElementData),
    Root(ElementData),
    Script(ElementData),
    UnknownType(ElementData),
    UnknownStaticProperty(ElementData),
}

impl Element {
    pub fn data(&self) -> &ElementData {
        match self {
            Element::InstanceDeclaration(e) => &e.data,
            Element::Property(e) => &e.data,
            Element::Include(e) => &e.data,
            Element::Reference(d)
            | Element::Copy(d)
            | Element::Define(d)
            | Element::Root(d)
            | Element::Script(d)
            | Element::UnknownType(d)
            | Element::UnknownStaticProperty(d) => d,
        }
    }

    pub fn data_mut(&mut self) -> &mut ElementData {
        match self {
            Element::InstanceDeclaration(e) => &mut e.data,
            Element::Property(e) => &mut e.data,
            Element::Include(e) => &mut e.data,
            Element::Reference(d)
            | Element::Copy(d)
            | Element::Define(d)
            | Element::Root(d)
            | Element::Script(d)
            | Element::UnknownType(d)
            | Element::UnknownStaticProperty(d) => d,
        }
    }

    pub fn name(&self) -> &str {
        &self.data().name
    }

    pub fn identifier(&self) -> Option<&str> {
        self.data().identifier.as_deref()
    }
}

/// `<Button fx:id="ok" text="OK"/>`: an object the generated code constructs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDeclarationElement {
    #[serde(flatten)]
    pub data: ElementData,
    /// `fx:controller`, only meaningful on a document root.
    #[serde(default)]
    pub controller: Option<String>,
}

impl InstanceDeclarationElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: ElementData::new(name),
            controller: None,
        }
    }
}

/// `<children>…</children>` or `<GridPane.margin>…</GridPane.margin>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyElement {
    #[serde(flatten)]
    pub data: ElementData,
    pub property_type: PropertyType,
}

impl PropertyElement {
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            data: ElementData::new(name),
            property_type,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    InstanceProperty,
    StaticProperty,
}

/// `<fx:include source="Child.fxml"/>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncludeElement {
    #[serde(flatten)]
    pub data: ElementData,
    pub source: String,
}

impl IncludeElement {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            data: ElementData::new("include"),
            source: source.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ATTRIBUTES
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub attribute_type: AttributeType,
}

impl Attribute {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        attribute_type: AttributeType,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            attribute_type,
        }
    }

    pub fn property(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, AttributeType::InstanceProperty)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AttributeType {
    EventHandler,
    InstanceProperty,
    StaticProperty,
}
