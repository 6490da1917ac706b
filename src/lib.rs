//! # FXML Lowering Ground Truth
//!
//! Turns declarative FXML documents into a Java factory method on each
//! document's controller. The generated method builds the same object graph
//! the runtime loader would, without reflection.
//!
//! ## Pipeline
//!
//! 1. **Read**: markup is parsed into the `fxml` tree (`parse`, `discovery`),
//!    or a host hands the tree over as JSON.
//! 2. **Scan**: every document of the batch gets identifiers and registers
//!    itself as an include target (`scan`).
//! 3. **Generate**: each document is lowered into statements (`generate`),
//!    wrapped in a method and attached to the controller (`document`).
//!
//! ## Lowering Invariants
//!
//! 1. **Identifiers**: an element with `fx:id` uses it verbatim; every other
//!    element gets `lowerFirst(seed)` plus the smallest free numeric suffix.
//!    Generated names never collide with an `fx:id` of the same document.
//!
//! 2. **Ordering**: a declaration precedes every use of its identifier.
//!    Attribute side effects follow author order, children follow attributes.
//!
//! 3. **Root Trailer**: the document root ends with
//!    `initialize(null, bundle)` and `return root`.
//!
//! 4. **Value Resolution**: attribute values are resolved by a fixed rule
//!    cascade; the first matching rule wins (see `resolve`).
//!
//! 5. **Includes**: `fx:include` resolves against documents scanned in the same
//!    batch. An unknown source aborts the document (FX-ERR-INCLUDE).
//!
//! 6. **Determinism**: the same batch in the same order yields byte-identical
//!    output.

mod attribute;
mod context;
mod discovery;
mod document;
mod error;
mod fxml;
mod generate;
mod handler;
mod java;
mod model;
mod options;
mod parse;
mod resolve;
mod resource;
mod scan;
mod tables;
mod visitor;

#[cfg(test)]
mod lowering_tests;
#[cfg(test)]
mod scan_tests;

pub use attribute::{lower_attribute, AttributeLowering, AttributeScope};
pub use context::Context;
pub use discovery::{discover_project, find_fxml_files};
pub use document::{lower_fxml, lower_project, FxmlCompiler};
pub use error::{LowerError, Result};
pub use fxml::{
    Attribute, AttributeType, Element, ElementData, Fxml, ImportProcessing, ImportType,
    IncludeElement, InstanceDeclarationElement, LanguageProcessing, ProcessingInstruction,
    Project, PropertyElement, PropertyType,
};
pub use generate::{lower_processing_instruction, Generator, Parent};
pub use handler::{HandlerBuilder, MethodReferenceHandler};
pub use java::{
    ClassType, CompilationUnit, Expression, ImportDeclaration, MethodDeclaration, Modifier,
    Parameter, Statement,
};
pub use model::{Hierarchy, ModelHierarchy, UpdateTarget};
pub use options::LowerOptions;
pub use parse::{classify_attribute, parse_fxml};
pub use resolve::resolve;
pub use resource::normalize_resource_path;
pub use scan::{scan_fxml, scan_project, Scanner};
pub use visitor::FxmlVisitor;
