//! # Document Driver
//!
//! Lowers whole documents and attaches the result to the controller.
//!
//! ## Key Invariants
//!
//! 1. **Root**: the document root is an instance declaration carrying
//!    `fx:controller`. Anything else aborts the document.
//! 2. **Scan First**: every document of a batch is scanned before the first
//!    one is generated, so includes resolve regardless of batch order.
//! 3. **Single Method**: each document yields exactly one public factory
//!    method on its controller, returning the root type.
//! 4. **Imports**: `<?import?>` instructions are copied to the controller's
//!    compilation unit, except for the implicitly imported package and
//!    imports the unit already has.
//! 5. **Scanned Input**: every declaration, include and property carries an
//!    identifier before generation; a tree that was never scanned is
//!    rejected (FX-ERR-IDENTIFIER).

use log::{debug, info};

use crate::context::Context;
use crate::error::{LowerError, Result};
use crate::fxml::{Element, Fxml, Project};
use crate::generate::{lower_processing_instruction, Generator, Parent};
use crate::handler::{HandlerBuilder, MethodReferenceHandler};
use crate::java::{ClassType, MethodDeclaration, Modifier};
use crate::model::{ModelHierarchy, UpdateTarget};
use crate::options::LowerOptions;
use crate::parse::parse_fxml;
use crate::scan::{scan_fxml, scan_project};

/// Lowers one scanned document and adds the generated method to the
/// compilation unit of its controller.
///
/// The active controller of `ctx` is set for the duration of the call and
/// cleared afterwards, on success and on failure.
pub fn lower_fxml<H: ModelHierarchy>(
    fxml: &Fxml,
    ctx: &mut Context,
    hierarchy: &mut H,
    options: &LowerOptions,
    handler: &dyn HandlerBuilder,
) -> Result<MethodDeclaration> {
    ctx.reset();
    let root = match &fxml.root {
        Some(Element::InstanceDeclaration(root)) => root,
        _ => {
            return Err(LowerError::MissingRoot {
                document: fxml.name.clone(),
            })
        }
    };
    let controller = root
        .controller
        .clone()
        .ok_or_else(|| LowerError::MissingController {
            document: fxml.name.clone(),
        })?;

    debug!("lowering {} into {}", fxml.name, controller);
    ctx.set_current_controller(Some(controller.clone()));
    let body = Generator::new(ctx, options, handler)
        .lower_instance_declaration(root, Parent::Document);
    ctx.set_current_controller(None);
    let body = body?;

    let target = hierarchy
        .update_target(&controller)
        .ok_or_else(|| LowerError::MissingUpdateTarget {
            controller: controller.clone(),
            document: fxml.name.clone(),
        })?;

    if !fxml.processing_instructions.is_empty() {
        let imports = target.imports_mut();
        for instruction in &fxml.processing_instructions {
            match lower_processing_instruction(instruction, options) {
                Some(import) if !imports.contains(&import) => imports.push(import),
                _ => {}
            }
        }
    }

    let method = MethodDeclaration {
        modifier: Modifier::Public,
        return_type: ClassType::new(root.data.name.as_str()),
        name: options.method_name.clone(),
        parameters: Vec::new(),
        throws: vec![ClassType::new(options.throws.as_str())],
        body,
    };
    if options.replace_existing {
        target.clean_methods(&[options.method_name.as_str()]);
    }
    target.add_member(method.clone());
    info!(
        "generated {}.{}() for {} ({} statements)",
        controller,
        method.name,
        fxml.name,
        method.body.len()
    );
    Ok(method)
}

/// Scans every document of the batch, then lowers them in order.
/// The first failing document aborts the batch.
pub fn lower_project<H: ModelHierarchy>(
    project: &mut Project,
    hierarchy: &mut H,
    options: &LowerOptions,
    handler: &dyn HandlerBuilder,
) -> Result<Vec<MethodDeclaration>> {
    let mut ctx = Context::new();
    scan_project(project, &mut ctx);
    project
        .fxmls
        .iter()
        .map(|fxml| lower_fxml(fxml, &mut ctx, hierarchy, options, handler))
        .collect()
}

/// Bundles configuration and the handler builder for hosts that lower
/// documents repeatedly.
pub struct FxmlCompiler {
    options: LowerOptions,
    handler: Box<dyn HandlerBuilder>,
}

impl Default for FxmlCompiler {
    fn default() -> Self {
        Self::new(LowerOptions::default())
    }
}

impl FxmlCompiler {
    pub fn new(options: LowerOptions) -> Self {
        Self {
            options,
            handler: Box::new(MethodReferenceHandler),
        }
    }

    pub fn with_handler(mut self, handler: impl HandlerBuilder + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    pub fn options(&self) -> &LowerOptions {
        &self.options
    }

    pub fn compile_project<H: ModelHierarchy>(
        &self,
        project: &mut Project,
        hierarchy: &mut H,
    ) -> Result<Vec<MethodDeclaration>> {
        lower_project(project, hierarchy, &self.options, self.handler.as_ref())
    }

    /// Reads and lowers a standalone document. Includes can only resolve to
    /// the document itself; use `compile_project` for batches.
    pub fn compile_source<H: ModelHierarchy>(
        &self,
        name: &str,
        source: &str,
        hierarchy: &mut H,
    ) -> Result<MethodDeclaration> {
        let mut fxml = parse_fxml(name, source)?;
        let mut ctx = Context::new();
        scan_fxml(&mut fxml, &mut ctx);
        lower_fxml(&fxml, &mut ctx, hierarchy, &self.options, self.handler.as_ref())
    }
}
