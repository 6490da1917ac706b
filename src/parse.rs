//! FXML markup reader.
//!
//! Builds the input tree from markup text. The reader is lenient: it only
//! classifies tags and attributes, it does not validate them against any
//! schema. Text content and comments are ignored.

use lazy_static::lazy_static;
use log::trace;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::Regex;

use crate::error::{LowerError, Result};
use crate::fxml::{
    Attribute, AttributeType, Element, ElementData, Fxml, ImportProcessing, ImportType,
    IncludeElement, InstanceDeclarationElement, LanguageProcessing, ProcessingInstruction,
    PropertyElement, PropertyType,
};
use crate::tables::{local_name, FX_ELEMENTS};

const FX_PREFIX: &str = "fx:";
const FX_ID: &str = "fx:id";
const FX_CONTROLLER: &str = "fx:controller";
const ID: &str = "id";
const SOURCE: &str = "source";
const ROOT_TYPE: &str = "type";

lazy_static! {
    static ref IMPORT_RE: Regex =
        Regex::new(r"^import\s+([A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*)(\.\*)?\s*;?\s*$").unwrap();
    static ref LANGUAGE_RE: Regex = Regex::new(r"^language\s+(\S+)\s*$").unwrap();
}

/// Parses one document. `name` is the document name used for include keys
/// and error messages (the file stem, without `.fxml`).
pub fn parse_fxml(name: &str, source: &str) -> Result<Fxml> {
    let mut reader = Reader::from_str(source);
    reader.trim_text(true);

    let mut processing_instructions = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                stack.push(build_element(name, e)?);
            }
            Ok(Event::Empty(ref e)) => {
                let element = build_element(name, e)?;
                attach(name, element, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| LowerError::parse(name, "unexpected closing tag"))?;
                attach(name, element, &mut stack, &mut root)?;
            }
            Ok(Event::PI(ref e)) => {
                let content = std::str::from_utf8(e).map_err(|err| LowerError::parse(name, err))?;
                if let Some(instruction) = parse_processing_instruction(content) {
                    processing_instructions.push(instruction);
                } else {
                    trace!("{}: ignoring processing instruction <?{}?>", name, content);
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(LowerError::parse(
                    name,
                    format!("{} at byte {}", err, reader.buffer_position()),
                ))
            }
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(LowerError::parse(
            name,
            format!("unclosed element <{}>", open.name()),
        ));
    }

    Ok(Fxml {
        name: name.to_string(),
        root,
        processing_instructions,
    })
}

fn attach(
    document: &str,
    element: Element,
    stack: &mut [Element],
    root: &mut Option<Element>,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.data_mut().elements.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(LowerError::parse(
                document,
                format!("second root element <{}>", element.name()),
            ))
        }
    }
    Ok(())
}

pub fn parse_processing_instruction(content: &str) -> Option<ProcessingInstruction> {
    let content = content.trim();
    if let Some(cap) = IMPORT_RE.captures(content) {
        let import_type = if cap.get(2).is_some() {
            ImportType::ImportPackage
        } else {
            ImportType::ImportClass
        };
        return Some(ProcessingInstruction::Import(ImportProcessing {
            value: cap[1].to_string(),
            import_type,
        }));
    }
    LANGUAGE_RE.captures(content).map(|cap| {
        ProcessingInstruction::Language(LanguageProcessing {
            value: cap[1].to_string(),
        })
    })
}

fn build_element(document: &str, start: &BytesStart) -> Result<Element> {
    let tag = std::str::from_utf8(start.name().as_ref())
        .map_err(|err| LowerError::parse(document, err))?
        .to_string();

    let mut data = ElementData::new(tag.as_str());
    let mut controller = None;
    let mut include_source = None;
    let mut root_type = None;

    for attr in start.attributes() {
        let attr = attr.map_err(|err| LowerError::parse(document, err))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| LowerError::parse(document, err))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|err| LowerError::parse(document, err))?
            .into_owned();

        match key.as_str() {
            FX_ID => data.fx_id = Some(value),
            FX_CONTROLLER => controller = Some(value),
            SOURCE if tag == "fx:include" => include_source = Some(value),
            ROOT_TYPE if tag == "fx:root" => root_type = Some(value),
            _ if key == "xmlns" || key.starts_with("xmlns:") || key.starts_with(FX_PREFIX) => {
                trace!("{}: dropping <{} {}>", document, tag, key);
            }
            _ => {
                if key == ID {
                    data.id = Some(value.clone());
                }
                let attribute_type = classify_attribute(&key, &value);
                data.attributes.push(Attribute::new(key, value, attribute_type));
            }
        }
    }

    if let Some(fx_local) = tag.strip_prefix(FX_PREFIX) {
        if !FX_ELEMENTS.contains(fx_local) {
            trace!("{}: unknown element <{}>", document, tag);
            return Ok(Element::UnknownType(data));
        }
        let element = match fx_local {
            "include" => {
                let source = include_source.ok_or_else(|| {
                    LowerError::parse(document, "<fx:include> without source attribute")
                })?;
                data.name = fx_local.to_string();
                Element::Include(IncludeElement { data, source })
            }
            "root" => {
                if let Some(ty) = root_type {
                    data.name = ty;
                }
                Element::Root(data)
            }
            "reference" => Element::Reference(data),
            "copy" => Element::Copy(data),
            "define" => Element::Define(data),
            "script" => Element::Script(data),
            _ => Element::UnknownType(data),
        };
        return Ok(element);
    }

    if starts_lowercase(local_name(&tag)) {
        let property_type = if tag.contains('.') && !starts_lowercase(&tag) {
            PropertyType::StaticProperty
        } else {
            PropertyType::InstanceProperty
        };
        return Ok(Element::Property(PropertyElement {
            data,
            property_type,
        }));
    }

    Ok(Element::InstanceDeclaration(InstanceDeclarationElement {
        data,
        controller,
    }))
}

/// `onAction="#save"` is a handler, `GridPane.rowIndex="1"` a static property,
/// everything else an instance property.
pub fn classify_attribute(name: &str, value: &str) -> AttributeType {
    if name.starts_with("on") && value.starts_with('#') {
        AttributeType::EventHandler
    } else if name.contains('.') && !starts_lowercase(name) {
        AttributeType::StaticProperty
    } else {
        AttributeType::InstanceProperty
    }
}

fn starts_lowercase(s: &str) -> bool {
    s.chars().next().map_or(false, char::is_lowercase)
}
