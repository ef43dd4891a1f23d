//! Reading and writing the XML document tree.
//!
//! The root element is held in memory as an `xmltree::Element`, built from `xml-rs` events so
//! that whitespace-only text is kept as text. Inside the root, text (including indentation),
//! comments, CDATA and processing instructions round-trip unchanged. Anything outside the root
//! element (a DOCTYPE, comments or processing instructions before or after it) is not retained,
//! and the XML declaration is regenerated on write.

use crate::error::{RenameError, Result};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;
use xml::reader::{EventReader, ParserConfig, XmlEvent};
use xmltree::{Element, EmitterConfig, XMLNode};

/// Parse the document at `path`.
///
/// The file handle is released as soon as parsing finishes, whether it succeeded or not.
///
/// # Errors
///
/// Returns [`RenameError::Io`] if the file cannot be opened and [`RenameError::Parse`] if it is
/// not well-formed XML.
pub fn load(path: &Path) -> Result<Element> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file), &path.display().to_string())
}

/// Parse a document held in memory.
///
/// # Errors
///
/// Returns [`RenameError::Parse`] if `xml` is not well-formed.
pub fn parse_str(xml: &str) -> Result<Element> {
    parse_reader(xml.as_bytes(), "<memory>")
}

fn parser_config() -> ParserConfig {
    ParserConfig::new()
        .ignore_comments(false)
        .whitespace_to_characters(true)
        .cdata_to_characters(false)
}

fn parse_reader<R: Read>(reader: R, origin: &str) -> Result<Element> {
    let mut open: Vec<Element> = Vec::new();
    let mut root = None;

    for event in EventReader::new_with_config(reader, parser_config()) {
        let event = event.map_err(|source| RenameError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        match event {
            XmlEvent::StartElement {
                name,
                attributes,
                namespace,
            } => {
                let mut element = Element::new(&name.local_name);
                element.prefix = name.prefix;
                element.namespace = name.namespace;
                if !namespace.is_essentially_empty() {
                    element.namespaces = Some(namespace);
                }
                for attribute in attributes {
                    element
                        .attributes
                        .insert(attribute.name.local_name, attribute.value);
                }
                open.push(element);
            }
            XmlEvent::EndElement { .. } => {
                let Some(element) = open.pop() else { continue };
                match open.last_mut() {
                    Some(parent) => parent.children.push(XMLNode::Element(element)),
                    None => root = Some(element),
                }
            }
            XmlEvent::Characters(text) | XmlEvent::Whitespace(text) => {
                push_child(&mut open, XMLNode::Text(text));
            }
            XmlEvent::CData(text) => push_child(&mut open, XMLNode::CData(text)),
            XmlEvent::Comment(text) => push_child(&mut open, XMLNode::Comment(text)),
            XmlEvent::ProcessingInstruction { name, data } => {
                push_child(&mut open, XMLNode::ProcessingInstruction(name, data));
            }
            _ => {}
        }
    }

    root.ok_or_else(|| RenameError::Structure {
        path: format!("{origin}: root element"),
    })
}

/// Attach `node` to the innermost open element; nodes outside the root are dropped.
fn push_child(open: &mut [Element], node: XMLNode) {
    if let Some(parent) = open.last_mut() {
        parent.children.push(node);
    }
}

/// Serialise the tree with an XML declaration, leaving existing whitespace as the only layout.
///
/// # Errors
///
/// Returns [`RenameError::Write`] if the emitter rejects the tree.
pub fn to_bytes(root: &Element) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    root.write_with_config(&mut buf, EmitterConfig::new().perform_indent(false))?;
    Ok(buf)
}

/// Write the tree to `path`, replacing any existing content.
///
/// The document is serialised in full before the file is touched, so a serialisation failure
/// leaves the target as it was.
///
/// # Errors
///
/// Returns [`RenameError::Write`] on serialisation failure and [`RenameError::Io`] if the file
/// cannot be written.
pub fn store(root: &Element, path: &Path) -> Result<()> {
    let bytes = to_bytes(root)?;
    fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), "wrote document");
    Ok(())
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
