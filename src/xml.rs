//! Owned XML element tree for API responses.
//!
//! Response bodies are parsed into [`Element`] values so results can outlive
//! the raw body. Parse failures never escape as parser errors; they surface
//! as [`AppError::Decode`] carrying an entity-escaped excerpt of the
//! offending body.

use crate::error::AppError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Maximum number of body characters quoted in a decode error
const EXCERPT_LEN: usize = 200;

/// A single element of a parsed response document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Tag name
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Concatenated character data directly under this element
    pub text: String,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// First direct child with the given tag name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Trimmed text of the first direct child with the given tag name
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(|c| c.text.trim())
    }

    /// All direct children with the given tag name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Value of the given attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parses a response body into its root element
pub fn parse_document(body: &str) -> Result<Element, AppError> {
    let mut reader = Reader::from_str(body);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Err(e) => return Err(decode_error(&e.to_string(), body)),
            Ok(Event::Start(start)) => {
                stack.push(element_from_start(&start, body)?);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start, body)?;
                attach(&mut stack, &mut root, element, body)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| decode_error("unexpected closing tag", body))?;
                attach(&mut stack, &mut root, element, body)?;
            }
            Ok(Event::Text(text)) => {
                let value = text
                    .unescape()
                    .map_err(|e| decode_error(&e.to_string(), body))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&value);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Ok(Event::Eof) => break,
            // Declarations, comments and processing instructions carry no data
            Ok(_) => {}
        }
    }

    match root {
        Some(root) if stack.is_empty() => Ok(root),
        _ => Err(decode_error("missing or unclosed root element", body)),
    }
}

/// Entity-escaped excerpt of a response body, safe to embed in messages
fn excerpt(body: &str) -> String {
    let mut cut: String = body.chars().take(EXCERPT_LEN).collect();
    if body.chars().count() > EXCERPT_LEN {
        cut.push_str("...");
    }
    quick_xml::escape::escape(&cut).into_owned()
}

fn decode_error(reason: &str, body: &str) -> AppError {
    AppError::Decode(format!("{reason}; body: {}", excerpt(body)))
}

fn element_from_start(start: &BytesStart<'_>, body: &str) -> Result<Element, AppError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| decode_error(&e.to_string(), body))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| decode_error(&e.to_string(), body))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name,
        attributes,
        ..Element::default()
    })
}

/// Hands a completed element to its parent, or makes it the document root
fn attach(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    element: Element,
    body: &str,
) -> Result<(), AppError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(element);
            Ok(())
        }
        None => Err(decode_error("multiple root elements", body)),
    }
}
