//! SMIL document loading.
//!
//! A [`SmilDocument`] is an owned, read-only snapshot of a well-formed XML
//! tree: every element in document order with its unprefixed attributes.
//! Loading validates well-formedness up front, so once a document exists
//! every query on it is infallible.

use std::path::Path;

use crate::error::{Error, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A single unprefixed XML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// An XML element without its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    /// Tag is bound to a namespace other than the default one in scope.
    foreign: bool,
    attributes: Vec<Attribute>,
}

impl Element {
    /// Local tag name (namespace prefix stripped).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an unprefixed attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

/// A parsed SMIL playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmilDocument {
    elements: Vec<Element>,
}

impl SmilDocument {
    /// Read and parse the file at `path`.
    ///
    /// Any I/O failure (missing file, permissions, a directory) is reported
    /// as [`Error::NotFound`].
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| Error::not_found(path, e))?;
        tracing::trace!("Read {} bytes from {}", data.len(), path.display());
        Self::load_from_bytes(&data)
    }

    /// Parse an in-memory buffer. Never touches the filesystem.
    pub fn load_from_bytes(data: &[u8]) -> Result<Self> {
        let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::MalformedDocument(format!("invalid UTF-8: {e}")))?;
        Self::parse(text)
    }

    /// Parse XML text.
    pub fn parse(text: &str) -> Result<Self> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)?;

        let root = doc.root();
        let elements = root
            .descendants()
            .filter(|n| n.is_element())
            .map(|node| Element {
                name: node.tag_name().name().to_string(),
                foreign: node.tag_name().namespace() != node.default_namespace(),
                // Unprefixed attributes never carry a namespace.
                attributes: node
                    .attributes()
                    .filter(|a| a.namespace().is_none())
                    .map(|a| Attribute {
                        name: a.name().to_string(),
                        value: a.value().to_string(),
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        tracing::trace!("Parsed SMIL document with {} elements", elements.len());
        Ok(Self { elements })
    }

    /// All elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Elements named `name` in the default namespace, in document order.
    ///
    /// Prefixed elements bound to another namespace (`<x:video>`) never match.
    pub fn elements_by_tag_name<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Element> {
        self.elements
            .iter()
            .filter(move |e| !e.foreign && e.name == name)
    }
}
