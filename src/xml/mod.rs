//! IOF XML 3.0 reading and writing.
//!
//! Every record maps to an element whose children follow the schema's
//! sequence order. Absent optionals, empty lists and attributes equal to
//! their schema default are left out on write and restored on read.
//! An optional value whose text is empty, such as `Some(String::new())`,
//! counts as absent: it is not written and reads back as `None`.
//! A required sequence that is empty fails with `MissingElement`, on write
//! as on read. Unknown elements and attributes are ignored when reading.
//!
//! # Example
//!
//! ```
//! use iof_xml::core::*;
//! use iof_xml::xml::{self, IofDocument};
//!
//! let mut list = ClassList::default();
//! list.classes.push(Class::builder("Men Elite").build().unwrap());
//!
//! let text = list.to_xml_string().unwrap();
//! assert!(text.contains("<Name>Men Elite</Name>"));
//!
//! let back: ClassList = xml::from_xml_str(&text).unwrap();
//! assert_eq!(back, list);
//! ```

mod base;
mod class;
mod course;
mod documents;
mod entry;
mod event;
mod fee;
mod party;
mod reader;
mod result;
mod service;
mod start;
mod value;
mod writer;

use std::io::Write;
use std::path::Path;

use crate::core::{DocumentHeader, IofError};

pub use reader::{Node, ReadXml, parse_document, parse_tree};
pub use value::XmlValue;
pub use writer::{Attrs, WriteXml, XmlWriter};

/// Namespace of IOF XML 3.0 documents.
pub const IOF_NS: &str = "http://www.orienteering.org/datastandard/3.0";

/// XML Schema instance namespace, declared on every root.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent: Option<usize>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { indent: Some(2) }
    }
}

/// Limits applied while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Maximum element nesting depth.
    pub max_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// One of the ten IOF XML document roots.
pub trait IofDocument: WriteXml + ReadXml {
    /// Name of the root element.
    const ROOT: &'static str;

    fn header(&self) -> &DocumentHeader;

    fn from_xml_str(xml: &str) -> Result<Self, IofError> {
        from_xml_str(xml)
    }

    fn to_xml_string(&self) -> Result<String, IofError> {
        to_xml_string(self)
    }
}

pub fn from_xml_str<T: IofDocument>(xml: &str) -> Result<T, IofError> {
    from_xml_str_with(xml, &ReadOptions::default())
}

pub fn from_xml_str_with<T: IofDocument>(xml: &str, options: &ReadOptions) -> Result<T, IofError> {
    tracing::debug!(root = T::ROOT, bytes = xml.len(), "reading IOF document");
    parse_document(xml, T::ROOT, options)
        .and_then(|root| T::read_xml(&root))
        .inspect_err(|e| tracing::debug!(root = T::ROOT, error = %e, "failed to read IOF document"))
}

/// Read a document from raw bytes, which must be UTF-8.
pub fn from_xml_bytes<T: IofDocument>(bytes: &[u8]) -> Result<T, IofError> {
    from_xml_bytes_with(bytes, &ReadOptions::default())
}

pub fn from_xml_bytes_with<T: IofDocument>(bytes: &[u8], options: &ReadOptions) -> Result<T, IofError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let xml = std::str::from_utf8(bytes).map_err(|e| IofError::Xml(format!("invalid UTF-8: {e}")))?;
    from_xml_str_with(xml, options)
}

pub fn from_reader<T: IofDocument, R: std::io::Read>(reader: R) -> Result<T, IofError> {
    from_reader_with(reader, &ReadOptions::default())
}

pub fn from_reader_with<T: IofDocument, R: std::io::Read>(
    mut reader: R,
    options: &ReadOptions,
) -> Result<T, IofError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    from_xml_bytes_with(&buf, options)
}

pub fn read_file<T: IofDocument>(path: impl AsRef<Path>) -> Result<T, IofError> {
    read_file_with(path, &ReadOptions::default())
}

pub fn read_file_with<T: IofDocument>(path: impl AsRef<Path>, options: &ReadOptions) -> Result<T, IofError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), root = T::ROOT, "reading IOF file");
    let bytes = std::fs::read(path)?;
    from_xml_bytes_with(&bytes, options)
}

pub fn to_xml_string<T: IofDocument>(doc: &T) -> Result<String, IofError> {
    to_xml_string_with(doc, &WriteOptions::default())
}

pub fn to_xml_string_with<T: IofDocument>(doc: &T, options: &WriteOptions) -> Result<String, IofError> {
    let bytes = to_xml_bytes_with(doc, options)?;
    String::from_utf8(bytes).map_err(|e| IofError::Xml(format!("XML UTF-8 error: {e}")))
}

pub fn to_xml_bytes<T: IofDocument>(doc: &T) -> Result<Vec<u8>, IofError> {
    to_xml_bytes_with(doc, &WriteOptions::default())
}

pub fn to_xml_bytes_with<T: IofDocument>(doc: &T, options: &WriteOptions) -> Result<Vec<u8>, IofError> {
    let mut w = XmlWriter::new(options)?;
    doc.write_xml(&mut w, T::ROOT)
        .inspect_err(|e| tracing::debug!(root = T::ROOT, error = %e, "failed to write IOF document"))?;
    let bytes = w.into_bytes()?;
    tracing::debug!(root = T::ROOT, bytes = bytes.len(), "wrote IOF document");
    Ok(bytes)
}

/// Write a document to any byte sink.
pub fn write_to<T: IofDocument, W: Write>(doc: &T, sink: W) -> Result<(), IofError> {
    write_to_with(doc, sink, &WriteOptions::default())
}

pub fn write_to_with<T: IofDocument, W: Write>(
    doc: &T,
    mut sink: W,
    options: &WriteOptions,
) -> Result<(), IofError> {
    let bytes = to_xml_bytes_with(doc, options)?;
    sink.write_all(&bytes)?;
    sink.flush()?;
    Ok(())
}

pub fn write_file<T: IofDocument>(doc: &T, path: impl AsRef<Path>) -> Result<(), IofError> {
    write_file_with(doc, path, &WriteOptions::default())
}

pub fn write_file_with<T: IofDocument>(
    doc: &T,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<(), IofError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), root = T::ROOT, "writing IOF file");
    let bytes = to_xml_bytes_with(doc, options)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
