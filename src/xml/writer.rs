use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::WriteOptions;
use super::value::XmlValue;
use crate::core::IofError;

fn xml_io(e: std::io::Error) -> IofError {
    IofError::Xml(format!("XML write error: {e}"))
}

/// A record that writes itself as one element.
pub trait WriteXml {
    /// Write `self` as an element named `tag`, children in schema order.
    fn write_xml(&self, w: &mut XmlWriter, tag: &str) -> Result<(), IofError>;
}

/// Attributes of an element about to be written. Absent values and values
/// equal to the schema default are left out.
#[derive(Debug, Default)]
pub struct Attrs(Vec<(&'static str, String)>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<V: XmlValue>(mut self, name: &'static str, value: &V) -> Self {
        self.0.push((name, value.to_xml_value()));
        self
    }

    /// Skips `None` and values whose lexical form is empty, so
    /// `Some(String::new())` reads back as `None`.
    pub fn opt<V: XmlValue>(mut self, name: &'static str, value: &Option<V>) -> Self {
        if let Some(v) = value {
            let text = v.to_xml_value();
            if !text.is_empty() {
                self.0.push((name, text));
            }
        }
        self
    }

    pub fn non_default<V: XmlValue + Default + PartialEq>(self, name: &'static str, value: &V) -> Self {
        self.unless(name, value, &V::default())
    }

    /// Skips `value` when it equals the schema default `default`.
    pub fn unless<V: XmlValue + PartialEq>(self, name: &'static str, value: &V, default: &V) -> Self {
        if value == default {
            self
        } else {
            self.set(name, value)
        }
    }

    fn apply(self, elem: &mut BytesStart<'_>) {
        for (k, v) in &self.0 {
            elem.push_attribute((*k, v.as_str()));
        }
    }
}

/// One open element: its path and how many children of each name it has.
struct Frame {
    path: String,
    seen: Vec<(String, usize)>,
}

/// Streaming writer for one document.
///
/// A start tag is held back until its first child or text arrives, so an
/// element that ends up without content is written as an empty tag.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
    pending: Option<BytesStart<'static>>,
    open: Vec<Frame>,
}

impl XmlWriter {
    pub fn new(options: &WriteOptions) -> Result<Self, IofError> {
        let mut writer = match options.indent {
            Some(size) => Writer::new_with_indent(Cursor::new(Vec::new()), b' ', size),
            None => Writer::new(Cursor::new(Vec::new())),
        };
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_io)?;
        Ok(Self {
            writer,
            pending: None,
            open: Vec::new(),
        })
    }

    pub fn into_bytes(mut self) -> Result<Vec<u8>, IofError> {
        self.flush()?;
        Ok(self.writer.into_inner().into_inner())
    }

    pub fn into_string(self) -> Result<String, IofError> {
        let buf = self.into_bytes()?;
        String::from_utf8(buf).map_err(|e| IofError::Xml(format!("XML UTF-8 error: {e}")))
    }

    fn flush(&mut self) -> Result<(), IofError> {
        if let Some(start) = self.pending.take() {
            self.writer.write_event(Event::Start(start)).map_err(xml_io)?;
        }
        Ok(())
    }

    /// Path of the innermost open element, in the form the reader reports.
    pub fn path(&self) -> &str {
        self.open.last().map_or("", |f| f.path.as_str())
    }

    fn enter(&mut self, name: &str) {
        let path = match self.open.last_mut() {
            Some(parent) => {
                let index = match parent.seen.iter_mut().find(|(n, _)| n == name) {
                    Some((_, count)) => {
                        *count += 1;
                        *count
                    }
                    None => {
                        parent.seen.push((name.to_string(), 1));
                        1
                    }
                };
                format!("{}/{name}[{index}]", parent.path)
            }
            None => format!("/{name}"),
        };
        self.open.push(Frame {
            path,
            seen: Vec::new(),
        });
    }

    pub fn start(&mut self, name: &str, attrs: Attrs) -> Result<(), IofError> {
        self.flush()?;
        self.enter(name);
        let mut elem = BytesStart::new(name.to_string());
        attrs.apply(&mut elem);
        self.pending = Some(elem);
        Ok(())
    }

    pub fn end(&mut self, name: &str) -> Result<(), IofError> {
        self.open.pop();
        let written = match self.pending.take() {
            Some(start) => self.writer.write_event(Event::Empty(start)),
            None => self.writer.write_event(Event::End(BytesEnd::new(name))),
        };
        written.map_err(xml_io)
    }

    pub fn text_element(&mut self, name: &str, text: &str, attrs: Attrs) -> Result<(), IofError> {
        self.start(name, attrs)?;
        if !text.is_empty() {
            self.flush()?;
            self.writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(xml_io)?;
        }
        self.end(name)
    }

    pub fn value<V: XmlValue>(&mut self, name: &str, value: &V) -> Result<(), IofError> {
        self.value_with(name, value, Attrs::new())
    }

    pub fn value_with<V: XmlValue>(&mut self, name: &str, value: &V, attrs: Attrs) -> Result<(), IofError> {
        self.text_element(name, &value.to_xml_value(), attrs)
    }

    /// Skips `None` and values whose lexical form is empty, so
    /// `Some(String::new())` reads back as `None`.
    pub fn opt_value<V: XmlValue>(&mut self, name: &str, value: &Option<V>) -> Result<(), IofError> {
        if let Some(v) = value {
            let text = v.to_xml_value();
            if !text.is_empty() {
                self.text_element(name, &text, Attrs::new())?;
            }
        }
        Ok(())
    }

    pub fn values<V: XmlValue>(&mut self, name: &str, values: &[V]) -> Result<(), IofError> {
        values.iter().try_for_each(|v| self.value(name, v))
    }

    /// Like [`XmlWriter::values`], for sequences with `minOccurs="1"`.
    pub fn values_min1<V: XmlValue>(&mut self, name: &str, values: &[V]) -> Result<(), IofError> {
        if values.is_empty() {
            return Err(self.missing(name));
        }
        self.values(name, values)
    }

    pub fn child<T: WriteXml>(&mut self, name: &str, value: &T) -> Result<(), IofError> {
        value.write_xml(self, name)
    }

    pub fn opt_child<T: WriteXml>(&mut self, name: &str, value: &Option<T>) -> Result<(), IofError> {
        match value {
            Some(v) => v.write_xml(self, name),
            None => Ok(()),
        }
    }

    pub fn children<T: WriteXml>(&mut self, name: &str, values: &[T]) -> Result<(), IofError> {
        values.iter().try_for_each(|v| v.write_xml(self, name))
    }

    /// Like [`XmlWriter::children`], for sequences with `minOccurs="1"`.
    pub fn children_min1<T: WriteXml>(&mut self, name: &str, values: &[T]) -> Result<(), IofError> {
        if values.is_empty() {
            return Err(self.missing(name));
        }
        self.children(name, values)
    }

    fn missing(&self, name: &str) -> IofError {
        IofError::MissingElement {
            path: self.path().to_string(),
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact() -> XmlWriter {
        XmlWriter::new(&WriteOptions { indent: None }).unwrap()
    }

    #[test]
    fn contentless_elements_are_empty_tags() {
        let mut w = compact();
        w.start("Leg", Attrs::new().set("minNumberOfCompetitors", &2u32))
            .unwrap();
        w.end("Leg").unwrap();
        let xml = w.into_string().unwrap();
        assert!(xml.ends_with(r#"<Leg minNumberOfCompetitors="2"/>"#), "{xml}");
    }

    #[test]
    fn defaults_and_absent_values_are_skipped() {
        let mut w = compact();
        w.start(
            "Control",
            Attrs::new()
                .non_default("type", &crate::core::ControlType::Control)
                .opt::<String>("modifyTime", &None),
        )
        .unwrap();
        w.opt_value::<String>("Name", &Some(String::new())).unwrap();
        w.value("Id", &"31".to_string()).unwrap();
        w.end("Control").unwrap();
        let xml = w.into_string().unwrap();
        assert!(xml.ends_with("<Control><Id>31</Id></Control>"), "{xml}");
    }

    #[test]
    fn paths_follow_open_elements() {
        let mut w = compact();
        w.start("ResultList", Attrs::new()).unwrap();
        for _ in 0..2 {
            w.start("ClassResult", Attrs::new()).unwrap();
            w.value("Id", &"1".to_string()).unwrap();
            w.end("ClassResult").unwrap();
        }
        w.start("ClassResult", Attrs::new()).unwrap();
        assert_eq!(w.path(), "/ResultList/ClassResult[3]");
        let err = w.children_min1::<crate::core::PersonResult>("PersonResult", &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "/ResultList/ClassResult[3]: missing required element <PersonResult>"
        );
        let err = w.values_min1::<String>("Control", &[]).unwrap_err();
        assert!(matches!(err, IofError::MissingElement { ref name, .. } if name == "Control"));
    }

    #[test]
    fn text_is_escaped() {
        let mut w = compact();
        w.value("Name", &"Smith & Sons <Club>".to_string()).unwrap();
        let xml = w.into_string().unwrap();
        assert!(xml.contains("Smith &amp; Sons &lt;Club&gt;"), "{xml}");
    }
}
