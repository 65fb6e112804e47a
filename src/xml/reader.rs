use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::value::XmlValue;
use super::{IOF_NS, ReadOptions};
use crate::core::IofError;

/// A record that can be read from one element.
pub trait ReadXml: Sized {
    fn read_xml(node: &Node) -> Result<Self, IofError>;
}

/// One parsed element: local name, raw attributes, text content and
/// children, plus its position in the document for error messages.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Node>,
    path: String,
    prefix: Option<String>,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location such as `/ResultList/ClassResult[1]/PersonResult[2]`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn required_child(&self, name: &str) -> Result<&Node, IofError> {
        self.child(name).ok_or_else(|| IofError::MissingElement {
            path: self.path.clone(),
            name: name.to_string(),
        })
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The element's own text content as a scalar.
    pub fn value<T: XmlValue>(&self) -> Result<T, IofError> {
        T::from_xml_value(&self.text).ok_or_else(|| IofError::InvalidValue {
            path: self.path.clone(),
            value: self.text.clone(),
            expected: T::KIND,
        })
    }

    pub fn child_value<T: XmlValue>(&self, name: &str) -> Result<Option<T>, IofError> {
        self.child(name).map(Node::value).transpose()
    }

    pub fn required_child_value<T: XmlValue>(&self, name: &str) -> Result<T, IofError> {
        self.required_child(name)?.value()
    }

    pub fn child_values<T: XmlValue>(&self, name: &str) -> Result<Vec<T>, IofError> {
        self.children(name).map(Node::value).collect()
    }

    pub fn attr_value<T: XmlValue>(&self, name: &str) -> Result<Option<T>, IofError> {
        let Some(raw) = self.attr(name) else {
            return Ok(None);
        };
        T::from_xml_value(raw)
            .map(Some)
            .ok_or_else(|| IofError::InvalidValue {
                path: format!("{}/@{name}", self.path),
                value: raw.to_string(),
                expected: T::KIND,
            })
    }

    pub fn required_attr_value<T: XmlValue>(&self, name: &str) -> Result<T, IofError> {
        self.attr_value(name)?
            .ok_or_else(|| IofError::MissingAttribute {
                path: self.path.clone(),
                name: name.to_string(),
            })
    }

    /// Attribute value, or the schema default when absent.
    pub fn attr_or_default<T: XmlValue + Default>(&self, name: &str) -> Result<T, IofError> {
        Ok(self.attr_value(name)?.unwrap_or_default())
    }

    pub fn read_child<T: ReadXml>(&self, name: &str) -> Result<Option<T>, IofError> {
        self.child(name).map(T::read_xml).transpose()
    }

    pub fn read_required_child<T: ReadXml>(&self, name: &str) -> Result<T, IofError> {
        T::read_xml(self.required_child(name)?)
    }

    pub fn read_children<T: ReadXml>(&self, name: &str) -> Result<Vec<T>, IofError> {
        self.children(name).map(T::read_xml).collect()
    }

    /// Like [`Node::read_children`], for sequences with `minOccurs="1"`.
    pub fn read_children_min1<T: ReadXml>(&self, name: &str) -> Result<Vec<T>, IofError> {
        let items = self.read_children(name)?;
        if items.is_empty() {
            return Err(IofError::MissingElement {
                path: self.path.clone(),
                name: name.to_string(),
            });
        }
        Ok(items)
    }

    /// Namespace bound to this element's prefix, looked up on the element itself.
    fn own_namespace(&self) -> Option<&str> {
        match &self.prefix {
            Some(p) => self.attr(&format!("xmlns:{p}")),
            None => self.attr("xmlns"),
        }
    }
}

fn xml_err(e: impl std::fmt::Display) -> IofError {
    IofError::Xml(e.to_string())
}

fn utf8(bytes: &[u8]) -> Result<&str, IofError> {
    std::str::from_utf8(bytes).map_err(xml_err)
}

fn open(start: &BytesStart<'_>, parent: Option<&Node>) -> Result<Node, IofError> {
    let name = utf8(start.local_name().as_ref())?.to_string();
    let prefix = match start.name().prefix() {
        Some(p) => Some(utf8(p.as_ref())?.to_string()),
        None => None,
    };
    let path = match parent {
        Some(p) => {
            let index = p.children.iter().filter(|c| c.name == name).count() + 1;
            format!("{}/{name}[{index}]", p.path)
        }
        None => format!("/{name}"),
    };
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(xml_err)?;
        let key = utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value().map_err(xml_err)?.into_owned();
        attributes.push((key, value));
    }
    Ok(Node {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
        path,
        prefix,
    })
}

/// Parse a whole document into a [`Node`] tree.
pub fn parse_tree(xml: &str, options: &ReadOptions) -> Result<Node, IofError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event().map_err(xml_err)? {
            Event::Start(ref e) => {
                if root.is_some() {
                    return Err(IofError::Xml("content after the root element".into()));
                }
                if stack.len() >= options.max_depth {
                    return Err(IofError::Limit(format!(
                        "element nesting deeper than {}",
                        options.max_depth
                    )));
                }
                let node = open(e, stack.last())?;
                stack.push(node);
            }
            Event::Empty(ref e) => {
                if root.is_some() {
                    return Err(IofError::Xml("content after the root element".into()));
                }
                let node = open(e, stack.last())?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            Event::Text(ref e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&e.unescape().map_err(xml_err)?);
                }
            }
            Event::CData(ref e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(utf8(e)?);
                }
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| IofError::Xml("unbalanced end tag".into()))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(IofError::Xml("unexpected end of document".into()));
    }
    root.ok_or_else(|| IofError::Xml("document has no root element".into()))
}

/// Parse a document and check that its root is `expected` in the IOF namespace.
pub fn parse_document(xml: &str, expected: &'static str, options: &ReadOptions) -> Result<Node, IofError> {
    let root = parse_tree(xml, options)?;
    if root.name != expected {
        return Err(IofError::UnexpectedRoot {
            expected,
            found: root.name,
        });
    }
    let found = root.own_namespace().map(str::to_string);
    if found.as_deref() == Some(IOF_NS) {
        Ok(root)
    } else {
        Err(IofError::Namespace { found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Node {
        parse_tree(xml, &ReadOptions::default()).unwrap()
    }

    #[test]
    fn paths_count_same_name_siblings() {
        let root = parse("<A><B/><C><D/></C><B><D/><D>x</D></B></A>");
        let second_b = root.children("B").nth(1).unwrap();
        assert_eq!(second_b.path(), "/A/B[2]");
        let d = second_b.children("D").nth(1).unwrap();
        assert_eq!(d.path(), "/A/B[2]/D[2]");
        assert_eq!(d.text(), "x");
    }

    #[test]
    fn entities_and_cdata_are_decoded() {
        let root = parse("<A><B a=\"x &amp; y\">1 &lt; 2</B><C><![CDATA[<raw>]]></C></A>");
        let b = root.child("B").unwrap();
        assert_eq!(b.attr("a"), Some("x & y"));
        assert_eq!(b.text(), "1 < 2");
        assert_eq!(root.child("C").unwrap().text(), "<raw>");
    }

    #[test]
    fn depth_is_bounded() {
        let deep = "<a>".repeat(10) + &"</a>".repeat(10);
        let err = parse_tree(&deep, &ReadOptions { max_depth: 5 }).unwrap_err();
        assert!(matches!(err, IofError::Limit(_)));
        assert!(parse_tree(&deep, &ReadOptions { max_depth: 10 }).is_ok());
    }

    #[test]
    fn missing_pieces_name_their_location() {
        let root = parse("<A><B n=\"x\"/></A>");
        let b = root.child("B").unwrap();
        let err = b.required_child("Name").unwrap_err();
        assert_eq!(err.to_string(), "/A/B[1]: missing required element <Name>");
        let err = b.required_attr_value::<u32>("n").unwrap_err();
        assert_eq!(err.to_string(), "/A/B[1]/@n: invalid value 'x', expected non-negative integer");
    }

    #[test]
    fn prefixed_root_namespace() {
        let xml = format!("<iof:ClassList xmlns:iof=\"{IOF_NS}\" iofVersion=\"3.0\"/>");
        let root = parse_document(&xml, "ClassList", &ReadOptions::default()).unwrap();
        assert_eq!(root.name(), "ClassList");
    }
}
