//! Minimal navigable element tree over `quick-xml` events.
//!
//! Only element names and mixed text/element content are kept; attributes,
//! comments and processing instructions are dropped. Lookups match names exactly.

use quick_xml::events::Event;
use quick_xml::Reader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlContent {
    Text(String),
    Element(XmlNode),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub content: Vec<XmlContent>,
}

impl XmlNode {
    fn new(name: String) -> Self { Self { name, content: Vec::new() } }

    /// Parse a whole document; the returned node is a nameless root holding the top-level elements.
    pub fn parse(bytes: &[u8]) -> Result<XmlNode, quick_xml::Error> {
        // text is kept untrimmed so runs split by inline markup rejoin exactly
        let mut reader = Reader::from_reader(bytes);
        let mut stack: Vec<XmlNode> = vec![XmlNode::default()];
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    stack.push(XmlNode::new(name));
                }
                Event::Empty(e) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    if let Some(parent) = stack.last_mut() {
                        parent.content.push(XmlContent::Element(XmlNode::new(name)));
                    }
                }
                Event::Text(e) => {
                    // unknown entities are kept verbatim rather than failing the document
                    let text = match e.unescape() {
                        Ok(t) => t.into_owned(),
                        Err(_) => String::from_utf8_lossy(&e).into_owned(),
                    };
                    if let Some(cur) = stack.last_mut() { cur.push_text(text); }
                }
                Event::CData(e) => {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    if let Some(cur) = stack.last_mut() { cur.push_text(text); }
                }
                Event::End(_) => fold_top(&mut stack),
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }
        // unclosed elements at EOF are folded into their parents
        while stack.len() > 1 { fold_top(&mut stack); }
        Ok(stack.pop().unwrap_or_default())
    }

    fn push_text(&mut self, text: String) {
        if !text.is_empty() { self.content.push(XmlContent::Text(text)); }
    }

    pub fn children(&self) -> impl Iterator<Item = &XmlNode> {
        self.content.iter().filter_map(|c| match c {
            XmlContent::Element(node) => Some(node),
            XmlContent::Text(_) => None,
        })
    }

    /// First descendant (depth-first, document order) with the given name.
    pub fn find(&self, name: &str) -> Option<&XmlNode> {
        for child in self.children() {
            if child.name == name { return Some(child); }
            if let Some(found) = child.find(name) { return Some(found); }
        }
        None
    }

    /// Every descendant with the given name, in document order.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a XmlNode> {
        let mut out = Vec::new();
        self.collect(name, &mut out);
        out
    }

    fn collect<'a>(&'a self, name: &str, out: &mut Vec<&'a XmlNode>) {
        for child in self.children() {
            if child.name == name { out.push(child); }
            child.collect(name, out);
        }
    }

    /// All text under this node in document order, inline markup such as `<sub>` flattened.
    /// Runs are concatenated as-is: `N<sub>2</sub>pc` reads `N2pc`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.gather_text(&mut out);
        out
    }

    fn gather_text(&self, out: &mut String) {
        for c in &self.content {
            match c {
                XmlContent::Text(t) => out.push_str(t),
                XmlContent::Element(node) => node.gather_text(out),
            }
        }
    }
}

fn fold_top(stack: &mut Vec<XmlNode>) {
    // the root is never folded; the reader rejects unmatched end tags
    if stack.len() < 2 { return; }
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() { parent.content.push(XmlContent::Element(done)); }
    }
}
