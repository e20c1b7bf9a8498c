use crate::error::{Error, Result};

/// Element attributes, serialized in insertion order.
///
/// Keys are unique: inserting a key that is already present replaces its
/// value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (key, value) in iter {
            attrs.insert(key, value);
        }
        attrs
    }
}

/// A node of the output HTML tree
///
/// A `Leaf` without a tag renders as its raw value, which is how plain
/// inline text is represented. A `Parent` exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attrs: Attributes,
    },
    Parent {
        tag: Option<String>,
        children: Vec<Node>,
        attrs: Attributes,
    },
}

impl Node {
    /// Untagged leaf holding raw text.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attrs: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Parent {
            tag: Some(tag.into()),
            children,
            attrs: Attributes::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Node::Leaf { attrs, .. } | Node::Parent { attrs, .. } => attrs.insert(key, value),
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } | Node::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            Node::Leaf { attrs, .. } | Node::Parent { attrs, .. } => attrs,
        }
    }

    /// Children of a parent; leaves have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Parent { children, .. } => children,
        }
    }

    /// Serialize the tree rooted at this node to an HTML string.
    ///
    /// Values and attribute values are written verbatim, without escaping.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Leaf { tag, value, attrs } => {
                let value = value.as_deref().ok_or(Error::MissingValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(tag, attrs, out);
                        out.push_str(value);
                        close_tag(tag, out);
                    }
                }
            }
            Node::Parent {
                tag,
                children,
                attrs,
            } => {
                let tag = tag
                    .as_deref()
                    .filter(|tag| !tag.is_empty())
                    .ok_or(Error::MissingTag)?;
                open_tag(tag, attrs, out);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (key, value) in attrs.iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
