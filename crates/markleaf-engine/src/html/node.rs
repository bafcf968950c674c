use super::{
    HtmlError,
    props::{Props, props_to_html},
};

/// A node in an HTML tree.
///
/// Nodes are built once and never mutated; a parent owns its children.
/// `value`, `tag` and `children` are optional only so that incomplete nodes
/// are representable and rejected by [`HtmlNode::render`]; the constructors
/// always fill them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Content without children. An untagged leaf renders as bare text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        props: Props,
    },
    /// An element whose content is entirely its children.
    Parent {
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        props: Props,
    },
}

impl HtmlNode {
    /// A tagged leaf, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            props: Props::new(),
        }
    }

    /// An untagged leaf that renders as its value verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            props: Props::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            props: Props::new(),
        }
    }

    /// Replaces this node's props.
    pub fn with_props(self, props: Props) -> Self {
        match self {
            HtmlNode::Leaf { tag, value, .. } => HtmlNode::Leaf { tag, value, props },
            HtmlNode::Parent { tag, children, .. } => HtmlNode::Parent {
                tag,
                children,
                props,
            },
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn props(&self) -> &Props {
        match self {
            HtmlNode::Leaf { props, .. } | HtmlNode::Parent { props, .. } => props,
        }
    }

    /// Children of a parent; empty for a leaf.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Parent {
                children: Some(children),
                ..
            } => children,
            _ => &[],
        }
    }

    /// Renders this node and its subtree to an HTML string.
    ///
    /// A tagged leaf renders as `<tag attrs>value</tag>`, except that an
    /// empty void element such as `img` renders as `<tag attrs>` alone.
    ///
    /// # Errors
    /// - [`HtmlError::MissingValue`] for a leaf without a value
    /// - [`HtmlError::MissingTag`] for a parent without a tag
    /// - [`HtmlError::MissingChildren`] for a parent without a children list
    ///   (an empty list is fine)
    ///
    /// The first error anywhere in the subtree aborts the whole render.
    pub fn render(&self) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), HtmlError> {
        match self {
            HtmlNode::Leaf { tag, value, props } => {
                let value = value.as_deref().ok_or(HtmlError::MissingValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) if value.is_empty() && is_void_element(tag) => {
                        out.push_str(&format!("<{tag}{}>", props_to_html(props)));
                    }
                    Some(tag) => {
                        out.push_str(&format!("<{tag}{}>{value}</{tag}>", props_to_html(props)));
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                props,
            } => {
                let tag = tag.as_deref().ok_or(HtmlError::MissingTag)?;
                let children = children.as_ref().ok_or_else(|| HtmlError::MissingChildren {
                    tag: tag.to_string(),
                })?;
                out.push_str(&format!("<{tag}{}>", props_to_html(props)));
                for child in children {
                    child.render_into(out)?;
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
        Ok(())
    }
}

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}
