//! # Blueprint Nodes
//!
//! The document tree is made of [`Node`]s. Every node owns its children
//! exclusively; children are held behind [`Arc`] so that consecutive
//! snapshots share every subtree an edit did not touch.
//!
//! ```text
//! page
//!  ├── header   (slots: logo / right)
//!  ├── section  (content: [..])
//!  │    └── container ── row (columns: [{span, offset, content}])
//!  └── footer   (columns: [{id, content}])
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::decode::decode_node;
use crate::error::ModelError;
use crate::layout::Layout;
use crate::payload::NodeData;

/// Presentation-only style map, never inspected by validation
pub type Styles = BTreeMap<String, Value>;

/// Closed set of node types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Page,
    Header,
    Section,
    Footer,
    Container,
    Row,
    Column,
    Component,
    Heading,
    Paragraph,
    List,
    Image,
    Button,
    Badge,
    Divider,
    Card,
    Features,
    Gallery,
    Slider,
    Testimonials,
    Input,
    Textarea,
    Select,
    Map,
    OpeningHours,
    MenuGrid,
    Cart,
    /// Placeholder for a type tag outside the closed set; only produced by
    /// lenient decoding, never serialized on its own
    #[serde(skip)]
    Unknown,
}

impl NodeType {
    pub const ALL: [NodeType; 27] = [
        NodeType::Page,
        NodeType::Header,
        NodeType::Section,
        NodeType::Footer,
        NodeType::Container,
        NodeType::Row,
        NodeType::Column,
        NodeType::Component,
        NodeType::Heading,
        NodeType::Paragraph,
        NodeType::List,
        NodeType::Image,
        NodeType::Button,
        NodeType::Badge,
        NodeType::Divider,
        NodeType::Card,
        NodeType::Features,
        NodeType::Gallery,
        NodeType::Slider,
        NodeType::Testimonials,
        NodeType::Input,
        NodeType::Textarea,
        NodeType::Select,
        NodeType::Map,
        NodeType::OpeningHours,
        NodeType::MenuGrid,
        NodeType::Cart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Page => "page",
            NodeType::Header => "header",
            NodeType::Section => "section",
            NodeType::Footer => "footer",
            NodeType::Container => "container",
            NodeType::Row => "row",
            NodeType::Column => "column",
            NodeType::Component => "component",
            NodeType::Heading => "heading",
            NodeType::Paragraph => "paragraph",
            NodeType::List => "list",
            NodeType::Image => "image",
            NodeType::Button => "button",
            NodeType::Badge => "badge",
            NodeType::Divider => "divider",
            NodeType::Card => "card",
            NodeType::Features => "features",
            NodeType::Gallery => "gallery",
            NodeType::Slider => "slider",
            NodeType::Testimonials => "testimonials",
            NodeType::Input => "input",
            NodeType::Textarea => "textarea",
            NodeType::Select => "select",
            NodeType::Map => "map",
            NodeType::OpeningHours => "opening_hours",
            NodeType::MenuGrid => "menu_grid",
            NodeType::Cart => "cart",
            NodeType::Unknown => "unknown",
        }
    }

    /// Leaf types never own children
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeType::Component
                | NodeType::Heading
                | NodeType::Paragraph
                | NodeType::List
                | NodeType::Image
                | NodeType::Button
                | NodeType::Badge
                | NodeType::Divider
                | NodeType::Card
                | NodeType::Input
                | NodeType::Textarea
                | NodeType::Select
                | NodeType::Map
                | NodeType::OpeningHours
                | NodeType::MenuGrid
                | NodeType::Cart
        )
    }

    /// Types that may be created as a wrapper around an existing node
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeType::Section | NodeType::Container | NodeType::Row | NodeType::Column
        )
    }

    /// Types whose `content` array selects and orders their children
    pub fn accepts_content(&self) -> bool {
        matches!(self, NodeType::Section | NodeType::Container | NodeType::Column)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown node type '{}'", s))
    }
}

/// A single node of the blueprint tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Node {
    pub id: String,
    pub node_type: NodeType,
    pub data: NodeData,
    pub styles: Styles,
    pub children: Vec<Arc<Node>>,
    pub layout: Layout,
}

impl Node {
    /// Create an empty node with the default payload and reference layout for its type
    pub fn new(node_type: NodeType, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type,
            data: NodeData::empty_for(node_type),
            styles: Styles::new(),
            children: Vec::new(),
            layout: Layout::default_for(node_type),
        }
    }

    pub fn with_data(mut self, data: NodeData) -> Self {
        self.data = data;
        self
    }

    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Append children without touching the reference layout
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children.into_iter().map(Arc::new));
        self
    }

    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|c| c.id.as_str())
    }

    pub fn child_index(&self, id: &str) -> Option<usize> {
        self.children.iter().position(|c| c.id == id)
    }

    /// Type tag as written on the wire; unknown types keep their original tag
    pub fn type_tag(&self) -> &str {
        match (&self.node_type, &self.data) {
            (NodeType::Unknown, NodeData::Invalid(invalid)) => &invalid.type_name,
            (node_type, _) => node_type.as_str(),
        }
    }

    /// Pre-order walk over this node and every descendant
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

impl TryFrom<Value> for Node {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        decode_node(value)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("type", self.type_tag())?;
        if !self.data.is_empty() {
            map.serialize_entry("data", &self.data)?;
        }
        if !self.styles.is_empty() {
            map.serialize_entry("styles", &self.styles)?;
        }
        map.serialize_entry("children", &self.children)?;
        match &self.layout {
            Layout::None => {}
            Layout::Content(ids) => map.serialize_entry("content", ids)?,
            Layout::Slots(slots) => map.serialize_entry("slots", slots)?,
            Layout::FooterColumns(columns) => map.serialize_entry("columns", columns)?,
            Layout::RowColumns(columns) => map.serialize_entry("columns", columns)?,
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_type_round_trip() {
        for node_type in NodeType::ALL {
            let json = serde_json::to_string(&node_type).unwrap();
            assert_eq!(json, format!("\"{}\"", node_type.as_str()));
            assert_eq!(node_type.as_str().parse::<NodeType>().unwrap(), node_type);
        }
    }

    #[test]
    fn test_leaf_types() {
        assert!(NodeType::Heading.is_leaf());
        assert!(NodeType::Cart.is_leaf());
        assert!(!NodeType::Features.is_leaf());
        assert!(!NodeType::Section.is_leaf());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result: Result<Node, _> =
            serde_json::from_value(json!({ "id": "x", "type": "marquee", "children": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_content_on_header_rejected() {
        let result: Result<Node, _> = serde_json::from_value(json!({
            "id": "h", "type": "header", "children": [], "content": []
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("content"), "{}", err);
    }

    #[test]
    fn test_columns_typed_by_owner() {
        let row: Node = serde_json::from_value(json!({
            "id": "r", "type": "row", "children": [],
            "columns": [{ "span": 6, "offset": 0, "content": [] }]
        }))
        .unwrap();
        assert!(matches!(row.layout, Layout::RowColumns(ref c) if c[0].span == 6));

        let footer: Node = serde_json::from_value(json!({
            "id": "f", "type": "footer", "children": [],
            "columns": [{ "id": "c1", "content": [] }]
        }))
        .unwrap();
        assert!(matches!(footer.layout, Layout::FooterColumns(ref c) if c[0].id == "c1"));
    }

    #[test]
    fn test_serialize_keeps_wire_names() {
        let node = Node::new(NodeType::Section, "s1").with_layout(Layout::Content(vec![]));
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({ "id": "s1", "type": "section", "children": [], "content": [] })
        );
    }
}
