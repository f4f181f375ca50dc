use crate::id_generator::generate_node_id;
use crate::layout::{HeaderSlots, Layout};
use crate::node::{Node, NodeType};
use crate::payload::{FooterData, HeaderData, Legal, NodeData};

/// Build the canonical empty document: `page` → `header`, `section`, `footer`
pub fn create_initial_skeleton() -> Node {
    let header = Node::new(NodeType::Header, generate_node_id("header"))
        .with_data(NodeData::Header(HeaderData::default()))
        .with_layout(Layout::Slots(HeaderSlots::default()));

    let section = Node::new(NodeType::Section, generate_node_id("section"))
        .with_layout(Layout::Content(Vec::new()));

    let footer = Node::new(NodeType::Footer, generate_node_id("footer"))
        .with_data(NodeData::Footer(FooterData {
            legal: Some(Legal::default()),
            ..FooterData::default()
        }))
        .with_layout(Layout::FooterColumns(Vec::new()));

    Node::new(NodeType::Page, generate_node_id("page")).with_children([header, section, footer])
}
