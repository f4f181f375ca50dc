//! # Reference Layouts
//!
//! Some node types render their children through a reference structure
//! instead of the plain `children` order:
//!
//! - `content` on section/container/column: ordered ids of the node's children
//! - `slots` on header: `logo` and `right`, each holding at most one id
//! - `columns` on footer: named buckets of child ids
//! - `columns` on row: grid columns (`span`, `offset`) of child ids
//!
//! All four are the same shape underneath: the node's children partitioned
//! into labeled buckets, optionally capped in size. [`Layout::buckets`]
//! exposes that shape so integrity checks and edits can treat them uniformly.

use serde::{Deserialize, Serialize};

use crate::node::NodeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotName {
    Logo,
    Right,
}

impl SlotName {
    pub const ALL: [SlotName; 2] = [SlotName::Logo, SlotName::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::Logo => "logo",
            SlotName::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderSlots {
    #[serde(default)]
    pub logo: Vec<String>,
    #[serde(default)]
    pub right: Vec<String>,
}

impl HeaderSlots {
    pub fn get(&self, slot: SlotName) -> &[String] {
        match slot {
            SlotName::Logo => &self.logo,
            SlotName::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, slot: SlotName) -> &mut Vec<String> {
        match slot {
            SlotName::Logo => &mut self.logo,
            SlotName::Right => &mut self.right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub id: String,
    #[serde(default)]
    pub content: Vec<String>,
}

impl FooterColumn {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowColumn {
    pub span: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub content: Vec<String>,
}

impl RowColumn {
    pub const GRID: u32 = 12;

    pub fn full_width() -> Self {
        Self {
            span: Self::GRID,
            offset: 0,
            content: Vec::new(),
        }
    }
}

/// How a node's children are referenced for rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Layout {
    /// Children render in `children` order
    #[default]
    None,
    Content(Vec<String>),
    Slots(HeaderSlots),
    FooterColumns(Vec<FooterColumn>),
    RowColumns(Vec<RowColumn>),
}

/// Kind of reference structure, used to phrase diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Content,
    Slot,
    Column,
}

impl RefKind {
    pub fn noun(&self) -> &'static str {
        match self {
            RefKind::Content => "content",
            RefKind::Slot => "slot",
            RefKind::Column => "column",
        }
    }
}

/// One labeled bucket of child references
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<'a> {
    pub label: String,
    pub ids: &'a [String],
    pub capacity: Option<usize>,
}

impl Layout {
    pub fn default_for(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Header => Layout::Slots(HeaderSlots::default()),
            NodeType::Footer => Layout::FooterColumns(Vec::new()),
            NodeType::Row => Layout::RowColumns(Vec::new()),
            _ => Layout::None,
        }
    }

    pub fn kind(&self) -> Option<RefKind> {
        match self {
            Layout::None => None,
            Layout::Content(_) => Some(RefKind::Content),
            Layout::Slots(_) => Some(RefKind::Slot),
            Layout::FooterColumns(_) | Layout::RowColumns(_) => Some(RefKind::Column),
        }
    }

    /// Wire field name of this layout
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            Layout::None => None,
            Layout::Content(_) => Some("content"),
            Layout::Slots(_) => Some("slots"),
            Layout::FooterColumns(_) | Layout::RowColumns(_) => Some("columns"),
        }
    }

    pub fn buckets(&self) -> Vec<Bucket<'_>> {
        match self {
            Layout::None => Vec::new(),
            Layout::Content(ids) => vec![Bucket {
                label: "content".to_string(),
                ids,
                capacity: None,
            }],
            Layout::Slots(slots) => SlotName::ALL
                .iter()
                .map(|slot| Bucket {
                    label: slot.as_str().to_string(),
                    ids: slots.get(*slot),
                    capacity: Some(1),
                })
                .collect(),
            Layout::FooterColumns(columns) => columns
                .iter()
                .map(|c| Bucket {
                    label: c.id.clone(),
                    ids: &c.content,
                    capacity: None,
                })
                .collect(),
            Layout::RowColumns(columns) => columns
                .iter()
                .enumerate()
                .map(|(i, c)| Bucket {
                    label: i.to_string(),
                    ids: &c.content,
                    capacity: None,
                })
                .collect(),
        }
    }

    fn id_lists_mut(&mut self) -> Vec<&mut Vec<String>> {
        match self {
            Layout::None => Vec::new(),
            Layout::Content(ids) => vec![ids],
            Layout::Slots(slots) => vec![&mut slots.logo, &mut slots.right],
            Layout::FooterColumns(columns) => columns.iter_mut().map(|c| &mut c.content).collect(),
            Layout::RowColumns(columns) => columns.iter_mut().map(|c| &mut c.content).collect(),
        }
    }

    pub fn references(&self, id: &str) -> bool {
        self.buckets().iter().any(|b| b.ids.iter().any(|r| r == id))
    }

    /// Strip every reference to `id`; returns whether anything was removed
    pub fn remove_ref(&mut self, id: &str) -> bool {
        let mut removed = false;
        for ids in self.id_lists_mut() {
            let before = ids.len();
            ids.retain(|r| r != id);
            removed |= ids.len() != before;
        }
        removed
    }

    /// Swap `old` for `new` in place, keeping bucket and position
    pub fn replace_ref(&mut self, old: &str, new: &str) -> bool {
        let mut replaced = false;
        for ids in self.id_lists_mut() {
            for r in ids.iter_mut().filter(|r| r.as_str() == old) {
                *r = new.to_string();
                replaced = true;
            }
        }
        replaced
    }
}
