use std::collections::HashSet;

use blueprint_model::{Layout, Node, NodeType, RefKind, RowColumn};

use super::checks::is_blank;
use super::NodeRule;

/// Reference structures (`content`, `slots`, `columns`) agree with `children`
///
/// Every referenced id must be an actual child (no dangling references),
/// every child must be referenced exactly once (no orphans), and capped
/// buckets such as header slots hold at most their capacity.
pub struct LayoutRule;

impl NodeRule for LayoutRule {
    fn name(&self) -> &'static str {
        "layout"
    }

    fn check(&self, node: &Node, _is_root: bool) -> Vec<String> {
        let mut reasons = Vec::new();

        if !layout_allowed(node, &mut reasons) {
            return reasons;
        }

        match &node.layout {
            Layout::RowColumns(columns) => check_row_columns(columns, &mut reasons),
            Layout::FooterColumns(columns) => {
                let mut seen = HashSet::new();
                for (i, column) in columns.iter().enumerate() {
                    if is_blank(&column.id) {
                        reasons.push(format!("columns[{}].id must be a non-empty string", i));
                    } else if !seen.insert(column.id.as_str()) {
                        reasons.push(format!("duplicate column id '{}'", column.id));
                    }
                }
            }
            _ => {}
        }

        check_partition(node, &mut reasons);
        reasons
    }
}

/// Returns false when the layout kind itself is wrong for the node type
fn layout_allowed(node: &Node, reasons: &mut Vec<String>) -> bool {
    match (node.node_type, &node.layout) {
        (NodeType::Header, Layout::Slots(_)) => true,
        (NodeType::Header, _) => {
            reasons.push("header requires slots { logo, right }".to_string());
            false
        }
        (NodeType::Footer, Layout::FooterColumns(_)) => true,
        (NodeType::Footer, _) => {
            reasons.push("footer requires a columns array".to_string());
            false
        }
        (NodeType::Row, Layout::RowColumns(_)) => true,
        (NodeType::Row, _) => {
            reasons.push("row requires a columns array".to_string());
            false
        }
        (_, Layout::None) => true,
        (t, Layout::Content(_)) if t.accepts_content() => true,
        (t, layout) => {
            reasons.push(format!(
                "'{}' is not allowed on '{}' nodes",
                layout.field_name().unwrap_or("layout"),
                t
            ));
            false
        }
    }
}

fn check_row_columns(columns: &[RowColumn], reasons: &mut Vec<String>) {
    for (i, column) in columns.iter().enumerate() {
        if column.span < 1 || column.span > RowColumn::GRID {
            reasons.push(format!(
                "columns[{}].span must be between 1 and {} (got {})",
                i,
                RowColumn::GRID,
                column.span
            ));
        }
        if column.offset > RowColumn::GRID - 1 {
            reasons.push(format!(
                "columns[{}].offset must be between 0 and {} (got {})",
                i,
                RowColumn::GRID - 1,
                column.offset
            ));
        }
    }
}

fn check_partition(node: &Node, reasons: &mut Vec<String>) {
    let Some(kind) = node.layout.kind() else {
        return;
    };

    let children: HashSet<&str> = node.child_ids().collect();
    let mut referenced: HashSet<&str> = HashSet::new();

    for bucket in node.layout.buckets() {
        let place = match kind {
            RefKind::Content => "content".to_string(),
            RefKind::Slot => format!("slot '{}'", bucket.label),
            RefKind::Column => format!("column '{}'", bucket.label),
        };

        if let Some(capacity) = bucket.capacity {
            if bucket.ids.len() > capacity {
                reasons.push(format!(
                    "{} holds {} ids (max {})",
                    place,
                    bucket.ids.len(),
                    capacity
                ));
            }
        }

        for id in bucket.ids {
            if is_blank(id) {
                reasons.push(format!("{} contains an empty id", place));
                continue;
            }
            if !children.contains(id.as_str()) {
                reasons.push(format!("{} references missing child '{}'", place, id));
            }
            if !referenced.insert(id.as_str()) {
                reasons.push(format!("'{}' is referenced more than once", id));
            }
        }
    }

    let owner = match kind {
        RefKind::Content => "content",
        RefKind::Slot => "any slot",
        RefKind::Column => "any column",
    };
    for id in node.child_ids() {
        if !referenced.contains(id) {
            reasons.push(format!("child '{}' is not referenced by {}", id, owner));
        }
    }
}
