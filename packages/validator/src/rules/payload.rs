use std::collections::HashSet;

use blueprint_model::{Node, NodeData, NodeType, OpeningHoursData, Weekday};

use super::checks::{self, is_blank};
use super::NodeRule;

/// Per-type payload schemas
pub struct PayloadRule;

impl NodeRule for PayloadRule {
    fn name(&self) -> &'static str {
        "payload"
    }

    fn check(&self, node: &Node, _is_root: bool) -> Vec<String> {
        let mut reasons = Vec::new();
        let r = &mut reasons;

        match &node.data {
            NodeData::Page(data) => {
                checks::optional_text(r, "data.title", data.title.as_deref());
            }
            NodeData::Heading(data) => {
                checks::require_text(r, "data.text", data.text.as_deref());
                match data.level {
                    None => r.push("data.level is required".to_string()),
                    Some(level) => checks::int_in_range(r, "data.level", level, 1, 6),
                }
                if let Some(href) = &data.href {
                    checks::href(r, "data.href", href);
                }
            }
            NodeData::Paragraph(data) => {
                checks::require_text(r, "data.text", data.text.as_deref());
            }
            NodeData::List(data) => match &data.items {
                None => r.push("data.items is required".to_string()),
                Some(items) if items.is_empty() => {
                    r.push("data.items must contain at least one item".to_string())
                }
                Some(items) => {
                    for (i, item) in items.iter().enumerate() {
                        if is_blank(item) {
                            r.push(format!("data.items[{}] must be a non-empty string", i));
                        }
                    }
                }
            },
            NodeData::Image(data) => {
                checks::require_text(r, "data.src", data.src.as_deref());
                checks::require_text(r, "data.alt", data.alt.as_deref());
                if let Some(href) = &data.href {
                    checks::href(r, "data.href", href);
                }
            }
            NodeData::Button(data) => {
                checks::require_text(r, "data.label", data.label.as_deref());
                checks::optional_text(r, "data.variant", data.variant.as_deref());
                if let Some(href) = &data.href {
                    checks::href(r, "data.href", href);
                }
            }
            NodeData::Badge(data) => {
                checks::require_text(r, "data.text", data.text.as_deref());
            }
            NodeData::Card(data) => {
                checks::require_text(r, "data.title", data.title.as_deref());
                checks::optional_text(r, "data.body", data.body.as_deref());
                checks::optional_text(r, "data.image", data.image.as_deref());
                for (i, action) in data.actions.iter().enumerate() {
                    let field = format!("data.actions[{}]", i);
                    if is_blank(&action.label) {
                        r.push(format!("{}.label must be a non-empty string", field));
                    }
                    if let Some(href) = &action.href {
                        checks::href(r, &format!("{}.href", field), href);
                    }
                }
            }
            NodeData::Features(data) => {
                for (i, item) in data.items.iter().enumerate() {
                    if is_blank(&item.title) {
                        r.push(format!("data.items[{}].title must be a non-empty string", i));
                    }
                }
            }
            NodeData::Gallery(data) => {
                for (i, image) in data.images.iter().enumerate() {
                    if is_blank(&image.src) {
                        r.push(format!("data.images[{}].src must be a non-empty string", i));
                    }
                    if is_blank(&image.alt) {
                        r.push(format!("data.images[{}].alt must be a non-empty string", i));
                    }
                }
                if let Some(columns) = data.columns {
                    checks::int_in_range(r, "data.columns", columns, 1, 6);
                }
            }
            NodeData::Slider(data) => {
                for (i, slide) in data.slides.iter().enumerate() {
                    if is_blank(&slide.src) {
                        r.push(format!("data.slides[{}].src must be a non-empty string", i));
                    }
                }
                if let Some(interval) = data.interval_ms {
                    if interval <= 0 {
                        r.push(format!("data.intervalMs must be positive (got {})", interval));
                    }
                }
            }
            NodeData::Testimonials(data) => {
                for (i, item) in data.items.iter().enumerate() {
                    if is_blank(&item.quote) {
                        r.push(format!("data.items[{}].quote must be a non-empty string", i));
                    }
                    if is_blank(&item.author) {
                        r.push(format!("data.items[{}].author must be a non-empty string", i));
                    }
                }
            }
            NodeData::Input(data) => {
                checks::require_text(r, "data.name", data.name.as_deref());
                checks::optional_text(r, "data.label", data.label.as_deref());
            }
            NodeData::Textarea(data) => {
                checks::require_text(r, "data.name", data.name.as_deref());
                checks::optional_text(r, "data.label", data.label.as_deref());
                if let Some(rows) = data.rows {
                    checks::int_in_range(r, "data.rows", rows, 1, 50);
                }
            }
            NodeData::Select(data) => {
                checks::require_text(r, "data.name", data.name.as_deref());
                checks::optional_text(r, "data.label", data.label.as_deref());
                if data.options.is_empty() {
                    r.push("data.options must contain at least one option".to_string());
                }
                let mut values = HashSet::new();
                for (i, option) in data.options.iter().enumerate() {
                    if is_blank(&option.label) {
                        r.push(format!("data.options[{}].label must be a non-empty string", i));
                    }
                    if is_blank(&option.value) {
                        r.push(format!("data.options[{}].value must be a non-empty string", i));
                    } else if !values.insert(option.value.as_str()) {
                        r.push(format!("data.options has duplicate value '{}'", option.value));
                    }
                }
            }
            NodeData::Map(data) => {
                match (data.lat, data.lng) {
                    (Some(lat), Some(lng)) => {
                        if !(-90.0..=90.0).contains(&lat) {
                            r.push(format!("data.lat must be between -90 and 90 (got {})", lat));
                        }
                        if !(-180.0..=180.0).contains(&lng) {
                            r.push(format!("data.lng must be between -180 and 180 (got {})", lng));
                        }
                    }
                    (None, None) => {}
                    _ => r.push("data.lat and data.lng must be provided together".to_string()),
                }
                if let Some(zoom) = data.zoom {
                    checks::int_in_range(r, "data.zoom", zoom, 0, 22);
                }
                checks::optional_text(r, "data.address", data.address.as_deref());
            }
            NodeData::OpeningHours(data) => check_opening_hours(data, r),
            NodeData::MenuGrid(data) => {
                checks::optional_text(r, "data.title", data.title.as_deref());
                checks::optional_text(r, "data.category", data.category.as_deref());
                if let Some(columns) = data.columns {
                    checks::int_in_range(r, "data.columns", columns, 1, 4);
                }
                checks::currency(r, "data.currency", data.currency.as_deref());
            }
            NodeData::Cart(data) => {
                checks::optional_text(r, "data.title", data.title.as_deref());
                checks::optional_text(r, "data.checkoutLabel", data.checkout_label.as_deref());
                checks::currency(r, "data.currency", data.currency.as_deref());
            }
            // Unknown types are reported by the identity rule
            NodeData::Invalid(_) if node.node_type == NodeType::Unknown => {}
            NodeData::Invalid(invalid) => {
                r.push(format!("data does not fit the '{}' schema: {}", node.node_type, invalid.error))
            }
            NodeData::Header(_) | NodeData::Footer(_) | NodeData::Generic(_) => {}
        }

        reasons
    }
}

/// A schedule, when present, lists each weekday once with ordered,
/// non-overlapping `HH:MM` ranges; closed days carry no ranges.
fn check_opening_hours(data: &OpeningHoursData, r: &mut Vec<String>) {
    checks::optional_text(r, "data.title", data.title.as_deref());

    let Some(schedule) = &data.schedule else {
        return;
    };

    if schedule.len() != Weekday::ALL.len() {
        r.push(format!(
            "data.schedule must list 7 days (got {})",
            schedule.len()
        ));
    }

    let mut days = HashSet::new();
    for (i, entry) in schedule.iter().enumerate() {
        let field = format!("data.schedule[{}]", i);
        if !days.insert(entry.day) {
            r.push(format!("{}.day {:?} appears more than once", field, entry.day));
        }
        if entry.closed {
            if !entry.ranges.is_empty() {
                r.push(format!("{} is closed but lists opening ranges", field));
            }
            continue;
        }
        if entry.ranges.is_empty() {
            r.push(format!("{} must be closed or list at least one range", field));
        }

        let mut previous_close: Option<u32> = None;
        for (j, range) in entry.ranges.iter().enumerate() {
            let range_field = format!("{}.ranges[{}]", field, j);
            let open = checks::parse_time(&range.open);
            let close = checks::parse_time(&range.close);
            if open.is_none() {
                r.push(format!("{}.open must be HH:MM (got '{}')", range_field, range.open));
            }
            if close.is_none() {
                r.push(format!("{}.close must be HH:MM (got '{}')", range_field, range.close));
            }
            let (Some(open), Some(close)) = (open, close) else {
                continue;
            };
            if open >= close {
                r.push(format!("{} must open before it closes", range_field));
            }
            if previous_close.is_some_and(|prev| open < prev) {
                r.push(format!("{} overlaps the previous range", range_field));
            }
            previous_close = Some(close);
        }
    }
}
