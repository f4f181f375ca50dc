//! Field-level helpers shared by the payload, header and footer rules.

use std::collections::HashSet;

use blueprint_model::{Href, NavItem};

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `field` must be present and non-empty
pub fn require_text(reasons: &mut Vec<String>, field: &str, value: Option<&str>) {
    match value {
        None => reasons.push(format!("{} is required", field)),
        Some(v) if is_blank(v) => reasons.push(format!("{} must be a non-empty string", field)),
        Some(_) => {}
    }
}

/// `field` may be absent, but not empty
pub fn optional_text(reasons: &mut Vec<String>, field: &str, value: Option<&str>) {
    if let Some(v) = value {
        if is_blank(v) {
            reasons.push(format!("{} must be a non-empty string when provided", field));
        }
    }
}

pub fn int_in_range(reasons: &mut Vec<String>, field: &str, value: i64, min: i64, max: i64) {
    if value < min || value > max {
        reasons.push(format!(
            "{} must be an integer between {} and {} (got {})",
            field, min, max, value
        ));
    }
}

pub fn href(reasons: &mut Vec<String>, field: &str, href: &Href) {
    match href {
        Href::Route { slug } => {
            if is_blank(slug) {
                reasons.push(format!("{}.slug is required for route links", field));
            }
        }
        Href::Url { href, .. } => {
            if is_blank(href) {
                reasons.push(format!("{}.href is required for url links", field));
            }
        }
    }
}

/// Ids unique, labels non-empty, targets complete
pub fn nav_items(reasons: &mut Vec<String>, field: &str, items: &[NavItem]) {
    let mut seen = HashSet::new();
    for (i, item) in items.iter().enumerate() {
        let item_field = format!("{}[{}]", field, i);
        if is_blank(&item.id) {
            reasons.push(format!("{}.id must be a non-empty string", item_field));
        } else if !seen.insert(item.id.as_str()) {
            reasons.push(format!("{} has duplicate id '{}'", field, item.id));
        }
        if is_blank(&item.label) {
            reasons.push(format!("{}.label must be a non-empty string", item_field));
        }
        href(reasons, &item_field, &item.target);
    }
}

/// ISO-4217 style code: three uppercase ASCII letters
pub fn currency(reasons: &mut Vec<String>, field: &str, value: Option<&str>) {
    if let Some(code) = value {
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            reasons.push(format!(
                "{} must be a three-letter uppercase currency code (got '{}')",
                field, code
            ));
        }
    }
}

/// Minutes since midnight for `HH:MM`; `24:00` is accepted as end of day
pub fn parse_time(value: &str) -> Option<u32> {
    let (hours, minutes) = value.split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    match (hours, minutes) {
        (24, 0) => Some(24 * 60),
        (h, m) if h < 24 && m < 60 => Some(h * 60 + m),
        _ => None,
    }
}
