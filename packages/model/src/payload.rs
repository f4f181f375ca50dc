//! # Node Payloads
//!
//! Typed `data` records, one per node type that carries a semantic payload.
//! Fields are optional so that incomplete documents still load; the
//! validator decides whether a field is required. Unknown keys land in each
//! record's `extra` map and survive a load/save round trip.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::node::NodeType;

/// Link target shared by buttons, headings, cards and navigation items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Href {
    Route {
        slug: String,
    },
    Url {
        href: String,
        #[serde(rename = "newTab", default, skip_serializing_if = "Option::is_none")]
        new_tab: Option<bool>,
    },
}

/// Navigation entry in header/footer data; not a tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub target: Href,
}

impl NavItem {
    pub fn route(id: impl Into<String>, label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            target: Href::Route { slug: slug.into() },
        }
    }

    pub fn url(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            target: Href::Url {
                href: href.into(),
                new_tab: None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderLayout {
    Top,
    Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileBehavior {
    Drawer,
    Collapse,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MobileNav {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<MobileBehavior>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    X,
    Linkedin,
    Youtube,
    Tiktok,
    Github,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub platform: SocialPlatform,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub links: Vec<NavItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderData {
    #[serde(default)]
    pub nav_items: Vec<NavItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<HeaderLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<MobileNav>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    #[serde(default)]
    pub nav_items: Vec<NavItem>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal: Option<Legal>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Href>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Href>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Href>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardAction {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<Href>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub actions: Vec<CardAction>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesData {
    #[serde(default)]
    pub items: Vec<FeatureItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryData {
    #[serde(default)]
    pub images: Vec<GalleryImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderData {
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsData {
    #[serde(default)]
    pub items: Vec<Testimonial>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Number,
    Password,
    Url,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextareaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub open: String,
    pub close: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Weekday,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub ranges: Vec<TimeRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<DaySchedule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGridData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_prices: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_totals: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A payload that could not be read against its node's schema
///
/// Kept verbatim so the document can still be validated and written back.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidPayload {
    /// Type tag the node was declared with
    pub type_name: String,
    pub raw: Value,
    pub error: String,
}

/// Semantic payload of a node, selected by the node's type
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Page(PageData),
    Header(HeaderData),
    Footer(FooterData),
    Heading(HeadingData),
    Paragraph(ParagraphData),
    List(ListData),
    Image(ImageData),
    Button(ButtonData),
    Badge(BadgeData),
    Card(CardData),
    Features(FeaturesData),
    Gallery(GalleryData),
    Slider(SliderData),
    Testimonials(TestimonialsData),
    Input(InputData),
    Textarea(TextareaData),
    Select(SelectData),
    Map(MapData),
    OpeningHours(OpeningHoursData),
    MenuGrid(MenuGridData),
    Cart(CartData),
    /// Structural types without a schema (section, container, row, column, component, divider)
    Generic(Map<String, Value>),
    /// Unreadable payload or unknown type, from lenient decoding
    Invalid(InvalidPayload),
}

impl NodeData {
    pub fn empty_for(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Page => NodeData::Page(PageData::default()),
            NodeType::Header => NodeData::Header(HeaderData::default()),
            NodeType::Footer => NodeData::Footer(FooterData::default()),
            NodeType::Heading => NodeData::Heading(HeadingData::default()),
            NodeType::Paragraph => NodeData::Paragraph(ParagraphData::default()),
            NodeType::List => NodeData::List(ListData::default()),
            NodeType::Image => NodeData::Image(ImageData::default()),
            NodeType::Button => NodeData::Button(ButtonData::default()),
            NodeType::Badge => NodeData::Badge(BadgeData::default()),
            NodeType::Card => NodeData::Card(CardData::default()),
            NodeType::Features => NodeData::Features(FeaturesData::default()),
            NodeType::Gallery => NodeData::Gallery(GalleryData::default()),
            NodeType::Slider => NodeData::Slider(SliderData::default()),
            NodeType::Testimonials => NodeData::Testimonials(TestimonialsData::default()),
            NodeType::Input => NodeData::Input(InputData::default()),
            NodeType::Textarea => NodeData::Textarea(TextareaData::default()),
            NodeType::Select => NodeData::Select(SelectData::default()),
            NodeType::Map => NodeData::Map(MapData::default()),
            NodeType::OpeningHours => NodeData::OpeningHours(OpeningHoursData::default()),
            NodeType::MenuGrid => NodeData::MenuGrid(MenuGridData::default()),
            NodeType::Cart => NodeData::Cart(CartData::default()),
            NodeType::Section
            | NodeType::Container
            | NodeType::Row
            | NodeType::Column
            | NodeType::Component
            | NodeType::Divider
            | NodeType::Unknown => NodeData::Generic(Map::new()),
        }
    }

    /// Decode a raw `data` object against the schema of `node_type`
    pub fn from_value(node_type: NodeType, value: Value) -> Result<Self, serde_json::Error> {
        use serde_json::from_value;

        Ok(match node_type {
            NodeType::Page => NodeData::Page(from_value(value)?),
            NodeType::Header => NodeData::Header(from_value(value)?),
            NodeType::Footer => NodeData::Footer(from_value(value)?),
            NodeType::Heading => NodeData::Heading(from_value(value)?),
            NodeType::Paragraph => NodeData::Paragraph(from_value(value)?),
            NodeType::List => NodeData::List(from_value(value)?),
            NodeType::Image => NodeData::Image(from_value(value)?),
            NodeType::Button => NodeData::Button(from_value(value)?),
            NodeType::Badge => NodeData::Badge(from_value(value)?),
            NodeType::Card => NodeData::Card(from_value(value)?),
            NodeType::Features => NodeData::Features(from_value(value)?),
            NodeType::Gallery => NodeData::Gallery(from_value(value)?),
            NodeType::Slider => NodeData::Slider(from_value(value)?),
            NodeType::Testimonials => NodeData::Testimonials(from_value(value)?),
            NodeType::Input => NodeData::Input(from_value(value)?),
            NodeType::Textarea => NodeData::Textarea(from_value(value)?),
            NodeType::Select => NodeData::Select(from_value(value)?),
            NodeType::Map => NodeData::Map(from_value(value)?),
            NodeType::OpeningHours => NodeData::OpeningHours(from_value(value)?),
            NodeType::MenuGrid => NodeData::MenuGrid(from_value(value)?),
            NodeType::Cart => NodeData::Cart(from_value(value)?),
            NodeType::Section
            | NodeType::Container
            | NodeType::Row
            | NodeType::Column
            | NodeType::Component
            | NodeType::Divider
            | NodeType::Unknown => NodeData::Generic(from_value(value)?),
        })
    }

    /// Whether this payload variant belongs to `node_type`
    pub fn matches(&self, node_type: NodeType) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(&NodeData::empty_for(node_type))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            NodeData::Generic(map) => map.is_empty(),
            NodeData::Invalid(invalid) => invalid.raw.is_null(),
            _ => false,
        }
    }

    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    /// Shallow-merge `patch` over this payload and re-type it for `node_type`
    pub fn merged(
        &self,
        node_type: NodeType,
        patch: &Map<String, Value>,
    ) -> Result<Self, serde_json::Error> {
        let mut map = self.to_map()?;
        for (key, value) in patch {
            map.insert(key.clone(), value.clone());
        }
        NodeData::from_value(node_type, Value::Object(map))
    }
}

impl Serialize for NodeData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NodeData::Page(d) => d.serialize(serializer),
            NodeData::Header(d) => d.serialize(serializer),
            NodeData::Footer(d) => d.serialize(serializer),
            NodeData::Heading(d) => d.serialize(serializer),
            NodeData::Paragraph(d) => d.serialize(serializer),
            NodeData::List(d) => d.serialize(serializer),
            NodeData::Image(d) => d.serialize(serializer),
            NodeData::Button(d) => d.serialize(serializer),
            NodeData::Badge(d) => d.serialize(serializer),
            NodeData::Card(d) => d.serialize(serializer),
            NodeData::Features(d) => d.serialize(serializer),
            NodeData::Gallery(d) => d.serialize(serializer),
            NodeData::Slider(d) => d.serialize(serializer),
            NodeData::Testimonials(d) => d.serialize(serializer),
            NodeData::Input(d) => d.serialize(serializer),
            NodeData::Textarea(d) => d.serialize(serializer),
            NodeData::Select(d) => d.serialize(serializer),
            NodeData::Map(d) => d.serialize(serializer),
            NodeData::OpeningHours(d) => d.serialize(serializer),
            NodeData::MenuGrid(d) => d.serialize(serializer),
            NodeData::Cart(d) => d.serialize(serializer),
            NodeData::Generic(d) => d.serialize(serializer),
            NodeData::Invalid(d) => d.raw.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_heading_round_trip_keeps_extra_keys() {
        let value = json!({
            "text": "Welcome",
            "level": 2,
            "href": { "kind": "url", "href": "https://example.com", "newTab": true },
            "animation": "fade"
        });
        let data = NodeData::from_value(NodeType::Heading, value.clone()).unwrap();
        match &data {
            NodeData::Heading(h) => {
                assert_eq!(h.level, Some(2));
                assert_eq!(h.extra.get("animation"), Some(&json!("fade")));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
        assert_eq!(serde_json::to_value(&data).unwrap(), value);
    }

    #[test]
    fn test_wrong_primitive_type_rejected() {
        let result = NodeData::from_value(NodeType::MenuGrid, json!({ "showPrices": "yes" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_nav_item_flattened_target() {
        let item: NavItem =
            serde_json::from_value(json!({ "id": "n1", "label": "Blog", "kind": "route", "slug": "blog" }))
                .unwrap();
        assert_eq!(item, NavItem::route("n1", "Blog", "blog"));
    }

    #[test]
    fn test_merged_is_shallow() {
        let data = NodeData::Paragraph(ParagraphData {
            text: Some("Hello".into()),
            align: Some(Align::Start),
            extra: Map::new(),
        });
        let patch = json!({ "text": "Bye" });
        let merged = data
            .merged(NodeType::Paragraph, patch.as_object().unwrap())
            .unwrap();
        match merged {
            NodeData::Paragraph(p) => {
                assert_eq!(p.text.as_deref(), Some("Bye"));
                assert_eq!(p.align, Some(Align::Start));
            }
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_matches_node_type() {
        assert!(NodeData::empty_for(NodeType::Cart).matches(NodeType::Cart));
        assert!(NodeData::Generic(Map::new()).matches(NodeType::Divider));
        assert!(!NodeData::Generic(Map::new()).matches(NodeType::Heading));
    }
}
