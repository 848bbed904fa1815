//! Pages documents as fetched from a remote JSON source.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::FormatError;
use crate::slug;

/// Keys accepted for the pages container, in lookup order.
pub const PAGE_CONTAINER_KEYS: [&str; 2] = ["pages", "Pages"];

/// Key of a page within its document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for PageId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A titled markdown page.
///
/// A missing or `null` title or body reads as empty. Fields other than
/// `title` and `bodyText` are kept in `extra` so a page survives an edit
/// without losing data it carried in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(rename = "bodyText", default, deserialize_with = "null_as_empty")]
    pub body_text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whether a container candidate counts as present. `null`, `false`, `0` and
/// `""` do not, so lookup moves on to the next key.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl Page {
    pub fn slug(&self) -> String {
        slug::slugify(&self.title)
    }
}

/// An ordered set of pages plus whatever else the payload carried.
///
/// Page order is the order of the keys in the source JSON and drives the
/// menu order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pages: Vec<(PageId, Page)>,
    extra: Map<String, Value>,
}

impl Document {
    /// Interpret a decoded payload.
    ///
    /// The pages container is looked up under each of [`PAGE_CONTAINER_KEYS`]
    /// in turn; the first one holding a present value wins (`null`, `false`,
    /// `0` and `""` are skipped). Every other top-level field is kept as-is.
    pub fn from_payload(payload: Value) -> Result<Self, FormatError> {
        let Value::Object(mut root) = payload else {
            return Err(FormatError::NotAnObject);
        };

        let key = PAGE_CONTAINER_KEYS
            .iter()
            .find(|key| root.get(**key).is_some_and(is_present))
            .ok_or(FormatError::MissingPages)?;

        let Some(Value::Object(container)) = root.remove(*key) else {
            return Err(FormatError::InvalidContainer {
                key: (*key).to_owned(),
            });
        };

        let mut pages = Vec::with_capacity(container.len());
        for (id, value) in container {
            let page = serde_json::from_value::<Page>(value).map_err(|e| {
                FormatError::InvalidPage {
                    id: id.clone(),
                    message: e.to_string(),
                }
            })?;
            pages.push((PageId(id), page));
        }

        tracing::debug!(container = *key, pages = pages.len(), "parsed pages document");
        Ok(Self { pages, extra: root })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> impl Iterator<Item = (&PageId, &Page)> {
        self.pages.iter().map(|(id, page)| (id, page))
    }

    pub fn first_id(&self) -> Option<&PageId> {
        self.pages.first().map(|(id, _)| id)
    }

    pub fn get(&self, id: &str) -> Option<&Page> {
        self.pages
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, page)| page)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// First page, in document order, whose title slugs to `slug`.
    pub fn find_by_slug(&self, slug: &str) -> Option<&PageId> {
        self.pages
            .iter()
            .find(|(_, page)| page.slug() == slug)
            .map(|(id, _)| id)
    }

    /// Top-level payload fields other than the pages container.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// A copy of this document with the page under `id` replaced.
    ///
    /// The page keeps its position; an unknown id is appended.
    pub fn with_page(&self, id: PageId, page: Page) -> Self {
        let mut next = self.clone();
        next.upsert(id, page);
        next
    }

    fn upsert(&mut self, id: PageId, page: Page) {
        match self.pages.iter().position(|(key, _)| *key == id) {
            Some(index) => self.pages[index].1 = page,
            None => self.pages.push((id, page)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn two_pages(key: &str) -> Value {
        json!({
            key: {
                "a": { "title": "A", "bodyText": "x" },
                "b": { "title": "B", "bodyText": "y" }
            },
            "version": 3
        })
    }

    #[test]
    fn lower_and_upper_container_keys_parse_identically() {
        let lower = Document::from_payload(two_pages("pages")).unwrap();
        let upper = Document::from_payload(two_pages("Pages")).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 2);
        assert_eq!(lower.extra().get("version"), Some(&json!(3)));
    }

    #[test]
    fn lowercase_container_wins_when_both_present() {
        let doc = Document::from_payload(json!({
            "pages": { "low": { "title": "Low", "bodyText": "" } },
            "Pages": { "up": { "title": "Up", "bodyText": "" } }
        }))
        .unwrap();
        assert!(doc.contains("low"));
        assert!(!doc.contains("up"));
        assert!(doc.extra().contains_key("Pages"));
    }

    #[test]
    fn null_lowercase_falls_through_to_uppercase() {
        let doc = Document::from_payload(json!({
            "pages": null,
            "Pages": { "up": { "title": "Up" } }
        }))
        .unwrap();
        assert_eq!(doc.get("up").map(|p| p.body_text.as_str()), Some(""));
    }

    #[test]
    fn missing_container_is_rejected() {
        let err = Document::from_payload(json!({ "PAGES": {} })).unwrap_err();
        assert_eq!(err, FormatError::MissingPages);
        let err = Document::from_payload(json!([1, 2])).unwrap_err();
        assert_eq!(err, FormatError::NotAnObject);
        let err = Document::from_payload(json!({ "pages": ["a"] })).unwrap_err();
        assert!(matches!(err, FormatError::InvalidContainer { key } if key == "pages"));
    }

    #[test]
    fn falsy_lowercase_falls_through_to_uppercase() {
        for falsy in [json!(false), json!(0), json!("")] {
            let doc = Document::from_payload(json!({
                "pages": falsy,
                "Pages": { "up": { "title": "Up" } }
            }))
            .unwrap();
            assert!(doc.contains("up"));
        }
    }

    #[test]
    fn null_or_missing_page_fields_read_as_empty() {
        let doc = Document::from_payload(json!({
            "pages": {
                "a": { "title": "A", "bodyText": "x" },
                "b": { "title": "B", "bodyText": null },
                "c": { "title": null },
                "d": {}
            }
        }))
        .unwrap();
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.get("b").map(|p| p.body_text.as_str()), Some(""));
        assert_eq!(doc.get("c").map(|p| p.title.as_str()), Some(""));
        assert_eq!(doc.get("d"), Some(&Page::default()));
    }

    #[test]
    fn malformed_page_names_its_id() {
        let err = Document::from_payload(json!({ "pages": { "bad": { "bodyText": 1 } } }))
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidPage { id, .. } if id == "bad"));
    }

    #[test]
    fn empty_container_is_a_valid_document() {
        let doc = Document::from_payload(json!({ "pages": {} })).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.first_id(), None);
    }

    #[test]
    fn key_order_is_preserved() {
        let payload: Value = serde_json::from_str(
            r#"{"pages":{"zeta":{"title":"Z"},"alpha":{"title":"A"},"mid":{"title":"M"}}}"#,
        )
        .unwrap();
        let doc = Document::from_payload(payload).unwrap();
        let ids: Vec<_> = doc.pages().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn slug_lookup_returns_first_match() {
        let doc = Document::from_payload(json!({
            "pages": {
                "one": { "title": "Same  Title", "bodyText": "1" },
                "two": { "title": "Same Title", "bodyText": "2" }
            }
        }))
        .unwrap();
        assert_eq!(doc.find_by_slug("Same-Title").map(PageId::as_str), Some("one"));
        assert_eq!(doc.find_by_slug("Other"), None);
    }

    #[test]
    fn with_page_keeps_position_and_extras() {
        let doc = Document::from_payload(json!({
            "pages": {
                "a": { "title": "A", "bodyText": "x", "tags": ["t"] },
                "b": { "title": "B", "bodyText": "y" }
            }
        }))
        .unwrap();
        let mut page = doc.get("a").cloned().unwrap();
        page.body_text = "changed".into();
        let next = doc.with_page(PageId::from("a"), page);

        assert_eq!(next.first_id().map(PageId::as_str), Some("a"));
        assert_eq!(next.get("a").unwrap().extra.get("tags"), Some(&json!(["t"])));
        assert_eq!(doc.get("a").unwrap().body_text, "x");
        assert_eq!(next.get("a").unwrap().body_text, "changed");
    }
}
