//! Per-page index of widget annotations by field name.
//!
//! Built once when a document is loaded, the index lets the pipeline
//! stages address widgets by name without walking the object graph or
//! depending on library object identity.

use lopdf::ObjectId;

/// A named widget annotation and where it lives.
#[derive(Debug, Clone)]
pub struct WidgetRef {
    /// Page the widget belongs to
    pub page_id: ObjectId,
    /// The widget's annotation object
    pub annot_id: ObjectId,
    /// Decoded field name (`/T`)
    pub name: String,
}

/// All named widgets of a document, in page and annotation order.
#[derive(Debug, Clone, Default)]
pub struct WidgetIndex {
    widgets: Vec<WidgetRef>,
}

impl WidgetIndex {
    pub(crate) fn new(widgets: Vec<WidgetRef>) -> Self {
        Self { widgets }
    }

    pub fn iter(&self) -> impl Iterator<Item = &WidgetRef> {
        self.widgets.iter()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Whether any widget carries the given field name.
    pub fn contains(&self, name: &str) -> bool {
        self.widgets.iter().any(|w| w.name == name)
    }
}

impl<'a> IntoIterator for &'a WidgetIndex {
    type Item = &'a WidgetRef;
    type IntoIter = std::slice::Iter<'a, WidgetRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.widgets.iter()
    }
}
