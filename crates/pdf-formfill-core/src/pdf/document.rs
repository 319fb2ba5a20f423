use lopdf::{Dictionary, Document, Object, ObjectId};

use super::index::{WidgetIndex, WidgetRef};
use super::widget;
use crate::error::{Error, Result};

/// In-memory model of a PDF form document.
///
/// Wraps the parsed object graph together with an index of named widget
/// annotations. Each pipeline stage owns the document exclusively and
/// passes it on by value; serialization happens once, when the pipeline
/// asks for the final bytes.
pub struct FormDocument {
    doc: Document,
    index: WidgetIndex,
    page_ids: Vec<ObjectId>,
}

/// Where the catalog keeps its AcroForm dictionary.
enum AcroFormSlot {
    Indirect(ObjectId),
    Inline,
    Absent,
}

impl FormDocument {
    /// Parse a document from raw PDF bytes.
    ///
    /// Page annotation lists are normalized on load: a list held behind a
    /// reference is inlined into the page dictionary, and annotations
    /// embedded directly in the list are promoted to indirect objects, so
    /// every annotation is addressable by object id afterwards.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut doc = Document::load_mem(bytes)
            .map_err(|e| Error::MalformedDocument(format!("failed to parse PDF: {e}")))?;

        let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
        for &page_id in &page_ids {
            normalize_annotations(&mut doc, page_id)?;
        }

        let index = build_index(&doc, &page_ids)?;
        Ok(Self {
            doc,
            index,
            page_ids,
        })
    }

    /// Serialize the document to bytes.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.doc
            .save_to(&mut output)
            .map_err(|e| Error::DocumentSave(e.to_string()))?;
        Ok(output)
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Page object ids in document order.
    pub fn page_ids(&self) -> &[ObjectId] {
        &self.page_ids
    }

    /// Index of named widget annotations.
    pub const fn widgets(&self) -> &WidgetIndex {
        &self.index
    }

    /// An annotation dictionary by object id.
    pub fn annotation(&self, id: ObjectId) -> Result<&Dictionary> {
        self.doc
            .get_object(id)
            .and_then(|obj| obj.as_dict())
            .map_err(|e| Error::MalformedDocument(format!("annotation {}: {e}", id.0)))
    }

    /// A mutable annotation dictionary by object id.
    pub fn annotation_mut(&mut self, id: ObjectId) -> Result<&mut Dictionary> {
        self.doc
            .get_object_mut(id)
            .and_then(|obj| obj.as_dict_mut())
            .map_err(|e| Error::MalformedDocument(format!("annotation {}: {e}", id.0)))
    }

    /// The page's annotation list. Empty if the page has none.
    ///
    /// Lists are normalized at load time, so entries are references.
    pub fn page_annotations(&self, page_id: ObjectId) -> Result<Vec<Object>> {
        let page = self.page_dict(page_id)?;
        match page.get(b"Annots") {
            Ok(Object::Array(items)) => Ok(items.clone()),
            _ => Ok(Vec::new()),
        }
    }

    /// Replace the page's annotation list.
    ///
    /// An empty list removes the `Annots` entry entirely; some PDF
    /// consumers treat an absent list differently from an empty one.
    pub fn set_page_annotations(&mut self, page_id: ObjectId, annots: Vec<Object>) -> Result<()> {
        let page = self
            .doc
            .get_object_mut(page_id)
            .and_then(|obj| obj.as_dict_mut())
            .map_err(|e| Error::MalformedDocument(format!("page {}: {e}", page_id.0)))?;

        if annots.is_empty() {
            page.remove(b"Annots");
        } else {
            page.set("Annots", Object::Array(annots));
        }
        Ok(())
    }

    /// Set the AcroForm's regenerate-appearances flag, if the document has
    /// a form-settings dictionary.
    ///
    /// Viewers otherwise render stale cached appearances after a field's
    /// value or flags change.
    pub fn set_needs_appearances(&mut self) -> Result<()> {
        let root_id = self
            .doc
            .trailer
            .get(b"Root")
            .and_then(|obj| obj.as_reference())
            .map_err(|e| Error::MalformedDocument(format!("missing document catalog: {e}")))?;

        let slot = {
            let catalog = self
                .doc
                .get_object(root_id)
                .and_then(|obj| obj.as_dict())
                .map_err(|e| Error::MalformedDocument(format!("document catalog: {e}")))?;
            match catalog.get(b"AcroForm") {
                Ok(Object::Reference(id)) => AcroFormSlot::Indirect(*id),
                Ok(Object::Dictionary(_)) => AcroFormSlot::Inline,
                _ => AcroFormSlot::Absent,
            }
        };

        match slot {
            AcroFormSlot::Indirect(id) => {
                if let Ok(Object::Dictionary(form)) = self.doc.get_object_mut(id) {
                    form.set("NeedAppearances", Object::Boolean(true));
                }
            }
            AcroFormSlot::Inline => {
                let catalog = self
                    .doc
                    .get_object_mut(root_id)
                    .and_then(|obj| obj.as_dict_mut())
                    .map_err(|e| Error::MalformedDocument(format!("document catalog: {e}")))?;
                if let Ok(Object::Dictionary(form)) = catalog.get_mut(b"AcroForm") {
                    form.set("NeedAppearances", Object::Boolean(true));
                }
            }
            AcroFormSlot::Absent => {}
        }
        Ok(())
    }

    /// Rebuild the widget index after structural changes such as
    /// annotation removal.
    pub(crate) fn reindex(&mut self) -> Result<()> {
        self.index = build_index(&self.doc, &self.page_ids)?;
        Ok(())
    }

    fn page_dict(&self, page_id: ObjectId) -> Result<&Dictionary> {
        self.doc
            .get_object(page_id)
            .and_then(|obj| obj.as_dict())
            .map_err(|e| Error::MalformedDocument(format!("page {}: {e}", page_id.0)))
    }
}

impl std::fmt::Debug for FormDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormDocument")
            .field("page_count", &self.page_ids.len())
            .field("widgets", &self.index.len())
            .finish()
    }
}

/// Bring a page's `Annots` into normal form: an inline array whose
/// entries are all references.
fn normalize_annotations(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    let entries = {
        let page = doc
            .get_object(page_id)
            .and_then(|obj| obj.as_dict())
            .map_err(|e| Error::MalformedDocument(format!("page {}: {e}", page_id.0)))?;

        match page.get(b"Annots") {
            Ok(Object::Array(items)) => items.clone(),
            Ok(Object::Reference(id)) => match doc.get_object(*id) {
                Ok(Object::Array(items)) => items.clone(),
                _ => return Ok(()),
            },
            _ => return Ok(()),
        }
    };

    let normalized: Vec<Object> = entries
        .into_iter()
        .map(|entry| match entry {
            Object::Dictionary(dict) => Object::Reference(doc.add_object(Object::Dictionary(dict))),
            other => other,
        })
        .collect();

    let page = doc
        .get_object_mut(page_id)
        .and_then(|obj| obj.as_dict_mut())
        .map_err(|e| Error::MalformedDocument(format!("page {}: {e}", page_id.0)))?;
    page.set("Annots", Object::Array(normalized));
    Ok(())
}

/// Scan every page's annotation list for named widgets.
fn build_index(doc: &Document, page_ids: &[ObjectId]) -> Result<WidgetIndex> {
    let mut widgets = Vec::new();

    for &page_id in page_ids {
        let page = doc
            .get_object(page_id)
            .and_then(|obj| obj.as_dict())
            .map_err(|e| Error::MalformedDocument(format!("page {}: {e}", page_id.0)))?;

        let Ok(Object::Array(entries)) = page.get(b"Annots") else {
            continue;
        };

        for entry in entries {
            let Ok(annot_id) = entry.as_reference() else {
                continue;
            };
            let Ok(dict) = doc.get_object(annot_id).and_then(|obj| obj.as_dict()) else {
                continue;
            };
            if !widget::is_widget(dict) {
                continue;
            }
            if let Some(name) = widget::field_name(dict) {
                widgets.push(WidgetRef {
                    page_id,
                    annot_id,
                    name,
                });
            }
        }
    }

    Ok(WidgetIndex::new(widgets))
}
