use std::collections::HashMap;

use lopdf::Object;
use tracing::debug;

use crate::error::Result;
use crate::pdf::{FormDocument, field_name, is_widget};

/// Show or hide the widgets named in `visibility`.
///
/// Each page's annotation list is rebuilt: a widget mapped to `true` gets
/// its annotation flag word reset to 0 and stays in the list; a widget
/// mapped to `false` is removed from the list entirely, which also takes
/// it out of tab order and out of any later annotation enumeration.
/// Annotations that are not named widgets, or whose name is not in the
/// map, are kept unchanged. A page whose rebuilt list is empty loses its
/// `Annots` entry altogether.
pub fn set_visibility(
    mut doc: FormDocument,
    visibility: &HashMap<String, bool>,
) -> Result<FormDocument> {
    for page_id in doc.page_ids().to_vec() {
        let annots = doc.page_annotations(page_id)?;
        if annots.is_empty() {
            continue;
        }

        let mut retained = Vec::with_capacity(annots.len());
        for entry in annots {
            let Ok(annot_id) = entry.as_reference() else {
                retained.push(entry);
                continue;
            };

            let name = doc
                .annotation(annot_id)
                .ok()
                .filter(|dict| is_widget(dict))
                .and_then(field_name);

            match name.and_then(|n| visibility.get(&n).copied()) {
                Some(true) => {
                    doc.annotation_mut(annot_id)?.set("F", Object::Integer(0));
                    retained.push(entry);
                }
                Some(false) => {
                    debug!(annot = annot_id.0, "removed hidden widget");
                }
                None => retained.push(entry),
            }
        }

        doc.set_page_annotations(page_id, retained)?;
    }

    doc.set_needs_appearances()?;
    doc.reindex()?;
    Ok(doc)
}
