use lopdf::{Object, ObjectId};
use tracing::debug;

use crate::error::Result;
use crate::pdf::FormDocument;
use crate::request::FieldData;

/// Write submitted values into matching widgets.
///
/// Every named widget whose field name keys `data` gets its value and
/// display value set to the submitted string. Names present only in the
/// template or only in the data are skipped without error. The
/// regenerate-appearances flag is set afterwards so viewers redraw the
/// filled fields.
pub fn fill(mut doc: FormDocument, data: &FieldData) -> Result<FormDocument> {
    let targets: Vec<(ObjectId, String)> = doc
        .widgets()
        .iter()
        .filter(|w| data.contains_key(&w.name))
        .map(|w| (w.annot_id, w.name.clone()))
        .collect();

    for (annot_id, name) in targets {
        let Some(value) = data.get(&name) else {
            continue;
        };
        let annot = doc.annotation_mut(annot_id)?;
        annot.set("V", Object::string_literal(value.as_str()));
        annot.set("AS", Object::string_literal(value.as_str()));
        debug!(field = %name, "filled field");
    }

    doc.set_needs_appearances()?;
    Ok(doc)
}
