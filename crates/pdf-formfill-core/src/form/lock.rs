use std::collections::HashSet;

use lopdf::{Object, ObjectId};
use tracing::debug;

use crate::error::Result;
use crate::pdf::{FIELD_READ_ONLY, FormDocument, field_flags};

/// Mark widgets read-only by setting bit 0 of their field flag word.
///
/// `field_names` of `None` locks every named widget. The existing flag
/// word is preserved apart from the read-only bit, with absent treated as
/// 0. Names that do not exist in the template are ignored.
pub fn lock(mut doc: FormDocument, field_names: Option<&HashSet<String>>) -> Result<FormDocument> {
    let targets: Vec<ObjectId> = doc
        .widgets()
        .iter()
        .filter(|w| field_names.is_none_or(|names| names.contains(&w.name)))
        .map(|w| w.annot_id)
        .collect();

    let count = targets.len();
    for annot_id in targets {
        let annot = doc.annotation_mut(annot_id)?;
        let flags = field_flags(annot);
        annot.set("Ff", Object::Integer(flags | FIELD_READ_ONLY));
    }
    debug!(count, "locked fields");

    doc.set_needs_appearances()?;
    Ok(doc)
}
