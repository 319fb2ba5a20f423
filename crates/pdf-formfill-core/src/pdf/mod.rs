mod document;
mod index;
mod widget;

pub use document::FormDocument;
pub use index::{WidgetIndex, WidgetRef};
pub use widget::{
    ANNOT_HIDDEN, FIELD_READ_ONLY, annotation_flags, decode_text, field_flags, field_name,
    is_widget,
};
