//! Helpers for parsing and pretty printing.

use pretty::RcDoc;
use winnow::{LocatingSlice, ModalResult};

/// Trait for types which can be pretty-printed
pub trait ToDoc {
    /// Produce an `RcDoc` for pretty-printing.
    fn to_doc(&self) -> RcDoc;

    /// Render the document to a plain string.
    fn to_text(&self) -> String {
        self.to_doc().pretty(80).to_string()
    }
}

/// Trait for types which can be parsed
pub trait HasParser: Sized {
    /// Parse an element of this type.
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self>;
}
