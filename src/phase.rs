//! Global phases, the unit scalars the formatter strips before matching a
//! state against the catalog.

use std::fmt;

use num_complex::Complex;
use pretty::RcDoc;

use crate::text::ToDoc;

/// One of the four global phase factors recognised by the formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobalPhase {
    /// +1 phase, no prefix
    One,
    /// -1 phase, printed as '-'
    MinusOne,
    /// i phase, printed as 'i'
    Imag,
    /// -i phase, printed as '-i'
    MinusImag,
}

impl GlobalPhase {
    /// Candidate phases in recognition order. The first match wins, so a
    /// phase-free match is always preferred.
    pub const CANDIDATES: [GlobalPhase; 4] = [
        GlobalPhase::One,
        GlobalPhase::MinusOne,
        GlobalPhase::Imag,
        GlobalPhase::MinusImag,
    ];

    /// The complex scalar this phase stands for.
    pub fn value(self) -> Complex<f64> {
        match self {
            GlobalPhase::One => Complex::ONE,
            GlobalPhase::MinusOne => -Complex::ONE,
            GlobalPhase::Imag => Complex::I,
            GlobalPhase::MinusImag => -Complex::I,
        }
    }

    /// Textual prefix attached to a recognised state name.
    pub fn prefix(self) -> &'static str {
        match self {
            GlobalPhase::One => "",
            GlobalPhase::MinusOne => "-",
            GlobalPhase::Imag => "i",
            GlobalPhase::MinusImag => "-i",
        }
    }
}

impl fmt::Display for GlobalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl ToDoc for GlobalPhase {
    fn to_doc(&self) -> RcDoc {
        match self {
            GlobalPhase::One => RcDoc::text("1"),
            GlobalPhase::MinusOne => RcDoc::text("-1"),
            GlobalPhase::Imag => RcDoc::text("i"),
            GlobalPhase::MinusImag => RcDoc::text("-i"),
        }
    }
}
