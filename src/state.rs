//! State vectors: parsing from ket notation and recognition back to
//! canonical names.

use std::fmt;

use faer::Mat;
use float_pretty_print::PrettyPrintFloat;
use num_complex::Complex;
use thiserror::Error;
use winnow::{
    LocatingSlice, ModalResult, Parser,
    combinator::{alt, repeat},
    token::any,
};

use crate::{
    algebra::{mat_close, mat_eq, scaled},
    catalog::{self, RECOGNITION_TOLERANCE},
    ket::KetTerm,
    phase::GlobalPhase,
    text::HasParser,
};

/// A pure 1- or 2-qubit state, stored as a unit column vector of complex
/// amplitudes.
#[derive(Clone, Debug)]
pub struct State(Mat<Complex<f64>>);

impl State {
    /// Wrap an amplitude column vector.
    ///
    /// # Panics
    /// Panics if the matrix is not a column vector of length 2 or 4.
    pub fn from_vector(vector: Mat<Complex<f64>>) -> Self {
        assert!(
            vector.ncols() == 1 && (vector.nrows() == 2 || vector.nrows() == 4),
            "state must be a column vector over 1 or 2 qubits, got {}x{}",
            vector.nrows(),
            vector.ncols()
        );
        State(vector)
    }

    /// The underlying amplitude vector.
    pub fn vector(&self) -> &Mat<Complex<f64>> {
        &self.0
    }

    /// Length of the amplitude vector (2^qubits).
    pub fn dim(&self) -> usize {
        self.0.nrows()
    }

    /// Number of qubits the state describes.
    pub fn qubits(&self) -> usize {
        self.dim().ilog2() as usize
    }

    /// Sum of squared amplitude magnitudes. 1 for any normalized state.
    pub fn norm_sqr(&self) -> f64 {
        (0..self.dim()).map(|i| self.0[(i, 0)].norm_sqr()).sum()
    }

    /// Match this state against the canonical catalog, trying each global
    /// phase candidate in order. Returns the stripped phase and the catalog
    /// name of the first hit.
    pub fn recognize(&self) -> Option<(GlobalPhase, &'static str)> {
        for phase in GlobalPhase::CANDIDATES {
            let corrected = scaled(&self.0, phase.value().inv());
            for (vector, name) in catalog::state_table() {
                if mat_close(&corrected, vector, RECOGNITION_TOLERANCE) {
                    return Some((phase, name.as_str()));
                }
            }
        }
        None
    }

    /// Plain rendering of the raw amplitudes, used when no catalog entry
    /// matches.
    fn raw_text(&self) -> String {
        let entries = (0..self.dim())
            .map(|i| {
                let x = self.0[(i, 0)];
                match (x.re.abs() > 0.000001, x.im.abs() > 0.000001) {
                    (false, false) => "0.0".to_owned(),
                    (true, false) => format!("{}", PrettyPrintFloat(x.re)),
                    (false, true) => format!("{}i", PrettyPrintFloat(x.im)),
                    (true, true) => {
                        format!("{} + {}i", PrettyPrintFloat(x.re), PrettyPrintFloat(x.im))
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{entries}]")
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        mat_eq(&self.0, &other.0)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_state(self))
    }
}

/// Error raised when no state can be read from the input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateParseError {
    /// The input contained no recognizable ket term.
    #[error("no ket terms found in input")]
    NoKetTerms,
}

/// Collect every ket term occurring anywhere in the input, skipping
/// characters that start no term.
fn ket_terms(input: &mut LocatingSlice<&str>) -> ModalResult<Vec<KetTerm>> {
    repeat(0.., alt((KetTerm::parser.map(Some), any.value(None))))
        .map(|terms: Vec<Option<KetTerm>>| terms.into_iter().flatten().collect())
        .parse_next(input)
}

/// Parse free text into a normalized state vector.
///
/// Each `[sign]|AB>` occurrence contributes the tensor product of its qubit
/// labels, negated for a minus sign. The accumulated sum is divided by √n,
/// n being the number of terms found. This normalizes exactly the intended
/// inputs, sums of mutually orthogonal equal-weight terms, and is deliberately
/// not a general normalization.
pub fn parse_state(input: &str) -> Result<State, StateParseError> {
    let terms: Vec<KetTerm> = ket_terms
        .parse(LocatingSlice::new(input))
        .unwrap_or_default();
    if terms.is_empty() {
        return Err(StateParseError::NoKetTerms);
    }

    let mut sum = Mat::<Complex<f64>>::zeros(4, 1);
    for term in &terms {
        sum = sum + term.to_state();
    }
    let norm = Complex::new(1.0 / (terms.len() as f64).sqrt(), 0.0);
    let state = State::from_vector(scaled(&sum, norm));
    debug_assert!(
        (state.norm_sqr() - 1.0).abs() < 1e-9,
        "parsed terms were not orthogonal equal-weight components"
    );
    Ok(state)
}

/// Render a state as its canonical name, prefixed by the stripped global
/// phase, or as its raw amplitudes if no catalog entry matches.
pub fn format_state(state: &State) -> String {
    match state.recognize() {
        Some((phase, name)) => format!("{}{}", phase.prefix(), name),
        None => state.raw_text(),
    }
}
