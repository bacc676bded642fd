//! Structures for representing primitive states in ket notation.

use std::{f64::consts::FRAC_1_SQRT_2, fmt};

use faer::{Mat, mat};
use num_complex::Complex;
use pretty::RcDoc;
use winnow::{
    LocatingSlice, ModalResult, Parser,
    ascii::multispace0,
    combinator::{alt, opt},
};

use crate::text::{HasParser, ToDoc};

const CISQRT2: Complex<f64> = Complex::new(FRAC_1_SQRT_2, 0.0);

/// Holds the value of a single-qubit ket label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KetState {
    /// |0> pattern
    Zero,
    /// |1> pattern
    One,
    /// |+> pattern
    Plus,
    /// |-> pattern
    Minus,
}

impl KetState {
    /// Returns the character needed to print this ket state.
    pub fn to_char(self) -> char {
        match self {
            KetState::Zero => '0',
            KetState::One => '1',
            KetState::Plus => '+',
            KetState::Minus => '-',
        }
    }

    /// Returns the ket state named by `c`, if any.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(KetState::Zero),
            '1' => Some(KetState::One),
            '+' => Some(KetState::Plus),
            '-' => Some(KetState::Minus),
            _ => None,
        }
    }

    /// Returns the column vector this `KetState` represents.
    pub fn to_state(self) -> Mat<Complex<f64>> {
        match self {
            KetState::Zero => mat![[Complex::ONE], [Complex::ZERO]],
            KetState::One => mat![[Complex::ZERO], [Complex::ONE]],
            KetState::Plus => mat![[CISQRT2], [CISQRT2]],
            KetState::Minus => mat![[CISQRT2], [-CISQRT2]],
        }
    }
}

impl HasParser for KetState {
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self> {
        alt((
            "0".value(KetState::Zero),
            "1".value(KetState::One),
            "+".value(KetState::Plus),
            "-".value(KetState::Minus),
        ))
        .parse_next(input)
    }
}

/// Sign carried by a ket term. An absent sign reads as `Plus`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

/// A signed two-qubit ket literal of the form '[sign]|AB>' with A, B drawn
/// from '0', '1', '+', '-'.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KetTerm {
    pub sign: Sign,
    pub qubits: [KetState; 2],
}

impl KetTerm {
    /// Create a new ket term from a sign and per-qubit labels.
    pub fn new(sign: Sign, qubits: [KetState; 2]) -> Self {
        KetTerm { sign, qubits }
    }

    /// Returns the 4-dimensional column vector this term represents:
    /// the tensor product of the qubit labels, negated for a minus sign.
    pub fn to_state(&self) -> Mat<Complex<f64>> {
        let v = self.qubits[0].to_state().kron(self.qubits[1].to_state());
        match self.sign {
            Sign::Plus => v,
            Sign::Minus => crate::algebra::scaled(&v, -Complex::ONE),
        }
    }
}

impl fmt::Display for KetTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl ToDoc for KetTerm {
    fn to_doc(&self) -> RcDoc {
        let sign = match self.sign {
            Sign::Plus => "",
            Sign::Minus => "-",
        };
        RcDoc::text(sign)
            .append("|")
            .append(self.qubits.iter().map(|q| q.to_char()).collect::<String>())
            .append(">")
    }
}

impl HasParser for KetTerm {
    fn parser(input: &mut LocatingSlice<&str>) -> ModalResult<Self> {
        (
            opt(alt(("+".value(Sign::Plus), "-".value(Sign::Minus)))),
            multispace0,
            "|",
            KetState::parser,
            KetState::parser,
            ">",
        )
            .map(|(sign, _, _, a, b, _)| KetTerm::new(sign.unwrap_or_default(), [a, b]))
            .parse_next(input)
    }
}
