//! The fixed gate library: matrices, gate-string parsing and gate naming.

use std::f64::consts::FRAC_1_SQRT_2;

use faer::{Mat, mat};
use num_complex::Complex;
use thiserror::Error;

use crate::{algebra::mat_eq, catalog};

const CISQRT2: Complex<f64> = Complex::new(FRAC_1_SQRT_2, 0.0);

/// A gate from the fixed library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    I,
    X,
    Y,
    Z,
    H,
    S,
    /// CNOT with the first qubit as control.
    Cnot12,
    /// CNOT with the second qubit as control.
    Cnot21,
}

impl Gate {
    /// Every gate in the library, in catalog order.
    pub const ALL: [Gate; 8] = [
        Gate::I,
        Gate::X,
        Gate::Y,
        Gate::Z,
        Gate::H,
        Gate::S,
        Gate::Cnot12,
        Gate::Cnot21,
    ];

    /// The catalog name of the gate.
    pub fn name(self) -> &'static str {
        match self {
            Gate::I => "I",
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::H => "H",
            Gate::S => "S",
            Gate::Cnot12 => "CNOT12",
            Gate::Cnot21 => "CNOT21",
        }
    }

    /// Look up a single-qubit gate by its letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Gate::I),
            'X' => Some(Gate::X),
            'Y' => Some(Gate::Y),
            'Z' => Some(Gate::Z),
            'H' => Some(Gate::H),
            'S' => Some(Gate::S),
            _ => None,
        }
    }

    /// Returns the unitary matrix of the gate: 2x2 for the single-qubit
    /// gates, 4x4 for the CNOT variants.
    pub fn matrix(self) -> Mat<Complex<f64>> {
        match self {
            Gate::I => mat![
                [Complex::ONE, Complex::ZERO],
                [Complex::ZERO, Complex::ONE]
            ],
            Gate::X => mat![
                [Complex::ZERO, Complex::ONE],
                [Complex::ONE, Complex::ZERO]
            ],
            Gate::Y => mat![[Complex::ZERO, -Complex::I], [Complex::I, Complex::ZERO]],
            Gate::Z => mat![
                [Complex::ONE, Complex::ZERO],
                [Complex::ZERO, -Complex::ONE]
            ],
            Gate::H => mat![[CISQRT2, CISQRT2], [CISQRT2, -CISQRT2]],
            Gate::S => mat![[Complex::ONE, Complex::ZERO], [Complex::ZERO, Complex::I]],
            Gate::Cnot12 => mat![
                [Complex::ONE, Complex::ZERO, Complex::ZERO, Complex::ZERO],
                [Complex::ZERO, Complex::ONE, Complex::ZERO, Complex::ZERO],
                [Complex::ZERO, Complex::ZERO, Complex::ZERO, Complex::ONE],
                [Complex::ZERO, Complex::ZERO, Complex::ONE, Complex::ZERO]
            ],
            Gate::Cnot21 => mat![
                [Complex::ONE, Complex::ZERO, Complex::ZERO, Complex::ZERO],
                [Complex::ZERO, Complex::ZERO, Complex::ZERO, Complex::ONE],
                [Complex::ZERO, Complex::ZERO, Complex::ONE, Complex::ZERO],
                [Complex::ZERO, Complex::ONE, Complex::ZERO, Complex::ZERO]
            ],
        }
    }
}

/// Error raised when a gate string cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GateParseError {
    /// A letter named no gate in the catalog.
    #[error("unknown gate '{0}'")]
    UnknownGate(char),
    /// The gate string was empty.
    #[error("empty gate string")]
    Empty,
}

/// Parse a gate string into its composed matrix.
///
/// Single-qubit letters combine by tensor product in input order, so `"IH"`
/// yields `I ⊗ H`. A string starting with `'C'` selects a CNOT; both the
/// `...1` and `...2` suffixes currently collapse to the control-on-qubit-1
/// variant.
pub fn parse_gate(input: &str) -> Result<Mat<Complex<f64>>, GateParseError> {
    if input.is_empty() {
        return Err(GateParseError::Empty);
    }
    if input.starts_with('C') {
        return Ok(Gate::Cnot12.matrix());
    }
    let mut gate = Mat::identity(1, 1);
    for c in input.chars() {
        let g = Gate::from_char(c).ok_or(GateParseError::UnknownGate(c))?;
        gate = gate.kron(g.matrix());
    }
    Ok(gate)
}

/// Name each matrix by scanning the gate catalog, concatenating the names in
/// argument order. Matrices matching no catalog entry are skipped.
pub fn format_gate<'a>(gates: impl IntoIterator<Item = &'a Mat<Complex<f64>>>) -> String {
    let mut out = String::new();
    for gate in gates {
        for (name, m) in catalog::gates().iter() {
            if mat_eq(gate, m) {
                out.push_str(name);
                break;
            }
        }
    }
    out
}
