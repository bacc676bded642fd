//! Immutable lookup tables: named gates and the canonical state catalog.
//!
//! Both tables are built once at first use and never mutated. Their
//! declaration order is significant: the formatter scans are first-match-wins.

use std::sync::LazyLock;

use faer::Mat;
use indexmap::IndexMap;
use num_complex::Complex;

use crate::{gate::Gate, ket::KetState};

/// Absolute element-wise tolerance for matching a vector against the
/// canonical state catalog.
pub const RECOGNITION_TOLERANCE: f64 = 1e-15;

static GATES: LazyLock<IndexMap<&'static str, Mat<Complex<f64>>>> =
    LazyLock::new(|| Gate::ALL.iter().map(|g| (g.name(), g.matrix())).collect());

static STATE_TABLE: LazyLock<Vec<(Mat<Complex<f64>>, String)>> = LazyLock::new(|| {
    let axes = [KetState::Zero, KetState::One, KetState::Plus, KetState::Minus];
    let mut table = Vec::with_capacity(20);

    for a in axes {
        for b in axes {
            let name = format!("|{}{}>", a.to_char(), b.to_char());
            table.push((a.to_state().kron(b.to_state()), name));
        }
    }

    // Bell states, produced by entangling the Hadamard-basis products.
    let cnot = Gate::Cnot12.matrix();
    let bells = [
        (KetState::Plus, KetState::Zero, "|Φ⁺>"),
        (KetState::Minus, KetState::Zero, "|Φ⁻>"),
        (KetState::Plus, KetState::One, "|Ψ⁺>"),
        (KetState::Minus, KetState::One, "|Ψ⁻>"),
    ];
    for (a, b, name) in bells {
        table.push((&cnot * a.to_state().kron(b.to_state()), name.to_owned()));
    }

    table
});

/// The named gate table, in catalog order.
pub fn gates() -> &'static IndexMap<&'static str, Mat<Complex<f64>>> {
    &GATES
}

/// The 20 canonical (vector, display name) pairs, in catalog order: the 16
/// products over the `{0,1,+,-}` axes followed by the four Bell states.
pub fn state_table() -> &'static [(Mat<Complex<f64>>, String)] {
    &STATE_TABLE
}

/// Look up a gate matrix by its exact catalog name.
pub fn gate(name: &str) -> Option<&'static Mat<Complex<f64>>> {
    GATES.get(name)
}

/// Look up a single-qubit basis vector by its ket label.
pub fn basis(label: char) -> Option<Mat<Complex<f64>>> {
    KetState::from_char(label).map(KetState::to_state)
}
