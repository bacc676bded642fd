use std::f64::consts::FRAC_1_SQRT_2;

use approx::assert_abs_diff_eq;
use faer::Mat;
use ketcalc::{Gate, GateParseError, catalog, format_gate, parse_gate};
use num_complex::Complex;

/// Helper to check that two complex numbers are approximately equal.
fn assert_complex_approx(a: Complex<f64>, b: Complex<f64>) {
    assert_abs_diff_eq!(a.re, b.re, epsilon = 1e-12);
    assert_abs_diff_eq!(a.im, b.im, epsilon = 1e-12);
}

fn assert_mat_approx(a: &Mat<Complex<f64>>, b: &Mat<Complex<f64>>) {
    assert_eq!((a.nrows(), a.ncols()), (b.nrows(), b.ncols()));
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            assert_complex_approx(a[(i, j)], b[(i, j)]);
        }
    }
}

#[test]
fn x_gate_matrix() {
    let m = Gate::X.matrix();
    let zero = Complex::ZERO;
    let one = Complex::ONE;
    assert_eq!(m[(0, 0)], zero);
    assert_eq!(m[(0, 1)], one);
    assert_eq!(m[(1, 0)], one);
    assert_eq!(m[(1, 1)], zero);
}

#[test]
fn y_gate_matrix() {
    let m = Gate::Y.matrix();
    assert_eq!(m[(0, 1)], -Complex::I);
    assert_eq!(m[(1, 0)], Complex::I);
    assert_eq!(m[(0, 0)], Complex::ZERO);
    assert_eq!(m[(1, 1)], Complex::ZERO);
}

#[test]
fn h_gate_matrix() {
    let m = Gate::H.matrix();
    let s = Complex::new(FRAC_1_SQRT_2, 0.0);
    assert_complex_approx(m[(0, 0)], s);
    assert_complex_approx(m[(0, 1)], s);
    assert_complex_approx(m[(1, 0)], s);
    assert_complex_approx(m[(1, 1)], -s);
}

#[test]
fn s_gate_matrix() {
    let m = Gate::S.matrix();
    assert_eq!(m[(0, 0)], Complex::ONE);
    assert_eq!(m[(1, 1)], Complex::I);
    assert_eq!(m[(0, 1)], Complex::ZERO);
    assert_eq!(m[(1, 0)], Complex::ZERO);
}

#[test]
fn cnot_variants_differ() {
    let c12 = Gate::Cnot12.matrix();
    let c21 = Gate::Cnot21.matrix();
    // CNOT12 swaps rows |10> and |11>, CNOT21 swaps |01> and |11>.
    assert_eq!(c12[(2, 3)], Complex::ONE);
    assert_eq!(c12[(3, 2)], Complex::ONE);
    assert_eq!(c21[(1, 3)], Complex::ONE);
    assert_eq!(c21[(3, 1)], Complex::ONE);
}

#[test]
fn catalog_lookup_by_name() {
    for gate in Gate::ALL {
        let m = catalog::gate(gate.name()).expect("catalog entry");
        assert_mat_approx(m, &gate.matrix());
    }
    assert!(catalog::gate("Q").is_none());
}

#[test]
fn parse_gate_composes_in_input_order() {
    let composed = parse_gate("IH").unwrap();
    let expected = Gate::I.matrix().kron(Gate::H.matrix());
    assert_mat_approx(&composed, &expected);

    // Order matters: HI is the transpose arrangement, not IH.
    let other = parse_gate("HI").unwrap();
    let expected_other = Gate::H.matrix().kron(Gate::I.matrix());
    assert_mat_approx(&other, &expected_other);
    assert_ne!(composed[(0, 1)], other[(0, 1)]);
}

#[test]
fn parse_gate_single_letter() {
    let x = parse_gate("X").unwrap();
    assert_mat_approx(&x, &Gate::X.matrix());
}

#[test]
fn parse_gate_cnot_suffixes_collapse() {
    // Regression: both suffixes currently select the control-on-qubit-1
    // variant.
    let c1 = parse_gate("CNOT12").unwrap();
    let c2 = parse_gate("CNOT21").unwrap();
    assert_mat_approx(&c1, &Gate::Cnot12.matrix());
    assert_mat_approx(&c2, &Gate::Cnot12.matrix());
}

#[test]
fn parse_gate_unknown_letter_errors() {
    assert_eq!(parse_gate("Q"), Err(GateParseError::UnknownGate('Q')));
    assert_eq!(parse_gate("XQ"), Err(GateParseError::UnknownGate('Q')));
}

#[test]
fn parse_gate_empty_errors() {
    assert_eq!(parse_gate(""), Err(GateParseError::Empty));
}

#[test]
fn format_gate_names_catalog_matrices() {
    let x = Gate::X.matrix();
    let i = Gate::I.matrix();
    assert_eq!(format_gate([&x, &i]), "XI");
    assert_eq!(format_gate([&Gate::Cnot12.matrix()]), "CNOT12");
}

#[test]
fn format_gate_skips_unmatched_matrices() {
    let composed = parse_gate("IH").unwrap();
    assert_eq!(format_gate([&composed]), "");

    let h = Gate::H.matrix();
    assert_eq!(format_gate([&composed, &h]), "H");
}

#[test]
fn gates_are_unitary() {
    for gate in Gate::ALL {
        let m = gate.matrix();
        let product = &m * m.adjoint();
        let identity = Mat::<Complex<f64>>::identity(m.nrows(), m.ncols());
        assert_mat_approx(&product, &identity);
    }
}
