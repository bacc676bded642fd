//! The evolution engine: applying gate sets to states and reporting the
//! transitions.

use std::fmt;

use faer::Mat;
use num_complex::Complex;
use thiserror::Error;

use crate::{
    gate::format_gate,
    state::{State, format_state},
};

/// The gates applied in one evolution step: either a single (possibly
/// already-composed two-qubit) matrix, or one matrix per qubit.
#[derive(Clone, Debug)]
pub enum GateSet {
    One(Mat<Complex<f64>>),
    Two(Mat<Complex<f64>>, Mat<Complex<f64>>),
}

impl GateSet {
    /// The joint matrix applied to the state: the tensor product of the pair,
    /// or the single matrix unchanged.
    pub fn joint(&self) -> Mat<Complex<f64>> {
        match self {
            GateSet::One(g) => g.clone(),
            GateSet::Two(a, b) => a.kron(b),
        }
    }

    /// Names the constituent matrices against the gate catalog. Matrices
    /// matching no catalog entry contribute nothing to the label.
    pub fn label(&self) -> String {
        match self {
            GateSet::One(g) => format_gate([g]),
            GateSet::Two(a, b) => format_gate([a, b]),
        }
    }
}

/// A single completed evolution step.
#[derive(Clone, Debug)]
pub struct Transition {
    /// Catalog names of the applied gates.
    pub label: String,
    /// Formatted state before the step.
    pub before: String,
    /// Formatted state after the step.
    pub after: String,
    state: State,
}

impl Transition {
    /// The state after the step.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Consume the transition, keeping the resulting state.
    pub fn into_state(self) -> State {
        self.state
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}){} = {}", self.label, self.before, self.after)
    }
}

/// Error raised when a gate set cannot act on a state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvolveError {
    /// The joint gate dimension does not match the state dimension.
    #[error("gate of dimension {gate} cannot act on state of dimension {state}")]
    DimensionMismatch { gate: usize, state: usize },
}

/// Apply one gate set to a state, returning the resulting transition.
pub fn operate(state: &State, gates: &GateSet) -> Result<Transition, EvolveError> {
    let joint = gates.joint();
    if joint.ncols() != state.dim() {
        return Err(EvolveError::DimensionMismatch {
            gate: joint.ncols(),
            state: state.dim(),
        });
    }

    let next = State::from_vector(&joint * state.vector());
    debug_assert!(
        (next.norm_sqr() - state.norm_sqr()).abs() < 1e-9,
        "gate application must preserve the norm"
    );

    Ok(Transition {
        label: gates.label(),
        before: format_state(state),
        after: format_state(&next),
        state: next,
    })
}

/// Apply a sequence of gate sets successively, threading the state through
/// each step. Returns the final state together with every transition taken;
/// an empty sequence yields the starting state and no transitions.
pub fn evolve<I>(start: State, gate_sets: I) -> Result<(State, Vec<Transition>), EvolveError>
where
    I: IntoIterator<Item = GateSet>,
{
    let mut state = start;
    let mut transitions = Vec::new();
    for gates in gate_sets {
        let transition = operate(&state, &gates)?;
        state = transition.state().clone();
        transitions.push(transition);
    }
    Ok((state, transitions))
}
