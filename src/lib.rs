//! An educational calculator for 1- and 2-qubit quantum states. Given a
//! starting state in ket notation and a sequence of gate strings, the
//! calculator:
//! - parses ket terms (e.g. `|01>`, `-|+->`) into a normalized state vector,
//! - composes per-qubit gates by tensor product,
//! - applies each gate by matrix multiplication,
//! - recognises the result, up to global phase, against a fixed catalog of
//!   product and Bell states and prints the transition.
//!
//! ## Running
//!
//! A file of calculator lines (first line the starting state, each further
//! line a gate string) can be run using:
//!
//! ```bash
//! cargo run -- <FILENAME>
//! ```
//!
//! or passed in through stdin. For all options see:
//! ```bash
//! cargo run -- --help
//! ```

pub mod algebra;
pub mod catalog;
pub mod evolve;
pub mod gate;
pub mod ket;
pub mod phase;
pub mod state;
pub mod text;

pub use evolve::{EvolveError, GateSet, Transition, evolve, operate};
pub use gate::{Gate, GateParseError, format_gate, parse_gate};
pub use ket::{KetState, KetTerm, Sign};
pub use phase::GlobalPhase;
pub use state::{State, StateParseError, format_state, parse_state};
