use std::{io, io::Read, path::PathBuf};

use ketcalc::{GateSet, operate, parse_gate, parse_state};
use miette::{IntoDiagnostic, Result, miette};

/// Calculator for 1- and 2-qubit quantum state evolution
#[derive(clap::Parser)]
struct Args {
    /// File of calculator lines to run
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn run(src: &str) -> Result<()> {
    let mut lines = src.lines().map(str::trim).filter(|l| !l.is_empty());

    let start = lines.next().ok_or_else(|| miette!("empty input"))?;
    let mut state = parse_state(start).into_diagnostic()?;

    for line in lines {
        let mut text = line.to_owned();
        // A single letter means "first qubit only"; pad with identity.
        if text.chars().count() < 2 {
            text.push('I');
        }
        let gate = parse_gate(&text).into_diagnostic()?;
        let transition = operate(&state, &GateSet::One(gate)).into_diagnostic()?;
        println!("{transition}");
        state = transition.into_state();
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Args = clap::Parser::parse();

    let src = if let Some(path) = &args.file {
        std::fs::read_to_string(path).into_diagnostic()?
    } else {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s).into_diagnostic()?;
        s
    };

    run(&src)
}
