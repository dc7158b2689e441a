/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use clap::Parser;
use std::process;

use quantity::{Quantity, UnitError};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Quantity converter
///
/// Parses a magnitude and source unit, converts it and outputs a
/// JSON representation of the result.
struct Args {
    /// The magnitude to convert.
    magnitude: f64,
    /// The unit `magnitude` is expressed in.
    from: String,
    /// The unit to convert to. Omit together with --si to report
    /// back in the source unit.
    to: Option<String>,
    #[clap(long)]
    /// Report back in canonically re-synthesised SI units instead of
    /// a specific target unit.
    si: bool,
}

fn main() {
    let args = Args::parse();

    let result = run(&args);
    match result {
        Ok(exported) => {
            println!(
                "{}",
                serde_json::to_string(&exported).expect("serialization failed!?")
            );
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<quantity::ExportedResult, UnitError> {
    let quantity = Quantity::new(args.magnitude, &args.from)?;
    match (&args.to, args.si) {
        (Some(to), false) => quantity.convert(to),
        (None, true) => Ok(quantity.get_si()),
        (None, false) => quantity.get(),
        (Some(_), true) => Err(UnitError::InvalidUnitString(
            "specify either a target unit or --si, not both".to_string(),
        )),
    }
}
