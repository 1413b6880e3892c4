//! Evaluate one segment and print its results and verdict.

use anyhow::Result;
use clap::Args;
use sewerline_core::{compute, validate, Computation, ResultRecord};
use tracing::{info, warn};

use super::ParamArgs;

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Print the full computation as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RunArgs) -> Result<()> {
    let params = args.params.resolve()?;

    // Findings are reported but never block the run.
    let check = validate(&params);
    for msg in check.errors.iter().chain(&check.warnings) {
        warn!("{}", msg);
    }

    let c = compute(&params);
    if !c.solver.converged {
        warn!(
            iterations = c.solver.iterations,
            residual = c.solver.residual,
            "wetted angle did not converge"
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&c)?);
    } else {
        print_table(&c);
    }

    info!(overall_ok = c.verification.overall_ok, "segment evaluated");
    Ok(())
}

fn print_table(c: &Computation) {
    let values = c.results.to_array();
    for (name, value) in ResultRecord::field_names().iter().zip(values) {
        println!("{:<18} {:>14.6}", name, value);
    }
    println!();
    println!("{:<18} {:>14}", "depth_ok", verdict(c.verification.depth_ok));
    println!("{:<18} {:>14}", "tractive_ok", verdict(c.verification.tractive_ok));
    println!("{:<18} {:>14}", "overall_ok", verdict(c.verification.overall_ok));
}

pub(crate) fn verdict(ok: bool) -> &'static str {
    if ok {
        "OK"
    } else {
        "FAIL"
    }
}
