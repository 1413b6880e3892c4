//! Tabulate one segment over a range of one parameter.

use anyhow::{bail, Context, Result};
use clap::Args;
use sewerline_core::{linspace, sweep, ParamField};
use tracing::info;

use super::run::verdict;
use super::ParamArgs;

#[derive(Args)]
pub struct SweepArgs {
    /// Parameter to vary (camelCase name, or k1/k2)
    #[arg(long)]
    pub field: String,

    /// First value
    #[arg(long)]
    pub from: f64,

    /// Last value
    #[arg(long)]
    pub to: f64,

    /// Number of values, both ends included
    #[arg(long, default_value = "11")]
    pub steps: usize,

    #[command(flatten)]
    pub params: ParamArgs,
}

pub fn execute(args: SweepArgs) -> Result<()> {
    let field: ParamField = args
        .field
        .parse()
        .with_context(|| format!("cannot sweep over {}", args.field))?;
    if args.steps == 0 {
        bail!("--steps must be at least 1");
    }

    let base = args.params.resolve()?;
    let values = linspace(args.from, args.to, args.steps);
    info!(%field, steps = values.len(), "sweeping");

    let batch = sweep(&base, field, &values);
    let r = &batch.results;

    println!(
        "{:>14} {:>12} {:>10} {:>10} {:>10} {:>8}",
        field.name(),
        "Q [l/s]",
        "y/D",
        "tau [Pa]",
        "v [m/s]",
        "verdict"
    );
    for (i, value) in values.iter().enumerate() {
        println!(
            "{:>14.6} {:>12.4} {:>10.4} {:>10.4} {:>10.4} {:>8}",
            value,
            r.design_flow[i],
            r.depth_ratio[i],
            r.tractive_force[i],
            r.velocity[i],
            verdict(batch.verification[i].overall_ok)
        );
    }

    info!(passing = batch.passing(), total = batch.len(), "sweep finished");
    Ok(())
}
