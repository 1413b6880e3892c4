//! Parameter plausibility check.

use anyhow::{bail, Result};
use clap::Args;
use sewerline_core::{validate, Validation};
use tracing::{error, info, warn};

use super::ParamArgs;

#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    let params = args.params.resolve()?;
    info!("validating parameters");
    report(&validate(&params), args.strict)
}

fn report(v: &Validation, strict: bool) -> Result<()> {
    if !v.errors.is_empty() {
        println!("errors ({}):", v.errors.len());
        for msg in &v.errors {
            error!("{}", msg);
            println!("  x {}", msg);
        }
    }

    if !v.warnings.is_empty() {
        println!("warnings ({}):", v.warnings.len());
        for msg in &v.warnings {
            warn!("{}", msg);
            println!("  ! {}", msg);
        }
    }

    let passed = if strict { v.is_clean() } else { v.valid };
    if passed {
        println!("parameters are plausible");
        Ok(())
    } else {
        bail!(
            "validation failed: {} error(s), {} warning(s)",
            v.errors.len(),
            v.warnings.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sewerline_core::{ParamField, ParameterSet};

    #[test]
    fn warnings_fail_only_in_strict_mode() {
        let v = validate(&ParameterSet::DEFAULT.with_field(ParamField::Slope, 0.5));
        assert!(report(&v, false).is_ok());
        assert!(report(&v, true).is_err());
    }

    #[test]
    fn errors_always_fail() {
        let v = validate(&ParameterSet::DEFAULT.with_field(ParamField::ReturnCoefficient, 0.1));
        assert!(report(&v, false).is_err());
    }
}
