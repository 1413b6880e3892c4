//! Subcommands and the parameter layering they share.

pub mod run;
pub mod sweep;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sewerline_core::{ParameterSet, PartialParameters};
use tracing::debug;

/// Parameter sources, layered as defaults <- file <- `--set`.
#[derive(Args, Debug, Default)]
pub struct ParamArgs {
    /// JSON file with a (partial) parameter object
    #[arg(short, long)]
    pub params: Option<PathBuf>,

    /// Override one parameter, e.g. `--set diameter=200`
    #[arg(short, long, value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

impl ParamArgs {
    /// Merge the file and the overrides without applying defaults.
    pub fn partial(&self) -> Result<PartialParameters> {
        let mut partial = match &self.params {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read parameter file {}", path.display()))?;
                PartialParameters::from_json_str(&text)
                    .with_context(|| format!("invalid parameter file {}", path.display()))?
            }
            None => PartialParameters::default(),
        };

        let mut overrides = PartialParameters::default();
        for assignment in &self.set {
            overrides
                .parse_assignment(assignment)
                .with_context(|| format!("invalid --set {assignment}"))?;
        }
        partial = partial.overlay(&overrides);

        debug!(supplied = partial.supplied(), "parameters loaded");
        Ok(partial)
    }

    pub fn resolve(&self) -> Result<ParameterSet> {
        Ok(self.partial()?.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_over_defaults() {
        let args = ParamArgs {
            params: None,
            set: vec!["slope=0.01".into(), "k1=1.4".into()],
        };
        let p = args.resolve().unwrap();
        assert_eq!(p.slope, 0.01);
        assert_eq!(p.peak_day_factor, 1.4);
        assert_eq!(p.diameter, ParameterSet::DEFAULT.diameter);
    }

    #[test]
    fn rejects_unknown_override() {
        let args = ParamArgs {
            params: None,
            set: vec!["width=3".into()],
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let args = ParamArgs {
            params: Some(PathBuf::from("/nonexistent/params.json")),
            set: Vec::new(),
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("cannot read parameter file"));
    }
}
