/// Positional view of a parameter record.
///
/// Lets batch callers (numpy rows, benchmark generators, sweeps) address
/// parameters by index in `PARAM_NAMES` order.
use crate::error::ParamError;

pub trait ModelParams: Sized {
    const N_PARAMS: usize;
    const PARAM_NAMES: &'static [&'static str];

    /// Build a record from values in `PARAM_NAMES` order.
    fn from_array(arr: &[f64]) -> Result<Self, ParamError>;

    /// Values in `PARAM_NAMES` order.
    fn to_array(&self) -> Vec<f64>;
}
