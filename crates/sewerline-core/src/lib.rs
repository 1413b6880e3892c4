//! sewerline: hydraulics of a partially-filled circular sewer segment.
//!
//! Derives the design flow of a segment from demographic demand, recovers
//! the wetted angle with a bounded fixed-point iteration, evaluates the
//! section geometry, tractive force and velocity, and checks the result
//! against the depth and self-cleansing criteria.

pub mod error;
pub mod segment;
pub mod traits;

pub use error::ParamError;
pub use segment::outputs::{
    Batch, Computation, ResultRecord, ResultRecordSeries, SolverDiagnostics,
};
pub use segment::params::{ParamField, ParameterSet, PartialParameters};
pub use segment::run::{compute, compute_all, compute_batch, linspace, sweep};
pub use segment::solver::{solve_angle, solve_angle_traced, AngleSolution};
pub use segment::validation::{validate, Validation};
pub use segment::verification::VerificationRecord;
pub use traits::ModelParams;
