/// Segment output records.
use serde::Serialize;
use sewerline_macros::Outputs;

use super::params::ParameterSet;
use super::solver::AngleSolution;
use super::verification::VerificationRecord;

/// Hydraulic results of one segment, recomputed from scratch every call.
///
/// - `estimated_flow`, `design_flow`: [l/s]
/// - `wetted_angle`: [rad]
/// - `wetted_area`: [m2]
/// - `wetted_perimeter`, `hydraulic_radius`, `wetted_depth`: [m]
/// - `depth_ratio`: y/D [-]
/// - `tractive_force`: [Pa]
/// - `velocity`: [m/s]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Outputs)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub estimated_flow: f64,
    pub design_flow: f64,
    pub wetted_angle: f64,
    pub wetted_area: f64,
    pub wetted_perimeter: f64,
    pub hydraulic_radius: f64,
    pub wetted_depth: f64,
    pub depth_ratio: f64,
    pub tractive_force: f64,
    pub velocity: f64,
}

/// Convergence report of the angle solver for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverDiagnostics {
    pub iterations: usize,
    pub residual: f64,
    pub converged: bool,
    /// E of the fixed-point relation.
    pub section_factor: f64,
    /// ε of the fixed-point relation.
    pub iteration_coefficient: f64,
}

impl SolverDiagnostics {
    pub fn new(solution: &AngleSolution, section_factor: f64, iteration_coefficient: f64) -> Self {
        Self {
            iterations: solution.iterations,
            residual: solution.residual,
            converged: solution.converged,
            section_factor,
            iteration_coefficient,
        }
    }
}

/// Everything a single "compute all" call produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Computation {
    /// The normalized, fully-defaulted inputs.
    pub params: ParameterSet,
    pub results: ResultRecord,
    pub verification: VerificationRecord,
    pub solver: SolverDiagnostics,
}

/// Independent segments evaluated together, one entry per input row.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub results: ResultRecordSeries,
    pub verification: Vec<VerificationRecord>,
}

impl Batch {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            results: ResultRecordSeries::with_capacity(n),
            verification: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, computation: &Computation) {
        self.results.push(&computation.results);
        self.verification.push(computation.verification);
    }

    pub fn len(&self) -> usize {
        self.verification.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verification.is_empty()
    }

    /// Number of rows meeting both criteria.
    pub fn passing(&self) -> usize {
        self.verification.iter().filter(|v| v.overall_ok).count()
    }
}
