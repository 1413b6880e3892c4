/// Partially-filled circular sewer segment.
///
/// One pipe reach evaluated in isolation: design flow from demand, wetted
/// angle from the fixed-point solver, section geometry, shear and velocity,
/// and the depth/tractive-force verdict. Mirrors the reference spreadsheet.
pub mod constants;
pub mod demand;
pub mod dynamics;
pub mod geometry;
pub mod outputs;
pub mod params;
pub mod run;
pub mod solver;
pub mod validation;
pub mod verification;
