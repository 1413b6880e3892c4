/// Pass/fail check of a result against the design criteria.
use serde::Serialize;

use super::outputs::ResultRecord;
use super::params::ParameterSet;

/// Design verdict of one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRecord {
    /// Depth ratio within the allowed maximum.
    pub depth_ok: bool,
    /// Tractive force at least the required minimum.
    pub tractive_ok: bool,
    /// Both criteria met.
    pub overall_ok: bool,
}

/// Compare depth ratio and tractive force against the configured limits.
pub fn verify(results: &ResultRecord, params: &ParameterSet) -> VerificationRecord {
    let depth_ok = results.depth_ratio <= params.max_depth_ratio;
    let tractive_ok = results.tractive_force >= params.min_tractive_force;
    VerificationRecord {
        depth_ok,
        tractive_ok,
        overall_ok: depth_ok && tractive_ok,
    }
}
