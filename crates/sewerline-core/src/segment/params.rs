/// Segment input parameters.
///
/// `ParameterSet` is the fully-defaulted record every computation runs on.
/// `PartialParameters` is what callers actually supply: any subset of the
/// fields, merged over `ParameterSet::DEFAULT` before computing.
///
/// Units:
/// - consumption per capita [l/person/day], occupancy [persons/dwelling]
/// - return coefficient, peak factors k1/k2, Manning n [-]
/// - min tractive force [Pa], max depth ratio [y/D], min design flow [l/s]
/// - slope [m/m], diameter [mm]
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::constants::{N_PARAMS, PARAM_NAMES};
use crate::error::ParamError;
use crate::traits::ModelParams;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    pub consumption_per_capita: f64,
    pub occupancy_rate: f64,
    pub return_coefficient: f64,
    pub peak_day_factor: f64,
    pub peak_hour_factor: f64,
    pub dwelling_count: f64,
    pub manning_coefficient: f64,
    pub min_tractive_force: f64,
    pub max_depth_ratio: f64,
    pub min_design_flow: f64,
    pub slope: f64,
    pub diameter: f64,
}

impl ParameterSet {
    /// System defaults. Never mutated; merging always builds a new record.
    pub const DEFAULT: ParameterSet = ParameterSet {
        consumption_per_capita: 200.0,
        occupancy_rate: 5.0,
        return_coefficient: 0.8,
        peak_day_factor: 1.2,
        peak_hour_factor: 1.5,
        dwelling_count: 100.0,
        manning_coefficient: 0.013,
        min_tractive_force: 1.0,
        max_depth_ratio: 0.75,
        min_design_flow: 1.5,
        slope: 0.005,
        diameter: 150.0,
    };

    /// Value of a single field.
    pub fn get(&self, field: ParamField) -> f64 {
        match field {
            ParamField::ConsumptionPerCapita => self.consumption_per_capita,
            ParamField::OccupancyRate => self.occupancy_rate,
            ParamField::ReturnCoefficient => self.return_coefficient,
            ParamField::PeakDayFactor => self.peak_day_factor,
            ParamField::PeakHourFactor => self.peak_hour_factor,
            ParamField::DwellingCount => self.dwelling_count,
            ParamField::ManningCoefficient => self.manning_coefficient,
            ParamField::MinTractiveForce => self.min_tractive_force,
            ParamField::MaxDepthRatio => self.max_depth_ratio,
            ParamField::MinDesignFlow => self.min_design_flow,
            ParamField::Slope => self.slope,
            ParamField::Diameter => self.diameter,
        }
    }

    /// Copy of this record with one field replaced.
    pub fn with_field(&self, field: ParamField, value: f64) -> Self {
        let mut next = *self;
        let slot = match field {
            ParamField::ConsumptionPerCapita => &mut next.consumption_per_capita,
            ParamField::OccupancyRate => &mut next.occupancy_rate,
            ParamField::ReturnCoefficient => &mut next.return_coefficient,
            ParamField::PeakDayFactor => &mut next.peak_day_factor,
            ParamField::PeakHourFactor => &mut next.peak_hour_factor,
            ParamField::DwellingCount => &mut next.dwelling_count,
            ParamField::ManningCoefficient => &mut next.manning_coefficient,
            ParamField::MinTractiveForce => &mut next.min_tractive_force,
            ParamField::MaxDepthRatio => &mut next.max_depth_ratio,
            ParamField::MinDesignFlow => &mut next.min_design_flow,
            ParamField::Slope => &mut next.slope,
            ParamField::Diameter => &mut next.diameter,
        };
        *slot = value;
        next
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ModelParams for ParameterSet {
    const N_PARAMS: usize = N_PARAMS;
    const PARAM_NAMES: &'static [&'static str] = PARAM_NAMES;

    fn from_array(arr: &[f64]) -> Result<Self, ParamError> {
        if arr.len() != Self::N_PARAMS {
            return Err(ParamError::WrongLength {
                expected: Self::N_PARAMS,
                got: arr.len(),
            });
        }
        Ok(ParamField::ALL
            .iter()
            .zip(arr)
            .fold(Self::DEFAULT, |p, (&field, &value)| p.with_field(field, value)))
    }

    fn to_array(&self) -> Vec<f64> {
        ParamField::ALL.iter().map(|&f| self.get(f)).collect()
    }
}

/// Names a single parameter. Parses from the camelCase map keys, plus the
/// customary `k1`/`k2` for the peak factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    ConsumptionPerCapita,
    OccupancyRate,
    ReturnCoefficient,
    PeakDayFactor,
    PeakHourFactor,
    DwellingCount,
    ManningCoefficient,
    MinTractiveForce,
    MaxDepthRatio,
    MinDesignFlow,
    Slope,
    Diameter,
}

impl ParamField {
    /// All fields in `PARAM_NAMES` order.
    pub const ALL: [ParamField; N_PARAMS] = [
        ParamField::ConsumptionPerCapita,
        ParamField::OccupancyRate,
        ParamField::ReturnCoefficient,
        ParamField::PeakDayFactor,
        ParamField::PeakHourFactor,
        ParamField::DwellingCount,
        ParamField::ManningCoefficient,
        ParamField::MinTractiveForce,
        ParamField::MaxDepthRatio,
        ParamField::MinDesignFlow,
        ParamField::Slope,
        ParamField::Diameter,
    ];

    /// Position in `PARAM_NAMES`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map key of this field.
    pub fn name(self) -> &'static str {
        PARAM_NAMES[self.index()]
    }

    /// Unit label for reports.
    pub fn unit(self) -> &'static str {
        match self {
            ParamField::ConsumptionPerCapita => "l/person/day",
            ParamField::OccupancyRate => "persons/dwelling",
            ParamField::DwellingCount => "dwellings",
            ParamField::MinTractiveForce => "Pa",
            ParamField::MaxDepthRatio => "y/D",
            ParamField::MinDesignFlow => "l/s",
            ParamField::Slope => "m/m",
            ParamField::Diameter => "mm",
            ParamField::ReturnCoefficient
            | ParamField::PeakDayFactor
            | ParamField::PeakHourFactor
            | ParamField::ManningCoefficient => "-",
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParamField {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        match key {
            "k1" => Ok(ParamField::PeakDayFactor),
            "k2" => Ok(ParamField::PeakHourFactor),
            _ => ParamField::ALL
                .iter()
                .copied()
                .find(|f| f.name() == key)
                .ok_or_else(|| ParamError::UnknownField(key.to_string())),
        }
    }
}

/// Caller-supplied subset of a `ParameterSet`.
///
/// `None` means "not supplied" and takes the default on merge. A supplied
/// value that is not a number (null, boolean, unparsable text) becomes 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialParameters {
    #[serde(default, deserialize_with = "lenient_number")]
    pub consumption_per_capita: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub occupancy_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub return_coefficient: Option<f64>,
    #[serde(default, alias = "k1", deserialize_with = "lenient_number")]
    pub peak_day_factor: Option<f64>,
    #[serde(default, alias = "k2", deserialize_with = "lenient_number")]
    pub peak_hour_factor: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub dwelling_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub manning_coefficient: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub min_tractive_force: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub max_depth_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub min_design_flow: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub slope: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub diameter: Option<f64>,
}

impl PartialParameters {
    /// Parse a JSON object of parameters. Unknown keys are rejected.
    pub fn from_json_str(text: &str) -> Result<Self, ParamError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Supplied value of a field, if any.
    pub fn get(&self, field: ParamField) -> Option<f64> {
        *self.slot(field)
    }

    /// Supply a field.
    pub fn set(&mut self, field: ParamField, value: f64) {
        *self.slot_mut(field) = Some(value);
    }

    /// Apply one `key=value` assignment. The value is coerced like text input.
    pub fn parse_assignment(&mut self, text: &str) -> Result<(), ParamError> {
        let (key, value) = text
            .split_once('=')
            .ok_or_else(|| ParamError::MalformedAssignment(text.to_string()))?;
        let field: ParamField = key.parse()?;
        self.set(field, coerce_text(value));
        Ok(())
    }

    /// Layer `other` on top of `self`; fields supplied by `other` win.
    pub fn overlay(&self, other: &PartialParameters) -> PartialParameters {
        let mut merged = *self;
        for field in ParamField::ALL {
            if let Some(value) = other.get(field) {
                merged.set(field, value);
            }
        }
        merged
    }

    /// Fill every unsupplied field from `base`.
    pub fn merge_over(&self, base: &ParameterSet) -> ParameterSet {
        ParamField::ALL.iter().fold(*base, |p, &field| match self.get(field) {
            Some(value) => p.with_field(field, value),
            None => p,
        })
    }

    /// Merge over the system defaults.
    pub fn resolve(&self) -> ParameterSet {
        self.merge_over(&ParameterSet::DEFAULT)
    }

    /// Number of supplied fields.
    pub fn supplied(&self) -> usize {
        ParamField::ALL
            .iter()
            .filter(|&&f| self.get(f).is_some())
            .count()
    }

    fn slot(&self, field: ParamField) -> &Option<f64> {
        match field {
            ParamField::ConsumptionPerCapita => &self.consumption_per_capita,
            ParamField::OccupancyRate => &self.occupancy_rate,
            ParamField::ReturnCoefficient => &self.return_coefficient,
            ParamField::PeakDayFactor => &self.peak_day_factor,
            ParamField::PeakHourFactor => &self.peak_hour_factor,
            ParamField::DwellingCount => &self.dwelling_count,
            ParamField::ManningCoefficient => &self.manning_coefficient,
            ParamField::MinTractiveForce => &self.min_tractive_force,
            ParamField::MaxDepthRatio => &self.max_depth_ratio,
            ParamField::MinDesignFlow => &self.min_design_flow,
            ParamField::Slope => &self.slope,
            ParamField::Diameter => &self.diameter,
        }
    }

    fn slot_mut(&mut self, field: ParamField) -> &mut Option<f64> {
        match field {
            ParamField::ConsumptionPerCapita => &mut self.consumption_per_capita,
            ParamField::OccupancyRate => &mut self.occupancy_rate,
            ParamField::ReturnCoefficient => &mut self.return_coefficient,
            ParamField::PeakDayFactor => &mut self.peak_day_factor,
            ParamField::PeakHourFactor => &mut self.peak_hour_factor,
            ParamField::DwellingCount => &mut self.dwelling_count,
            ParamField::ManningCoefficient => &mut self.manning_coefficient,
            ParamField::MinTractiveForce => &mut self.min_tractive_force,
            ParamField::MaxDepthRatio => &mut self.max_depth_ratio,
            ParamField::MinDesignFlow => &mut self.min_design_flow,
            ParamField::Slope => &mut self.slope,
            ParamField::Diameter => &mut self.diameter,
        }
    }
}

impl From<ParameterSet> for PartialParameters {
    fn from(p: ParameterSet) -> Self {
        ParamField::ALL
            .iter()
            .fold(Self::default(), |mut partial, &field| {
                partial.set(field, p.get(field));
                partial
            })
    }
}

/// Coerce form text to a number: parsable text keeps its value, anything else is 0.
pub fn coerce_text(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Coerce a JSON value to a number; non-numeric values become 0.
pub fn coerce_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => coerce_text(s),
        _ => 0.0,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Some(coerce_value(&value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_sheet() {
        let p = ParameterSet::default();
        assert_eq!(p.consumption_per_capita, 200.0);
        assert_eq!(p.dwelling_count, 100.0);
        assert_eq!(p.min_design_flow, 1.5);
        assert_eq!(p.diameter, 150.0);
    }

    #[test]
    fn empty_partial_resolves_to_defaults() {
        assert_eq!(PartialParameters::default().resolve(), ParameterSet::DEFAULT);
    }

    #[test]
    fn partial_merges_over_defaults() {
        let mut partial = PartialParameters::default();
        partial.set(ParamField::Slope, 0.003);
        partial.set(ParamField::DwellingCount, 500.0);
        let p = partial.resolve();
        assert_eq!(p.slope, 0.003);
        assert_eq!(p.dwelling_count, 500.0);
        assert_eq!(p.diameter, ParameterSet::DEFAULT.diameter);
        // the shared defaults are untouched
        assert_eq!(ParameterSet::DEFAULT.slope, 0.005);
    }

    #[test]
    fn json_partial_with_aliases() {
        let partial =
            PartialParameters::from_json_str(r#"{"k1": 1.1, "peakHourFactor": 1.4, "diameter": 200}"#)
                .unwrap();
        let p = partial.resolve();
        assert_eq!(p.peak_day_factor, 1.1);
        assert_eq!(p.peak_hour_factor, 1.4);
        assert_eq!(p.diameter, 200.0);
        assert_eq!(partial.supplied(), 3);
    }

    #[test]
    fn json_non_numeric_values_become_zero() {
        let partial = PartialParameters::from_json_str(
            r#"{"slope": null, "diameter": "abc", "dwellingCount": "250", "occupancyRate": true}"#,
        )
        .unwrap();
        assert_eq!(partial.slope, Some(0.0));
        assert_eq!(partial.diameter, Some(0.0));
        assert_eq!(partial.dwelling_count, Some(250.0));
        assert_eq!(partial.occupancy_rate, Some(0.0));
        assert_eq!(partial.manning_coefficient, None);
    }

    #[test]
    fn json_unknown_key_is_rejected() {
        let err = PartialParameters::from_json_str(r#"{"depth": 1.0}"#).unwrap_err();
        assert!(matches!(err, ParamError::Json(_)));
    }

    #[test]
    fn field_names_parse_back() {
        for field in ParamField::ALL {
            assert_eq!(field.name().parse::<ParamField>().unwrap(), field);
        }
        assert_eq!("k2".parse::<ParamField>().unwrap(), ParamField::PeakHourFactor);
        assert!("flow".parse::<ParamField>().is_err());
    }

    #[test]
    fn assignment_parsing() {
        let mut partial = PartialParameters::default();
        partial.parse_assignment("slope=0.004").unwrap();
        partial.parse_assignment(" diameter = 200 ").unwrap();
        partial.parse_assignment("k1=oops").unwrap();
        assert_eq!(partial.slope, Some(0.004));
        assert_eq!(partial.diameter, Some(200.0));
        assert_eq!(partial.peak_day_factor, Some(0.0));
        assert!(matches!(
            partial.parse_assignment("slope"),
            Err(ParamError::MalformedAssignment(_))
        ));
        assert!(matches!(
            partial.parse_assignment("width=3"),
            Err(ParamError::UnknownField(_))
        ));
    }

    #[test]
    fn overlay_prefers_right_hand_side() {
        let mut file = PartialParameters::default();
        file.set(ParamField::Slope, 0.002);
        file.set(ParamField::Diameter, 200.0);
        let mut cli = PartialParameters::default();
        cli.set(ParamField::Slope, 0.004);
        let merged = file.overlay(&cli);
        assert_eq!(merged.slope, Some(0.004));
        assert_eq!(merged.diameter, Some(200.0));
    }

    #[test]
    fn with_field_returns_copy() {
        let p = ParameterSet::DEFAULT;
        let q = p.with_field(ParamField::Diameter, 300.0);
        assert_eq!(p.diameter, 150.0);
        assert_eq!(q.diameter, 300.0);
        assert_eq!(q.get(ParamField::Diameter), 300.0);
    }

    #[test]
    fn from_array_valid() {
        let arr = [
            200.0, 5.0, 0.8, 1.2, 1.5, 2170.0, 0.013, 1.0, 0.75, 1.5, 0.005, 150.0,
        ];
        let p = ParameterSet::from_array(&arr).unwrap();
        assert_eq!(p.dwelling_count, 2170.0);
        assert_eq!(p.to_array(), arr.to_vec());
    }

    #[test]
    fn from_array_wrong_length() {
        assert!(matches!(
            ParameterSet::from_array(&[1.0, 2.0]),
            Err(ParamError::WrongLength { expected: 12, got: 2 })
        ));
    }

    #[test]
    fn full_partial_round_trips() {
        let p = ParameterSet::DEFAULT.with_field(ParamField::Slope, 0.01);
        assert_eq!(PartialParameters::from(p).resolve(), p);
    }

    #[test]
    fn serializes_with_map_keys() {
        let json = serde_json::to_value(ParameterSet::DEFAULT).unwrap();
        assert_eq!(json["consumptionPerCapita"], 200.0);
        assert_eq!(json["peakDayFactor"], 1.2);
    }
}
