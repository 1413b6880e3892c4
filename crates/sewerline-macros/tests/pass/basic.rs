use sewerline_macros::Outputs;

#[derive(Debug, Clone, Copy, PartialEq, Outputs)]
pub struct SectionOutputs {
    pub area: f64,
    pub perimeter: f64,
    pub velocity: f64,
}

fn main() {
    let r = SectionOutputs { area: 0.01, perimeter: 0.2, velocity: 0.9 };
    let mut series = SectionOutputsSeries::with_capacity(10);
    assert!(series.is_empty());
    series.push(&r);
    assert_eq!(series.len(), 1);
    assert_eq!(series.get(0), Some(r));
    assert_eq!(series.get(1), None);
    assert_eq!(SectionOutputs::field_names(), &["area", "perimeter", "velocity"]);
    assert_eq!(r.to_array(), [0.01, 0.2, 0.9]);
}
