use sewerline_macros::Outputs;

#[derive(Debug, Clone, Copy, Outputs)]
#[outputs(series_name = "ShearSeries")]
pub struct ShearOutputs {
    pub tractive_force: f64,
    pub hydraulic_radius: f64,
}

fn main() {
    let r = ShearOutputs { tractive_force: 2.3, hydraulic_radius: 0.046 };
    let mut series = ShearSeries::with_capacity(5);
    series.push(&r);
    series.push(&r);
    assert_eq!(series.len(), 2);
    assert_eq!(series.tractive_force, vec![2.3, 2.3]);
    assert_eq!(ShearOutputs::field_names(), &["tractive_force", "hydraulic_radius"]);
}
