use schema::ShadowPolicy;

#[derive(Clone, Debug)]
pub struct DriverSettings {
    pub program_name: String,
    pub version: String,
    pub simulators: Vec<String>,
    pub default_simulator: String,
    pub shadow_policy: ShadowPolicy,
}

impl Default for DriverSettings {
    fn default() -> Self {
        let simulators = ["QuantumSimulator", "ToffoliSimulator", "ResourcesEstimator"]
            .into_iter()
            .map(String::from)
            .collect();

        Self {
            program_name: "entry-point".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            simulators,
            default_simulator: "QuantumSimulator".into(),
            shadow_policy: ShadowPolicy::default(),
        }
    }
}
