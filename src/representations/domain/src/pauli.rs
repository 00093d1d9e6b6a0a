use derive_more::IsVariant;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

impl Pauli {
    pub const ALL: [Pauli; 4] = [Self::I, Self::X, Self::Y, Self::Z];

    pub fn name(self) -> &'static str {
        match self {
            Self::I => "PauliI",
            Self::X => "PauliX",
            Self::Y => "PauliY",
            Self::Z => "PauliZ",
        }
    }

    // Names are matched exactly, "paulix" is not a Pauli.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pauli| pauli.name() == name)
    }
}
