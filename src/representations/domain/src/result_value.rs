use derive_more::IsVariant;

/// A measurement result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum ResultValue {
    Zero,
    One,
}

impl ResultValue {
    pub fn name(self) -> &'static str {
        match self {
            Self::Zero => "Zero",
            Self::One => "One",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        if token == "0" || token.eq_ignore_ascii_case("zero") {
            Some(Self::Zero)
        } else if token == "1" || token.eq_ignore_ascii_case("one") {
            Some(Self::One)
        } else {
            None
        }
    }
}
