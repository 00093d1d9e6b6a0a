use derive_more::IsVariant;

/// Options the driver provides on its own, ahead of any entry point parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum Builtin {
    Simulator,
    Version,
    Help,
}

impl Builtin {
    pub const ALL: [Builtin; 3] = [Self::Simulator, Self::Version, Self::Help];

    pub fn primary(self) -> &'static str {
        match self {
            Self::Simulator => "simulator",
            Self::Version => "version",
            Self::Help => "help",
        }
    }

    pub fn alternate(self) -> &'static str {
        match self {
            Self::Simulator => "driver-simulator",
            Self::Version => "driver-version",
            Self::Help => "driver-help",
        }
    }

    pub fn shorts(self) -> &'static [char] {
        match self {
            Self::Simulator => &['s'],
            Self::Version => &[],
            Self::Help => &['h', '?'],
        }
    }

    pub fn takes_value(self) -> bool {
        self.is_simulator()
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Simulator => "The name of the simulator to use.",
            Self::Version => "Show version information.",
            Self::Help => "Show help and usage information.",
        }
    }
}

/// What happens to a built-in whose name a parameter has claimed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, IsVariant)]
pub enum ShadowPolicy {
    /// Move the built-in to its alternate name, omitting it only if that is taken too.
    #[default]
    Rename,
    Omit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedBuiltin {
    pub builtin: Builtin,
    pub long: String,
    pub shorts: Vec<char>,
}

impl ResolvedBuiltin {
    pub fn long_flag(&self) -> String {
        format!("--{}", self.long)
    }

    pub fn flags(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.long_flag()).chain(self.shorts.iter().map(|short| format!("-{}", short)))
    }
}

/// Records a built-in that lost its primary name to a parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shadowing {
    pub builtin: Builtin,
    pub parameter: String,
    pub renamed_to: Option<String>,
}
