use domain::DomainType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    pub ty: DomainType,
    pub documentation: Option<String>,
    pub position: usize,
}

/// The parameter list and return type of an entry point, as supplied by the front-end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub documentation: Option<String>,
    pub parameters: Vec<ParameterSpec>,
    pub return_type: DomainType,
}

impl Signature {
    pub fn new(name: impl ToString, return_type: DomainType) -> Self {
        Self {
            name: name.to_string(),
            documentation: None,
            parameters: Vec::new(),
            return_type,
        }
    }

    pub fn with_summary(mut self, documentation: impl ToString) -> Self {
        self.documentation = Some(documentation.to_string());
        self
    }

    pub fn param(mut self, name: impl ToString, ty: DomainType) -> Self {
        let position = self.parameters.len();

        self.parameters.push(ParameterSpec {
            name: name.to_string(),
            ty,
            documentation: None,
            position,
        });
        self
    }

    pub fn documented_param(
        self,
        name: impl ToString,
        ty: DomainType,
        documentation: impl ToString,
    ) -> Self {
        let name = name.to_string();
        self.param(&name, ty)
            .with_documentation([(name, documentation.to_string())])
    }

    /// Attaches parameter descriptions by name. Names that match no parameter are ignored.
    pub fn with_documentation(
        mut self,
        documentation: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        for (name, text) in documentation {
            if let Some(parameter) = self
                .parameters
                .iter_mut()
                .find(|parameter| parameter.name == name)
            {
                parameter.documentation = Some(text);
            }
        }
        self
    }
}
