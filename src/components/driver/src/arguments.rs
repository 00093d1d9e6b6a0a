use crate::InvocationError;
use domain::Value;
use indexmap::IndexMap;

/// One value per entry point parameter, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedArguments {
    values: IndexMap<String, Value>,
}

impl ParsedArguments {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn require(&self, name: &str) -> Result<&Value, InvocationError> {
        self.get(name)
            .ok_or_else(|| InvocationError::new(format!("No argument named '{}'", name)))
    }
}

impl FromIterator<(String, Value)> for ParsedArguments {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
