use super::{Container, NodeContext};
use crate::types::{FunctionName, FunctionSettings, VariableName};

impl FunctionSettings {
    pub fn with_function_name(&self, function_name: FunctionName) -> Self {
        Self {
            function_name,
            ..self.clone()
        }
    }

    pub fn with_variable_name(&self, variable_name: VariableName) -> Self {
        Self {
            variable_name,
            ..self.clone()
        }
    }
}

/// A function has no mode toggle and no invariant of its own; its body carries both.
impl Container for FunctionSettings {
    fn normalize(&self, _ctx: &NodeContext<'_>) -> Self {
        self.clone()
    }
}
