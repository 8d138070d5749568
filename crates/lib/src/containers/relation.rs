use super::{Container, NodeContext};
use crate::types::{EquationSettings, InequalitySettings, InequalityType};

impl InequalitySettings {
    pub fn with_inequality_type(&self, inequality_type: InequalityType) -> Self {
        Self {
            inequality_type,
            ..self.clone()
        }
    }
}

// The number of sides follows the data. A mode switch replaces the whole
// relation, so arity and mode only diverge when settings are imported.

impl Container for EquationSettings {
    fn normalize(&self, _ctx: &NodeContext<'_>) -> Self {
        self.clone()
    }
}

impl Container for InequalitySettings {
    fn normalize(&self, _ctx: &NodeContext<'_>) -> Self {
        self.clone()
    }
}
