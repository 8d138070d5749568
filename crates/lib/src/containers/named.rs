//! Points, sets and intervals: a display name over one coefficient collection.

use super::{Container, NodeContext};
use crate::types::{CapitalLetter, IntervalSettings, IntervalType, PointSettings, SetSettings};

macro_rules! named_container {
    ($($shape:ty),+) => {
        $(
            impl $shape {
                pub fn with_name(&self, name: CapitalLetter) -> Self {
                    Self {
                        name,
                        ..self.clone()
                    }
                }

                pub fn with_show_name(&self, show_name: bool) -> Self {
                    Self {
                        show_name,
                        ..self.clone()
                    }
                }
            }

            impl Container for $shape {
                fn normalize(&self, _ctx: &NodeContext<'_>) -> Self {
                    self.clone()
                }

                fn preserve(&self, base: Self) -> Self {
                    Self {
                        name: self.name,
                        show_name: self.show_name,
                        ..base
                    }
                }
            }
        )+
    };
}

named_container!(PointSettings, SetSettings, IntervalSettings);

impl IntervalSettings {
    pub fn with_interval_type(&self, interval_type: IntervalType) -> Self {
        Self {
            interval_type,
            ..self.clone()
        }
    }

    pub fn with_minimum_length(&self, minimum_length: u32) -> Self {
        Self {
            minimum_length,
            ..self.clone()
        }
    }
}
