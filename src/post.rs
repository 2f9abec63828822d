use crate::global_variables::*;
use std::fmt;

pub struct PostResult {
    pub name: String,
    pub label: String,
    pub value: Float,
}

impl PostResult {
    pub fn new(name: &str, label: &str, value: Float) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value,
        }
    }
}

impl fmt::Display for PostResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:<28} {:>16.8e}", self.label, self.value)
    }
}
