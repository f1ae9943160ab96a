use core::fmt;
use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;

use crate::{error::RuntimeError, interpreter::DisplayNumber};


/// Flat variable store shared by every statement of a session.
///
/// There is no declaration step and no nested scope, assigning a name always
/// overwrites the single binding for it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Environment {
    bindings: HashMap<String, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Result<f64, RuntimeError> {
        self.bindings.get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable(name.to_owned()))
    }

    pub fn set(&mut self, name: &str, value: f64) {
        match self.bindings.get_mut(name) {
            Some(slot) => *slot = value,
            None => { self.bindings.insert(name.to_owned(), value); }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listing = self.iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(name, value)| format!("{} = {}", name, DisplayNumber(value)))
            .join("\n");
        f.write_str(&listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites() {
        let mut environment = Environment::new();
        environment.set("x", 1.0);
        environment.set("x", 2.5);

        assert_eq!(environment.get("x"), Ok(2.5));
        assert_eq!(environment.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut environment = Environment::new();
        environment.set("x", 1.0);

        assert!(environment.contains("x"));
        assert_eq!(environment.get("X"), Err(RuntimeError::UndefinedVariable("X".to_owned())));
    }

    #[test]
    fn serializes_as_a_flat_object() -> anyhow::Result<()> {
        let mut environment = Environment::new();
        environment.set("x", 1.5);
        environment.set("count", 3.0);

        assert_eq!(serde_json::to_value(&environment)?, serde_json::json!({ "x": 1.5, "count": 3.0 }));
        assert_eq!(serde_json::to_string(&Environment::new())?, "{}");
        Ok(())
    }

    #[test]
    fn display_is_sorted() {
        let mut environment = Environment::new();
        environment.set("b", 0.5);
        environment.set("a", 3.0);

        assert_eq!(environment.to_string(), "a = 3\nb = 0.5");
        assert_eq!(Environment::new().to_string(), "");
    }
}
