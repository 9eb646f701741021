//! Templates: pre-built component lists that seed a new canvas.

use crate::component::PlacedComponent;
use serde::{Deserialize, Serialize};

/// A named starting layout. Loading one fully replaces the canvas list
/// and resets history to a single snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub components: Vec<PlacedComponent>,
}

impl Template {
    pub fn new(name: impl Into<String>, components: Vec<PlacedComponent>) -> Self {
        Self {
            name: name.into(),
            components,
        }
    }

    /// The empty starting point.
    pub fn blank() -> Self {
        Self::new("Blank Template", Vec::new())
    }

    /// Blank templates keep the project's current name instead of
    /// renaming it.
    pub fn is_blank(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_template() {
        let blank = Template::blank();
        assert!(blank.is_blank());
        assert!(blank.components.is_empty());
    }

    #[test]
    fn test_template_round_trip() {
        let template = Template::blank();
        let json = serde_json::to_string(&template).unwrap();
        let back: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(back, template);
    }

    #[test]
    fn test_missing_components_field_defaults_empty() {
        let template: Template = serde_json::from_str(r#"{"name":"Portfolio"}"#).unwrap();
        assert!(template.components.is_empty());
    }
}
