use std::collections::HashMap;

use crate::error::{KeyingError, Result};
use crate::keying::{KeyMode, PassthroughMode, WhiteMode};

/// Registry for the available key modes
///
/// Modes are registered by name and resolved when a run is configured, so a
/// mode is always picked explicitly rather than defaulted in code.
pub struct KeyModeRegistry {
    modes: HashMap<String, Box<dyn Fn() -> Box<dyn KeyMode>>>,
}

impl KeyModeRegistry {
    /// Create a new registry with all built-in modes
    pub fn new() -> Self {
        let mut registry = Self {
            modes: HashMap::new(),
        };

        registry.register_builtin_modes();
        registry
    }

    fn register_builtin_modes(&mut self) {
        self.modes.insert(
            WhiteMode::NAME.to_string(),
            Box::new(|| Box::new(WhiteMode::new())),
        );

        self.modes.insert(
            PassthroughMode::NAME.to_string(),
            Box::new(|| Box::new(PassthroughMode::new())),
        );
    }

    /// Register a custom mode
    ///
    /// # Arguments
    ///
    /// * `name` - Unique name for the mode
    /// * `factory` - Function that creates new instances of the mode
    pub fn register<F>(&mut self, name: String, factory: F)
    where
        F: Fn() -> Box<dyn KeyMode> + 'static,
    {
        self.modes.insert(name, Box::new(factory));
    }

    /// Get a mode by name, or None if it is not registered
    pub fn get_mode(&self, name: &str) -> Option<Box<dyn KeyMode>> {
        self.modes.get(name).map(|factory| factory())
    }

    /// Get a mode by name, failing with [`KeyingError::UnknownMode`]
    pub fn resolve(&self, name: &str) -> Result<Box<dyn KeyMode>> {
        self.get_mode(name).ok_or_else(|| {
            KeyingError::UnknownMode {
                name: name.to_string(),
                available: self.available_modes(),
            }
            .into()
        })
    }

    /// All registered mode names, sorted
    pub fn available_modes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modes.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn has_mode(&self, name: &str) -> bool {
        self.modes.contains_key(name)
    }
}

impl Default for KeyModeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompositorError;

    #[test]
    fn test_builtin_modes_available() {
        let registry = KeyModeRegistry::new();

        assert!(registry.has_mode("white"));
        assert!(registry.has_mode("passthrough"));
        assert_eq!(registry.available_modes().len(), 2);
        assert_eq!(registry.available_modes(), vec!["passthrough", "white"]);
    }

    #[test]
    fn test_get_mode() {
        let registry = KeyModeRegistry::new();

        let white = registry.get_mode("white");
        assert!(white.is_some());
        assert_eq!(white.unwrap().name(), "white");

        assert!(registry.get_mode("sepia").is_none());
    }

    #[test]
    fn test_resolve_unknown_mode() {
        let registry = KeyModeRegistry::new();

        match registry.resolve("sepia") {
            Err(CompositorError::Keying(KeyingError::UnknownMode { name, available })) => {
                assert_eq!(name, "sepia");
                assert_eq!(available, vec!["passthrough", "white"]);
            }
            other => panic!("expected UnknownMode, got {:?}", other.map(|m| m.name().to_string())),
        }
    }

    #[test]
    fn test_custom_mode_registration() {
        struct InvertMode;

        impl KeyMode for InvertMode {
            fn name(&self) -> &str {
                "invert"
            }

            fn description(&self) -> &str {
                "Invert foreground colors"
            }

            fn foreground(&self, [r, g, b, a]: [u8; 4]) -> [u8; 4] {
                [255 - r, 255 - g, 255 - b, a]
            }
        }

        let mut registry = KeyModeRegistry::new();
        registry.register("invert".to_string(), || Box::new(InvertMode));

        assert!(registry.has_mode("invert"));
        assert_eq!(registry.available_modes().len(), 3);

        let mode = registry.resolve("invert").unwrap();
        assert_eq!(mode.foreground([255, 0, 55, 9]), [0, 255, 200, 9]);
    }
}
