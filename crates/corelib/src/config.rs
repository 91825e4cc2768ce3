//! Continuum configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ring::DEFAULT_TOTAL_DOTS;

/// Tunables for a [`crate::Continuum`].
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuumConfig {
    /// Target number of dots on the whole ring. Higher values spread load
    /// more evenly at the cost of build time and memory.
    pub total_dots: usize,
    /// Rebuild the ring after every registry change.
    pub auto_rebuild: bool,
}

impl Default for ContinuumConfig {
    fn default() -> Self {
        Self {
            total_dots: DEFAULT_TOTAL_DOTS,
            auto_rebuild: true,
        }
    }
}

impl ContinuumConfig {
    pub fn with_total_dots(mut self, total_dots: usize) -> Self {
        self.total_dots = total_dots;
        self
    }

    pub fn with_auto_rebuild(mut self, auto_rebuild: bool) -> Self {
        self.auto_rebuild = auto_rebuild;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_dots == 0 {
            return Err(Error::Configuration("total_dots must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ContinuumConfig::default();
        assert_eq!(config.total_dots, 1000);
        assert!(config.auto_rebuild);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_dots_rejected() {
        let config = ContinuumConfig::default().with_total_dots(0);
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ContinuumConfig = serde_json::from_str(r#"{"total_dots": 4000}"#).unwrap();
        assert_eq!(config.total_dots, 4000);
        assert!(config.auto_rebuild);
    }
}
