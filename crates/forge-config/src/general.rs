//! General application configuration.

use forge_core::enums::InsertOrder;
use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Where new entities land when generate calls overlap.
    #[serde(default)]
    pub insert_order: InsertOrder,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            insert_order: InsertOrder::default(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.insert_order, InsertOrder::Completion);
        assert_eq!(config.default_limit, 20);
    }
}
