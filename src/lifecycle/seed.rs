//! Startup data for the stores.

use crate::config::ConfigError;
use crate::model::{Dish, Order};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Contents of a seed file: `{ "dishes": [...], "orders": [...] }`.
///
/// Either list may be omitted. Orders without a `status` start as `pending`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl SeedData {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        seed.validate()?;
        Ok(seed)
    }

    /// Every id must be unique across dishes and orders, since both kinds
    /// draw from one identifier space.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        let ids = self
            .dishes
            .iter()
            .map(|dish| dish.id.as_str())
            .chain(self.orders.iter().map(|order| order.id.as_str()));
        for id in ids {
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateId { id: id.to_string() });
            }
        }
        Ok(())
    }
}
