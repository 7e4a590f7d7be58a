use crate::hash_variant::HashVariant;
use crate::TableError;

pub const MIN_CAPACITY: usize = 2;
pub const DEFAULT_CAPACITY: usize = 4;

/// Grow when `size / capacity` exceeds this.
pub const GROW_LOAD_FACTOR: f64 = 1.0;
/// Shrink when `size / capacity` falls below this (and capacity is above the floor).
pub const SHRINK_LOAD_FACTOR: f64 = 0.25;

pub const ENV_INITIAL_CAPACITY: &str = "CHT_INITIAL_CAPACITY";
pub const ENV_HASH_VARIANT: &str = "CHT_HASH_VARIANT";

#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    pub initial_capacity: usize, // Bucket count at construction, >= MIN_CAPACITY
    pub hash_variant: HashVariant,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            hash_variant: HashVariant::Multiplicative,
        }
    }
}

impl TableConfig {
    /// Defaults overridden by `CHT_INITIAL_CAPACITY` / `CHT_HASH_VARIANT` when set.
    pub fn from_env() -> Result<Self, TableError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, TableError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ENV_INITIAL_CAPACITY) {
            cfg.initial_capacity = raw.trim().parse().map_err(|_| {
                TableError::InvalidConfig(format!("{}='{}' is not a capacity", ENV_INITIAL_CAPACITY, raw))
            })?;
        }
        if let Some(raw) = lookup(ENV_HASH_VARIANT) {
            cfg.hash_variant = raw.parse()?;
        }

        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.initial_capacity < MIN_CAPACITY {
            return Err(TableError::InvalidCapacity(self.initial_capacity));
        }
        Ok(())
    }
}
