/* -------- Public modules -------- */
pub mod chain;
pub mod config;
pub mod hash_table;
pub mod hash_variant;
pub mod logger;

/* -------- Re-exports -------- */
pub use chain::{Chain, Entry};
pub use config::TableConfig;
pub use hash_table::{ChainedHashTable, TableStats};
pub use hash_variant::HashVariant;

/* -------- Error type -------- */
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    InvalidCapacity(usize),
    InvalidConfig(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::InvalidCapacity(cap) => {
                write!(f, "Invalid initial capacity {} (minimum is {})", cap, config::MIN_CAPACITY)
            }
            TableError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for TableError {}
