use std::fmt;
use std::str::FromStr;

use crate::TableError;

/// Fractional part of the golden ratio.
pub const GOLDEN_FRACTION: f64 = 0.6180339887;

/// Strategy mapping a key to a bucket index. Fixed for a table's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashVariant {
    /// `floor(capacity * frac(key * A))`.
    Multiplicative,
    /// `key mod capacity`.
    Division,
}

impl Default for HashVariant {
    fn default() -> Self { HashVariant::Multiplicative }
}

impl HashVariant {
    /// Bucket index for `key` in a table of `capacity` buckets, always in `[0, capacity)`.
    #[inline]
    pub fn bucket_index(self, key: i32, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        let cap = capacity as i64;
        let idx = match self {
            HashVariant::Multiplicative => {
                // float `%` keeps the sign of the dividend, so negative keys give frac in (-1, 0]
                let frac = (key as f64 * GOLDEN_FRACTION) % 1.0;
                ((capacity as f64 * frac).floor() as i64).rem_euclid(cap)
            }
            HashVariant::Division => (key as i64).rem_euclid(cap),
        };
        debug_assert!((0..cap).contains(&idx));
        idx as usize
    }
}

impl fmt::Display for HashVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashVariant::Multiplicative => write!(f, "multiplicative"),
            HashVariant::Division => write!(f, "division"),
        }
    }
}

impl FromStr for HashVariant {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "multiplicative" => Ok(HashVariant::Multiplicative),
            "division" => Ok(HashVariant::Division),
            other => Err(TableError::InvalidConfig(format!("unknown hash variant '{}'", other))),
        }
    }
}
