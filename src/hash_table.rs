use std::fmt;
use std::fmt::Write as _;

use log::{debug, trace};

use crate::chain::Chain;
use crate::config::{TableConfig, GROW_LOAD_FACTOR, MIN_CAPACITY, SHRINK_LOAD_FACTOR};
use crate::hash_variant::HashVariant;
use crate::TableError;

/// Integer-keyed hash table with separate chaining.
///
/// After every insert of a new key and every successful remove the load
/// factor is re-evaluated once: above 1.0 the bucket array doubles, below
/// 0.25 it halves (never under two buckets). Overwrites and lookups never
/// resize.
#[derive(Debug, Clone)]
pub struct ChainedHashTable {
    buckets: Vec<Chain>,
    size: usize,
    hash_variant: HashVariant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    pub size: usize,
    pub capacity: usize,
    pub load_factor: f64,
    pub longest_chain: usize,
    pub empty_buckets: usize,
    pub avg_chain_length: f64, // over non-empty buckets
}

impl ChainedHashTable {
    // ---------------- constructors ----------------

    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        trace!(
            "new table: capacity={} hash={}",
            config.initial_capacity,
            config.hash_variant
        );
        Ok(Self {
            buckets: Self::empty_buckets(config.initial_capacity),
            size: 0,
            hash_variant: config.hash_variant,
        })
    }

    pub fn with_capacity(initial_capacity: usize, hash_variant: HashVariant) -> Result<Self, TableError> {
        Self::new(TableConfig { initial_capacity, hash_variant })
    }

    pub fn with_default_config() -> Self {
        let cfg = TableConfig::default();
        Self {
            buckets: Self::empty_buckets(cfg.initial_capacity),
            size: 0,
            hash_variant: cfg.hash_variant,
        }
    }

    fn empty_buckets(capacity: usize) -> Vec<Chain> {
        std::iter::repeat_with(Chain::new).take(capacity).collect()
    }

    // ---------------- accessors ----------------

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn hash_variant(&self) -> HashVariant {
        self.hash_variant
    }

    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    #[inline]
    fn bucket_index(&self, key: i32) -> usize {
        self.hash_variant.bucket_index(key, self.capacity())
    }

    // ---------------- operations ----------------

    /// Inserts or overwrites. Only a new key changes `size` and may resize.
    pub fn insert(&mut self, key: i32, value: i32) {
        let idx = self.bucket_index(key);
        let chain = &mut self.buckets[idx];
        match chain.find_mut(key) {
            Some(entry) => entry.value = value,
            None => {
                chain.insert(key, value);
                self.size += 1;
                self.resize_if_needed();
            }
        }
    }

    /// Returns whether `key` was present.
    pub fn remove(&mut self, key: i32) -> bool {
        let idx = self.bucket_index(key);
        let removed = self.buckets[idx].remove(key);
        if removed {
            self.size -= 1;
            self.resize_if_needed();
        }
        removed
    }

    pub fn search(&self, key: i32) -> Option<i32> {
        self.buckets[self.bucket_index(key)].find(key).map(|e| e.value)
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.buckets[self.bucket_index(key)].find(key).is_some()
    }

    /// Drops every entry but keeps the current bucket count.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.size = 0;
        trace!("cleared table, capacity={}", self.capacity());
    }

    /// `(key, value)` pairs bucket by bucket, front-to-back within a bucket.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|e| (e.key, e.value)))
    }

    /// Dump of every bucket in the form `Bucket i: [k:v] <-> ... NULL`.
    pub fn display(&self) -> String {
        let mut out = String::new();
        for (i, chain) in self.buckets.iter().enumerate() {
            // writing into a String cannot fail
            let _ = write!(out, "Bucket {}: ", i);
            for e in chain.iter() {
                let _ = write!(out, "[{}:{}] <-> ", e.key, e.value);
            }
            out.push_str("NULL\n");
        }
        out
    }

    pub fn stats(&self) -> TableStats {
        let mut longest_chain = 0usize;
        let mut empty_buckets = 0usize;

        for chain in &self.buckets {
            longest_chain = longest_chain.max(chain.len());
            if chain.is_empty() {
                empty_buckets += 1;
            }
        }

        let occupied = self.capacity() - empty_buckets;
        TableStats {
            size: self.size,
            capacity: self.capacity(),
            load_factor: self.load_factor(),
            longest_chain,
            empty_buckets,
            avg_chain_length: if occupied > 0 {
                self.size as f64 / occupied as f64
            } else {
                0.0
            },
        }
    }

    // ---------------- resizing ----------------

    // One step at most: a single insert/remove can cross only one threshold.
    fn resize_if_needed(&mut self) {
        let load = self.load_factor();
        let capacity = self.capacity();
        if load > GROW_LOAD_FACTOR {
            self.rehash(capacity * 2);
        } else if load < SHRINK_LOAD_FACTOR && capacity > MIN_CAPACITY {
            self.rehash((capacity / 2).max(MIN_CAPACITY));
        }
    }

    fn rehash(&mut self, new_capacity: usize) {
        debug!(
            "rehash: capacity {} -> {} (size={})",
            self.capacity(),
            new_capacity,
            self.size
        );

        let old_buckets = std::mem::replace(&mut self.buckets, Self::empty_buckets(new_capacity));
        self.size = 0;

        for chain in old_buckets {
            for entry in chain {
                self.insert_raw(entry.key, entry.value);
            }
        }
    }

    // Placement only: keys are already unique and no resize check runs.
    #[inline]
    fn insert_raw(&mut self, key: i32, value: i32) {
        let idx = self.bucket_index(key);
        self.buckets[idx].insert(key, value);
        self.size += 1;
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::with_default_config()
    }
}

impl fmt::Display for ChainedHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
