use std::collections::VecDeque;

/// A single key/value pair stored in a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub key: i32,
    pub value: i32,
}

impl Entry {
    #[inline(always)]
    pub fn new(key: i32, value: i32) -> Self {
        Self { key, value }
    }
}

/// Entries that hashed to the same bucket, most recently inserted first.
///
/// The chain does not deduplicate; the owning table checks for an existing
/// key before calling [`Chain::insert`].
#[derive(Debug, Clone, Default)]
pub struct Chain {
    entries: VecDeque<Entry>,
}

impl Chain {
    pub fn new() -> Self {
        Self { entries: VecDeque::new() }
    }

    /// Prepends a new entry.
    #[inline]
    pub fn insert(&mut self, key: i32, value: i32) {
        self.entries.push_front(Entry::new(key, value));
    }

    pub fn find(&self, key: i32) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn find_mut(&mut self, key: i32) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    /// Unlinks the first entry matching `key`. Returns whether one was found.
    pub fn remove(&mut self, key: i32) -> bool {
        match self.entries.iter().position(|e| e.key == key) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Front-to-back.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }
}

impl IntoIterator for Chain {
    type Item = Entry;
    type IntoIter = std::collections::vec_deque::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_prepends() {
        let mut c = Chain::new();
        c.insert(1, 10);
        c.insert(2, 20);
        c.insert(3, 30);
        let keys: Vec<i32> = c.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![3, 2, 1]);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn find_returns_match() {
        let mut c = Chain::new();
        c.insert(7, 70);
        c.insert(8, 80);
        assert_eq!(c.find(7), Some(&Entry::new(7, 70)));
        assert_eq!(c.find(9), None);
    }

    #[test]
    fn find_mut_updates_in_place() {
        let mut c = Chain::new();
        c.insert(5, 1);
        if let Some(e) = c.find_mut(5) {
            e.value = 2;
        }
        assert_eq!(c.find(5).map(|e| e.value), Some(2));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn remove_middle_keeps_order() {
        let mut c = Chain::new();
        for k in 1..=4 {
            c.insert(k, k * 10);
        }
        assert!(c.remove(2));
        let keys: Vec<i32> = c.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![4, 3, 1]);
    }

    #[test]
    fn remove_head_and_tail() {
        let mut c = Chain::new();
        c.insert(1, 1);
        c.insert(2, 2);
        c.insert(3, 3);
        assert!(c.remove(3));
        assert!(c.remove(1));
        let keys: Vec<i32> = c.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![2]);
    }

    #[test]
    fn remove_missing_is_false() {
        let mut c = Chain::new();
        assert!(!c.remove(1));
        c.insert(1, 1);
        assert!(!c.remove(2));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn clear_empties() {
        let mut c = Chain::new();
        c.insert(1, 1);
        c.insert(2, 2);
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.find(1), None);
    }

    #[test]
    fn into_iter_front_to_back() {
        let mut c = Chain::new();
        c.insert(1, 10);
        c.insert(2, 20);
        let entries: Vec<Entry> = c.into_iter().collect();
        assert_eq!(entries, vec![Entry::new(2, 20), Entry::new(1, 10)]);
    }
}
