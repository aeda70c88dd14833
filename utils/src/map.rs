use std::hash::Hash;

use fnv::FnvHashMap;

/// FNV-hashed map for small integer keys.
pub struct Map<K, V>(pub FnvHashMap<K, V>);

impl<K: Eq + Hash, V> Map<K, V> {
    pub fn new() -> Self {
        Self(FnvHashMap::<K, V>::default())
    }

    pub fn insert(&mut self, k: K, data: V) -> Option<V> {
        self.0.insert(k, data)
    }

    pub fn get(&self, k: &K) -> Option<&V> {
        self.0.get(k)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get() {
        let mut map: Map<(usize, u64), &str> = Map::new();
        assert!(map.is_empty());
        assert_eq!(map.insert((7, 13), "a"), None);
        assert_eq!(map.insert((7, 13), "b"), Some("a"));
        assert_eq!(map.get(&(7, 13)), Some(&"b"));
        assert_eq!(map.get(&(7, 17)), None);
        assert_eq!(map.len(), 1);
    }
}
