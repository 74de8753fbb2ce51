//! Memoized time value parsing.

use std::collections::HashMap;
use std::sync::RwLock;

use super::TimeValue;
use crate::error::Result;

/// Cache of parsed [`TimeValue`]s keyed by their exact input text.
///
/// Safe to share between threads. Parsing the same text always yields an
/// equal value, so concurrent inserts for one key are interchangeable.
#[derive(Debug, Default)]
pub struct TimeCache {
    entries: RwLock<HashMap<String, TimeValue>>,
}

impl TimeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text`, reusing an earlier result for identical text.
    ///
    /// Failed parses are not cached.
    pub fn parse(&self, text: &str) -> Result<TimeValue> {
        if let Ok(entries) = self.entries.read()
            && let Some(value) = entries.get(text)
        {
            return Ok(value.clone());
        }

        let value = TimeValue::parse(text)?;

        // A poisoned lock only costs the memoization.
        if let Ok(mut entries) = self.entries.write() {
            entries
                .entry(text.to_string())
                .or_insert_with(|| value.clone());
        }

        Ok(value)
    }

    /// Number of cached values.
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    /// Whether the cache holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached values.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_parse_caches_by_text() {
        let cache = TimeCache::new();
        assert!(cache.is_empty());

        let first = cache.parse("3:45").unwrap();
        let second = cache.parse("3:45").unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        cache.parse("03:45").unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cached_value_matches_uncached_parse() {
        let cache = TimeCache::new();
        for text in ["0", "59", "1:00", "0:60", "1:02:03"] {
            assert_eq!(cache.parse(text).unwrap(), TimeValue::parse(text).unwrap());
            assert_eq!(cache.parse(text).unwrap(), TimeValue::parse(text).unwrap());
        }
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = TimeCache::new();
        assert!(cache.parse("2:70").is_err());
        assert!(cache.parse("2:70").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = TimeCache::new();
        cache.parse("1:00").unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_parse() {
        let cache = Arc::new(TimeCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    (0..60)
                        .map(|s| cache.parse(&format!("1:{s:02}")).unwrap().seconds())
                        .sum::<u64>()
                })
            })
            .collect();

        let expected: u64 = (0..60).map(|s| 60 + s).sum();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
        assert_eq!(cache.len(), 60);
    }
}
