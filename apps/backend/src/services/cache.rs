//! Parsed deck cache keyed by chapter prefix and content hash.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use sha2::{Digest, Sha256};
use slide_core::{parse_slides, AssetTable, Deck};

#[derive(Debug)]
struct CachedDeck {
    hash: Vec<u8>,
    deck: Arc<Deck>,
}

/// Memoizes `parse_slides` per prefix.
///
/// Holds one deck per prefix. When a chapter's markdown changes its hash no
/// longer matches and the entry is replaced, so the cache never grows past
/// the number of chapters.
#[derive(Debug, Default)]
pub struct DeckCache {
    decks: RwLock<HashMap<String, CachedDeck>>,
}

impl DeckCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_parse(&self, prefix: &str, markdown: &str, assets: &AssetTable) -> Arc<Deck> {
        let hash = content_hash(markdown);

        if let Some(cached) = self.read().get(prefix) {
            if cached.hash == hash {
                return cached.deck.clone();
            }
        }

        let deck = Arc::new(parse_slides(markdown, prefix, assets));
        tracing::debug!("Parsed deck {} ({} slides)", prefix, deck.slide_count());
        self.write().insert(
            prefix.to_string(),
            CachedDeck {
                hash,
                deck: deck.clone(),
            },
        );
        deck
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, CachedDeck>> {
        self.decks.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, CachedDeck>> {
        self.decks.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn content_hash(markdown: &str) -> Vec<u8> {
    Sha256::digest(markdown.as_bytes()).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_content_hits_cache() {
        let cache = DeckCache::new();
        let assets = AssetTable::default();

        let first = cache.get_or_parse("strings", "A\n<!--slide-->\nB", &assets);
        let second = cache.get_or_parse("strings", "A\n<!--slide-->\nB", &assets);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(first.slide_count(), 2);
    }

    #[test]
    fn test_prefix_is_part_of_key() {
        let cache = DeckCache::new();
        let assets = AssetTable::default();

        let a = cache.get_or_parse("a", "same", &assets);
        let b = cache.get_or_parse("b", "same", &assets);

        assert_eq!(a.sections[0].slides[0].id, "a-0-0");
        assert_eq!(b.sections[0].slides[0].id, "b-0-0");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_changed_content_replaces_entry() {
        let cache = DeckCache::new();
        let assets = AssetTable::default();

        let old = cache.get_or_parse("c", "v1", &assets);
        let new = cache.get_or_parse("c", "v2", &assets);
        let again = cache.get_or_parse("c", "v2", &assets);

        assert_eq!(old.sections[0].slides[0].content, "v1");
        assert_eq!(new.sections[0].slides[0].content, "v2");
        assert!(Arc::ptr_eq(&new, &again));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_repeated_edits_stay_bounded() {
        let cache = DeckCache::new();
        let assets = AssetTable::default();

        for version in 0..20 {
            cache.get_or_parse("c", &format!("v{version}"), &assets);
        }

        assert_eq!(cache.len(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
