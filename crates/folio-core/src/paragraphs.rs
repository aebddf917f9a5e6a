//! Paragraph splitting for the reader body.

use crate::formatter::PARAGRAPH_BREAK;
use sha2::{Digest, Sha256};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::trace;

const DEFAULT_CACHE_CAPACITY: usize = 8;

/// Non-blank paragraphs of `content`, trimmed, in order.
///
/// The iterator borrows `content` and can be recreated at any time.
pub fn paragraphs(content: &str) -> impl Iterator<Item = &str> + '_ {
    content
        .split(PARAGRAPH_BREAK)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
}

/// Memoized paragraph blocks keyed on content digest.
#[derive(Debug)]
pub struct ParagraphCache {
    capacity: usize,
    last: Option<(Arc<str>, Arc<[String]>)>,
    entries: VecDeque<([u8; 32], Arc<[String]>)>,
}

impl ParagraphCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            last: None,
            entries: VecDeque::new(),
        }
    }

    /// Blocks for `content`; unchanged content is served without rehashing.
    pub fn blocks(&mut self, content: &Arc<str>) -> Arc<[String]> {
        if let Some((source, blocks)) = &self.last {
            if Arc::ptr_eq(source, content) {
                return Arc::clone(blocks);
            }
        }

        let key = digest(content);
        let blocks = match self.entries.iter().position(|(k, _)| *k == key) {
            Some(idx) => {
                trace!(idx, "Paragraph cache hit");
                let entry = self.entries.remove(idx).map(|(_, blocks)| blocks);
                entry.unwrap_or_else(|| collect_blocks(content))
            }
            None => {
                trace!(bytes = content.len(), "Paragraph cache miss");
                collect_blocks(content)
            }
        };

        self.entries.push_front((key, Arc::clone(&blocks)));
        self.entries.truncate(self.capacity);
        self.last = Some((Arc::clone(content), Arc::clone(&blocks)));
        blocks
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ParagraphCache {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_blocks(content: &str) -> Arc<[String]> {
    paragraphs(content).map(str::to_string).collect()
}

fn digest(content: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_paragraphs_are_skipped() {
        let content = "one\n\n   \n\ntwo\n\n\n\nthree";
        let blocks: Vec<&str> = paragraphs(content).collect();
        assert_eq!(blocks, vec!["one", "two", "three"]);
    }

    #[test]
    fn blocks_are_trimmed_around_stray_breaks() {
        let blocks: Vec<&str> = paragraphs("first\n\n\n  second  ").collect();
        assert_eq!(blocks, vec!["first", "second"]);

        let mut cache = ParagraphCache::new();
        let cached = cache.blocks(&Arc::from("  indented\n\n\n\ttabbed\n"));
        assert_eq!(&*cached, &["indented".to_string(), "tabbed".to_string()]);
    }

    #[test]
    fn empty_content_has_no_paragraphs() {
        assert_eq!(paragraphs("").count(), 0);
        assert_eq!(paragraphs("\n\n\n\n").count(), 0);
    }

    #[test]
    fn iterator_is_restartable() {
        let content = "a\n\nb";
        let first: Vec<&str> = paragraphs(content).collect();
        let second: Vec<&str> = paragraphs(content).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn same_arc_returns_same_blocks() {
        let mut cache = ParagraphCache::new();
        let content: Arc<str> = Arc::from("x\n\ny");
        let first = cache.blocks(&content);
        let second = cache.blocks(&content);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(&*first, &["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn equal_content_in_new_allocation_hits_digest() {
        let mut cache = ParagraphCache::new();
        let first = cache.blocks(&Arc::from("p\n\nq"));
        let _other = cache.blocks(&Arc::from("r"));
        let again = cache.blocks(&Arc::from("p\n\nq"));
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn capacity_bounds_entries() {
        let mut cache = ParagraphCache::with_capacity(2);
        for text in ["a", "b", "c", "d"] {
            cache.blocks(&Arc::from(text));
        }
        assert_eq!(cache.len(), 2);
    }

    proptest! {
        #[test]
        fn joined_paragraphs_split_back(
            ps in proptest::collection::vec("[a-zA-Z0-9][a-zA-Z0-9 ,.]{0,20}[a-zA-Z0-9.]", 0..12)
        ) {
            let joined = ps.join("\n\n");
            let split: Vec<String> = paragraphs(&joined).map(str::to_string).collect();
            prop_assert_eq!(split, ps);
        }
    }
}
