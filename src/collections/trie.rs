/*!
Prefix tree over `char`s. Every node counts the words that pass through it and the words that
end in it, so duplicate words and prefix counts are answered without walking subtrees.
*/

use std::str::Chars;

use smallvec::SmallVec;
use tracing::trace;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: SmallVec<[(char, Box<TrieNode>); 4]>,
    /// words with this node on their path
    prefixes: usize,
    /// words ending in this node
    ends: usize,
}

impl TrieNode {
    fn position(&self, c: char) -> Option<usize> {
        self.children.iter().position(|(k, _)| *k == c)
    }

    fn child(&self, c: char) -> Option<&TrieNode> {
        self.position(c).map(|pos| self.children[pos].1.as_ref())
    }

    fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        let pos = match self.position(c) {
            Some(pos) => pos,
            None => {
                self.children.push((c, Box::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[pos].1
    }

    fn size(&self) -> usize {
        1 + self.children.iter().map(|(_, child)| child.size()).sum::<usize>()
    }
}

/// A trie storing a multiset of words
///
/// # Examples
/// ```
/// use algo_classics::collections::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("apple");
/// assert!(trie.search("apple"));
/// assert!(!trie.search("app"));
/// assert!(trie.starts_with("app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `word`
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        node.prefixes += 1;
        for c in word.chars() {
            node = node.child_or_insert(c);
            node.prefixes += 1;
        }
        node.ends += 1;
    }

    /// Same as [`Trie::insert`] but descends recursively
    pub fn insert_recursive(&mut self, word: &str) {
        fn insert_into(node: &mut TrieNode, mut chars: Chars) {
            node.prefixes += 1;
            match chars.next() {
                None => node.ends += 1,
                Some(c) => insert_into(node.child_or_insert(c), chars),
            }
        }

        insert_into(&mut self.root, word.chars());
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }

    /// Returns *true* if `word` was inserted (and not erased since)
    pub fn search(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.ends > 0)
    }

    /// Same as [`Trie::search`] but descends recursively
    pub fn search_recursive(&self, word: &str) -> bool {
        fn search_in(node: &TrieNode, mut chars: Chars) -> bool {
            match chars.next() {
                None => node.ends > 0,
                Some(c) => node.child(c).is_some_and(|child| search_in(child, chars)),
            }
        }

        search_in(&self.root, word.chars())
    }

    /// Returns *true* if some stored word starts with `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find(prefix).is_some_and(|node| node.prefixes > 0)
    }

    /// Number of stored occurrences of `word`
    pub fn count_words_equal_to(&self, word: &str) -> usize {
        self.find(word).map_or(0, |node| node.ends)
    }

    /// Number of stored words (with multiplicity) starting with `prefix`
    pub fn count_words_starting_with(&self, prefix: &str) -> usize {
        self.find(prefix).map_or(0, |node| node.prefixes)
    }

    /// Removes one occurrence of `word` and prunes nodes no word passes through anymore.
    /// Returns *false* (and leaves the trie untouched) if `word` is not stored.
    pub fn erase(&mut self, word: &str) -> bool {
        fn erase_from(node: &mut TrieNode, mut chars: Chars) {
            node.prefixes -= 1;
            let Some(c) = chars.next() else {
                node.ends -= 1;
                return;
            };
            let Some(pos) = node.position(c) else {
                return;
            };

            erase_from(&mut node.children[pos].1, chars);
            if node.children[pos].1.prefixes == 0 {
                trace!(%c, "prune trie branch");
                node.children.remove(pos);
            }
        }

        if self.count_words_equal_to(word) == 0 {
            return false;
        }
        erase_from(&mut self.root, word.chars());
        true
    }

    /// Number of stored words (with multiplicity)
    pub fn len(&self) -> usize {
        self.root.prefixes
    }

    /// Returns *true* if no word is stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[test]
    fn insert_and_search() {
        for recursive in [false, true] {
            let mut trie = Trie::new();
            let insert = |trie: &mut Trie, word| {
                if recursive {
                    trie.insert_recursive(word)
                } else {
                    trie.insert(word)
                }
            };

            insert(&mut trie, "apple");
            assert!(trie.search("apple"));
            assert!(trie.search_recursive("apple"));
            assert!(!trie.search("app"));
            assert!(!trie.search_recursive("app"));
            assert!(trie.starts_with("app"));

            insert(&mut trie, "app");
            assert!(trie.search("app"));
            assert!(trie.search_recursive("app"));
            assert!(!trie.starts_with("b"));
        }
    }

    #[test]
    fn counts_with_duplicates() {
        let mut trie = Trie::new();
        trie.insert("apple");
        trie.insert("apple");
        assert_eq!(trie.count_words_equal_to("apple"), 2);
        assert_eq!(trie.count_words_starting_with("app"), 2);

        trie.insert("apps");
        assert_eq!(trie.count_words_starting_with("app"), 3);
        assert_eq!(trie.count_words_starting_with(""), 3);
        assert_eq!(trie.len(), 3);

        assert!(trie.erase("apple"));
        assert_eq!(trie.count_words_equal_to("apple"), 1);
        assert_eq!(trie.count_words_starting_with("app"), 2);

        assert!(trie.erase("apple"));
        assert_eq!(trie.count_words_equal_to("apple"), 0);
        assert_eq!(trie.count_words_starting_with("app"), 1);
        assert!(!trie.search("apple"));
    }

    #[rstest]
    #[case::absent("banana")]
    #[case::prefix_only("app")]
    #[case::longer("apples")]
    fn erase_missing_is_noop(#[case] word: &str) {
        let mut trie = Trie::new();
        trie.insert("apple");
        let nodes = trie.root.size();

        assert!(!trie.erase(word));
        assert_eq!(trie.root.size(), nodes);
        assert_eq!(trie.count_words_equal_to("apple"), 1);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn erase_prunes() {
        let mut trie = Trie::new();
        trie.insert("car");
        trie.insert("cart");
        assert_eq!(trie.root.size(), 5);

        assert!(trie.erase("cart"));
        assert_eq!(trie.root.size(), 4);
        assert!(trie.search("car"));

        assert!(trie.erase("car"));
        assert_eq!(trie.root.size(), 1);
        assert!(trie.is_empty());
        assert!(!trie.starts_with("c"));
    }

    #[test]
    fn empty_word() {
        let mut trie = Trie::new();
        assert!(!trie.search(""));
        trie.insert("");
        assert!(trie.search(""));
        assert_eq!(trie.count_words_equal_to(""), 1);
        assert!(trie.erase(""));
        assert!(trie.is_empty());
    }
}
