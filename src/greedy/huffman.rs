/*!
Huffman coding over the characters of a text.

The tree is built with the crate's own [`MinHeap`] keyed by `(frequency, sequence number)`.
Leaves are numbered in order of the first appearance of their character and merged subtrees
continue the numbering, so ties are broken deterministically and the resulting codes do not
depend on hash order. The first extracted subtree becomes the left child (bit `0`).
*/

use fxhash::FxHashMap;
use tracing::{debug, trace};

use crate::collections::MinHeap;

/// Mapping from characters to their bit strings (`'0'` / `'1'`)
pub type HuffmanCodes = FxHashMap<char, String>;

enum HuffmanNode {
    Leaf(char),
    Inner(usize, usize),
}

/// Nodes are stored by sequence number; the root is the last one
struct HuffmanTree {
    nodes: Vec<HuffmanNode>,
}

impl HuffmanTree {
    fn build(frequencies: &[(char, u64)]) -> Option<Self> {
        let mut nodes = Vec::with_capacity(2 * frequencies.len());
        let mut heap = MinHeap::new();

        for &(c, freq) in frequencies {
            heap.insert((freq, nodes.len()));
            nodes.push(HuffmanNode::Leaf(c));
        }

        while heap.size() > 1 {
            let (Some((left_freq, left)), Some((right_freq, right))) =
                (heap.extract_min(), heap.extract_min())
            else {
                break;
            };
            trace!(left, right, freq = left_freq + right_freq, "merge subtrees");
            heap.insert((left_freq + right_freq, nodes.len()));
            nodes.push(HuffmanNode::Inner(left, right));
        }

        (!nodes.is_empty()).then_some(Self { nodes })
    }

    fn codes(&self) -> HuffmanCodes {
        let mut codes = HuffmanCodes::default();
        let mut stack = vec![(self.nodes.len() - 1, String::new())];

        while let Some((idx, code)) = stack.pop() {
            match self.nodes[idx] {
                HuffmanNode::Leaf(c) => {
                    let code = if code.is_empty() { "0".to_string() } else { code };
                    codes.insert(c, code);
                }
                HuffmanNode::Inner(left, right) => {
                    stack.push((right, format!("{code}1")));
                    stack.push((left, format!("{code}0")));
                }
            }
        }
        codes
    }
}

/// Counts the characters of `text` in order of their first appearance
fn frequencies(text: &str) -> Vec<(char, u64)> {
    let mut position: FxHashMap<char, usize> = FxHashMap::default();
    let mut counts: Vec<(char, u64)> = Vec::new();

    for c in text.chars() {
        let idx = *position.entry(c).or_insert_with(|| {
            counts.push((c, 0));
            counts.len() - 1
        });
        counts[idx].1 += 1;
    }
    counts
}

/// Computes a prefix-free code for the characters of `text` that minimizes the encoded length.
/// A text with a single distinct character encodes it as `"0"`; an empty text yields no codes.
///
/// # Examples
/// ```
/// use algo_classics::greedy::huffman_codes;
///
/// let codes = huffman_codes("abracadabra");
/// assert_eq!(codes[&'a'], "0");
/// assert_eq!(codes[&'r'], "111");
/// ```
pub fn huffman_codes(text: &str) -> HuffmanCodes {
    huffman_codes_from_frequencies(&frequencies(text))
}

/// Same as [`huffman_codes`] for explicitly given `(character, frequency)` pairs.
/// The order of the pairs breaks ties between equal frequencies.
pub fn huffman_codes_from_frequencies(frequencies: &[(char, u64)]) -> HuffmanCodes {
    let codes = HuffmanTree::build(frequencies)
        .map(|tree| tree.codes())
        .unwrap_or_default();
    debug!(symbols = codes.len(), "built huffman codes");
    codes
}

/// Concatenates the codes of all characters of `text`.
/// Returns `None` if a character has no code.
pub fn encode(text: &str, codes: &HuffmanCodes) -> Option<String> {
    text.chars()
        .map(|c| codes.get(&c).map(String::as_str))
        .collect()
}

/// Inverse of [`encode`]: splits `bits` into codes of `codes`.
/// Returns `None` if `bits` is not a concatenation of codes.
pub fn decode(bits: &str, codes: &HuffmanCodes) -> Option<String> {
    let symbols: FxHashMap<&str, char> =
        codes.iter().map(|(&c, code)| (code.as_str(), c)).collect();
    let mut text = String::new();
    let mut start = 0;

    for end in 1..=bits.len() {
        if let Some(&c) = bits.get(start..end).and_then(|code| symbols.get(code)) {
            text.push(c);
            start = end;
        }
    }

    (start == bits.len()).then_some(text)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;
    use rstest::rstest;

    fn as_map(pairs: &[(char, &str)]) -> HuffmanCodes {
        pairs.iter().map(|&(c, code)| (c, code.to_string())).collect()
    }

    #[rstest]
    #[case::abracadabra(
        &[('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)],
        &[('a', "0"), ('c', "100"), ('d', "101"), ('b', "110"), ('r', "111")]
    )]
    #[case::six_symbols(
        &[('a', 5), ('b', 2), ('c', 1), ('d', 1), ('e', 2), ('f', 4)],
        &[('c', "000"), ('d', "001"), ('f', "01"), ('b', "100"), ('e', "101"), ('a', "11")]
    )]
    #[case::single(&[('a', 1)], &[('a', "0")])]
    #[case::empty(&[], &[])]
    fn fixed_frequencies(#[case] frequencies: &[(char, u64)], #[case] expected: &[(char, &str)]) {
        assert_eq!(huffman_codes_from_frequencies(frequencies), as_map(expected));
    }

    #[test]
    fn codes_from_text() {
        assert_eq!(
            huffman_codes("abracadabra"),
            as_map(&[('a', "0"), ('c', "100"), ('d', "101"), ('b', "110"), ('r', "111")])
        );
        assert_eq!(huffman_codes("zzz"), as_map(&[('z', "0")]));
        assert!(huffman_codes("").is_empty());
    }

    #[test]
    fn encode_and_decode() {
        let text = "abracadabra";
        let codes = huffman_codes(text);
        let bits = encode(text, &codes).unwrap();
        assert_eq!(bits, "01101110100010101101110");
        assert_eq!(decode(&bits, &codes).unwrap(), text);

        assert_eq!(encode("abx", &codes), None);
        assert_eq!(decode("11", &codes), None);
    }

    #[test]
    fn single_symbol_roundtrip() {
        let codes = huffman_codes("aaaa");
        assert_eq!(encode("aaaa", &codes).as_deref(), Some("0000"));
        assert_eq!(decode("0000", &codes).as_deref(), Some("aaaa"));
    }

    #[test]
    fn random_texts_are_prefix_free_and_optimal_length() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for _ in 0..50 {
            let len = rng.random_range(1..200);
            let text: String = (0..len)
                .map(|_| char::from(b'a' + rng.random_range(0..8u8)))
                .collect();
            let codes = huffman_codes(&text);

            for (c, code) in &codes {
                for (d, other) in &codes {
                    assert!(c == d || !other.starts_with(code.as_str()));
                }
            }

            let bits = encode(&text, &codes).unwrap();
            assert_eq!(decode(&bits, &codes).as_deref(), Some(text.as_str()));

            // a fixed-length code is never shorter
            let distinct = codes.len() as u32;
            let fixed_width = distinct.next_power_of_two().trailing_zeros().max(1) as usize;
            assert!(bits.len() <= fixed_width * text.chars().count());
        }
    }
}
