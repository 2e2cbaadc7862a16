use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::{HuffmanError, HuffmanResult};
use crate::frequency::{frequency_map, FrequencyMap};
use crate::options::{HuffmanOptions, TieBreak};
use crate::tree::EncodingTreeNode;

struct HeapEntry {
    freq: usize,
    // Larger pops first among equal frequencies.
    order: usize,
    node: EncodingTreeNode,
}

// BinaryHeap pops the greatest entry, so the lowest frequency must compare
// greatest.
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| self.order.cmp(&other.order))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

struct HuffmanQueue {
    heap: BinaryHeap<HeapEntry>,
    pushed: usize,
    tie_break: TieBreak,
}

impl HuffmanQueue {
    fn new(tie_break: TieBreak) -> Self {
        HuffmanQueue {
            heap: BinaryHeap::new(),
            pushed: 0,
            tie_break,
        }
    }

    fn push(&mut self, node: EncodingTreeNode, freq: usize) {
        let order = match self.tie_break {
            TieBreak::LastInserted => self.pushed,
            TieBreak::FirstInserted => usize::MAX - self.pushed,
        };
        self.heap.push(HeapEntry { freq, order, node });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<(EncodingTreeNode, usize)> {
        self.heap.pop().map(|entry| (entry.node, entry.freq))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Builds an optimal prefix-code tree for `freqs`.
///
/// Leaves are queued in ascending symbol order, each prioritised by its
/// frequency. The two lowest-priority entries are popped repeatedly; the
/// first becomes the `zero` child and the second the `one` child of a new
/// internal node that is queued again with their summed priority. Ties are
/// resolved by [`TieBreak`]. Symbols with a zero count are skipped.
///
/// Fails with [`HuffmanError::InvalidInput`] unless at least two symbols
/// have a non-zero count, since a single leaf has no usable code.
pub fn build_huffman_tree(
    freqs: &FrequencyMap,
    options: &HuffmanOptions,
) -> HuffmanResult<EncodingTreeNode> {
    let mut queue = HuffmanQueue::new(options.tie_break);

    for (&symbol, &freq) in freqs {
        if freq != 0 {
            queue.push(EncodingTreeNode::leaf(symbol), freq);
        }
    }

    if queue.len() < 2 {
        return Err(HuffmanError::InvalidInput(format!(
            "at least two distinct symbols are required, found {}",
            queue.len()
        )));
    }

    debug!(
        "building Huffman tree over {} symbols ({:?} tie-break)",
        queue.len(),
        options.tie_break
    );

    loop {
        let (zero, zero_freq) = queue.pop().ok_or_else(|| {
            HuffmanError::InvalidInput("priority queue drained unexpectedly".to_string())
        })?;

        let Some((one, one_freq)) = queue.pop() else {
            debug!("Huffman tree complete, total weight {}", zero_freq);
            return Ok(zero);
        };

        trace!("merging weights {} + {}", zero_freq, one_freq);
        queue.push(
            EncodingTreeNode::internal(zero, one),
            zero_freq + one_freq,
        );
    }
}

pub fn build_huffman_tree_from_text(
    text: &str,
    options: &HuffmanOptions,
) -> HuffmanResult<EncodingTreeNode> {
    build_huffman_tree(&frequency_map(text), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::EncodingTreeNode as N;

    #[test]
    fn book_with_default_tie_break() {
        let tree = build_huffman_tree_from_text("BOOK", &HuffmanOptions::default()).unwrap();
        let expected = N::internal(N::internal(N::leaf('K'), N::leaf('B')), N::leaf('O'));
        assert_eq!(tree, expected);
    }

    #[test]
    fn book_with_first_inserted_tie_break() {
        let options = HuffmanOptions::with_tie_break(TieBreak::FirstInserted);
        let tree = build_huffman_tree_from_text("BOOK", &options).unwrap();
        let expected = N::internal(N::leaf('O'), N::internal(N::leaf('B'), N::leaf('K')));
        assert_eq!(tree, expected);
    }

    #[test]
    fn queue_pops_ties_by_rule() {
        for (tie_break, expected) in [
            (TieBreak::LastInserted, "cba"),
            (TieBreak::FirstInserted, "abc"),
        ] {
            let mut queue = HuffmanQueue::new(tie_break);
            queue.push(N::leaf('z'), 2);
            for symbol in ['a', 'b', 'c'] {
                queue.push(N::leaf(symbol), 1);
            }

            let popped: String = std::iter::from_fn(|| queue.pop())
                .filter_map(|(node, _)| node.symbol())
                .collect();
            assert_eq!(popped, format!("{expected}z"));
        }
    }

    #[test]
    fn lower_frequency_goes_to_zero_branch() {
        let tree = build_huffman_tree_from_text("ABB", &HuffmanOptions::default()).unwrap();
        assert_eq!(tree, N::internal(N::leaf('A'), N::leaf('B')));
    }

    #[test]
    fn rejects_single_symbol() {
        let err = build_huffman_tree_from_text("AAAA", &HuffmanOptions::default()).unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_and_zero_counts() {
        let options = HuffmanOptions::default();
        assert!(build_huffman_tree(&FrequencyMap::new(), &options).is_err());

        let freqs = FrequencyMap::from([('A', 3), ('B', 0)]);
        assert!(matches!(
            build_huffman_tree(&freqs, &options),
            Err(HuffmanError::InvalidInput(_))
        ));
    }

    #[test]
    fn every_symbol_becomes_one_leaf() {
        let text = "the quick brown fox jumps over the lazy dog";
        let freqs = frequency_map(text);
        let tree = build_huffman_tree(&freqs, &HuffmanOptions::default()).unwrap();

        assert_eq!(tree.leaf_count(), freqs.len());
        for symbol in freqs.keys() {
            assert!(tree.depth_of(*symbol).is_some());
        }
    }
}
